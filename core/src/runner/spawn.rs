use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::error::LaunchError;

/// A running test command.
///
/// The OS process is owned by a supervisor task that reaps it and reports
/// its status. Cancelling the token, or dropping this handle, kills the
/// process if it is still running.
pub struct ChildProcess {
    argv: Vec<String>,
    pid: Option<u32>,
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
    status: Option<oneshot::Receiver<io::Result<ExitStatus>>>,
    cancel: CancellationToken,
}

/// Spawns `argv` with stdout and stderr piped, under a child token of `parent`.
pub fn start(parent: &CancellationToken, argv: &[String]) -> Result<ChildProcess, LaunchError> {
    let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
    let cancel = parent.child_token();

    tracing::debug!(target: "gotestsum.runner", argv = ?argv, "exec");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            argv: argv.to_vec(),
            source,
        })?;

    let pid = child.id();
    if let Some(pid) = pid {
        tracing::debug!(target: "gotestsum.runner", pid, "test process started");
    }

    // dropping `child` on these error paths kills it
    let stdout = child.stdout.take().ok_or_else(|| LaunchError::Pipe {
        program: program.clone(),
        stream: "stdout",
    })?;
    let stderr = child.stderr.take().ok_or_else(|| LaunchError::Pipe {
        program: program.clone(),
        stream: "stderr",
    })?;

    let (status_tx, status_rx) = oneshot::channel();
    tokio::spawn(supervise(child, cancel.clone(), status_tx));

    Ok(ChildProcess {
        argv: argv.to_vec(),
        pid,
        stdout: Some(stdout),
        stderr: Some(stderr),
        status: Some(status_rx),
        cancel,
    })
}

async fn supervise(
    mut child: Child,
    cancel: CancellationToken,
    status_tx: oneshot::Sender<io::Result<ExitStatus>>,
) {
    let exited = tokio::select! {
        status = child.wait() => Some(status),
        _ = cancel.cancelled() => None,
    };
    let status = match exited {
        Some(status) => status,
        None => {
            tracing::debug!(target: "gotestsum.runner", pid = ?child.id(), "cancelled, killing test process");
            if let Err(err) = child.kill().await {
                tracing::debug!(target: "gotestsum.runner", error = %err, "kill failed");
            }
            child.wait().await
        }
    };
    let _ = status_tx.send(status);
}

impl ChildProcess {
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Hands out both pipes; fails if they were already taken.
    pub fn take_pipes(&mut self) -> Result<(ChildStdout, ChildStderr), LaunchError> {
        let stdout = self.stdout.take().ok_or_else(|| self.pipe_error("stdout"))?;
        let stderr = self.stderr.take().ok_or_else(|| self.pipe_error("stderr"))?;
        Ok((stdout, stderr))
    }

    fn pipe_error(&self, stream: &'static str) -> LaunchError {
        LaunchError::Pipe {
            program: self.program().to_string(),
            stream,
        }
    }

    /// Kills the process if it is still running. Safe to call any number of times.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the process to exit and be reaped.
    pub async fn wait(&mut self) -> Result<ExitStatus, LaunchError> {
        let program = self.program().to_string();
        let rx = self
            .status
            .take()
            .ok_or_else(|| LaunchError::Supervisor {
                program: program.clone(),
            })?;
        match rx.await {
            Ok(Ok(status)) => {
                tracing::debug!(target: "gotestsum.runner", %status, "test process exited");
                Ok(status)
            }
            Ok(Err(source)) => Err(LaunchError::Wait { program, source }),
            Err(_) => Err(LaunchError::Supervisor { program }),
        }
    }
}

impl Drop for ChildProcess {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
