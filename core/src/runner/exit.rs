use std::io::Write;
use std::process::ExitStatus;

use super::RunOutcome;

/// Exit code used when the orchestration itself fails.
pub const EXIT_CODE_ORCHESTRATION_ERROR: i32 = 3;

/// Exit code used when the child's status cannot be mapped to a number.
pub const EXIT_CODE_INDETERMINATE: i32 = 127;

pub fn normalize_exit(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            EXIT_CODE_INDETERMINATE
        }
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(EXIT_CODE_INDETERMINATE)
    }
}

/// Maps the outcome of a run to the process exit code.
///
/// Only orchestration failures are reported here; a failing test binary has
/// already written its own diagnostics.
pub fn translate(outcome: &RunOutcome, program: &str, stderr: &mut dyn Write) -> i32 {
    match outcome {
        RunOutcome::Success => 0,
        RunOutcome::ChildExit { code } => *code,
        RunOutcome::Failed(err) => {
            tracing::debug!(target: "gotestsum.exit", error = ?err, "run failed");
            let _ = writeln!(stderr, "{program}: Error: {err}");
            let _ = stderr.flush();
            EXIT_CODE_ORCHESTRATION_ERROR
        }
    }
}
