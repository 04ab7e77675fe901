use std::io::Write;
use std::process::ExitStatus;

use tokio_util::sync::CancellationToken;

use crate::config::RunOptions;
use crate::error::{ReportError, RunError};
use crate::junit::{go_version, write_junit_file};
use crate::summary::print_summary;
use crate::testjson::{scan_test_output, EventHandler, Execution, FormatContext, ScanConfig};

use super::args::compose_args;
use super::spawn::{start, ChildProcess};

pub struct RunTestsArgs<'a> {
    pub opts: &'a RunOptions,
    /// Cancelling this kills the test process.
    pub cancel: &'a CancellationToken,
    pub handler: &'a mut dyn EventHandler,
    /// Destination of the summary.
    pub out: &'a mut (dyn Write + Send),
    pub ctx: &'a FormatContext,
}

/// Runs the test command to completion and returns its exit status.
///
/// Output is scanned and dispatched to the handler while the command runs;
/// the summary and the JUnit report are written after both streams close.
/// On any error the command is killed and reaped before returning.
pub async fn run_tests(args: RunTestsArgs<'_>) -> Result<ExitStatus, RunError> {
    let argv = compose_args(args.opts);
    let mut proc = start(args.cancel, &argv)?;

    match drive(&mut proc, args).await {
        Ok(()) => Ok(proc.wait().await?),
        Err(err) => {
            proc.cancel();
            if let Err(wait_err) = proc.wait().await {
                tracing::debug!(target: "gotestsum.runner", error = %wait_err, "reaping after failure");
            }
            Err(err)
        }
    }
}

async fn drive(proc: &mut ChildProcess, args: RunTestsArgs<'_>) -> Result<(), RunError> {
    let (stdout, stderr) = proc.take_pipes()?;
    let execution = scan_test_output(ScanConfig { stdout, stderr }, args.handler).await?;
    tracing::debug!(
        target: "gotestsum.runner",
        tests = execution.total(),
        failed = execution.failed().len(),
        "scan finished"
    );

    print_summary(args.out, &execution, &args.opts.summary_sections(), args.ctx)
        .map_err(ReportError::Summary)?;
    write_reports(args.opts, &execution).await
}

async fn write_reports(opts: &RunOptions, execution: &Execution) -> Result<(), RunError> {
    if let Some(path) = &opts.junit_file {
        let version = go_version().await;
        write_junit_file(path, execution, &version)?;
    }
    Ok(())
}
