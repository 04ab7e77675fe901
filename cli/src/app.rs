use std::io;
use std::process::ExitStatus;

use gotestsum_core::api as core_api;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::handler::FormatHandler;

/// Runs one `go test` invocation and returns the process exit code.
pub async fn run_app(program: &str, opts: core_api::RunOptions) -> i32 {
    let color = !opts.no_color && atty::is(atty::Stream::Stdout);
    let ctx = core_api::FormatContext::new(
        core_api::Palette::new(color),
        core_api::PackagePath::detect(),
    );

    let cancel = CancellationToken::new();
    let watcher = watch_interrupt(cancel.clone());
    let result = run(&opts, &cancel, &ctx).await;
    watcher.abort();

    let outcome = core_api::RunOutcome::from_result(result);
    core_api::translate(&outcome, program, &mut io::stderr())
}

async fn run(
    opts: &core_api::RunOptions,
    cancel: &CancellationToken,
    ctx: &core_api::FormatContext,
) -> Result<ExitStatus, core_api::RunError> {
    let mut handler = FormatHandler::new(opts, ctx.clone())?;
    let mut stdout = io::stdout();

    let result = core_api::run_tests(core_api::RunTestsArgs {
        opts,
        cancel,
        handler: &mut handler,
        out: &mut stdout,
        ctx,
    })
    .await;

    let closed = handler.close();
    let status = result?;
    closed?;
    Ok(status)
}

/// Ctrl-C kills the test process; its output is still drained and summarised.
fn watch_interrupt(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!(target: "gotestsum.runner", "interrupted, stopping tests");
                cancel.cancel();
            }
            Err(err) => {
                tracing::debug!(target: "gotestsum.runner", error = %err, "cannot listen for ctrl-c");
            }
        }
    })
}
