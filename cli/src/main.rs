use clap::Parser;

mod app;
mod commands;
mod handler;
mod logging;

use commands::cli;
use gotestsum_core::api as core_api;

const DEFAULT_PROGRAM: &str = "gotestsum";

#[tokio::main]
async fn main() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // help and version are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let opts = args.into_options(&core_api::EnvOverrides::from_env());
    if let Err(err) = logging::init(&opts.logging()) {
        eprintln!("{program}: warning: {err:#}");
    }
    tracing::debug!(target: "gotestsum.runner", ?opts, "options");

    let exit = app::run_app(&program, opts).await;
    std::process::exit(exit);
}
