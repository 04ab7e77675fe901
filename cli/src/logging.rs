use anyhow::anyhow;
use gotestsum_core::api::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so they never mix
/// with formatted test output; `RUST_LOG` overrides the level.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let default_level = if cfg.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(cfg.color)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
