// core/src/error/scan_error.rs
use thiserror::Error;

use super::HandlerError;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to parse test output: {line}: {source}")]
    Decode {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to scan test {stream}: {source}")]
    Read {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Handler(#[from] HandlerError),
}
