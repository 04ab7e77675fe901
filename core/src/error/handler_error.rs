// core/src/error/handler_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("unknown format {0}")]
    UnknownFormat(String),

    #[error("failed to open JSON file {}: {source}", .path.display())]
    OpenJsonFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write JSON file: {0}")]
    JsonFile(#[source] std::io::Error),

    #[error("failed to format event: {0}")]
    Format(#[from] FormatError),

    #[error("failed to write event: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatter write failed")]
    Fmt(#[from] std::fmt::Error),
}
