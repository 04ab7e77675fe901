// core/src/error/report_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to print summary: {0}")]
    Summary(#[source] std::io::Error),

    #[error("failed to create junit file {}: {source}", .path.display())]
    CreateJUnit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write junit file {}: {source}", .path.display())]
    WriteJUnit {
        path: PathBuf,
        #[source]
        source: quick_junit::SerializeError,
    },
}
