// core/src/error/run_error.rs
use thiserror::Error;

use super::{HandlerError, LaunchError, ReportError, ScanError};

/// Any failure of the orchestration itself. A test binary exiting non-zero is
/// not one of these; see `RunOutcome::ChildExit`.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Handler(#[from] HandlerError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
