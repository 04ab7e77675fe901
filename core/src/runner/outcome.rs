use std::process::ExitStatus;

use crate::error::RunError;

use super::exit::normalize_exit;

/// How a run ended, computed once after the child has been reaped.
#[derive(Debug)]
pub enum RunOutcome {
    Success,
    /// The test command ran to completion and exited non-zero.
    ChildExit { code: i32 },
    Failed(RunError),
}

impl RunOutcome {
    pub fn from_result(result: Result<ExitStatus, RunError>) -> Self {
        match result {
            Ok(status) if status.success() => RunOutcome::Success,
            Ok(status) => RunOutcome::ChildExit {
                code: normalize_exit(status),
            },
            Err(err) => RunOutcome::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}
