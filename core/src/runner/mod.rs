mod args;
pub mod exit;
mod outcome;
mod run;
mod spawn;

pub use args::compose_args;
pub use exit::{normalize_exit, translate, EXIT_CODE_INDETERMINATE, EXIT_CODE_ORCHESTRATION_ERROR};
pub use outcome::RunOutcome;
pub use run::{run_tests, RunTestsArgs};
pub use spawn::{start, ChildProcess};
