//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `gotestsum_core::api` instead of reaching into internal modules.

pub use crate::config::{EnvOverrides, LoggingConfig, RunOptions};
pub use crate::error::{
    FormatError, HandlerError, LaunchError, ReportError, RunError, ScanError,
};
pub use crate::jsonfile::JsonFileWriter;
pub use crate::junit::write_junit_file;
pub use crate::runner::{
    compose_args, run_tests, start, translate, ChildProcess, RunOutcome, RunTestsArgs,
    EXIT_CODE_ORCHESTRATION_ERROR,
};
pub use crate::style::Palette;
pub use crate::summary::{print_summary, SummarySection, SummarySections};
pub use crate::testjson::{
    scan_test_output, Action, EventFormatter, EventHandler, Execution, FormatContext, Package,
    PackagePath, ScanConfig, TestCase, TestEvent,
};
