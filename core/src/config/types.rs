use std::path::PathBuf;

use crate::summary::SummarySections;

pub const DEFAULT_FORMAT: &str = "short";

pub const ENV_FORMAT: &str = "GOTESTSUM_FORMAT";
pub const ENV_JSONFILE: &str = "GOTESTSUM_JSONFILE";
pub const ENV_JUNITFILE: &str = "GOTESTSUM_JUNITFILE";
pub const ENV_TEST_DIRECTORY: &str = "TEST_DIRECTORY";

/// Snapshot of everything a single run needs. Built once from flags and the
/// environment before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Positional arguments, passed through to the test command.
    pub args: Vec<String>,
    pub format: String,
    pub debug: bool,
    /// Run `args` as-is instead of prepending `go test -json`.
    pub raw_command: bool,
    pub json_file: Option<PathBuf>,
    pub junit_file: Option<PathBuf>,
    pub no_color: bool,
    pub no_summary: Vec<String>,
    /// Package pattern override from `TEST_DIRECTORY`.
    pub test_directory: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            format: DEFAULT_FORMAT.to_string(),
            debug: false,
            raw_command: false,
            json_file: None,
            junit_file: None,
            no_color: false,
            no_summary: Vec::new(),
            test_directory: None,
        }
    }
}

impl RunOptions {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            debug: self.debug,
            color: !self.no_color,
        }
    }

    pub fn summary_sections(&self) -> SummarySections {
        SummarySections::all().without(&self.no_summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    pub debug: bool,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            color: true,
        }
    }
}
