mod writer;

pub use writer::{build_report, go_version, write_junit_file};
