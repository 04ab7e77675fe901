pub mod event;
pub mod execution;
pub mod format;
pub mod handler;
pub mod pkgpath;
pub mod scan;

pub use event::{Action, TestEvent};
pub use execution::{Execution, Package, TestCase};
pub use format::{EventFormatter, FormatContext};
pub use handler::EventHandler;
pub use pkgpath::PackagePath;
pub use scan::{scan_test_output, ScanConfig};
