mod handler_error;
mod launch_error;
mod report_error;
mod run_error;
mod scan_error;

pub use handler_error::{FormatError, HandlerError};
pub use launch_error::LaunchError;
pub use report_error::ReportError;
pub use run_error::RunError;
pub use scan_error::ScanError;
