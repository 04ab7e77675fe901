use crate::error::HandlerError;

use super::{Execution, TestEvent};

/// Receives everything the scanner reads from the test process.
///
/// Both streams are delivered through one consumer, so implementations never
/// see concurrent calls. Within stdout, events arrive in the order they were
/// written; there is no ordering between stdout events and stderr lines.
pub trait EventHandler: Send {
    /// Called for every decoded stdout event, after it was added to `execution`.
    /// An error aborts the scan.
    fn event(&mut self, event: &TestEvent, execution: &Execution) -> Result<(), HandlerError>;

    /// Called for every stderr line and for stdout lines that could not be
    /// used. Errors are logged and otherwise ignored.
    fn err(&mut self, text: &str) -> Result<(), HandlerError>;
}
