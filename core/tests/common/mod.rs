#![allow(dead_code)]

use gotestsum_core::api::{EventHandler, Execution, HandlerError, TestEvent};

/// Remembers everything it is given.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<TestEvent>,
    pub errs: Vec<String>,
    /// Fail on the n-th event (0-based).
    pub fail_at: Option<usize>,
}

impl Recorder {
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn tests(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| format!("{} {}", e.action, e.test))
            .collect()
    }
}

impl EventHandler for Recorder {
    fn event(&mut self, event: &TestEvent, _execution: &Execution) -> Result<(), HandlerError> {
        if self.fail_at == Some(self.events.len()) {
            return Err(HandlerError::Write(std::io::Error::other("disk full")));
        }
        self.events.push(event.clone());
        Ok(())
    }

    fn err(&mut self, text: &str) -> Result<(), HandlerError> {
        self.errs.push(text.to_string());
        Ok(())
    }
}

pub fn event_line(action: &str, test: &str) -> String {
    format!(
        r#"{{"Time":"2024-05-01T10:00:00Z","Action":"{action}","Package":"example.com/proj/pkg","Test":"{test}","Elapsed":0.01}}"#
    )
}
