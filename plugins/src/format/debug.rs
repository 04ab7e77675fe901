use gotestsum_core::api as core_api;

/// Every event with all of its fields on one line.
pub struct DebugFormatter;

impl core_api::EventFormatter for DebugFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        _execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        let unix = event.time.map(|t| t.timestamp()).unwrap_or_default();
        Ok(format!(
            "{} {} {} ({:.3}) [{}] {}\n",
            event.package, event.test, event.action, event.elapsed, unix, event.output
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::testutil::{ev, render};
    use core_api::{Action, TestEvent};
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_all_fields() {
        let event = TestEvent::parse(
            r#"{"Time":"2018-03-22T22:33:35Z","Action":"pass","Package":"p","Test":"TestA","Elapsed":0.5}"#,
        )
        .unwrap();
        assert_eq!(
            render(&DebugFormatter, &[event]),
            "p TestA pass (0.500) [1521758015] \n"
        );
    }

    #[test]
    fn missing_time_prints_zero() {
        let out = render(&DebugFormatter, &[ev(Action::Output, "", "hi\n", 0.0)]);
        assert_eq!(out, "example.com/proj/store  output (0.000) [0] hi\n\n");
    }
}
