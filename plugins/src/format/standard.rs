use gotestsum_core::api as core_api;
use gotestsum_core::testjson::event::is_coverage_output;

/// The output `go test -v` would have printed.
pub struct StandardVerboseFormatter;

impl core_api::EventFormatter for StandardVerboseFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        _execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        Ok(event.output.clone())
    }
}

/// The output plain `go test` would have printed: package lines only.
pub struct StandardQuietFormatter;

impl core_api::EventFormatter for StandardQuietFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        _execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        if !event.is_package_event() {
            return Ok(String::new());
        }
        if event.output == "PASS\n" || is_coverage_output(&event.output) {
            return Ok(String::new());
        }
        Ok(event.output.clone())
    }
}
