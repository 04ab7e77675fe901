use gotestsum_core::api as core_api;
use gotestsum_core::testjson::event::is_pkg_failure_output;

/// A line per test and per package; failed tests are preceded by their output.
pub struct ShortVerboseFormatter {
    ctx: core_api::FormatContext,
}

impl ShortVerboseFormatter {
    pub fn new(ctx: core_api::FormatContext) -> Self {
        Self { ctx }
    }
}

impl core_api::EventFormatter for ShortVerboseFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        use core_api::Action;

        let palette = &self.ctx.palette;
        let pkg = self.ctx.packages.relative(&event.package);
        let test_line = || {
            let result = palette.for_action(&event.action, &event.action.as_str().to_uppercase());
            format!("{result} {pkg}.{} ({})\n", event.test, event.elapsed_formatted())
        };

        if is_pkg_failure_output(event) {
            return Ok(event.output.clone());
        }
        if event.is_package_event() {
            let label = match event.action {
                Action::Skip => "EMPTY",
                Action::Pass => "PASS",
                Action::Fail => "FAIL",
                _ => return Ok(String::new()),
            };
            return Ok(format!("{} {pkg}\n", palette.for_action(&event.action, label)));
        }
        match event.action {
            Action::Fail => Ok(execution.output(&event.package, &event.test) + &test_line()),
            Action::Pass => Ok(test_line()),
            _ => Ok(String::new()),
        }
    }
}
