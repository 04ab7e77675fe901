use gotestsum_core::api as core_api;

/// A package header on its first test, then one glyph per finished test.
pub struct DotsFormatter {
    ctx: core_api::FormatContext,
}

impl DotsFormatter {
    pub fn new(ctx: core_api::FormatContext) -> Self {
        Self { ctx }
    }
}

impl core_api::EventFormatter for DotsFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        if event.is_package_event() {
            return Ok(String::new());
        }
        let total = execution.package(&event.package).map_or(0, |p| p.total);
        let glyph = match event.action {
            core_api::Action::Run if total == 1 => {
                return Ok(format!("[{}]", self.ctx.packages.relative(&event.package)));
            }
            core_api::Action::Pass => "·",
            core_api::Action::Fail => "✖",
            core_api::Action::Skip => "↷",
            _ => return Ok(String::new()),
        };
        Ok(self.ctx.palette.for_action(&event.action, glyph))
    }
}
