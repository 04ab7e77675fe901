use gotestsum_core::api as core_api;
use gotestsum_core::testjson::format::format_go_duration;

/// One line per package once it finishes.
pub struct ShortFormatter {
    ctx: core_api::FormatContext,
}

impl ShortFormatter {
    pub fn new(ctx: core_api::FormatContext) -> Self {
        Self { ctx }
    }

    fn line(&self, icon: &str, event: &core_api::TestEvent, pkg: Option<&core_api::Package>) -> String {
        let elapsed = match pkg {
            Some(p) if p.is_cached() => "(cached)".to_string(),
            _ => {
                let d = event.elapsed_duration();
                if d.is_zero() {
                    String::new()
                } else {
                    format!("({})", format_go_duration(d))
                }
            }
        };
        let coverage = pkg
            .and_then(|p| p.coverage())
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        format!(
            "{}  {} {}{}\n",
            self.ctx.palette.for_action(&event.action, icon),
            self.ctx.packages.relative(&event.package),
            elapsed,
            coverage
        )
    }
}

impl core_api::EventFormatter for ShortFormatter {
    fn format(
        &self,
        event: &core_api::TestEvent,
        execution: &core_api::Execution,
    ) -> Result<String, core_api::FormatError> {
        if !event.is_package_event() {
            return Ok(String::new());
        }
        let pkg = execution.package(&event.package);
        let icon = match event.action {
            core_api::Action::Skip => "∅",
            core_api::Action::Pass if pkg.map_or(0, |p| p.total) == 0 => "∅",
            core_api::Action::Pass => "✓",
            core_api::Action::Fail => "✖",
            _ => return Ok(String::new()),
        };
        Ok(self.line(icon, event, pkg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::testutil::{ctx, ev, render};
    use core_api::Action;
    use pretty_assertions::assert_eq;

    fn short() -> ShortFormatter {
        ShortFormatter::new(ctx())
    }

    #[test]
    fn passing_package_with_coverage() {
        let out = render(
            &short(),
            &[
                ev(Action::Run, "TestA", "", 0.0),
                ev(Action::Pass, "TestA", "", 0.0),
                ev(Action::Output, "", "coverage: 81.2% of statements\n", 0.0),
                ev(Action::Pass, "", "", 1.2),
            ],
        );
        assert_eq!(out, "✓  store (1.2s) (coverage: 81.2% of statements)\n");
    }

    #[test]
    fn cached_package() {
        let out = render(
            &short(),
            &[
                ev(Action::Run, "TestA", "", 0.0),
                ev(Action::Pass, "TestA", "", 0.0),
                ev(Action::Output, "", "ok  \texample.com/proj/store\t(cached)\n", 0.0),
                ev(Action::Pass, "", "", 0.0),
            ],
        );
        assert_eq!(out, "✓  store (cached)\n");
    }

    #[test]
    fn failed_and_empty_packages() {
        let out = render(
            &short(),
            &[
                ev(Action::Run, "TestA", "", 0.0),
                ev(Action::Fail, "TestA", "", 0.0),
                ev(Action::Fail, "", "", 0.05),
            ],
        );
        assert_eq!(out, "✖  store (50ms)\n");

        let out = render(&short(), &[ev(Action::Pass, "", "", 0.0)]);
        assert_eq!(out, "∅  store \n");

        let out = render(&short(), &[ev(Action::Skip, "", "", 0.0)]);
        assert_eq!(out, "∅  store \n");
    }
}
