mod debug;
mod dots;
mod short;
mod short_verbose;
mod standard;

pub use debug::DebugFormatter;
pub use dots::DotsFormatter;
pub use short::ShortFormatter;
pub use short_verbose::ShortVerboseFormatter;
pub use standard::{StandardQuietFormatter, StandardVerboseFormatter};

#[cfg(test)]
pub(crate) mod testutil {
    use gotestsum_core::api::{Action, Execution, FormatContext, PackagePath, Palette, TestEvent};

    pub const PKG: &str = "example.com/proj/store";

    pub fn ctx() -> FormatContext {
        FormatContext::new(Palette::plain(), PackagePath::new("example.com/proj"))
    }

    pub fn ev(action: Action, test: &str, output: &str, elapsed: f64) -> TestEvent {
        let mut event = TestEvent::default();
        event.action = action;
        event.package = PKG.to_string();
        event.test = test.to_string();
        event.output = output.to_string();
        event.elapsed = elapsed;
        event
    }

    /// Feeds `events` through `execution` the way the scanner does and
    /// collects what the formatter prints.
    pub fn render<F>(formatter: &F, events: &[TestEvent]) -> String
    where
        F: gotestsum_core::api::EventFormatter,
    {
        let mut execution = Execution::new();
        let mut out = String::new();
        for event in events {
            execution.add(event);
            out.push_str(&formatter.format(event, &execution).unwrap());
        }
        out
    }
}
