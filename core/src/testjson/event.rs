use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The `Action` field of a `go test -json` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Action {
    Start,
    Run,
    Pause,
    Cont,
    Pass,
    Bench,
    Fail,
    #[default]
    Output,
    Skip,
    /// Anything test2json may add later; kept verbatim.
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Start => "start",
            Action::Run => "run",
            Action::Pause => "pause",
            Action::Cont => "cont",
            Action::Pass => "pass",
            Action::Bench => "bench",
            Action::Fail => "fail",
            Action::Output => "output",
            Action::Skip => "skip",
            Action::Other(s) => s,
        }
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.as_str() {
            "start" => Action::Start,
            "run" => Action::Run,
            "pause" => Action::Pause,
            "cont" => Action::Cont,
            "pass" => Action::Pass,
            "bench" => Action::Bench,
            "fail" => Action::Fail,
            "output" => Action::Output,
            "skip" => Action::Skip,
            _ => Action::Other(s),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawAction(String);

/// One line of `go test -json` output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    #[serde(default)]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_action")]
    pub action: Action,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub test: String,
    /// Seconds.
    #[serde(default)]
    pub elapsed: f64,
    #[serde(default)]
    pub output: String,

    #[serde(skip)]
    pub(crate) raw: String,
}

fn deserialize_action<'de, D>(deserializer: D) -> Result<Action, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RawAction::deserialize(deserializer).map(|raw| Action::from(raw.0))
}

impl TestEvent {
    /// Decodes one line, keeping the original text for the capture file.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let mut event: TestEvent = serde_json::from_str(line)?;
        event.raw = line.to_string();
        Ok(event)
    }

    /// True for events about the package as a whole rather than one test.
    pub fn is_package_event(&self) -> bool {
        self.test.is_empty()
    }

    pub fn elapsed_duration(&self) -> Duration {
        elapsed_duration(self.elapsed)
    }

    pub fn elapsed_formatted(&self) -> String {
        format!("{:.2}s", self.elapsed)
    }

    /// The line exactly as it was read from the test process.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Converts test2json's float seconds; negative or non-finite values are zero.
pub fn elapsed_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

pub fn is_cached_output(output: &str) -> bool {
    output.contains("\t(cached)")
}

pub fn is_coverage_output(output: &str) -> bool {
    output.starts_with("coverage:")
}

/// Extracts `coverage: 81.2% of statements` from a package output line.
pub fn coverage_from_output(output: &str) -> Option<String> {
    let idx = output.find("coverage:")?;
    let cov = output[idx..].trim_end();
    if cov.is_empty() {
        None
    } else {
        Some(cov.to_string())
    }
}

/// Package-level output that is not one of go test's framing lines. These
/// come from a panic or `os.Exit` in `init()` or `TestMain`.
pub fn is_pkg_failure_output(event: &TestEvent) -> bool {
    let out = event.output.as_str();
    event.is_package_event()
        && event.action == Action::Output
        && out != "PASS\n"
        && out != "FAIL\n"
        && !out.starts_with(&format!("FAIL\t{}", event.package))
        && !out.starts_with(&format!("ok  \t{}", event.package))
        && !out.starts_with(&format!("?   \t{}", event.package))
}
