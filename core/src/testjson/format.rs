use std::time::Duration;

use crate::error::FormatError;
use crate::style::Palette;

use super::{Execution, PackagePath, TestEvent};

/// Turns one event into the text printed for it; an empty string prints
/// nothing.
pub trait EventFormatter: Send {
    fn format(&self, event: &TestEvent, execution: &Execution) -> Result<String, FormatError>;
}

/// Presentation settings shared by formatters and the summary.
#[derive(Debug, Clone, Default)]
pub struct FormatContext {
    pub palette: Palette,
    pub packages: PackagePath,
}

impl FormatContext {
    pub fn new(palette: Palette, packages: PackagePath) -> Self {
        Self { palette, packages }
    }

    pub fn plain() -> Self {
        Self::new(Palette::plain(), PackagePath::default())
    }
}

/// `1.234s` style with a fixed number of decimals.
pub fn format_duration_as_seconds(d: Duration, precision: usize) -> String {
    format!("{:.*}s", precision, d.as_secs_f64())
}

/// Compact duration as go prints it: `850ms`, `1.2s`, `1m5s`.
pub fn format_go_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms == 0 {
        return "0s".to_string();
    }
    if ms < 1000 {
        return format!("{ms}ms");
    }
    let total_secs = d.as_secs_f64();
    if total_secs < 60.0 {
        return format!("{}s", trim_float(total_secs));
    }
    let mins = d.as_secs() / 60;
    let rem = total_secs - (mins * 60) as f64;
    format!("{mins}m{}s", trim_float(rem))
}

fn trim_float(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_style_durations() {
        assert_eq!(format_go_duration(Duration::ZERO), "0s");
        assert_eq!(format_go_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_go_duration(Duration::from_millis(1200)), "1.2s");
        assert_eq!(format_go_duration(Duration::from_secs(2)), "2s");
        assert_eq!(format_go_duration(Duration::from_millis(65_500)), "1m5.5s");
    }

    #[test]
    fn seconds_with_precision() {
        assert_eq!(
            format_duration_as_seconds(Duration::from_millis(1234), 3),
            "1.234s"
        );
        assert_eq!(
            format_duration_as_seconds(Duration::from_millis(1234), 2),
            "1.23s"
        );
    }
}
