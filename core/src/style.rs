use crossterm::style::Stylize;

use crate::testjson::Action;

/// Terminal colors for formatted output. Constructed once at startup and
/// handed to every formatter instead of toggling a process-wide switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn green(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn yellow(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn white(&self, text: &str) -> String {
        if self.enabled {
            text.white().to_string()
        } else {
            text.to_string()
        }
    }

    /// Pass is green, fail red, skip yellow, anything else white.
    pub fn for_action(&self, action: &Action, text: &str) -> String {
        match action {
            Action::Pass => self.green(text),
            Action::Fail => self.red(text),
            Action::Skip => self.yellow(text),
            _ => self.white(text),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let p = Palette::plain();
        assert_eq!(p.red("FAIL"), "FAIL");
        assert_eq!(p.for_action(&Action::Pass, "ok"), "ok");
    }

    #[test]
    fn enabled_palette_wraps_in_escape_codes() {
        // crossterm honours NO_COLOR on its own.
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let p = Palette::new(true);
        let out = p.for_action(&Action::Fail, "FAIL");
        assert!(out.contains("FAIL"));
        assert!(out.starts_with("\u{1b}["));
    }
}
