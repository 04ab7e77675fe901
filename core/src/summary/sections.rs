use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One optional block of the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SummarySection {
    Skipped,
    Failed,
    Errors,
    /// Test output under each failed or skipped test.
    Output,
}

impl SummarySection {
    pub const ALL: [SummarySection; 4] = [
        SummarySection::Skipped,
        SummarySection::Failed,
        SummarySection::Errors,
        SummarySection::Output,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SummarySection::Skipped => "skipped",
            SummarySection::Failed => "failed",
            SummarySection::Errors => "errors",
            SummarySection::Output => "output",
        }
    }
}

impl fmt::Display for SummarySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown summary section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SummarySection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummarySection::ALL
            .into_iter()
            .find(|section| section.name() == s.trim())
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// The sections to print. Starts from every section and can only shrink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySections(BTreeSet<SummarySection>);

impl SummarySections {
    pub fn all() -> Self {
        Self(SummarySection::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, section: SummarySection) -> bool {
        self.0.contains(&section)
    }

    pub fn remove(mut self, section: SummarySection) -> Self {
        self.0.remove(&section);
        self
    }

    /// Drops every named section. Names that are not sections are skipped
    /// with a warning.
    pub fn without<I>(self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .fold(self, |acc, name| match name.as_ref().parse() {
                Ok(section) => acc.remove(section),
                Err(err) => {
                    tracing::warn!(target: "gotestsum.summary", "ignoring --no-summary value: {err}");
                    acc
                }
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = SummarySection> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SummarySections {
    fn default() -> Self {
        Self::all()
    }
}
