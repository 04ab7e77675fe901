use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use super::event::{coverage_from_output, elapsed_duration, is_cached_output, Action, TestEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub package: String,
    /// Empty for a package-level failure (`TestMain`, `init`).
    pub test: String,
    pub elapsed: Duration,
}

/// Aggregated results for one package.
#[derive(Debug, Clone, Default)]
pub struct Package {
    /// Number of tests that were started.
    pub total: usize,
    pub passed: Vec<TestCase>,
    pub failed: Vec<TestCase>,
    pub skipped: Vec<TestCase>,

    // keyed by test name, "" holds package-level output
    output: HashMap<String, Vec<String>>,
    action: Option<Action>,
    elapsed: Duration,
    cached: bool,
    coverage: Option<String>,
}

impl Package {
    /// `fail` if any test failed or the package itself failed, else the
    /// package action (or `pass` if the package never finished).
    pub fn result(&self) -> Action {
        if !self.failed.is_empty() || self.action == Some(Action::Fail) {
            return Action::Fail;
        }
        self.action.clone().unwrap_or(Action::Pass)
    }

    /// The package failed without any failing test, e.g. a panic in `TestMain`.
    pub fn test_main_failed(&self) -> bool {
        self.action == Some(Action::Fail) && self.failed.is_empty()
    }

    pub fn output(&self, test: &str) -> String {
        self.output
            .get(test)
            .map(|lines| lines.concat())
            .unwrap_or_default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }

    pub fn coverage(&self) -> Option<&str> {
        self.coverage.as_deref()
    }

    fn add(&mut self, event: &TestEvent) {
        if event.is_package_event() {
            match event.action {
                Action::Pass | Action::Fail | Action::Skip => {
                    self.action = Some(event.action.clone());
                    self.elapsed = elapsed_duration(event.elapsed);
                }
                Action::Output => {
                    if is_cached_output(&event.output) {
                        self.cached = true;
                    }
                    if let Some(cov) = coverage_from_output(&event.output) {
                        self.coverage = Some(cov);
                    }
                    self.output
                        .entry(String::new())
                        .or_default()
                        .push(event.output.clone());
                }
                _ => {}
            }
            return;
        }

        let case = || TestCase {
            package: event.package.clone(),
            test: event.test.clone(),
            elapsed: elapsed_duration(event.elapsed),
        };
        match event.action {
            Action::Run => self.total += 1,
            Action::Skip => self.skipped.push(case()),
            Action::Fail => self.failed.push(case()),
            Action::Output => self
                .output
                .entry(event.test.clone())
                .or_default()
                .push(event.output.clone()),
            Action::Pass => {
                self.passed.push(case());
                // output of a passing test is never reported
                self.output.remove(&event.test);
            }
            _ => {}
        }
    }
}

/// Everything observed during one `go test` run.
#[derive(Debug, Clone)]
pub struct Execution {
    started: Instant,
    packages: BTreeMap<String, Package>,
    errors: Vec<String>,
}

impl Default for Execution {
    fn default() -> Self {
        Self::new()
    }
}

impl Execution {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            packages: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn add(&mut self, event: &TestEvent) {
        self.packages
            .entry(event.package.clone())
            .or_default()
            .add(event);
    }

    pub fn add_error(&mut self, line: impl Into<String>) {
        self.errors.push(line.into());
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Package names in sorted order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn output(&self, package: &str, test: &str) -> String {
        self.packages
            .get(package)
            .map(|p| p.output(test))
            .unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.packages.values().map(|p| p.total).sum()
    }

    /// Failed tests grouped by package. A package that failed without a
    /// failing test contributes one entry with an empty test name.
    pub fn failed(&self) -> Vec<TestCase> {
        let mut failed = Vec::new();
        for (name, pkg) in &self.packages {
            if pkg.test_main_failed() {
                failed.push(TestCase {
                    package: name.clone(),
                    test: String::new(),
                    elapsed: pkg.elapsed,
                });
            }
            failed.extend(pkg.failed.iter().cloned());
        }
        failed
    }

    pub fn skipped(&self) -> Vec<TestCase> {
        self.packages
            .values()
            .flat_map(|p| p.skipped.iter().cloned())
            .collect()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
