use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use quick_junit::{NonSuccessKind, Property, Report, TestCase, TestCaseStatus, TestSuite};

use crate::error::ReportError;
use crate::testjson::{Execution, Package, TestCase as ExecCase};

const REPORT_NAME: &str = "gotestsum";

/// Version string of the local go toolchain, `unknown` if it cannot be run.
pub async fn go_version() -> String {
    let out = tokio::process::Command::new("go")
        .arg("version")
        .stdin(std::process::Stdio::null())
        .output()
        .await;
    match out {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout);
            let text = text.trim();
            text.strip_prefix("go version ").unwrap_or(text).to_string()
        }
        Ok(out) => {
            tracing::debug!(target: "gotestsum.junit", status = ?out.status, "go version failed");
            "unknown".to_string()
        }
        Err(err) => {
            tracing::debug!(target: "gotestsum.junit", error = %err, "go version unavailable");
            "unknown".to_string()
        }
    }
}

/// One test suite per package, in package order.
pub fn build_report(execution: &Execution, go_version: &str) -> Report {
    let mut report = Report::new(REPORT_NAME);
    report.set_time(execution.elapsed());
    for name in execution.packages() {
        let Some(pkg) = execution.package(name) else {
            continue;
        };
        let mut suite = TestSuite::new(name);
        suite.set_time(pkg.elapsed());
        suite.add_property(Property::new("go.version", go_version));
        suite.add_test_cases(package_cases(name, pkg));
        report.add_test_suite(suite);
    }
    report
}

fn package_cases(name: &str, pkg: &Package) -> Vec<TestCase> {
    let mut cases = Vec::new();
    if pkg.test_main_failed() {
        let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
        status.set_message("Failed");
        status.set_description(pkg.output(""));
        let mut case = TestCase::new("TestMain", status);
        case.set_classname(name);
        cases.push(case);
    }
    for tc in &pkg.failed {
        let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
        status.set_message("Failed");
        status.set_description(pkg.output(&tc.test));
        cases.push(new_case(tc, status));
    }
    for tc in &pkg.skipped {
        let mut status = TestCaseStatus::skipped();
        status.set_message(pkg.output(&tc.test));
        cases.push(new_case(tc, status));
    }
    for tc in &pkg.passed {
        cases.push(new_case(tc, TestCaseStatus::success()));
    }
    cases
}

fn new_case(tc: &ExecCase, status: TestCaseStatus) -> TestCase {
    let mut case = TestCase::new(tc.test.as_str(), status);
    case.set_classname(tc.package.as_str());
    case.set_time(tc.elapsed);
    case
}

/// Writes the JUnit XML report to `path`, replacing any existing file.
pub fn write_junit_file(
    path: &Path,
    execution: &Execution,
    go_version: &str,
) -> Result<(), ReportError> {
    let report = build_report(execution, go_version);
    let file = File::create(path).map_err(|source| ReportError::CreateJUnit {
        path: path.to_path_buf(),
        source,
    })?;
    report
        .serialize(BufWriter::new(file))
        .map_err(|source| ReportError::WriteJUnit {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(target: "gotestsum.junit", path = %path.display(), "junit report written");
    Ok(())
}
