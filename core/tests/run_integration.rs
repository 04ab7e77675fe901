//! End-to-end runs against real `sh` children.
#![cfg(unix)]

mod common;

use std::time::Duration;

use common::{event_line, Recorder};
use gotestsum_core::api::{
    run_tests, translate, FormatContext, LaunchError, RunError, RunOptions, RunOutcome,
    RunTestsArgs, ScanError,
};
use tokio_util::sync::CancellationToken;

fn raw(script: &str) -> RunOptions {
    RunOptions {
        args: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
        raw_command: true,
        ..RunOptions::default()
    }
}

struct Finished {
    outcome: RunOutcome,
    handler: Recorder,
    summary: String,
}

async fn run(opts: &RunOptions, cancel: &CancellationToken) -> Finished {
    let mut handler = Recorder::default();
    let mut out = Vec::new();
    let ctx = FormatContext::plain();
    let result = run_tests(RunTestsArgs {
        opts,
        cancel,
        handler: &mut handler,
        out: &mut out,
        ctx: &ctx,
    })
    .await;
    Finished {
        outcome: RunOutcome::from_result(result),
        handler,
        summary: String::from_utf8(out).unwrap(),
    }
}

fn pid_alive(pid: u32) -> bool {
    std::process::Command::new("kill")
        .args(["-0", &pid.to_string()])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[tokio::test]
async fn passing_run_succeeds_with_summary() {
    let script = format!(
        "echo '{}'; echo '{}'",
        event_line("run", "TestA"),
        event_line("pass", "TestA")
    );
    let done = run(&raw(&script), &CancellationToken::new()).await;

    assert!(done.outcome.is_success());
    assert_eq!(done.handler.tests(), vec!["run TestA", "pass TestA"]);
    assert!(done.summary.contains("DONE 1 tests in "), "{}", done.summary);
}

#[tokio::test]
async fn child_exit_code_propagates_without_banner() {
    let script = format!(
        "echo '{}'; echo '{}'; exit 2",
        event_line("run", "TestA"),
        event_line("fail", "TestA")
    );
    let done = run(&raw(&script), &CancellationToken::new()).await;

    assert!(matches!(done.outcome, RunOutcome::ChildExit { code: 2 }));
    let mut stderr = Vec::new();
    assert_eq!(translate(&done.outcome, "gotestsum", &mut stderr), 2);
    assert!(stderr.is_empty());
    assert!(done.summary.contains("DONE 1 tests, 1 failure in "));
}

#[tokio::test]
async fn stderr_is_forwarded_and_recorded() {
    let done = run(
        &raw("echo '# example.com/proj/broken' >&2; exit 1"),
        &CancellationToken::new(),
    )
    .await;

    assert!(matches!(done.outcome, RunOutcome::ChildExit { code: 1 }));
    assert_eq!(done.handler.errs, vec!["# example.com/proj/broken"]);
    assert!(done.summary.contains("=== Errors\n# example.com/proj/broken\n"));
}

#[tokio::test]
async fn missing_executable_is_an_orchestration_error() {
    let opts = RunOptions {
        args: vec!["/nonexistent/go-test-binary".to_string()],
        raw_command: true,
        ..RunOptions::default()
    };
    let done = run(&opts, &CancellationToken::new()).await;

    assert!(matches!(
        done.outcome,
        RunOutcome::Failed(RunError::Launch(LaunchError::Spawn { .. }))
    ));
    let mut stderr = Vec::new();
    assert_eq!(translate(&done.outcome, "gotestsum", &mut stderr), 3);
    let banner = String::from_utf8(stderr).unwrap();
    assert!(banner.starts_with("gotestsum: Error: failed to run /nonexistent/go-test-binary: "));
}

fn read_pid(path: &std::path::Path) -> u32 {
    std::fs::read_to_string(path).unwrap().trim().parse().unwrap()
}

#[tokio::test]
async fn decode_failure_kills_the_child() {
    let dir = tempfile::tempdir().unwrap();
    let pid_file = dir.path().join("pid");
    let script = format!(
        "echo $$ > {}; echo 'not json'; exec sleep 30",
        pid_file.display()
    );
    let started = std::time::Instant::now();
    let done = run(&raw(&script), &CancellationToken::new()).await;

    assert!(matches!(
        done.outcome,
        RunOutcome::Failed(RunError::Scan(ScanError::Decode { .. }))
    ));
    assert!(started.elapsed() < Duration::from_secs(20));
    assert!(!pid_alive(read_pid(&pid_file)));
}

#[tokio::test]
async fn cancellation_kills_and_reaps_the_child() {
    let dir = tempfile::tempdir().unwrap();
    let pid_file = dir.path().join("pid");
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.cancel();
    });

    let script = format!(
        "echo $$ > {}; echo '{}'; exec sleep 30",
        pid_file.display(),
        event_line("run", "TestA")
    );
    let done = run(&raw(&script), &cancel).await;

    // killed by SIGKILL
    assert!(matches!(done.outcome, RunOutcome::ChildExit { code: 137 }));
    assert_eq!(done.handler.tests(), vec!["run TestA"]);
    assert!(done.summary.contains("DONE 1 tests in "));
    assert!(!pid_alive(read_pid(&pid_file)));
}
