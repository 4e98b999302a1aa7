//! `name_or_exit` ends the process, so each case re-runs this test binary
//! filtered down to one test and inspects the child's exit status.

use std::process::{Command, Output};

use cellsim_events::{name_or_exit, raw_name_or_exit, Channel, EventType};

const CHILD_ENV: &str = "CELLSIM_EVENTS_FATAL_CHILD";

fn rerun(test: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path should be known");
    Command::new(exe)
        .args(["--exact", test, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("test binary should re-run")
}

fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn named_event_resolves_without_exiting() {
    assert_eq!(
        name_or_exit(EventType::REG_REQUEST),
        "REGESTRATION-REQUEST-EVENT"
    );
    assert_eq!(raw_name_or_exit(0x0700_0001), "INIT-EVENT");
}

#[test]
fn base_marker_terminates_without_subscriber() {
    if in_child() {
        let name = name_or_exit(EventType::base(Channel::N1));
        panic!("name_or_exit returned {name:?} for a base marker");
    }

    let output = rerun("base_marker_terminates_without_subscriber");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("0x02000000"));
}

#[test]
fn base_marker_terminates_with_errors_filtered_out() {
    if in_child() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("off"))
            .with_writer(std::io::stderr)
            .init();
        let name = name_or_exit(EventType::base(Channel::N1));
        panic!("name_or_exit returned {name:?} for a base marker");
    }

    let output = rerun("base_marker_terminates_with_errors_filtered_out");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("0x02000000"));
}

#[test]
fn base_marker_is_logged_when_errors_are_enabled() {
    if in_child() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("error"))
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
        let name = name_or_exit(EventType::base(Channel::Uu));
        panic!("name_or_exit returned {name:?} for a base marker");
    }

    let output = rerun("base_marker_is_logged_when_errors_are_enabled");
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("0x01000000"));
    assert!(stderr.contains("invalid event id, terminating"));
}
