//! Exit statuses and stderr of the built binary.
#![cfg(unix)]

use std::process::{Command, Output};

fn cg_trace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cg-trace"))
        .args(args)
        .output()
        .expect("cg-trace binary runs")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_program_prints_usage_and_exits_2() {
    let output = cg_trace(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
}

#[test]
fn unknown_flag_prints_usage_and_exits_2() {
    let output = cg_trace(&["--bogus", "prog"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
}

#[test]
fn option_without_value_exits_2() {
    let output = cg_trace(&["--xml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stderr(&output).is_empty());
}

#[test]
fn help_goes_to_stdout_and_exits_0() {
    let output = cg_trace(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn successful_program_exits_0() {
    assert_eq!(cg_trace(&["true"]).status.code(), Some(0));
}

#[test]
fn failing_program_still_exits_0() {
    assert_eq!(cg_trace(&["sh", "-c", "exit 3"]).status.code(), Some(0));
}

#[test]
fn unlaunchable_program_exits_1() {
    let output = cg_trace(&["/nonexistent/x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("/nonexistent/x"), "{}", stderr(&output));
}
