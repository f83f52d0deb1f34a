//! Basic CLI tests.
//!
//! Exercise the argument surface via cargo run; commands that touch the
//! user's database are left to the core integration tests.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "beans-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_core_operations() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for command in ["onboard", "today", "accept", "skip", "reflect", "progress", "feed", "seed"] {
        assert!(stdout.contains(command), "missing `{command}` in help output");
    }
}

#[test]
fn test_reflect_rejects_feeling_with_pass() {
    let (_, stderr, code) = run_cli(&["reflect", "some-id", "--pass", "--feeling", "nice"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn test_reflect_help() {
    let (stdout, _, code) = run_cli(&["reflect", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--feeling"));
    assert!(stdout.contains("--pass"));
}
