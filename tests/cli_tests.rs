//! CLI integration tests using the REAL mdstitch binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(clippy::unwrap_used)]
fn mdstitch_cmd() -> Command {
    Command::cargo_bin("mdstitch").unwrap()
}

#[test]
fn test_help_output() {
    mdstitch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown build tool"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("process"));
}

#[test]
fn test_version_output() {
    mdstitch_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdstitch"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_no_args_is_usage_error() {
    mdstitch_cmd().assert().failure().code(2);
}

#[test]
fn test_build_missing_output_arg_is_usage_error() {
    mdstitch_cmd()
        .args(["build", "only-input.md"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_conflicting_instruction_flags_are_usage_error() {
    mdstitch_cmd()
        .args(["process", "in.md", "-i", "Summarize", "-c", "prompt.txt"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_completions_bash() {
    mdstitch_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdstitch"));
}

#[test]
fn test_completions_unknown_shell() {
    mdstitch_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown shell"));
}
