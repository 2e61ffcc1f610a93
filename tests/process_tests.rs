//! End-to-end tests for the process and translate commands
//!
//! Everything here runs in copy mode or fails before any network access,
//! so no test talks to the real API.

mod common;

use assert_cmd::Command;
use common::TestDocs;
use predicates::prelude::*;

#[allow(clippy::unwrap_used)]
fn mdstitch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdstitch").unwrap();
    // Never pick up a real key from the developer's environment.
    cmd.env_remove("OPENAI_API_KEY");
    cmd
}

#[test]
fn test_process_copy_mode_to_file() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "---\ntitle: Doc\n---\nBody text.\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "in.md", "out/copy.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("OK:"));

    assert_eq!(docs.read_file("out/copy.md"), "---\ntitle: Doc\n---\nBody text.\n");
}

#[test]
fn test_process_copy_mode_to_stdout() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "---\ntitle: Doc\n---\nBody text.\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "in.md"])
        .assert()
        .success()
        .stdout("---\ntitle: Doc\n---\nBody text.\n");
}

#[test]
fn test_process_stdout_has_no_ok_chatter() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "plain body\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "in.md"])
        .assert()
        .success()
        .stdout("plain body\n")
        .stdout(predicate::str::contains("OK:").not());
}

#[test]
fn test_process_missing_input_fails_with_code_4() {
    let docs = TestDocs::new();

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "missing.md"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_process_missing_instructions_file_fails_with_code_4() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "body\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "in.md", "-c", "missing-prompt.txt"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("missing-prompt.txt"));
}

#[test]
fn test_process_with_instructions_and_no_key_fails_with_code_3() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "body\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["process", "in.md", "-i", "Summarize"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_process_empty_key_env_fails_with_code_3() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "body\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .env("OPENAI_API_KEY", "   ")
        .args(["process", "in.md", "-i", "Summarize"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_translate_missing_key_fails_with_code_3() {
    let docs = TestDocs::new();
    docs.write_file("in.md", "---\ntitle: Doc\n---\nHallo Welt.\n");

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["translate", "in.md", "out.en.md"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_translate_missing_input_fails_with_code_4() {
    let docs = TestDocs::new();

    mdstitch_cmd()
        .current_dir(&docs.path)
        .args(["translate", "missing.md", "out.md"])
        .assert()
        .failure()
        .code(4);
}
