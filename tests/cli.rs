//! CLI integration tests.

#![cfg(feature = "cli")]

use assert_cmd::Command;

#[test]
fn converts_fragment_from_stdin_to_stdout() {
    let mut cmd = Command::cargo_bin("declutter").unwrap();
    let assert = cmd
        .arg("--silent")
        .write_stdin("<sl-details><div slot=\"summary\">Title</div><p>Body</p></sl-details>")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("<details>"));
    assert!(stdout.contains("<span class=\"summary-title\">Title</span>"));
    assert!(!stdout.contains("sl-details"));
}

#[test]
fn dash_input_reads_stdin() {
    let mut cmd = Command::cargo_bin("declutter").unwrap();
    let assert = cmd
        .arg("-")
        .arg("--silent")
        .arg("--no-metadata")
        .write_stdin("<p>x</p>")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
}

#[test]
fn warns_about_missing_summary_slot() {
    let mut cmd = Command::cargo_bin("declutter").unwrap();
    let assert = cmd
        .write_stdin("<sl-details><p>x</p></sl-details>")
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("has no summary slot"));
}

#[test]
fn fails_on_missing_input_file() {
    let mut cmd = Command::cargo_bin("declutter").unwrap();
    cmd.arg("no/such/input.html").assert().failure();
}
