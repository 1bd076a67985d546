use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_nonexistent_file() {
    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg("nonexistent_file.log")
        .arg("--report")
        .arg("all")
        .assert();

    // Don't check the OS-specific part of the message
    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nonexistent_file.log"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_second_file_prints_no_partial_report() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, r#"{{"status": 200}}"#).unwrap();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("missing_second.log")
        .arg("--report")
        .arg("status_code")
        .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("missing_second.log"))
        .stdout(predicate::str::contains("Report:").not());
}

#[test]
fn test_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("all")
        .assert();

    assert.success().stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_log() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "This is not a properly formatted log line").unwrap();
    writeln!(temp_file, r#"{{"status": 503}}"#).unwrap();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("status_code")
        .assert();

    // Bad lines are skipped, the rest is still reported
    assert
        .success()
        .stdout(predicate::str::contains("503"));
}
