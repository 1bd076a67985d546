use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn create_access_log() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"{{"@timestamp": "2025-06-22T13:57:32+00:00", "status": 200, "url": "/api/context/...", "response_time": 0.024, "http_user_agent": "Mozilla/5.0"}}"#
    )
    .unwrap();
    writeln!(
        temp_file,
        r#"{{"@timestamp": "2025-06-22T13:57:33+00:00", "status": "200", "url": "/api/context/...", "response_time": "0.036", "http_user_agent": "curl/8.5.0"}}"#
    )
    .unwrap();
    writeln!(
        temp_file,
        r#"{{"@timestamp": "2025-06-23T09:00:00+00:00", "status": 404, "url": "/api/homeworks/...", "response_time": 0.1, "http_user_agent": "Mozilla/5.0"}}"#
    )
    .unwrap();
    writeln!(temp_file, "this line is not json").unwrap();
    temp_file
}

#[test]
fn test_average_report() {
    let temp_file = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("average")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("Report: average"))
        .stdout(predicate::str::contains("| Endpoint"))
        .stdout(predicate::str::contains("/api/context/..."))
        .stdout(predicate::str::contains("0.030"))
        .stdout(predicate::str::contains("Report: status_code").not());
}

#[test]
fn test_all_reports() {
    let temp_file = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("all")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("Report: average"))
        .stdout(predicate::str::contains("Report: status_code"))
        .stdout(predicate::str::contains("Report: user_agent"))
        .stdout(predicate::str::contains("| 200    |     2 |"))
        .stdout(predicate::str::contains("curl/8.5.0"));
}

#[test]
fn test_date_filtering() {
    let temp_file = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("status_code")
        .arg("--date")
        .arg("2025-06-23")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("404"))
        .stdout(predicate::str::contains("200").not());
}

#[test]
fn test_multiple_files() {
    let first = create_access_log();
    let second = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(first.path())
        .arg(second.path())
        .arg("--report")
        .arg("status_code")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("| 200    |     4 |"))
        .stdout(predicate::str::contains("| 404    |     2 |"));
}

#[test]
fn test_empty_report_prints_nothing() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, r#"{{"status": 200}}"#).unwrap();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("user_agent")
        .assert();

    assert.success().stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_report_rejected() {
    let temp_file = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    let assert = cmd
        .arg("--file")
        .arg(temp_file.path())
        .arg("--report")
        .arg("latency")
        .assert();

    assert.failure().stderr(predicate::str::contains("latency"));
}

#[test]
fn test_report_is_required() {
    let temp_file = create_access_log();

    let mut cmd = Command::cargo_bin("logreport").unwrap();
    cmd.arg("--file").arg(temp_file.path()).assert().failure();
}

#[test]
fn test_parallel_and_sequential_agree() {
    let temp_file = create_access_log();

    let run = |flag: &str| {
        let mut cmd = Command::cargo_bin("logreport").unwrap();
        let output = cmd
            .arg("--file")
            .arg(temp_file.path())
            .arg("--report")
            .arg("all")
            .arg(flag)
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run("--parallel"), run("--sequential"));
}
