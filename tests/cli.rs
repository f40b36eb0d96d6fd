//! End-to-end tests for the studyfocus binary.

use predicates::prelude::*;
use tempfile::TempDir;

mod common;

const NEGATIVE_LOG: &str = "sessions:
  - session_id: s1
    start_time: t
    focus:
      - { focus_seconds: -60, timestamp: t }
";

#[test]
fn test_demo_prints_session_and_logs_events() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Study Sessions (1 sessions)"))
        .stdout(predicate::str::contains("session_001"))
        .stdout(predicate::str::contains("55m"))
        .stderr(predicate::str::contains("session registered"))
        .stderr(predicate::str::contains("focus_seconds=1500"))
        .stderr(predicate::str::contains("focus_seconds=1800"));
}

#[test]
fn test_demo_quiet_suppresses_info_logs() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .args(["--quiet", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("focus recorded").not());
}

#[test]
fn test_demo_events_json() {
    let home = TempDir::new().unwrap();

    let output = common::studyfocus(&home)
        .args(["-o", "json", "demo", "--events", "-d", "25m,30m"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 3);
    assert_eq!(parsed["events"][0]["session_id"], "session_001");
    assert_eq!(parsed["events"][2]["record"]["focus_seconds"], 1800);
}

#[test]
fn test_demo_invalid_duration_fails() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .args(["demo", "-d", "later"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid duration 'later'"));
}

#[test]
fn test_demo_overflowing_duration_fails() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .args(["demo", "-d", "307445734561825861"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid duration '307445734561825861'"));
}

#[test]
fn test_replay_from_file() {
    let home = TempDir::new().unwrap();
    let (_dir, log) = common::temp_file("sessions.yaml", common::SAMPLE_LOG);

    common::studyfocus(&home)
        .arg("replay")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Study Sessions (2 sessions)"))
        .stdout(predicate::str::contains("session_002"));
}

#[test]
fn test_replay_from_stdin() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .args(["-o", "json", "replay", "-", "--session", "session_002"])
        .write_stdin(common::SAMPLE_LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"session_id\": \"session_002\""))
        .stdout(predicate::str::contains("session_001").not());
}

#[test]
fn test_replay_unknown_session() {
    let home = TempDir::new().unwrap();

    common::studyfocus(&home)
        .args(["replay", "-", "--session", "nope"])
        .write_stdin(common::SAMPLE_LOG)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found: nope"));
}

#[test]
fn test_replay_negative_duration_rejected_by_default() {
    let home = TempDir::new().unwrap();
    let log = NEGATIVE_LOG;

    common::studyfocus(&home)
        .args(["replay", "-"])
        .write_stdin(log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn test_replay_negative_duration_clamped_by_config() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "focus:\n  negative_durations: clamp\n",
    )
    .unwrap();
    let log = NEGATIVE_LOG;

    let output = common::studyfocus(&home)
        .args(["-o", "json", "replay", "-"])
        .write_stdin(log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["items"][0]["focus_records"][0]["focus_seconds"], 0);
}

#[test]
fn test_report_json() {
    let home = TempDir::new().unwrap();
    let (_dir, log) = common::temp_file("sessions.yaml", common::SAMPLE_LOG);

    let output = common::studyfocus(&home)
        .args(["-o", "json", "report"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_seconds"], 3900);
    assert_eq!(parsed["top_subject"], "Calculus");
    assert_eq!(parsed["record_count"], 3);
    assert_eq!(parsed["subjects_covered"], 2);
}

#[test]
fn test_report_huge_durations_saturate() {
    let home = TempDir::new().unwrap();
    let (_dir, log) = common::temp_file(
        "sessions.yaml",
        "sessions:
  - session_id: s1
    start_time: t
    focus:
      - { focus_seconds: 9223372036854775807, timestamp: t }
      - { focus_seconds: 9223372036854775807, timestamp: t }
      - { focus_seconds: 9, timestamp: t }
",
    );

    let output = common::studyfocus(&home)
        .args(["-o", "json", "report"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_seconds"], u64::MAX);
    assert_eq!(parsed["longest_record_seconds"], 9_223_372_036_854_775_807_u64);
}

#[test]
fn test_report_pretty() {
    let home = TempDir::new().unwrap();
    let (_dir, log) = common::temp_file("sessions.yaml", common::SAMPLE_LOG);

    common::studyfocus(&home)
        .arg("report")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Study Report"))
        .stdout(predicate::str::contains("Total focus time:    1h 5m"))
        .stdout(predicate::str::contains("Subjects covered:    2"))
        .stdout(predicate::str::contains("Most studied:        Calculus"));
}

#[test]
fn test_config_default_output_json() {
    let home = TempDir::new().unwrap();
    let (_dir, config) = common::temp_file("custom.yaml", "general:\n  default_output: json\n");

    let output = common::studyfocus(&home)
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["items"][0]["session_id"], "session_001");
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "general: [1, 2]\n").unwrap();

    common::studyfocus(&home)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
