//! Shared helpers for integration tests.

#![allow(dead_code, deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `studyfocus` command isolated from the user's config directory.
pub fn studyfocus(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyfocus").unwrap();
    cmd.env("STUDYFOCUS_HOME", home.path())
        .env_remove("STUDYFOCUS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a file into a fresh temp dir, returning both.
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub const SAMPLE_LOG: &str = r#"
sessions:
  - session_id: session_001
    start_time: "2025-02-05T16:52:53+05:30"
    focus:
      - focus_seconds: 1500
        timestamp: "2025-02-05T16:52:53+05:30"
        subject: Calculus
        mode: pomodoro
      - focus_seconds: 1800
        timestamp: "2025-02-05T17:30:00+05:30"
        subject: Physics
  - session_id: session_002
    start_time: "2025-02-06T09:00:00+05:30"
    focus:
      - focus_seconds: 600
        timestamp: "2025-02-06T09:10:00+05:30"
        subject: Calculus
"#;
