// Binary-level checks. The viewer needs a real tty for its main loop, so
// these exercise the failure and argument paths, which are deterministic
// under a test harness.

use std::fs;
use std::process::{Command, Stdio};

use crate::common::{binary_path, make_temp_dir};

#[test]
fn unknown_argument_exits_with_an_error() {
    let output = Command::new(binary_path())
        .arg("--bogus")
        .stdin(Stdio::null())
        .output()
        .expect("viewer should spawn");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument"), "stderr: {stderr}");
}

#[test]
fn missing_flag_value_exits_with_an_error() {
    let output = Command::new(binary_path())
        .arg("--config")
        .stdin(Stdio::null())
        .output()
        .expect("viewer should spawn");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing value for --config"),
        "stderr: {stderr}"
    );
}

#[test]
fn unknown_grammar_override_is_reported() {
    let dir = make_temp_dir("termkit-viewer");
    let output = Command::new(binary_path())
        .args(["--grammar", "vt52"])
        .args(["--logs", dir.to_str().unwrap()])
        .current_dir(&dir)
        .stdin(Stdio::null())
        .output()
        .expect("viewer should spawn");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown input grammar: vt52"),
        "stderr: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_config_file_is_reported() {
    let dir = make_temp_dir("termkit-viewer");
    let config_path = dir.join("termkit.json");
    fs::write(&config_path, "{ not json").unwrap();

    let output = Command::new(binary_path())
        .args(["--config", config_path.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("viewer should spawn");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[test]
fn piped_stdin_fails_cleanly_and_logs_the_error() {
    let dir = make_temp_dir("termkit-viewer");
    let logs = dir.join("logs");

    let output = Command::new(binary_path())
        .args(["--logs", logs.to_str().unwrap()])
        .args(["--config", dir.join("absent.json").to_str().unwrap()])
        .stdin(Stdio::piped())
        .output()
        .expect("viewer should spawn");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a tty"), "stderr: {stderr}");

    // The failure also lands in the session log file.
    let entries: Vec<_> = fs::read_dir(&logs)
        .expect("log dir should exist")
        .filter_map(|entry| entry.ok())
        .collect();
    assert_eq!(entries.len(), 1);
    let contents = fs::read_to_string(entries[0].path()).unwrap();
    assert!(contents.contains("ERROR"), "log was: {contents}");
    assert!(contents.contains("not a tty"), "log was: {contents}");

    let _ = fs::remove_dir_all(&dir);
}
