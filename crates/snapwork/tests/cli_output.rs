//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const VALID_WORKSPACE: &str = r#"version: "1.0"
generatedUtc: 2025-01-01T08:00:00Z
windows:
  - processPath: C:\Windows\System32\notepad.exe
    title: Notes
    monitorId: DISPLAY1
    desktopId: aa509086-5ca9-4c25-8f95-589d3c07b48a
    x: 10
    y: 20
    width: 800
    height: 600
  - processPath: C:\Tools\term.exe
    title: Terminal
    monitorId: DISPLAY2
    x: 1920
    y: 0
    width: 1024
    height: 768
"#;

const INVALID_WORKSPACE: &str = r#"version: "1.0"
generatedUtc: 2025-01-01T08:00:00Z
windows:
  - processPath: app.exe
    title: Main Window
    monitorId: DISPLAY1
    x: 0
    y: 0
    width: 800
    height: 0
  - processPath: ""
    title: Other
    monitorId: DISPLAY1
    width: 100
    height: 100
"#;

fn write_workspace(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write workspace file");
    path
}

fn run_snapwork(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snapwork"))
        .args(args)
        .output()
        .expect("Failed to execute snapwork")
}

fn assert_stdout_has_no_logs(output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(
            !line.contains(r#""event":"#),
            "stdout should not contain JSON logs, got: {}",
            stdout
        );
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_valid_workspace() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["validate", path.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Workspace is valid.");
    assert_stdout_has_no_logs(&output);
}

#[test]
fn test_validate_with_file_option() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["validate", "--file", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_validate_reports_every_violation() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", INVALID_WORKSPACE);

    let output = run_snapwork(&["validate", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation failed:"), "stderr: {}", stderr);
    assert!(
        stderr.contains(" - Window[0].height must be greater than zero."),
        "stderr: {}",
        stderr
    );
    assert!(
        stderr.contains(" - Window[1].processPath must be specified."),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Error:"), "stderr: {}", stderr);
}

#[test]
fn test_validate_empty_window_list() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(
        temp_dir.path(),
        "ws.json",
        r#"{"version":"1.0","generatedUtc":"2025-01-01T08:00:00Z","windows":[]}"#,
    );

    let output = run_snapwork(&["validate", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Workspace must contain at least one window."));
}

#[test]
fn test_validate_missing_file_is_generic_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.yaml");

    let output = run_snapwork(&["validate", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to read workspace file"),
        "stderr: {}",
        stderr
    );
}

// =============================================================================
// print
// =============================================================================

#[test]
fn test_print_lists_windows() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["print", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Version: 1.0"), "stdout: {}", stdout);
    assert!(stdout.contains("GeneratedUtc: 2025-01-01T08:00:00Z"), "stdout: {}", stdout);
    assert!(stdout.contains("Windows (2):"), "stdout: {}", stdout);
    assert!(stdout.contains("Notes"));
    assert!(stdout.contains("Terminal"));
    assert!(stdout.contains("(1920, 0) 1024x768"));
    assert!(stdout.contains("aa509086-5ca9-4c25-8f95-589d3c07b48a"));
    assert_stdout_has_no_logs(&output);
}

#[test]
fn test_print_json_is_parseable() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["print", path.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["windows"].as_array().map(|w| w.len()), Some(2));
    assert_eq!(value["windows"][1]["monitorId"], "DISPLAY2");
    assert!(value["windows"][1].get("desktopId").is_none());
}

// =============================================================================
// export
// =============================================================================

#[cfg(not(windows))]
#[test]
fn test_export_unsupported_platform_exits_four() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("layouts");
    let path = out_dir.join("ws.yaml");

    let output = run_snapwork(&["export", path.to_str().unwrap(), "--desktop", "0"]);

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Virtual desktop is unsupported: Virtual desktops require Windows."),
        "stderr: {}",
        stderr
    );
    assert!(!out_dir.exists());
}

// =============================================================================
// Usage and logging
// =============================================================================

#[test]
fn test_no_arguments_is_usage_failure() {
    let output = run_snapwork(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_zero() {
    let output = run_snapwork(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("export"));
}

#[test]
fn test_usage_error_is_printed_to_stderr() {
    let output = run_snapwork(&["validate", "ws.yaml", "--bogus"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--bogus"), "got: {}", stderr);
    assert!(!stderr.contains("Failed to print usage"));
}

#[test]
fn test_version_printed_to_stdout() {
    let output = run_snapwork(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_mode_suppresses_info_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["validate", path.to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
}

#[test]
fn test_verbose_flag_emits_info_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workspace(temp_dir.path(), "ws.yaml", VALID_WORKSPACE);

    let output = run_snapwork(&["validate", path.to_str().unwrap(), "-v"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
    assert!(stderr.contains("cli.validate_completed"));
    assert_stdout_has_no_logs(&output);
}
