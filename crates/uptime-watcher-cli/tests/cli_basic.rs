//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a temporary
//! directory, so every test starts from a fresh data directory.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &tempfile::TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_uptime-watcher"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("UPTIME_WATCHER_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_options_fresh_budget() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["options"]);
    assert_eq!(code, 0, "options failed");
    let options = parse_json(&stdout);
    let durations: Vec<u64> = options
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["duration_secs"].as_u64().unwrap())
        .collect();
    assert_eq!(durations, [86_400, 36_000, 18_000, 10_800, 3_600, 600]);
}

#[test]
fn test_options_exhausted_budget() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["options", "--hours", "48"]);
    assert_eq!(code, 0, "options --hours failed");
    let options = parse_json(&stdout);
    assert_eq!(options.as_array().unwrap().len(), 1);
    assert_eq!(options[0]["duration_secs"], 600);
}

#[test]
fn test_state_show_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["state", "show"]);
    assert_eq!(code, 0, "state show failed");
    let state = parse_json(&stdout);
    assert_eq!(state["ignore_today"], false);
    assert_eq!(state["total_delay_time"], 0);
    assert_eq!(state["last_boot_time"], 0);
}

#[test]
fn test_respond_postpone_updates_state() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["respond", "postpone", "3600"]);
    assert_eq!(code, 0, "respond postpone failed");
    assert_eq!(parse_json(&stdout)["total_delay_time"], 3600);

    let (_, stdout, _) = run_cli(&home, &["state", "show"]);
    let state = parse_json(&stdout);
    assert_eq!(state["total_delay_time"], 3600);
    assert!(state["delay_start_time"].as_i64().unwrap() > 0);
}

#[test]
fn test_respond_rejects_unoffered_postpone() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(&home, &["respond", "postpone", "7200"]);
    assert_ne!(code, 0, "unoffered postponement unexpectedly accepted");
    assert!(stderr.contains("not offered"));
}

#[test]
fn test_respond_not_today() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(&home, &["respond", "not-today"]);
    assert_eq!(code, 0, "respond not-today failed");
    let (_, stdout, _) = run_cli(&home, &["state", "show"]);
    assert_eq!(parse_json(&stdout)["ignore_today"], true);
}

#[test]
fn test_state_reset() {
    let home = tempfile::tempdir().unwrap();
    run_cli(&home, &["respond", "not-today"]);
    let (code, _, _) = run_cli(&home, &["state", "reset"]);
    assert_eq!(code, 0, "state reset failed");
    let (_, stdout, _) = run_cli(&home, &["state", "show"]);
    assert_eq!(parse_json(&stdout)["ignore_today"], false);
}

#[test]
fn test_config_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "sampler.interval_secs"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "300");
}

#[test]
fn test_config_set_then_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(&home, &["config", "set", "sampler.retry_secs", "30"]);
    assert_eq!(code, 0, "config set failed");
    let (_, stdout, _) = run_cli(&home, &["config", "get", "sampler.retry_secs"]);
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "set", "ui.dark_mode", "true"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(&home, &["config", "get", "sampler.jitter"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown configuration key: sampler.jitter"));
}

#[test]
fn test_config_list() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let settings = parse_json(&stdout);
    assert_eq!(settings["logging"]["level"], "info");
}
