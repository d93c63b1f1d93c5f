//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory (CADENCE_ENV=dev). Timer commands all
//! share the persisted runtime state, so the whole timer flow lives in
//! one sequential test; preset and config tests only touch their own
//! files.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "cadence-cli", "--quiet", "--"])
        .args(args)
        .env("CADENCE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_timer_lifecycle() {
    // Switch pins the runtime to a known preset and resets it.
    let (stdout, _stderr, code) = run_cli(&["timer", "switch", "pomodoro"]);
    assert_eq!(code, 0, "timer switch failed");
    assert!(stdout.contains("ConfigSwitched"));

    let (stdout, _stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("status should be JSON");
    assert_eq!(snapshot["phase"], "work");
    assert_eq!(snapshot["running"], false);
    assert_eq!(snapshot["remaining_secs"], 25 * 60);

    let (stdout, _stderr, code) = run_cli(&["timer", "start"]);
    assert_eq!(code, 0, "timer start failed");
    assert!(stdout.contains("TimerStarted"));

    // Starting again is a no-op; the CLI prints the snapshot instead.
    let (stdout, _stderr, code) = run_cli(&["timer", "start"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("TimerStarted"));

    let (stdout, _stderr, code) = run_cli(&["timer", "pause"]);
    assert_eq!(code, 0, "timer pause failed");
    assert!(stdout.contains("TimerPaused"));

    // Watch drives the clock; two seconds yields two snapshot lines.
    let (stdout, _stderr, code) = run_cli(&["timer", "watch", "--seconds", "2"]);
    assert_eq!(code, 0, "timer watch failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() >= 2, "expected at least 2 snapshot lines");
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("remaining_secs").is_some() || value.get("type").is_some());
    }

    let (stdout, _stderr, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0, "timer reset failed");
    assert!(stdout.contains("TimerReset"));

    let (stdout, _stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["phase"], "work");
    assert_eq!(snapshot["running"], false);
    assert_eq!(snapshot["completed_work_sessions"], 0);
    assert_eq!(snapshot["remaining_secs"], 25 * 60);
}

#[test]
fn test_timer_switch_unknown_preset_fails() {
    let (_stdout, stderr, code) = run_cli(&["timer", "switch", "does-not-exist"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_preset_list_contains_builtins() {
    let (stdout, _stderr, code) = run_cli(&["preset", "list"]);
    assert_eq!(code, 0, "preset list failed");
    assert!(stdout.contains("pomodoro"));
    assert!(stdout.contains("short-focus"));
}

#[test]
fn test_preset_list_json() {
    let (stdout, _stderr, code) = run_cli(&["preset", "list", "--json"]);
    assert_eq!(code, 0, "preset list --json failed");
    let presets: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(presets.as_array().map_or(false, |p| !p.is_empty()));
}

#[test]
fn test_preset_create_and_show() {
    let (stdout, _stderr, code) = run_cli(&[
        "preset", "create", "CLI Test", "--work", "50", "--break", "10", "--long-break", "20",
    ]);
    assert_eq!(code, 0, "preset create failed");
    assert!(stdout.contains("Preset created: CLI Test"));

    let (stdout, _stderr, code) = run_cli(&["preset", "list", "--json"]);
    assert_eq!(code, 0);
    let presets: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let created = presets
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "CLI Test")
        .expect("created preset should be listed");
    assert_eq!(created["work_secs"], 50 * 60);

    let id = created["id"].as_str().unwrap();
    let (stdout, _stderr, code) = run_cli(&["preset", "show", id]);
    assert_eq!(code, 0, "preset show failed");
    assert!(stdout.contains("CLI Test"));
}

#[test]
fn test_preset_create_rejects_blank_name() {
    let (_stdout, stderr, code) = run_cli(&["preset", "create", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must not be empty"));
}

#[test]
fn test_config_get() {
    let (stdout, _stderr, code) = run_cli(&["config", "get", "defaults.work_minutes"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.trim().parse::<u32>().is_ok());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_stdout, _stderr, code) = run_cli(&["config", "set", "defaults.nope", "1"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list() {
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(config.get("defaults").is_some());
}
