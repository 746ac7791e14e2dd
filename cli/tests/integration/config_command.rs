//! Integration tests for `botfleet config` command.
//!
//! All filesystem-touching tests point `BOTFLEET_CONFIG` (or `--config`) at
//! a temp path so they never read or write `~/.botfleet/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn botfleet() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("botfleet"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

// ---------------------------------------------------------------------------
// `botfleet config show`
// ---------------------------------------------------------------------------

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    botfleet()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn test_config_show_no_config_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    botfleet()
        .args(["config", "show"])
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ph3nol/freqtrade:latest"))
        .stdout(predicate::str::contains("docker"));
}

#[test]
fn test_config_show_json_includes_path() {
    let (_dir, path) = temp_config_path();
    let output = botfleet()
        .args(["config", "show", "--json"])
        .env("BOTFLEET_CONFIG", &path)
        .output()
        .expect("run");
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(parsed["path"], path.as_str());
    assert_eq!(parsed["config"]["domain"], "localhost");
}

// ---------------------------------------------------------------------------
// `botfleet config set`
// ---------------------------------------------------------------------------

#[test]
fn test_config_set_persists_value() {
    let (_dir, path) = temp_config_path();
    botfleet()
        .args(["config", "set", "domain", "bots.example.com"])
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set domain = bots.example.com"));

    let saved = std::fs::read_to_string(&path).expect("config written");
    assert!(saved.contains("bots.example.com"));
}

#[test]
fn test_config_flag_overrides_env() {
    let (_dir, flag_path) = temp_config_path();
    let (_env_dir, env_path) = temp_config_path();
    botfleet()
        .args(["--config", &flag_path, "config", "set", "runtime", "podman"])
        .env("BOTFLEET_CONFIG", &env_path)
        .assert()
        .success();

    assert!(std::fs::read_to_string(&flag_path).unwrap().contains("podman"));
    assert!(!std::path::Path::new(&env_path).exists());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    botfleet()
        .args(["config", "set", "security.level", "strict"])
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting: security.level"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_relative_dir_fails_with_json_code() {
    let (_dir, path) = temp_config_path();
    let output = botfleet()
        .args(["config", "set", "scripts_dir", "scripts", "--json"])
        .env("BOTFLEET_CONFIG", &path)
        .output()
        .expect("run");
    assert!(!output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(parsed["error"], true);
    assert_eq!(parsed["code"], "INVALID_CONFIG");
}

#[test]
fn test_config_set_timeout_none_clears_it() {
    let (_dir, path) = temp_config_path();
    botfleet()
        .args(["config", "set", "command_timeout_secs", "30"])
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .success();
    botfleet()
        .args(["config", "set", "command_timeout_secs", "none"])
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .success();
    let saved = std::fs::read_to_string(&path).expect("config written");
    assert!(!saved.contains("command_timeout_secs"));
}
