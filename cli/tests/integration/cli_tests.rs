//! Integration tests for the botfleet CLI skeleton: help, version and
//! argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn botfleet() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("botfleet"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    botfleet().assert().code(2).stderr(predicate::str::contains(
        "Launch, stop and inspect containerised trading-bot instances",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    botfleet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("pairlist"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    botfleet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("botfleet"));
}

#[test]
fn test_version_command_shows_version() {
    botfleet()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "botfleet {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = botfleet()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_version_ignores_broken_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "images: [broken\n").expect("write");
    botfleet()
        .arg("version")
        .env("BOTFLEET_CONFIG", &path)
        .assert()
        .success();
}

#[test]
fn test_stop_core_and_ui_are_mutually_exclusive() {
    botfleet()
        .args(["stop", "bot.yaml", "--core", "--ui"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_start_requires_instance() {
    botfleet()
        .arg("start")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INSTANCE>"));
}

#[test]
fn test_no_color_env_and_flag_are_both_accepted() {
    for value in ["1", "true", ""] {
        botfleet()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success();
    }
    botfleet().args(["--no-color", "version"]).assert().success();
}
