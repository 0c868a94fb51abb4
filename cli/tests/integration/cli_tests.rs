//! Integration tests for the CLI surface: help, version, global flags.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn modelpack() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("modelpack"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    modelpack().assert().code(2).stderr(predicate::str::contains(
        "Declare a model service environment",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    modelpack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    modelpack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modelpack"));
}

#[test]
fn test_version_command_shows_version() {
    modelpack()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    let output = modelpack()
        .args(["--json", "version"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    modelpack().arg("deploy").assert().failure();
}
