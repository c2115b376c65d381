//! Integration tests for the `paddock` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live platform.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `paddock` binary with env isolation.
///
/// Clears all `PADDOCK_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn paddock_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("paddock");
    cmd.env("HOME", "/tmp/paddock-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/paddock-cli-test-nonexistent")
        .env_remove("PADDOCK_PROFILE")
        .env_remove("PADDOCK_HOST")
        .env_remove("PADDOCK_EMAIL")
        .env_remove("PADDOCK_PASSWORD")
        .env_remove("PADDOCK_OUTPUT")
        .env_remove("PADDOCK_COLOR")
        .env_remove("PADDOCK_INSECURE")
        .env_remove("PADDOCK_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = paddock_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    paddock_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Paddock")
            .and(predicate::str::contains("users"))
            .and(predicate::str::contains("animals"))
            .and(predicate::str::contains("trackers"))
            .and(predicate::str::contains("orders")),
    );
}

#[test]
fn test_version_flag() {
    paddock_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paddock"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    paddock_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    paddock_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    paddock_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = paddock_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_users_list_no_config() {
    let output = paddock_cmd().args(["users", "list"]).output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(1),
        "Expected general error exit code"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("config init"),
        "Expected config hint in output:\n{text}"
    );
}

#[test]
fn test_desc_without_sort_is_usage_error() {
    paddock_cmd()
        .args(["users", "list", "--desc"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invalid_order_status_rejected() {
    paddock_cmd()
        .args([
            "orders",
            "set-status",
            "6b4e9359-6c65-4f05-a59f-adcbf48e8c9e",
            "shipped",
        ])
        .assert()
        .failure()
        .code(2);
}

// ── Config commands (no connection required) ────────────────────────

#[test]
fn test_config_path_prints_path() {
    paddock_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_profiles_empty() {
    paddock_cmd()
        .args(["config", "profiles"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_config_use_unknown_profile_fails() {
    let output = paddock_cmd()
        .args(["config", "use", "staging"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("staging"),
        "Expected missing profile name in output:\n{text}"
    );
}
