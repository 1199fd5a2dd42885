//! Smoke tests for dragonball-cli
//!
//! These tests verify basic functionality of the CLI without requiring
//! network access.

use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-q", "-p", "dragonball-cli", "--"])
        .args(args)
        .env_remove("DRAGONBALL_TOKEN")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        eprintln!("stdout: {}", stdout);
        eprintln!("stderr: {}", stderr);
    }

    for command in ["login", "heroes", "transformations"] {
        assert!(
            stdout.contains(command),
            "Help should mention '{}' command",
            command
        );
    }
}

/// Test that version is shown
#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Version command should succeed");
    assert!(stdout.contains("dragonball"));
}

/// Test that listing heroes without a token is rejected by argument parsing
#[test]
fn test_heroes_requires_token() {
    let output = run_cli(&["heroes"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("--token"), "stderr: {}", stderr);
}

/// Test that an unsupported base URL fails before any request is made
#[test]
fn test_invalid_base_url() {
    let output = run_cli(&["--base-url", "ftp://example.com", "heroes", "--token", "t"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Invalid client configuration"), "stderr: {}", stderr);
}
