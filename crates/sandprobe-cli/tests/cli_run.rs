//! CLI binary tests.
//!
//! These tests exercise the compiled `sandprobe` binary with a temporary
//! sandbox home and the network probe disabled.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn sandprobe_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sandprobe"));
    cmd.env("HOME", home.path())
        .env("USER", "sandprobe-cli-nobody")
        .env_remove("SANDPROBE_CONFIG")
        .env_remove("SANDPROBE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_full_run_offline() {
    let home = TempDir::new().unwrap();
    let output = sandprobe_cmd(&home)
        .arg("--no-network")
        .output()
        .expect("failed to run sandprobe");

    assert!(output.status.success(), "run should exit 0");
    let out = stdout(&output);
    assert!(out.contains("Sandbox home:"), "got: {}", out);
    assert!(out.contains("Real home:    /home/sandprobe-cli-nobody"), "got: {}", out);
    assert!(out.contains("Write test: Sandbox test successful!"), "got: {}", out);
    assert!(out.contains("Protected: id_rsa"), "got: {}", out);
    assert!(out.contains("Sandbox check complete"), "got: {}", out);
    assert!(!out.contains("WARN"), "logs must not reach stdout: {}", out);
    assert!(!home.path().join("test-write.txt").exists());
}

#[test]
fn test_cli_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("probes.json5");
    fs::write(
        &config,
        r#"{
            sensitive_files: [".ssh/id_ed25519"],
            list_real_home: false,
            system_dirs: ["/nonexistent-sandprobe-dir"],
            network: { enabled: false },
        }"#,
    )
    .unwrap();

    let output = sandprobe_cmd(&home)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run sandprobe");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Protected: id_ed25519"), "got: {}", out);
    assert!(!out.contains("id_rsa"), "got: {}", out);
    assert!(!out.contains("Real home directory"), "got: {}", out);
    assert!(out.contains("Blocked: /nonexistent-sandprobe-dir"), "got: {}", out);
}

#[test]
fn test_cli_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let output = sandprobe_cmd(&home)
        .args(["--sample-limit", "0"])
        .output()
        .expect("failed to run sandprobe");

    assert!(!output.status.success(), "invalid config should exit non-zero");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sample_limit"), "got: {}", stderr);
}

#[test]
fn test_cli_parent_dir_user_fails() {
    let home = TempDir::new().unwrap();
    let output = sandprobe_cmd(&home)
        .env("USER", "..")
        .arg("--no-network")
        .output()
        .expect("failed to run sandprobe");

    assert!(!output.status.success(), "USER=.. should exit non-zero");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid user name '..'"), "got: {}", stderr);
    assert!(!stdout(&output).contains("Sandbox check complete"));
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    let output = sandprobe_cmd(&home)
        .arg("--help")
        .output()
        .expect("failed to run sandprobe --help");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--no-network"), "got: {}", out);
    assert!(out.contains("--sample-limit"), "got: {}", out);
}

#[test]
fn test_cli_unknown_flag() {
    let home = TempDir::new().unwrap();
    let output = sandprobe_cmd(&home)
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to run sandprobe");

    assert!(!output.status.success());
}
