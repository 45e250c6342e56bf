//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the breaky binary
pub fn breaky_bin() -> String {
    std::env::var("CARGO_BIN_EXE_breaky").unwrap_or_else(|_| "target/debug/breaky".to_string())
}

/// Creates a Command whose config directory is `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(breaky_bin());
    cmd.env("BREAKY_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs breaky with an empty, throwaway config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `content` as `config.toml` inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Stdout as a trimmed string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}
