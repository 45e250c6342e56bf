//! End-to-end tests for `breaky config` commands.

mod fixtures;
use fixtures::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let output = run_isolated(&["config", "show"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("sm = 640px"));
    assert!(text.contains("xl = 1280px"));
    assert!(text.contains("bottom_right"));
}

#[test]
fn test_config_show_json_schema() {
    let output = run_isolated(&["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["breakpoints"].is_object(), "Should have breakpoints table");
    assert_eq!(result["breakpoints"]["md"], "768px");
    assert_eq!(result["ui"]["starting_position"], "bottom_right");
    assert_eq!(result["ui"]["color_scheme"], "auto");
    assert_eq!(result["viewport"]["unit"], "auto");
}

#[test]
fn test_config_show_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "[breakpoints]\nwide = \"1400px\"\nnarrow = \"400px\"\n\n[ui]\nstarting_position = \"top_left\"\n",
    );

    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");
    let text = stdout(&output);

    let wide = text.find("wide = 1400px").unwrap();
    let narrow = text.find("narrow = 400px").unwrap();
    assert!(wide < narrow);
    assert!(text.contains("top_left"));
}

#[test]
fn test_config_show_malformed_file_is_validation_error() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[ui]\nstarting_position = \"middle\"\n");

    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Path Command Tests
// ============================================================================

#[test]
fn test_config_path_uses_env_override() {
    let dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "path"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_path_prefers_config_flag() {
    let dir = TempDir::new().unwrap();

    let output = isolated_command(
        &["config", "path", "--config", "/tmp/elsewhere.toml"],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(stdout(&output), "/tmp/elsewhere.toml");
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "init"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let content = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("[breakpoints]"));
    assert!(content.contains("640px"));

    // Default order survives the round trip
    let sm = content.find("sm").unwrap();
    let xl = content.find("xl").unwrap();
    assert!(sm < xl);
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[breakpoints]\nmine = \"1px\"\n");

    let output = isolated_command(&["config", "init"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--force"));
    let content = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("mine"));
}

#[test]
fn test_config_init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[breakpoints]\nmine = \"1px\"\n");

    let output = isolated_command(&["config", "init", "--force"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let content = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(!content.contains("mine"));
    assert!(content.contains("md"));
}
