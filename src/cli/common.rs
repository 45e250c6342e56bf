//! Shared plumbing for CLI commands: exit codes, errors and config loading.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::breakpoints::BreakpointError;
use crate::config::Config;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or configuration
    ValidationError = 1,
    /// Filesystem or terminal failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A command failure with the exit code it maps to.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid input or configuration (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Filesystem or terminal failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl From<BreakpointError> for CliError {
    fn from(err: BreakpointError) -> Self {
        Self::validation(format!("Invalid breakpoint configuration: {err}"))
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the config file path: `--config` if given, else the default.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config directory: {e:#}"))),
    }
}

/// Loads configuration for a command.
///
/// A missing default file yields the defaults; a missing `--config` file
/// is an error.
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::io(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
    }

    let path = config_path(explicit)?;
    Config::load_from(&path)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
