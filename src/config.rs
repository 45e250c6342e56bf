//! Configuration management for the application.
//!
//! This module handles loading and saving the breakpoint configuration in
//! TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::breakpoints;
use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::models::{BreakpointSpec, StartingPosition};

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark colors
    Dark,
    /// Always use light colors
    Light,
}

/// Which terminal measurement feeds the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewportUnit {
    /// Pixels when the terminal reports them, columns otherwise
    #[default]
    Auto,
    /// Window width in pixels only; unresolved if the terminal cannot report it
    Pixels,
    /// Terminal width in character columns
    Columns,
}

/// Indicator appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Corner the indicator starts in
    #[serde(default)]
    pub starting_position: StartingPosition,
    /// Color scheme (auto, dark, light)
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

/// Viewport measurement settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewportConfig {
    /// Measurement unit
    #[serde(default)]
    pub unit: ViewportUnit,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Breaky/config.toml`
/// - macOS: `~/Library/Application Support/Breaky/config.toml`
/// - Windows: `%APPDATA%\Breaky\config.toml`
///
/// Set `BREAKY_CONFIG_DIR` to use another directory.
///
/// # Example
///
/// ```toml
/// [breakpoints]
/// sm = "640px"
/// md = "768px"
///
/// [ui]
/// starting_position = "top_right"
/// color_scheme = "dark"
///
/// [viewport]
/// unit = "columns"
/// ```
///
/// Every section is optional. A `[breakpoints]` table replaces the default
/// breakpoints entirely rather than merging with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Viewport breakpoints
    #[serde(default)]
    pub breakpoints: BreakpointSpec,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Viewport measurement
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `BREAKY_CONFIG_DIR` takes precedence over the platform directory:
    ///
    /// - Linux: `~/.config/Breaky/`
    /// - macOS: `~/Library/Application Support/Breaky/`
    /// - Windows: `%APPDATA%\Breaky\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults. Breakpoint values are not
    /// validated here; invalid thresholds surface when the table is built.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        info!(
            path = %path.display(),
            breakpoints = config.breakpoints.len(),
            "loaded config"
        );

        Ok(config)
    }

    /// Saves configuration using an atomic write.
    ///
    /// Uses temp file + rename so a crash never leaves a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that the breakpoint table is non-empty and every threshold
    /// starts with a non-negative integer.
    pub fn validate(&self) -> Result<()> {
        breakpoints::normalize(&self.breakpoints).context("Invalid breakpoint configuration")?;
        Ok(())
    }
}
