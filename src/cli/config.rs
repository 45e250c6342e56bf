//! Configuration management CLI commands.

use crate::cli::common::{config_path, load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Write a default config file
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default config file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Path => {
                println!("{}", config_path(config)?.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(config),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let config = load_config(path)?;

        if self.json {
            print_json(&config)?;
        } else {
            print!("{}", format_human_readable(&config));
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let path = config_path(path)?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());

        Ok(())
    }
}

/// Configuration in human-readable format
fn format_human_readable(config: &Config) -> String {
    let mut out = String::from("Breaky Configuration\n====================\n\n");

    out.push_str("Breakpoints:\n");
    if config.breakpoints.is_empty() {
        out.push_str("  (none)\n");
    }
    for (name, value) in config.breakpoints.iter() {
        out.push_str(&format!("  {name} = {value}\n"));
    }
    out.push('\n');

    out.push_str("UI:\n");
    out.push_str(&format!(
        "  Starting Position: {}\n",
        config.ui.starting_position
    ));
    out.push_str(&format!(
        "  Color Scheme: {}\n",
        format!("{:?}", config.ui.color_scheme).to_lowercase()
    ));
    out.push('\n');

    out.push_str("Viewport:\n");
    out.push_str(&format!(
        "  Unit: {}\n",
        format!("{:?}", config.viewport.unit).to_lowercase()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;
    use tempfile::TempDir;

    #[test]
    fn test_human_readable_lists_breakpoints_in_file_order() {
        let text = format_human_readable(&Config::default());

        let sm = text.find("sm = 640px").unwrap();
        let xl = text.find("xl = 1280px").unwrap();
        assert!(sm < xl);
        assert!(text.contains("Starting Position: bottom_right"));
        assert!(text.contains("Color Scheme: auto"));
        assert!(text.contains("Unit: auto"));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        ConfigInitArgs { force: false }
            .execute(Some(path.as_path()))
            .unwrap();
        assert!(path.exists());

        let err = ConfigInitArgs { force: false }
            .execute(Some(path.as_path()))
            .unwrap_err();
        assert_eq!(err.code, ExitCode::ValidationError);

        ConfigInitArgs { force: true }
            .execute(Some(path.as_path()))
            .unwrap();
    }
}
