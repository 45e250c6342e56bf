//! Breaky - terminal breakpoint indicator
//!
//! Shows which responsive breakpoint the current window width falls into,
//! and resolves widths headlessly for scripts.

use anyhow::Context;
use breaky::cli::common::load_config;
use breaky::cli::{CliError, CliResult, ConfigArgs, ListArgs, ResolveArgs};
use breaky::config::Config;
use breaky::constants::{APP_BINARY_NAME, APP_NAME, LOG_FILE_NAME};
use breaky::logging::{self, LogTarget};
use breaky::tui;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Breaky - which breakpoint is this window in?
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the live indicator (default)
    Watch,
    /// Resolve a width to its breakpoint
    Resolve(ResolveArgs),
    /// List configured breakpoints
    List(ListArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => run_watch(config, cli.verbose),
        Commands::Resolve(args) => {
            init_stderr_logging(cli.verbose);
            args.execute(config)
        }
        Commands::List(args) => {
            init_stderr_logging(cli.verbose);
            args.execute(config)
        }
        Commands::Config(args) => {
            init_stderr_logging(cli.verbose);
            args.execute(config)
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.code.code());
    }
}

fn init_stderr_logging(verbose: bool) {
    if let Err(e) = logging::init(verbose, LogTarget::Stderr) {
        eprintln!("Warning: {e:#}");
    }
}

/// Runs the terminal indicator until the user quits.
fn run_watch(config_path: Option<&Path>, verbose: bool) -> CliResult<()> {
    // Breakpoint errors are shown in the indicator rather than refused here
    let config = load_config(config_path)?;

    if let Ok(dir) = Config::config_dir() {
        if let Err(e) = logging::init(verbose, LogTarget::File(&dir.join(LOG_FILE_NAME))) {
            eprintln!("Warning: {e:#}");
        }
    }
    info!(app = APP_NAME, version = env!("CARGO_PKG_VERSION"), "starting");

    let mut state = tui::AppState::new(&config);
    let mut terminal = tui::setup_terminal().map_err(|e| CliError::io(format!("{e:#}")))?;

    let outcome = tui::run_tui(&mut state, &mut terminal);
    let restored = tui::restore_terminal(terminal);

    outcome
        .and(restored)
        .context("Terminal error")
        .map_err(|e| CliError::io(format!("{e:#}")))
}
