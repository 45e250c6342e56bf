//! CLI command handlers for Breaky.
//!
//! Headless, scriptable access to breakpoint resolution and configuration
//! for shell scripts and CI.

pub mod common;
pub mod config;
pub mod list;
pub mod resolve;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use list::ListArgs;
pub use resolve::ResolveArgs;
