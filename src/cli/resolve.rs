//! `resolve` command: which breakpoint a width falls into.

use clap::Args;
use std::path::Path;

use crate::breakpoints::{self, Resolved};
use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::BreakpointSpec;

/// Resolve a viewport width to its breakpoint
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Width to resolve, e.g. 900 or 900px
    #[arg(value_name = "WIDTH")]
    pub width: String,

    /// Breakpoint as NAME=VALUE; repeat to replace the configured table
    #[arg(short, long = "breakpoint", value_name = "NAME=VALUE")]
    pub breakpoints: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self, config: Option<&Path>) -> CliResult<()> {
        let spec = if self.breakpoints.is_empty() {
            load_config(config)?.breakpoints
        } else {
            spec_from_assignments(&self.breakpoints)?
        };

        let width = breakpoints::parse_threshold(&self.width).ok_or_else(|| {
            CliError::validation(format!(
                "Invalid width '{}': expected a non-negative number such as 900 or 900px",
                self.width
            ))
        })?;

        let table = breakpoints::normalize(&spec)?;
        let resolved = Resolved::new(&table, Some(width));

        if self.json {
            print_json(&resolved)?;
        } else {
            println!("{}", resolved.label);
        }

        Ok(())
    }
}

/// Builds a spec from repeated `--breakpoint NAME=VALUE` arguments.
pub fn spec_from_assignments(assignments: &[String]) -> CliResult<BreakpointSpec> {
    let mut spec = BreakpointSpec::new();
    for assignment in assignments {
        let (name, value) = BreakpointSpec::parse_assignment(assignment)
            .map_err(|e| CliError::validation(e.to_string()))?;
        spec.insert(name, value);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    #[test]
    fn test_spec_from_assignments_keeps_order() {
        let spec =
            spec_from_assignments(&["tablet=768px".to_string(), "phone=320px".to_string()])
                .unwrap();

        let names: Vec<_> = spec.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["tablet", "phone"]);
    }

    #[test]
    fn test_spec_from_assignments_rejects_missing_equals() {
        let err = spec_from_assignments(&["tablet".to_string()]).unwrap_err();
        assert_eq!(err.code, ExitCode::ValidationError);
    }

    #[test]
    fn test_invalid_width_is_validation_error() {
        let args = ResolveArgs {
            width: "wide".to_string(),
            breakpoints: vec!["md=768px".to_string()],
            json: false,
        };
        let err = args.execute(None).unwrap_err();
        assert_eq!(err.code, ExitCode::ValidationError);
    }

    #[test]
    fn test_invalid_threshold_is_validation_error() {
        let args = ResolveArgs {
            width: "800".to_string(),
            breakpoints: vec!["md=-768px".to_string()],
            json: false,
        };
        let err = args.execute(None).unwrap_err();
        assert_eq!(err.code, ExitCode::ValidationError);
        assert!(err.message.contains("md"));
    }
}
