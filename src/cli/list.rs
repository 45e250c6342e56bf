//! `list` command: the breakpoint table in ascending order.

use clap::Args;
use std::path::Path;

use crate::cli::common::{load_config, print_json, CliResult};
use crate::indicator::{Indicator, IndicatorEntry};

/// List configured breakpoints, smallest first
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Mark the breakpoint this width falls into
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config: Option<&Path>) -> CliResult<()> {
        let config = load_config(config)?;

        let mut indicator = Indicator::new(&config);
        indicator.set_width(self.width);
        let view = indicator.view()?;

        if self.json {
            print_json(&view.entries)?;
        } else {
            print!("{}", format_table(&view.entries));
        }

        Ok(())
    }
}

/// Renders entries as aligned `name value` rows, marking the active one.
fn format_table(entries: &[IndicatorEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let marker = if entry.active { '*' } else { ' ' };
            format!(
                "{marker} {:<name_width$}  {}\n",
                entry.name, entry.value
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str, active: bool) -> IndicatorEntry {
        IndicatorEntry {
            name: name.to_string(),
            value: value.to_string(),
            threshold: value.trim_end_matches("px").parse().unwrap(),
            active,
        }
    }

    #[test]
    fn test_format_table_aligns_names() {
        let table = format_table(&[entry("sm", "640px", false), entry("tablet", "768px", true)]);
        assert_eq!(table, "  sm      640px\n* tablet  768px\n");
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[]), "");
    }
}
