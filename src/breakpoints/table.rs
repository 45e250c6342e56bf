//! Normalization of a [`BreakpointSpec`] into a sorted threshold table.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use crate::models::BreakpointSpec;

/// Leading integer of a threshold value; anything after the digits is a unit.
static THRESHOLD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("threshold pattern is valid"));

/// Configuration errors detected while normalizing a spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// The spec has no entries.
    #[error("no breakpoints configured")]
    Empty,

    /// A value does not start with a non-negative integer.
    #[error("breakpoint '{name}' has invalid threshold '{value}' (expected a width such as \"768px\")")]
    InvalidThreshold {
        /// Breakpoint name
        name: String,
        /// Raw value as written in the spec
        value: String,
    },
}

/// Breakpoint name to pixel threshold.
pub type NumericBreakpoints = HashMap<String, u32>;

/// One row of a normalized table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointEntry {
    /// Breakpoint name (e.g. "md")
    pub name: String,
    /// Original value including its unit (e.g. "768px")
    pub value: String,
    /// Parsed threshold (e.g. 768)
    pub threshold: u32,
}

/// A validated, non-empty breakpoint table sorted by ascending threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: Vec<BreakpointEntry>,
    numeric: NumericBreakpoints,
}

impl BreakpointTable {
    /// Entries in ascending threshold order.
    pub fn entries(&self) -> &[BreakpointEntry] {
        &self.entries
    }

    /// Breakpoint names in ascending threshold order.
    pub fn ordered(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Name to threshold lookup.
    pub fn numeric(&self) -> &NumericBreakpoints {
        &self.numeric
    }

    /// Threshold for a breakpoint, if it exists.
    pub fn threshold(&self, name: &str) -> Option<u32> {
        self.numeric.get(name).copied()
    }

    /// Index of a breakpoint in ascending order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Entry with the smallest threshold.
    pub fn first(&self) -> &BreakpointEntry {
        // Non-empty by construction
        &self.entries[0]
    }

    /// Entry with the largest threshold.
    pub fn last(&self) -> &BreakpointEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Number of breakpoints (never zero).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses the leading integer of a threshold value.
///
/// Leading whitespace and a sign are accepted; the unit suffix is ignored.
/// Returns `None` when the value does not start with digits, is negative,
/// or does not fit in a `u32`.
pub fn parse_threshold(value: &str) -> Option<u32> {
    let digits = THRESHOLD_PREFIX.captures(value)?.get(1)?.as_str();
    let parsed: i64 = digits.parse().ok()?;
    u32::try_from(parsed).ok()
}

/// Validates a spec and sorts it by threshold.
///
/// Sorting is stable: breakpoints with equal thresholds keep their
/// declaration order.
///
/// # Examples
///
/// ```
/// use breaky::breakpoints::normalize;
/// use breaky::models::BreakpointSpec;
///
/// let spec: BreakpointSpec = [("lg", "1024px"), ("sm", "640px")].into_iter().collect();
/// let table = normalize(&spec).unwrap();
///
/// assert_eq!(table.ordered().collect::<Vec<_>>(), vec!["sm", "lg"]);
/// assert_eq!(table.threshold("lg"), Some(1024));
/// ```
pub fn normalize(spec: &BreakpointSpec) -> Result<BreakpointTable, BreakpointError> {
    if spec.is_empty() {
        return Err(BreakpointError::Empty);
    }

    let mut entries = spec
        .iter()
        .map(|(name, value)| {
            let threshold =
                parse_threshold(value).ok_or_else(|| BreakpointError::InvalidThreshold {
                    name: name.to_string(),
                    value: value.to_string(),
                })?;

            Ok(BreakpointEntry {
                name: name.to_string(),
                value: value.to_string(),
                threshold,
            })
        })
        .collect::<Result<Vec<_>, BreakpointError>>()?;

    entries.sort_by_key(|entry| entry.threshold);

    let numeric = entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.threshold))
        .collect();

    debug!(
        count = entries.len(),
        first = %entries[0].name,
        "normalized breakpoint table"
    );

    Ok(BreakpointTable { entries, numeric })
}
