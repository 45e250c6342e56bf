//! User-supplied breakpoint table.

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named viewport thresholds as written by the user (e.g. `md = "768px"`).
///
/// Values keep their unit suffix so they can be echoed back verbatim.
/// Iteration order is declaration order, which is also the tie-breaker
/// when two breakpoints share a threshold.
///
/// # Examples
///
/// ```
/// use breaky::models::BreakpointSpec;
///
/// let spec = BreakpointSpec::default();
/// assert_eq!(spec.get("md"), Some("768px"));
/// assert_eq!(spec.len(), 4);
/// ```
///
/// Two specs are equal only if they list the same entries in the same
/// order.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointSpec {
    entries: IndexMap<String, String>,
}

impl BreakpointSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds or replaces a breakpoint, returning the previous value.
    ///
    /// Replacing keeps the entry at its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Looks up the raw threshold string for a breakpoint.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no breakpoints are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Parses a `NAME=VALUE` assignment as accepted on the command line.
    pub fn parse_assignment(input: &str) -> Result<(String, String)> {
        let Some((name, value)) = input.split_once('=') else {
            anyhow::bail!("Breakpoint '{input}' must be written as NAME=VALUE (e.g. md=768px)");
        };

        let name = name.trim();
        let value = value.trim();

        if name.is_empty() {
            anyhow::bail!("Breakpoint '{input}' is missing a name");
        }
        if value.is_empty() {
            anyhow::bail!("Breakpoint '{name}' is missing a value");
        }

        Ok((name.to_string(), value.to_string()))
    }
}

impl PartialEq for BreakpointSpec {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Default for BreakpointSpec {
    /// Tailwind's default screens.
    fn default() -> Self {
        [
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
        ]
        .into_iter()
        .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for BreakpointSpec
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
