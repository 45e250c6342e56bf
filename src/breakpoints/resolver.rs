//! Classification of a viewport width against a [`BreakpointTable`].
//!
//! A bucket starts at its own threshold and ends just before the next one,
//! so a width exactly on a threshold belongs to the breakpoint that
//! threshold names. Widths below the smallest threshold get a dedicated
//! `BelowFirst` state with no selectable row.

use serde::Serialize;
use tracing::trace;

use super::table::BreakpointTable;

/// Label shown before the first width measurement arrives.
pub const UNRESOLVED_LABEL: &str = "-";

/// Which bucket a width falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No width measured yet.
    Unresolved,
    /// Width is smaller than every threshold.
    BelowFirst,
    /// Width is inside the bucket started by the entry at this index.
    AtIndex(usize),
}

impl Resolution {
    /// Display label for this resolution.
    ///
    /// `BelowFirst` shows the smallest threshold with its original unit,
    /// e.g. `"< 640px"`.
    pub fn label(self, table: &BreakpointTable) -> String {
        match self {
            Self::Unresolved => UNRESOLVED_LABEL.to_string(),
            Self::BelowFirst => format!("< {}", table.first().value),
            Self::AtIndex(index) => table
                .entries()
                .get(index)
                .map_or_else(|| UNRESOLVED_LABEL.to_string(), |entry| entry.name.clone()),
        }
    }

    /// Row to mark in the breakpoint list, if any.
    pub const fn selected(self) -> Option<usize> {
        match self {
            Self::AtIndex(index) => Some(index),
            Self::Unresolved | Self::BelowFirst => None,
        }
    }

    /// True when the width is below the smallest threshold.
    pub const fn is_below_first(self) -> bool {
        matches!(self, Self::BelowFirst)
    }
}

/// Index of the first breakpoint whose threshold is strictly greater than
/// `width`, or `None` when the width reaches every threshold.
pub fn locate(table: &BreakpointTable, width: u32) -> Option<usize> {
    table
        .entries()
        .iter()
        .position(|entry| entry.threshold > width)
}

/// Resolves a width (or its absence) to a bucket.
///
/// # Examples
///
/// ```
/// use breaky::breakpoints::{normalize, resolve, Resolution};
/// use breaky::models::BreakpointSpec;
///
/// let table = normalize(&BreakpointSpec::default()).unwrap();
///
/// assert_eq!(resolve(&table, Some(500)), Resolution::BelowFirst);
/// assert_eq!(resolve(&table, Some(700)).label(&table), "sm");
/// assert_eq!(resolve(&table, Some(2000)).label(&table), "xl");
/// assert_eq!(resolve(&table, None), Resolution::Unresolved);
/// ```
pub fn resolve(table: &BreakpointTable, width: Option<u32>) -> Resolution {
    let Some(width) = width else {
        return Resolution::Unresolved;
    };

    let resolution = match locate(table, width) {
        Some(0) => Resolution::BelowFirst,
        Some(next) => Resolution::AtIndex(next - 1),
        None => Resolution::AtIndex(table.len() - 1),
    };

    trace!(width, ?resolution, "resolved breakpoint");
    resolution
}

/// Everything the presentation layer needs about the active breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Active breakpoint name, `"< {first}"`, or the unresolved placeholder
    pub label: String,
    /// Measured width, if any
    pub width: Option<u32>,
    /// Index of the active row in ascending order
    pub index: Option<usize>,
    /// Width is below the smallest threshold
    pub below_first: bool,
}

impl Resolved {
    /// Resolves `width` against `table` and collects the derived values.
    pub fn new(table: &BreakpointTable, width: Option<u32>) -> Self {
        let resolution = resolve(table, width);
        Self {
            label: resolution.label(table),
            width,
            index: resolution.selected(),
            below_first: resolution.is_below_first(),
        }
    }
}
