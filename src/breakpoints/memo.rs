//! Recompute-on-change cache for normalized breakpoint tables.

use tracing::debug;

use super::table::{normalize, BreakpointError, BreakpointTable};
use crate::models::BreakpointSpec;

/// Holds the table for the most recently seen spec.
///
/// The table is rebuilt only when a structurally different spec is passed
/// in. Errors are cached as well, so an invalid config is parsed once
/// rather than on every frame.
#[derive(Debug, Default)]
pub struct BreakpointCache {
    cached: Option<(BreakpointSpec, Result<BreakpointTable, BreakpointError>)>,
    recomputations: usize,
}

impl BreakpointCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `spec`, normalizing only if it changed.
    pub fn get(&mut self, spec: &BreakpointSpec) -> Result<&BreakpointTable, BreakpointError> {
        let fresh = matches!(&self.cached, Some((cached, _)) if cached == spec);
        if !fresh {
            self.cached = None;
        }

        let recomputations = &mut self.recomputations;
        let (_, result) = self.cached.get_or_insert_with(|| {
            *recomputations += 1;
            debug!(recomputations = *recomputations, "breakpoint spec changed");
            (spec.clone(), normalize(spec))
        });

        result.as_ref().map_err(Clone::clone)
    }

    /// Drops the cached table.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// How many times a table has been built.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
