//! Indicator state and the view model handed to renderers.
//!
//! [`Indicator`] owns everything that changes while the indicator is on
//! screen: the breakpoint spec, the latest width reading, the expansion
//! flag and the anchor corner. [`Indicator::view`] derives an
//! [`IndicatorView`] from that state; renderers never see the resolver.

use serde::Serialize;

use crate::breakpoints::{BreakpointCache, BreakpointError, Resolved};
use crate::config::{ColorScheme, Config};
use crate::models::{BreakpointSpec, StartingPosition};
use crate::viewport::{DeviceClass, Measurement, WidthUnit};

/// One row of the expanded breakpoint list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorEntry {
    /// Breakpoint name
    pub name: String,
    /// Threshold as written in the config
    pub value: String,
    /// Parsed threshold
    pub threshold: u32,
    /// Whether the current width falls in this bucket
    pub active: bool,
}

/// Snapshot of everything a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    /// Active breakpoint label
    pub label: String,
    /// Current width, if measured
    pub width: Option<u32>,
    /// Unit of `width`
    pub unit: WidthUnit,
    /// Device class of the width; `None` until measured
    pub device: Option<DeviceClass>,
    /// Width is below the smallest threshold
    pub below_first: bool,
    /// Row to mark in the list; `None` hides the marker
    pub selected: Option<usize>,
    /// Whether the breakpoint list is shown
    pub expanded: bool,
    /// Anchor corner
    pub position: StartingPosition,
    /// Breakpoints in ascending order
    pub entries: Vec<IndicatorEntry>,
}

impl IndicatorView {
    /// Collapsed summary line, e.g. `"md - 800px"`.
    pub fn summary(&self) -> String {
        match self.width {
            Some(width) => format!("{} - {}{}", self.label, width, self.unit),
            None => format!("{} - waiting for size", self.label),
        }
    }
}

/// Live indicator state.
#[derive(Debug)]
pub struct Indicator {
    spec: BreakpointSpec,
    cache: BreakpointCache,
    measurement: Option<Measurement>,
    expanded: bool,
    position: StartingPosition,
    color_scheme: ColorScheme,
}

impl Indicator {
    /// Creates a collapsed indicator from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            spec: config.breakpoints.clone(),
            cache: BreakpointCache::new(),
            measurement: None,
            expanded: false,
            position: config.ui.starting_position,
            color_scheme: config.ui.color_scheme,
        }
    }

    /// Records the latest width reading; `None` means no measurement.
    pub fn set_measurement(&mut self, measurement: Option<Measurement>) {
        self.measurement = measurement;
    }

    /// Shorthand for a pixel reading.
    pub fn set_width(&mut self, width: Option<u32>) {
        self.measurement = width.map(|width| Measurement {
            width,
            unit: WidthUnit::Pixels,
        });
    }

    /// Replaces the breakpoint spec.
    pub fn set_breakpoints(&mut self, spec: BreakpointSpec) {
        self.spec = spec;
    }

    /// Current breakpoint spec.
    pub fn breakpoints(&self) -> &BreakpointSpec {
        &self.spec
    }

    /// Shows or hides the breakpoint list.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the breakpoint list is shown.
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Moves the indicator to the next corner.
    pub fn cycle_position(&mut self) {
        self.position = self.position.next();
    }

    /// Current anchor corner.
    pub const fn position(&self) -> StartingPosition {
        self.position
    }

    /// Configured color scheme.
    pub const fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Number of times the breakpoint table has been rebuilt.
    pub fn recomputations(&self) -> usize {
        self.cache.recomputations()
    }

    /// Builds the view for the current state.
    ///
    /// Configuration errors are returned as values so the renderer can show
    /// them instead of the indicator.
    pub fn view(&mut self) -> Result<IndicatorView, BreakpointError> {
        let table = self.cache.get(&self.spec)?;
        let width = self.measurement.map(|m| m.width);
        let resolved = Resolved::new(table, width);

        let entries = table
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| IndicatorEntry {
                name: entry.name.clone(),
                value: entry.value.clone(),
                threshold: entry.threshold,
                active: resolved.index == Some(index),
            })
            .collect();

        Ok(IndicatorView {
            label: resolved.label,
            width,
            unit: self.measurement.map_or(WidthUnit::Pixels, |m| m.unit),
            device: self.measurement.map(DeviceClass::of),
            below_first: resolved.below_first,
            selected: resolved.index,
            expanded: self.expanded,
            position: self.position,
            entries,
        })
    }
}
