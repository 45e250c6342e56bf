//! Terminal viewport measurement.
//!
//! Width comes from `crossterm`: the pixel width when the terminal reports
//! it, the column count otherwise, depending on [`ViewportUnit`].

use crossterm::terminal;
use std::fmt;
use tracing::{debug, warn};

use crate::config::ViewportUnit;

/// Unit of a width measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthUnit {
    /// Window pixels
    Pixels,
    /// Character columns
    Columns,
}

impl WidthUnit {
    /// Suffix printed after a width value.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Columns => "col",
        }
    }
}

impl fmt::Display for WidthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A single width reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Measured width
    pub width: u32,
    /// Unit of `width`
    pub unit: WidthUnit,
}

/// Rough device class of a width, shown as an icon next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Narrow, phone-sized
    Phone,
    /// Medium, tablet-sized
    Tablet,
    /// Wide, desktop-sized
    Desktop,
}

impl DeviceClass {
    /// Classifies a measurement.
    ///
    /// Pixel cut-offs are 768 and 1024; column cut-offs are 80 and 120.
    pub const fn of(measurement: Measurement) -> Self {
        let (tablet, desktop) = match measurement.unit {
            WidthUnit::Pixels => (768, 1024),
            WidthUnit::Columns => (80, 120),
        };

        if measurement.width < tablet {
            Self::Phone
        } else if measurement.width < desktop {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Single-cell glyph for the class.
    pub const fn glyph(self) -> char {
        match self {
            Self::Phone => '▯',
            Self::Tablet => '▭',
            Self::Desktop => '▬',
        }
    }
}

/// Picks a width from raw terminal dimensions.
///
/// `pixel_width` is zero when the terminal does not report pixel sizes.
pub fn select_width(unit: ViewportUnit, columns: u16, pixel_width: u16) -> Option<Measurement> {
    let pixels = (pixel_width > 0).then(|| Measurement {
        width: u32::from(pixel_width),
        unit: WidthUnit::Pixels,
    });
    let columns = Measurement {
        width: u32::from(columns),
        unit: WidthUnit::Columns,
    };

    match unit {
        ViewportUnit::Pixels => pixels,
        ViewportUnit::Columns => Some(columns),
        ViewportUnit::Auto => pixels.or(Some(columns)),
    }
}

/// Measures the current terminal.
///
/// Returns `None` if the terminal cannot be queried or does not report the
/// requested unit.
pub fn measure(unit: ViewportUnit) -> Option<Measurement> {
    match terminal::window_size() {
        Ok(size) => select_width(unit, size.columns, size.width),
        Err(err) => {
            warn!(%err, "window size unavailable, falling back to column count");
            let (columns, _) = terminal::size().ok()?;
            select_width(unit, columns, 0)
        }
    }
}

/// Measures after a resize event that already carries the column count.
pub fn measure_resized(unit: ViewportUnit, columns: u16) -> Option<Measurement> {
    let pixel_width = terminal::window_size().map_or(0, |size| size.width);
    select_width(unit, columns, pixel_width)
}

/// Collapses a burst of resize readings into the latest one.
///
/// Readings are pushed as events arrive; [`take`](Self::take) hands out the
/// newest reading once, and only if it differs from the last one handed out.
#[derive(Debug, Default)]
pub struct ResizeCoalescer {
    pending: Option<Option<Measurement>>,
    applied: Option<Option<Measurement>>,
    dropped: usize,
}

impl ResizeCoalescer {
    /// Creates an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reading, replacing any reading not yet taken.
    pub fn push(&mut self, measurement: Option<Measurement>) {
        if self.pending.replace(measurement).is_some() {
            self.dropped += 1;
        }
    }

    /// Returns the newest reading if it changes what was last applied.
    pub fn take(&mut self) -> Option<Option<Measurement>> {
        let next = self.pending.take()?;
        if self.applied == Some(next) {
            return None;
        }

        debug!(?next, superseded = self.dropped, "applying viewport width");
        self.dropped = 0;
        self.applied = Some(next);
        Some(next)
    }
}
