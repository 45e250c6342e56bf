//! Breakpoint resolution.
//!
//! [`normalize`] turns a [`BreakpointSpec`](crate::models::BreakpointSpec)
//! into a sorted [`BreakpointTable`], [`resolve`] classifies a width against
//! that table, and [`BreakpointCache`] keeps the table around until the
//! spec changes. Everything here is pure and synchronous.

pub mod memo;
pub mod resolver;
pub mod table;

pub use memo::BreakpointCache;
pub use resolver::{locate, resolve, Resolution, Resolved, UNRESOLVED_LABEL};
pub use table::{
    normalize, parse_threshold, BreakpointEntry, BreakpointError, BreakpointTable,
    NumericBreakpoints,
};
