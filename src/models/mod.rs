//! Data models for breakpoint configuration.
//!
//! Models are plain data, independent of the resolver and the UI.

pub mod breakpoint_spec;
pub mod position;

pub use breakpoint_spec::BreakpointSpec;
pub use position::StartingPosition;
