//! Breaky library
//!
//! Resolves a viewport width against a table of named responsive
//! breakpoints and renders the result as a small terminal indicator.

pub mod breakpoints;
pub mod cli;
pub mod config;
pub mod constants;
pub mod indicator;
pub mod logging;
pub mod models;
pub mod tui;
pub mod viewport;
