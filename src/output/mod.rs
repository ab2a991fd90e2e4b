//! Terminal output formatting
//!
//! Display utilities for the simple CLI mode and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::{print_round_end, print_round_screen};
