//! Terminal output formatting
//!
//! Banners, puzzle listings and reports. The in-game grid itself is plain text
//! rendered by the session.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_categories, print_generated, print_outcome};
