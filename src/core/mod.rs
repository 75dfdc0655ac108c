//! Core domain types for word search
//!
//! Grid, words, orientations and placements. Nothing in here touches
//! randomness or I/O.

mod grid;
mod orientation;
mod placement;
mod word;

pub use grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};
pub use orientation::Orientation;
pub use placement::Placement;
pub use word::{Word, WordError};
