//! Grid placement engine
//!
//! Randomized word insertion, orientation selection and letter back-fill.
//! All randomness comes from a caller-supplied `rand::Rng`.

pub mod filler;
mod generator;
pub mod placer;
pub mod strategy;

pub use filler::{ALPHABET, fill_blanks};
pub use generator::{FillReport, Generator, Puzzle};
pub use placer::{DEFAULT_MAX_ATTEMPTS, PlacementError, Placer};
pub use strategy::{FixedOrientation, OrientationStrategy, WeightedOrientation};
