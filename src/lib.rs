//! Word Search
//!
//! Generates word search puzzles and runs a timed console game over them.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordsearch::categories::loader::builtin;
//! use wordsearch::engine::Generator;
//!
//! let categories = builtin();
//! let colours = &categories[2];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let puzzle = Generator::default().generate(16, 16, colours.words(), &mut rng);
//! let red = puzzle.report.placement_of("red").unwrap();
//! let text = puzzle.grid.read_path(red.row, red.col, red.orientation, 3).unwrap();
//! assert!(text == "red" || text == "der");
//! ```

// Core domain types
pub mod core;

// Placement engine
pub mod engine;

// Category word lists
pub mod categories;

// Game settings
pub mod config;

// Timed guessing session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
