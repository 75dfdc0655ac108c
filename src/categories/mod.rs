//! Word search categories
//!
//! Provides the embedded categories compiled into the binary and loaders for
//! user category files.

mod category;
mod embedded;
pub mod loader;

pub use category::{Category, CategoryError, WORDS_PER_CATEGORY, find_category};
pub use embedded::{CATEGORIES, CATEGORIES_COUNT};
