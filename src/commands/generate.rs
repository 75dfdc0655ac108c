//! Puzzle generation command
//!
//! Prints a puzzle for a category without starting a game.

use super::play::generate_puzzle;
use crate::categories::{Category, find_category};
use crate::config::GameConfig;
use crate::engine::Puzzle;
use anyhow::{Context, Result};
use rand::Rng;

/// Configuration for generating a puzzle
pub struct GenerateConfig<'a> {
    /// Menu number or name; the first category when absent
    pub category: Option<&'a str>,
    pub reveal: bool,
}

/// A generated puzzle and the category it came from
pub struct GenerateResult<'a> {
    pub category: &'a Category,
    pub puzzle: Puzzle,
    pub reveal: bool,
}

/// Pick the category and generate its puzzle
///
/// Words that could not be placed are kept in the report rather than
/// treated as errors.
///
/// # Errors
///
/// Returns an error if the category is unknown or does not fit the grid.
pub fn generate<'a, G: Rng + ?Sized>(
    categories: &'a [Category],
    options: &GenerateConfig<'_>,
    config: &GameConfig,
    rng: &mut G,
) -> Result<GenerateResult<'a>> {
    let category = match options.category {
        Some(choice) => find_category(categories, choice)
            .with_context(|| format!("Unknown category '{choice}'"))?,
        None => categories.first().context("No categories available")?,
    };

    let puzzle = generate_puzzle(category, config, rng)?;
    Ok(GenerateResult {
        category,
        puzzle,
        reveal: options.reveal,
    })
}
