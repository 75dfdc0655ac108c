//! Interactive console game
//!
//! Category menu, puzzle generation and the timed session.

use crate::categories::{Category, find_category};
use crate::config::GameConfig;
use crate::engine::{Generator, Puzzle, WeightedOrientation};
use crate::game::{Outcome, Session, SystemClock, TokenReader};
use crate::output::print_outcome;
use anyhow::{Context, Result, bail};
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Ask for a category until a valid one is given
///
/// Accepts the menu number or the category name.
///
/// # Errors
///
/// Returns an error if input closes before a valid choice or on I/O failure.
pub fn prompt_category<'a, R: BufRead, W: Write>(
    input: &mut TokenReader<R>,
    out: &mut W,
    categories: &'a [Category],
) -> Result<&'a Category> {
    writeln!(out, "Welcome to the word search!")?;
    writeln!(out, "Which category would you like the words to be from?")?;
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "[{}]: {category}", i + 1)?;
    }
    out.flush()?;

    loop {
        let Some(choice) = input.next_token()? else {
            bail!("No category selected");
        };
        if let Some(category) = find_category(categories, &choice) {
            return Ok(category);
        }
        writeln!(
            out,
            "Please choose a number between 1 and {}:",
            categories.len()
        )?;
        out.flush()?;
    }
}

/// Generate a complete puzzle for a category
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a word does not fit
/// the grid.
pub fn generate_puzzle<G: Rng + ?Sized>(
    category: &Category,
    config: &GameConfig,
    rng: &mut G,
) -> Result<Puzzle> {
    config.validate()?;
    category.ensure_fits(config.width, config.height)?;

    let generator = Generator::new(WeightedOrientation::default(), config.placer());
    Ok(generator.generate(config.width, config.height, category.words(), rng))
}

/// Build a session, refusing grids that are missing any word
///
/// # Errors
///
/// Returns an error if generation fails or any word could not be placed.
pub fn build_session<G: Rng + ?Sized>(
    category: &Category,
    config: &GameConfig,
    rng: &mut G,
) -> Result<Session> {
    let puzzle = generate_puzzle(category, config, rng)?;

    if let Some(err) = puzzle.report.skipped.first() {
        bail!(
            "Could not build a winnable '{category}' puzzle ({} word(s) missing): {err}",
            puzzle.report.skipped.len()
        );
    }

    info!(
        "generated '{category}' puzzle with {} placement attempts",
        puzzle.report.total_attempts()
    );
    Ok(Session::new(puzzle.grid, category.words(), config))
}

/// Run the interactive game on stdin/stdout
///
/// `choice` skips the menu when given.
///
/// # Errors
///
/// Returns an error on I/O failure, an unknown category or an unplayable grid.
pub fn run_play<G: Rng + ?Sized>(
    categories: &[Category],
    choice: Option<&str>,
    config: &GameConfig,
    rng: &mut G,
) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let mut out = io::stdout().lock();

    let category = match choice {
        Some(choice) => find_category(categories, choice)
            .with_context(|| format!("Unknown category '{choice}'"))?,
        None => prompt_category(&mut input, &mut out, categories)?,
    };

    let mut session = build_session(category, config, rng)?;
    let clock = SystemClock::start();
    let outcome = session.run(&mut input, &mut out, &clock)?;
    drop(out);

    print_outcome(outcome, &session);
    Ok(outcome)
}
