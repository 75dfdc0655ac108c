//! Timed guessing loop
//!
//! The session owns the filled grid and the word list. Each turn it checks the
//! deadline, renders the grid and status, reads one guess, checks the deadline
//! again, then scores the guess.

use super::clock::Clock;
use super::input::TokenReader;
use super::matcher::{MatchMode, WordList};
use crate::config::GameConfig;
use crate::core::{Grid, Word};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every word was found
    Won,
    /// The deadline passed
    OutOfTime,
    /// Input ran out before the game finished
    InputClosed,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// One game in progress
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    words: WordList,
    score: usize,
    duration: Duration,
    match_mode: MatchMode,
}

impl Session {
    #[must_use]
    pub fn new(grid: Grid, words: &[Word], config: &GameConfig) -> Self {
        Self {
            grid,
            words: WordList::new(words),
            score: 0,
            duration: config.duration,
            match_mode: config.match_mode,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.words.is_complete()
    }

    /// Score a guess; returns the word it found, if any
    pub fn submit_guess(&mut self, guess: &str) -> Option<Word> {
        let found = self.words.check(guess, self.match_mode);
        if let Some(word) = &found {
            self.score += 1;
            info!("found \"{word}\" ({}/{})", self.score, self.words.len());
        } else {
            debug!("no match for \"{guess}\"");
        }
        found
    }

    /// Write the grid and status block for one turn
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn render_turn<W: Write>(&self, out: &mut W, remaining: Duration) -> io::Result<()> {
        write!(out, "\n\n{}", self.grid)?;
        writeln!(out, "{}", "=".repeat(self.grid.width()))?;
        writeln!(out, "Time remaining: {}s", remaining.as_secs())?;
        writeln!(out, "Score: {}", self.score)?;
        writeln!(out, "Enter any words you can see:")?;
        out.flush()
    }

    /// Run turns until all words are found, time runs out or input closes
    ///
    /// Reaching the deadline exactly counts as running out of time.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading guesses or writing output.
    pub fn run<R: BufRead, W: Write, C: Clock>(
        &mut self,
        input: &mut TokenReader<R>,
        out: &mut W,
        clock: &C,
    ) -> io::Result<Outcome> {
        if self.is_complete() {
            return Ok(Outcome::Won);
        }

        loop {
            let elapsed = clock.elapsed();
            if elapsed >= self.duration {
                return Ok(Outcome::OutOfTime);
            }

            self.render_turn(out, self.duration - elapsed)?;

            let Some(guess) = input.next_token()? else {
                return Ok(Outcome::InputClosed);
            };

            if clock.elapsed() >= self.duration {
                debug!("guess \"{guess}\" arrived after the deadline");
                return Ok(Outcome::OutOfTime);
            }

            if let Some(word) = self.submit_guess(&guess) {
                write!(
                    out,
                    "\n\n================\nCorrect! You found {word}!\n================"
                )?;
                if self.is_complete() {
                    return Ok(Outcome::Won);
                }
            }
        }
    }
}
