//! Puzzle generation driver
//!
//! Places each word of a category in list order, then back-fills the rest.

use super::filler::fill_blanks;
use super::placer::{PlacementError, Placer};
use super::strategy::{OrientationStrategy, WeightedOrientation};
use crate::core::{Grid, Orientation, Placement, Word};
use log::{debug, warn};
use rand::Rng;

/// Outcome of placing a word list into a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    pub placements: Vec<Placement>,
    pub skipped: Vec<PlacementError>,
}

impl FillReport {
    /// True if every word made it into the grid
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Total random anchors tried across all placed words
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.placements.iter().map(|p| p.attempts).sum()
    }

    /// Placement recorded for `word`, if it was placed
    #[must_use]
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word.text() == word)
    }
}

/// A finished puzzle: filled grid plus where each word went
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub report: FillReport,
}

/// Builds puzzles from word lists
///
/// Couples an orientation strategy with a placer.
pub struct Generator<S: OrientationStrategy> {
    strategy: S,
    placer: Placer,
}

impl<S: OrientationStrategy> Generator<S> {
    #[must_use]
    pub const fn new(strategy: S, placer: Placer) -> Self {
        Self { strategy, placer }
    }

    #[must_use]
    pub const fn placer(&self) -> &Placer {
        &self.placer
    }

    /// Place each word in list order with an orientation from the strategy
    ///
    /// Words that cannot be placed are skipped and reported; the grid keeps
    /// whatever was placed before and after them.
    pub fn fill_grid<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        words: &[Word],
        rng: &mut R,
    ) -> FillReport {
        let mut report = FillReport::default();

        for word in words {
            let orientation = self.strategy.choose(rng);
            let result = match orientation {
                Orientation::Vertical => self.placer.insert_vertically(grid, word, rng),
                Orientation::Horizontal => self.placer.insert_horizontally(grid, word, rng),
                Orientation::DiagonalAscending => {
                    self.placer.insert_diagonally(grid, word, true, rng)
                }
                Orientation::DiagonalDescending => {
                    self.placer.insert_diagonally(grid, word, false, rng)
                }
            };

            match result {
                Ok(placement) => report.placements.push(placement),
                Err(err) => {
                    warn!("skipping \"{}\": {err}", err.word());
                    report.skipped.push(err);
                }
            }
        }

        debug!(
            "placed {}/{} words in {} attempts",
            report.placements.len(),
            words.len(),
            report.total_attempts()
        );
        report
    }

    /// Build a complete `width`×`height` puzzle from `words`
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordsearch::core::Word;
    /// use wordsearch::engine::Generator;
    ///
    /// let words: Vec<Word> = ["red", "blue"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let mut rng = StdRng::seed_from_u64(3);
    ///
    /// let puzzle = Generator::default().generate(16, 16, &words, &mut rng);
    /// assert!(puzzle.report.is_complete());
    /// assert_eq!(puzzle.grid.blank_count(), 0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        words: &[Word],
        rng: &mut R,
    ) -> Puzzle {
        let mut grid = Grid::new(width, height);
        let report = self.fill_grid(&mut grid, words, rng);
        let filled = fill_blanks(&mut grid, rng);
        debug!("filled {filled} blank cells with random letters");

        Puzzle { grid, report }
    }
}

impl Default for Generator<WeightedOrientation> {
    fn default() -> Self {
        Self::new(WeightedOrientation::default(), Placer::default())
    }
}
