//! Randomized word insertion
//!
//! Each attempt copies the grid, picks a random anchor where the whole word
//! fits, and writes the letters along the orientation's path. The first
//! occupied cell aborts the attempt; a clean run is committed back. Words are
//! placed one at a time with no backtracking across words.

use crate::core::{Grid, Orientation, Placement, Word};
use log::{debug, trace};
use rand::Rng;
use std::fmt;

/// Default retry ceiling used by the command line
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Why a word could not be placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The word is longer than the axis it would occupy
    TooLong {
        word: Word,
        orientation: Orientation,
        max: usize,
    },
    /// The retry ceiling ran out before a free run was found
    GridTooDense {
        word: Word,
        orientation: Orientation,
        attempts: usize,
    },
}

impl PlacementError {
    /// The word that was skipped
    #[must_use]
    pub const fn word(&self) -> &Word {
        match self {
            Self::TooLong { word, .. } | Self::GridTooDense { word, .. } => word,
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong {
                word,
                orientation,
                max,
            } => write!(
                f,
                "\"{word}\" is too long to place {orientation} ({} letters, max {max})",
                word.len()
            ),
            Self::GridTooDense {
                word,
                orientation,
                attempts,
            } => write!(
                f,
                "placement failed, grid too dense: no free {orientation} run for \"{word}\" after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Places single words into a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placer {
    max_attempts: Option<usize>,
}

impl Placer {
    /// Retry until a placement succeeds, however long that takes
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `max_attempts` random anchors; zero means unbounded
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        if max_attempts == 0 {
            Self::unbounded()
        } else {
            Self {
                max_attempts: Some(max_attempts),
            }
        }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Place `word` left to right along a row
    ///
    /// # Errors
    /// See [`Placer::place`].
    pub fn insert_horizontally<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        self.place(grid, word, Orientation::Horizontal, rng)
    }

    /// Place `word` top to bottom along a column
    ///
    /// # Errors
    /// See [`Placer::place`].
    pub fn insert_vertically<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        self.place(grid, word, Orientation::Vertical, rng)
    }

    /// Place `word` on a down-right diagonal, reversed unless `ascending`
    ///
    /// # Errors
    /// See [`Placer::place`].
    pub fn insert_diagonally<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        ascending: bool,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        let orientation = if ascending {
            Orientation::DiagonalAscending
        } else {
            Orientation::DiagonalDescending
        };
        self.place(grid, word, orientation, rng)
    }

    /// Place `word` with the given orientation at a random free position
    ///
    /// The grid is only modified when a placement is committed.
    ///
    /// # Errors
    /// - [`PlacementError::TooLong`] if the word cannot fit the orientation at all
    /// - [`PlacementError::GridTooDense`] if the attempt ceiling is reached
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordsearch::core::{Grid, Orientation, Word};
    /// use wordsearch::engine::Placer;
    ///
    /// let mut grid = Grid::default();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let word = Word::new("violet").unwrap();
    ///
    /// let placement = Placer::unbounded()
    ///     .place(&mut grid, &word, Orientation::Vertical, &mut rng)
    ///     .unwrap();
    /// let text = grid.read_path(placement.row, placement.col, Orientation::Vertical, 6);
    /// assert_eq!(text.as_deref(), Some("violet"));
    /// ```
    pub fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        orientation: Orientation,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        let len = word.len();
        let max = orientation.max_len(grid.width(), grid.height());
        if len > max {
            let err = PlacementError::TooLong {
                word: word.clone(),
                orientation,
                max,
            };
            debug!("{err}");
            return Err(err);
        }

        // Highest anchor that keeps the last letter on the grid
        let (dr, dc) = orientation.stride();
        let max_row = grid.height() - 1 - dr * (len - 1);
        let max_col = grid.width() - 1 - dc * (len - 1);

        let mut attempts = 0;
        loop {
            if let Some(limit) = self.max_attempts
                && attempts >= limit
            {
                let err = PlacementError::GridTooDense {
                    word: word.clone(),
                    orientation,
                    attempts,
                };
                debug!("{err}");
                return Err(err);
            }
            attempts += 1;

            let candidate = Placement {
                word: word.clone(),
                row: rng.random_range(0..=max_row),
                col: rng.random_range(0..=max_col),
                orientation,
                attempts,
            };

            let mut snapshot = grid.clone();
            if write_letters(&mut snapshot, &candidate) {
                *grid = snapshot;
                debug!(
                    "placed \"{word}\" {orientation} at ({}, {}) after {attempts} attempt(s)",
                    candidate.row, candidate.col
                );
                return Ok(candidate);
            }

            trace!(
                "collision placing \"{word}\" at ({}, {}), retrying",
                candidate.row, candidate.col
            );
        }
    }
}

impl Default for Placer {
    fn default() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Write the placement's letters, stopping at the first occupied cell
///
/// Returns false if a collision aborted the write; the target is then partially
/// written and must be discarded.
fn write_letters(target: &mut Grid, placement: &Placement) -> bool {
    for (row, col, ch) in placement.cells() {
        if !target.is_blank(row, col) {
            return false;
        }
        target.set(row, col, ch);
    }
    true
}
