//! Where a word ended up in the grid

use super::{Orientation, Word};

/// A word committed to the grid at an anchor with an orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    /// Random anchors tried before this one succeeded (including it)
    pub attempts: usize,
}

impl Placement {
    /// Cells covered by the word with the letter written into each
    ///
    /// Cells are yielded in path order; for a descending diagonal the letters
    /// come out last-to-first.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::{Orientation, Placement, Word};
    ///
    /// let placement = Placement {
    ///     word: Word::new("red").unwrap(),
    ///     row: 2,
    ///     col: 5,
    ///     orientation: Orientation::DiagonalDescending,
    ///     attempts: 1,
    /// };
    /// let cells: Vec<_> = placement.cells().collect();
    /// assert_eq!(cells, vec![(2, 5, b'd'), (3, 6, b'e'), (4, 7, b'r')]);
    /// ```
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let (dr, dc) = self.orientation.stride();
        let letters = self.word.bytes();
        let len = letters.len();
        let reversed = self.orientation.is_reversed();

        (0..len).map(move |i| {
            let ch = if reversed { letters[len - 1 - i] } else { letters[i] };
            (self.row + dr * i, self.col + dc * i, ch)
        })
    }

    /// True if the placement covers (row, col)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.cells().any(|(r, c, _)| r == row && c == col)
    }
}
