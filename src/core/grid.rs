//! Fixed-size letter grid
//!
//! Cells are stored row-major as ASCII bytes. A cell is either the blank
//! sentinel `.` or a letter.

use super::Orientation;
use std::fmt;

/// Default grid width
pub const DEFAULT_WIDTH: usize = 16;

/// Default grid height
pub const DEFAULT_HEIGHT: usize = 16;

/// The word search playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Marker for an unoccupied cell
    pub const BLANK: u8 = b'.';

    /// Create a `width`×`height` grid with every cell blank
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Grid;
    ///
    /// let grid = Grid::new(4, 3);
    /// assert_eq!(grid.blank_count(), 12);
    /// assert_eq!(grid.get(2, 3), Grid::BLANK);
    /// ```
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Self::BLANK; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height, "row {row} out of range");
        debug_assert!(col < self.width, "col {col} out of range");
        row * self.width + col
    }

    /// Get the cell at (row, col)
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// Set the cell at (row, col)
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, ch: u8) {
        let idx = self.index(row, col);
        self.cells[idx] = ch;
    }

    #[inline]
    #[must_use]
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Self::BLANK
    }

    /// Number of cells still holding the blank sentinel
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Self::BLANK).count()
    }

    /// Iterate over rows as byte slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Mutable access to every cell, row-major
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Read `len` cells starting at (row, col) along the orientation's path
    ///
    /// The path is read in grid order, so a descending diagonal word comes back
    /// reversed. Returns `None` if the path leaves the grid.
    #[must_use]
    pub fn read_path(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
        len: usize,
    ) -> Option<String> {
        let (dr, dc) = orientation.stride();
        let last = len.checked_sub(1)?;
        if row + dr * last >= self.height || col + dc * last >= self.width {
            return None;
        }

        Some(
            (0..len)
                .map(|i| char::from(self.get(row + dr * i, col + dc * i)))
                .collect(),
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Each cell followed by two spaces, one row per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}  ", char::from(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::default();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 16);
        assert_eq!(grid.blank_count(), 256);
        assert!(grid.is_blank(15, 15));
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(5, 4);
        grid.set(3, 4, b'q');
        assert_eq!(grid.get(3, 4), b'q');
        assert!(!grid.is_blank(3, 4));
        assert_eq!(grid.blank_count(), 19);
    }

    #[test]
    fn clone_is_independent() {
        let mut grid = Grid::new(3, 3);
        let snapshot = grid.clone();
        grid.set(1, 1, b'x');

        assert!(snapshot.is_blank(1, 1));
        assert_eq!(grid.get(1, 1), b'x');
    }

    #[test]
    fn rows_are_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, b'a');
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&b"..."[..], &b"a.."[..]]);
    }

    #[test]
    fn read_path_follows_stride() {
        let mut grid = Grid::new(4, 4);
        for (i, ch) in b"abcd".iter().enumerate() {
            grid.set(i, i, *ch);
        }
        grid.set(0, 1, b'x');

        assert_eq!(
            grid.read_path(0, 0, Orientation::DiagonalAscending, 4).as_deref(),
            Some("abcd")
        );
        assert_eq!(
            grid.read_path(0, 0, Orientation::Horizontal, 2).as_deref(),
            Some("ax")
        );
        assert_eq!(
            grid.read_path(2, 0, Orientation::Vertical, 2).as_deref(),
            Some("..")
        );
    }

    #[test]
    fn read_path_off_grid() {
        let grid = Grid::new(4, 4);
        assert!(grid.read_path(0, 2, Orientation::Horizontal, 3).is_none());
        assert!(grid.read_path(3, 0, Orientation::Vertical, 2).is_none());
        assert!(grid.read_path(0, 0, Orientation::Horizontal, 0).is_none());
    }

    #[test]
    fn display_pads_each_cell() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, b'h');
        assert_eq!(grid.to_string(), "h  .  \n.  .  \n");
    }
}
