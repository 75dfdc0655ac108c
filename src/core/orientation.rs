//! Word orientations and their cell paths
//!
//! Every orientation walks the grid with a fixed (row, col) stride. The two
//! diagonal orientations share the same down-right path; descending words are
//! written with their letters reversed along it.

use std::fmt;

/// Direction a word occupies in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalAscending,
    DiagonalDescending,
}

impl Orientation {
    /// All orientations in a stable order
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalAscending,
        Self::DiagonalDescending,
    ];

    /// Row and column step between consecutive cells of the path
    #[inline]
    #[must_use]
    pub const fn stride(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalAscending | Self::DiagonalDescending => (1, 1),
        }
    }

    /// True for the two diagonal orientations
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::DiagonalAscending | Self::DiagonalDescending)
    }

    /// True if letters are laid down last-to-first along the path
    #[inline]
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::DiagonalDescending)
    }

    /// Largest word length this orientation can hold in a `width`×`height` grid
    #[must_use]
    pub fn max_len(self, width: usize, height: usize) -> usize {
        if width == 0 || height == 0 {
            return 0;
        }
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
            Self::DiagonalAscending | Self::DiagonalDescending => width.min(height),
        }
    }

    /// Short human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalAscending => "diagonal (ascending)",
            Self::DiagonalDescending => "diagonal (descending)",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
