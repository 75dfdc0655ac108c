//! Formatting utilities for terminal output

use crate::core::{Grid, Placement};

/// Grid with only the hidden words shown, in uppercase
///
/// Filler cells become `.`; the layout matches the in-game grid.
#[must_use]
pub fn answer_key(grid: &Grid, placements: &[Placement]) -> String {
    let mut key = Grid::new(grid.width(), grid.height());
    for placement in placements {
        for (row, col, _) in placement.cells() {
            key.set(row, col, grid.get(row, col).to_ascii_uppercase());
        }
    }
    key.to_string()
}

/// One-line description of where a word sits, 1-based
#[must_use]
pub fn describe_placement(placement: &Placement) -> String {
    format!(
        "{:<10} row {:>2}, col {:>2}, {}",
        placement.word.text().to_uppercase(),
        placement.row + 1,
        placement.col + 1,
        placement.orientation
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
