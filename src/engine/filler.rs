//! Back-fill of unused cells

use crate::core::Grid;
use rand::Rng;

/// Letters used to fill blank cells
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Replace every blank cell with a uniformly random letter
///
/// Occupied cells are left alone. Returns the number of cells filled.
pub fn fill_blanks<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut filled = 0;
    for cell in grid.cells_mut() {
        if *cell == Grid::BLANK {
            *cell = ALPHABET[rng.random_range(0..ALPHABET.len())];
            filled += 1;
        }
    }
    filled
}
