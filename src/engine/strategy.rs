//! Orientation selection strategies
//!
//! Defines the `OrientationStrategy` trait and concrete implementations.

use crate::core::Orientation;
use rand::Rng;

/// Chooses the orientation for the next word
pub trait OrientationStrategy {
    /// Pick an orientation, drawing from `rng` as needed
    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation;
}

/// Percentage split between vertical, horizontal and diagonal placements
///
/// One draw in `0..100` picks the axis: below `vertical` is vertical, below
/// `vertical + horizontal` is horizontal, anything else is diagonal. Diagonal
/// words take a second draw; above 50 is ascending, otherwise descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedOrientation {
    pub vertical: u32,
    pub horizontal: u32,
}

impl WeightedOrientation {
    /// Create a weighted strategy; the diagonal share is what is left of 100
    ///
    /// # Panics
    /// Panics in debug mode if the shares exceed 100
    #[must_use]
    pub const fn new(vertical: u32, horizontal: u32) -> Self {
        debug_assert!(vertical + horizontal <= 100, "shares must not exceed 100");
        Self {
            vertical,
            horizontal,
        }
    }

    /// Remaining share taken by the two diagonals
    #[must_use]
    pub const fn diagonal(&self) -> u32 {
        100 - self.vertical - self.horizontal
    }
}

/// 40% vertical, 40% horizontal, 20% diagonal
impl Default for WeightedOrientation {
    fn default() -> Self {
        Self::new(40, 40)
    }
}

impl WeightedOrientation {
    /// Orientation for an axis draw `roll` and a diagonal draw `direction`
    ///
    /// `direction` is only consulted when `roll` lands in the diagonal share.
    #[must_use]
    pub const fn orientation_for(&self, roll: u32, direction: u32) -> Orientation {
        if roll < self.vertical {
            Orientation::Vertical
        } else if roll < self.vertical + self.horizontal {
            Orientation::Horizontal
        } else if direction > 50 {
            Orientation::DiagonalAscending
        } else {
            Orientation::DiagonalDescending
        }
    }
}

impl OrientationStrategy for WeightedOrientation {
    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        let roll: u32 = rng.random_range(0..100);
        if roll < self.vertical + self.horizontal {
            return self.orientation_for(roll, 0);
        }
        let direction: u32 = rng.random_range(0..100);
        self.orientation_for(roll, direction)
    }
}

/// Always the same orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOrientation(pub Orientation);

impl OrientationStrategy for FixedOrientation {
    fn choose<R: Rng + ?Sized>(&self, _rng: &mut R) -> Orientation {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rustc_hash::FxHashMap;

    #[test]
    fn default_split() {
        let strategy = WeightedOrientation::default();
        assert_eq!(strategy.vertical, 40);
        assert_eq!(strategy.horizontal, 40);
        assert_eq!(strategy.diagonal(), 20);
    }

    #[test]
    fn weighted_mix_is_roughly_forty_forty_twenty() {
        let strategy = WeightedOrientation::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: FxHashMap<Orientation, usize> = FxHashMap::default();

        let draws = 20_000;
        for _ in 0..draws {
            *counts.entry(strategy.choose(&mut rng)).or_insert(0) += 1;
        }

        let share = |o: Orientation| counts.get(&o).copied().unwrap_or(0) as f64 / draws as f64;
        assert!((share(Orientation::Vertical) - 0.40).abs() < 0.02);
        assert!((share(Orientation::Horizontal) - 0.40).abs() < 0.02);
        let diagonal = share(Orientation::DiagonalAscending) + share(Orientation::DiagonalDescending);
        assert!((diagonal - 0.20).abs() < 0.02);
    }

    #[test]
    fn cut_points() {
        let strategy = WeightedOrientation::default();

        assert_eq!(strategy.orientation_for(0, 0), Orientation::Vertical);
        assert_eq!(strategy.orientation_for(39, 99), Orientation::Vertical);
        assert_eq!(strategy.orientation_for(40, 99), Orientation::Horizontal);
        assert_eq!(strategy.orientation_for(79, 0), Orientation::Horizontal);
        assert_eq!(strategy.orientation_for(80, 51), Orientation::DiagonalAscending);
        assert_eq!(strategy.orientation_for(80, 50), Orientation::DiagonalDescending);
        assert_eq!(strategy.orientation_for(99, 99), Orientation::DiagonalAscending);
        assert_eq!(strategy.orientation_for(99, 0), Orientation::DiagonalDescending);
    }

    #[test]
    fn zero_shares_force_diagonal() {
        let strategy = WeightedOrientation::new(0, 0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(strategy.choose(&mut rng).is_diagonal());
        }
    }

    #[test]
    fn full_vertical_share() {
        let strategy = WeightedOrientation::new(100, 0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(strategy.choose(&mut rng), Orientation::Vertical);
        }
    }

    #[test]
    fn fixed_strategy() {
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = FixedOrientation(Orientation::DiagonalDescending);
        assert_eq!(strategy.choose(&mut rng), Orientation::DiagonalDescending);
    }
}
