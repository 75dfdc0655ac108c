//! Benchmark command
//!
//! Generates many puzzles and reports how hard the placement engine worked.

use super::play::generate_puzzle;
use crate::categories::Category;
use crate::config::GameConfig;
use crate::core::Orientation;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub words_placed: usize,
    pub words_skipped: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
    pub orientations: FxHashMap<Orientation, usize>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

/// Generate `count` puzzles for every category
///
/// # Errors
///
/// Returns an error if a category cannot be generated with `config` at all.
pub fn run_benchmark<G: Rng + ?Sized>(
    categories: &[Category],
    config: &GameConfig,
    count: usize,
    rng: &mut G,
) -> Result<BenchmarkResult> {
    let total = categories.len() * count;

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut words_placed = 0;
    let mut words_skipped = 0;
    let mut total_attempts = 0;
    let mut max_attempts = 0;
    let mut orientations: FxHashMap<Orientation, usize> = FxHashMap::default();

    for category in categories {
        pb.set_message(category.name().to_string());

        for _ in 0..count {
            let puzzle = generate_puzzle(category, config, rng)?;

            for placement in &puzzle.report.placements {
                total_attempts += placement.attempts;
                max_attempts = max_attempts.max(placement.attempts);
                *orientations.entry(placement.orientation).or_insert(0) += 1;
            }
            words_placed += puzzle.report.placements.len();
            words_skipped += puzzle.report.skipped.len();

            pb.inc(1);
        }
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_grids: total,
        words_placed,
        words_skipped,
        total_attempts,
        average_attempts: if words_placed > 0 {
            total_attempts as f64 / words_placed as f64
        } else {
            0.0
        },
        max_attempts,
        orientations,
        duration,
        grids_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::loader::builtin;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn benchmark_runs() {
        let categories = builtin();
        let mut rng = StdRng::seed_from_u64(41);

        let result = run_benchmark(&categories, &GameConfig::default(), 5, &mut rng).unwrap();

        assert_eq!(result.total_grids, 15);
        assert_eq!(result.words_placed, 15 * 8);
        assert_eq!(result.words_skipped, 0);
        assert!(result.average_attempts >= 1.0);
        assert!(result.max_attempts >= 1);
    }

    #[test]
    fn benchmark_orientation_counts_sum_to_placements() {
        let categories = builtin();
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_benchmark(&categories, &GameConfig::default(), 4, &mut rng).unwrap();

        let counted: usize = result.orientations.values().sum();
        assert_eq!(counted, result.words_placed);
    }

    #[test]
    fn benchmark_empty_category_list() {
        let mut rng = StdRng::seed_from_u64(43);
        let result = run_benchmark(&[], &GameConfig::default(), 10, &mut rng).unwrap();

        assert_eq!(result.total_grids, 0);
        assert_eq!(result.words_placed, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_rejects_invalid_config() {
        let categories = builtin();
        let config = GameConfig {
            height: 4,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(44);

        assert!(run_benchmark(&categories, &config, 1, &mut rng).is_err());
    }
}
