//! End-to-end tests for the word search crate.
//!
//! Cover the path from built-in categories through placement and fill to a
//! scripted session with a stepping clock.

use rand::{SeedableRng, rngs::StdRng};
use std::cell::Cell;
use std::time::Duration;
use wordsearch::categories::{find_category, loader::builtin};
use wordsearch::commands::build_session;
use wordsearch::config::GameConfig;
use wordsearch::core::{Grid, Orientation, Word};
use wordsearch::engine::{Generator, PlacementError, Placer};
use wordsearch::game::{Clock, Outcome, TokenReader};

struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    fn new(step_secs: u64) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step: Duration::from_secs(step_secs),
        }
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

fn all_words(category: &str) -> String {
    let categories = builtin();
    let category = find_category(&categories, category).unwrap();
    category
        .words()
        .iter()
        .map(|w| w.text().to_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn colours_placement_reads_back_from_grid() {
    let categories = builtin();
    let colours = find_category(&categories, "Colours").unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = Generator::default().generate(16, 16, colours.words(), &mut rng);
        assert!(puzzle.report.is_complete(), "seed {seed}");

        let red = puzzle.report.placement_of("red").unwrap();
        let text = puzzle
            .grid
            .read_path(red.row, red.col, red.orientation, 3)
            .unwrap();
        let expected = if red.orientation == Orientation::DiagonalDescending {
            "der"
        } else {
            "red"
        };
        assert_eq!(text, expected, "seed {seed}");
    }
}

#[test]
fn filled_grid_has_no_blanks() {
    let categories = builtin();
    for (i, category) in categories.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(i as u64);
        let puzzle = Generator::default().generate(16, 16, category.words(), &mut rng);
        assert_eq!(puzzle.grid.blank_count(), 0);
        assert!(
            puzzle
                .grid
                .rows()
                .flatten()
                .all(u8::is_ascii_lowercase)
        );
    }
}

#[test]
fn too_long_word_leaves_grid_untouched() {
    let mut grid = Grid::new(16, 16);
    let before = grid.clone();
    let word = Word::new("abcdefghijklmnopq").unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let result = Placer::default().insert_horizontally(&mut grid, &word, &mut rng);
    assert!(matches!(result, Err(PlacementError::TooLong { max: 16, .. })));
    assert_eq!(grid, before);
}

#[test]
fn finding_every_word_wins() {
    let categories = builtin();
    let planets = find_category(&categories, "1").unwrap();
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    let mut session = build_session(planets, &config, &mut rng).unwrap();
    let input = all_words("Planets");
    let mut reader = TokenReader::new(input.as_bytes());
    let mut out = Vec::new();

    let outcome = session
        .run(&mut reader, &mut out, &SteppingClock::new(1))
        .unwrap();

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(session.score(), 8);
    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(transcript.matches("Correct! You found").count(), 8);
}

#[test]
fn deadline_during_prompt_ends_in_loss() {
    let categories = builtin();
    let animals = find_category(&categories, "animals").unwrap();
    let config = GameConfig {
        duration: Duration::from_secs(55),
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);

    let mut session = build_session(animals, &config, &mut rng).unwrap();
    let input = all_words("Animals");
    let mut reader = TokenReader::new(input.as_bytes());
    let mut out = Vec::new();

    // Each turn reads the clock twice: 0/10, 20/30, 40/50, then 60 is past 55.
    let outcome = session
        .run(&mut reader, &mut out, &SteppingClock::new(10))
        .unwrap();

    assert_eq!(outcome, Outcome::OutOfTime);
    assert_eq!(session.score(), 3);
    assert!((1..8).contains(&session.score()));
}

#[test]
fn closed_input_is_not_a_win() {
    let categories = builtin();
    let colours = find_category(&categories, "3").unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let mut session = build_session(colours, &GameConfig::default(), &mut rng).unwrap();
    let mut reader = TokenReader::new("red blue".as_bytes());
    let mut out = Vec::new();

    let outcome = session
        .run(&mut reader, &mut out, &SteppingClock::new(1))
        .unwrap();

    assert_eq!(outcome, Outcome::InputClosed);
    assert_eq!(session.score(), 2);
}
