//! Game configuration
//!
//! Grid dimensions, session length, matching rule and placement retry ceiling.

use crate::core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::engine::{DEFAULT_MAX_ATTEMPTS, Placer};
use crate::game::MatchMode;
use std::fmt;
use std::time::Duration;

/// Default session length
pub const SESSION_DURATION: Duration = Duration::from_secs(120);

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 20;

/// Error type for unusable settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyGrid { width: usize, height: usize },
    GridTooLarge { width: usize, height: usize },
    NoTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "Grid must be at least 1x1, got {width}x{height}")
            }
            Self::GridTooLarge { width, height } => write!(
                f,
                "Grid {width}x{height} exceeds the limit of {MAX_CELLS} cells"
            ),
            Self::NoTime => write!(f, "Session duration must be at least one second"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub duration: Duration,
    pub match_mode: MatchMode,
    /// Random anchors tried per word before giving up; 0 retries forever
    pub max_attempts: usize,
}

impl GameConfig {
    /// Check the settings can produce a playable grid
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either grid dimension is zero, the grid
    /// holds more than [`MAX_CELLS`] cells, or the session has no time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(ConfigError::GridTooLarge { width, height }),
        }
        if self.duration.is_zero() {
            return Err(ConfigError::NoTime);
        }
        Ok(())
    }

    /// Placer honouring the configured retry ceiling
    #[must_use]
    pub const fn placer(&self) -> Placer {
        Placer::with_max_attempts(self.max_attempts)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            duration: SESSION_DURATION,
            match_mode: MatchMode::FullWord,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
