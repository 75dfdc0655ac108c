//! Session time source

use std::time::{Duration, Instant};

/// Reports how long the session has been running
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time since the clock was started
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
