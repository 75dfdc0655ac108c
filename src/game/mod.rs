//! Interactive game session
//!
//! Match checking, guess input, the session clock and the timed turn loop.

pub mod clock;
pub mod input;
pub mod matcher;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use input::TokenReader;
pub use matcher::{MatchMode, WordList};
pub use session::{Outcome, Session};
