//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateConfig, GenerateResult, generate};
pub use play::{build_session, generate_puzzle, prompt_category, run_play};
