//! Word Search - CLI
//!
//! Timed word search game with puzzle generation and placement benchmarks.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;
use wordsearch::{
    categories::{
        Category,
        loader::{builtin, load_from_file},
    },
    commands::{GenerateConfig, generate, run_benchmark, run_play},
    config::GameConfig,
    engine::DEFAULT_MAX_ATTEMPTS,
    game::MatchMode,
    output::{print_benchmark_result, print_categories, print_generated},
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Find the hidden words before the clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random generator (same seed, same grid)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Category file to use instead of the built-in categories
    #[arg(short, long, global = true)]
    categories: Option<String>,

    /// Grid width in cells
    #[arg(long, global = true, default_value_t = 16)]
    width: usize,

    /// Grid height in cells
    #[arg(long, global = true, default_value_t = 16)]
    height: usize,

    /// Session length in seconds
    #[arg(short, long, global = true, default_value_t = 120)]
    duration: u64,

    /// Guess matching: 'full' (default) or 'first-letter'
    #[arg(short, long, global = true, default_value = "full")]
    match_mode: String,

    /// Random anchors tried per word before giving up (0 = never give up)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the timed game (default)
    Play {
        /// Category number or name (skips the menu)
        #[arg(short = 'k', long)]
        category: Option<String>,
    },

    /// Print a puzzle without playing
    Generate {
        /// Category number or name (default: first category)
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Also print the answer key
        #[arg(short, long)]
        reveal: bool,
    },

    /// List the available categories
    Categories,

    /// Measure placement effort over many generated grids
    Benchmark {
        /// Grids to generate per category
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load categories based on the -c flag
fn load_categories(path: Option<&str>) -> Result<Vec<Category>> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(builtin()),
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let match_mode = MatchMode::from_name(&cli.match_mode)
        .ok_or_else(|| anyhow!("Unknown match mode '{}'", cli.match_mode))?;

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        duration: Duration::from_secs(cli.duration),
        match_mode,
        max_attempts: cli.max_attempts,
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let categories = load_categories(cli.categories.as_deref())?;
    let config = game_config(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { category: None });

    match command {
        Commands::Play { category } => {
            run_play(&categories, category.as_deref(), &config, &mut rng)?;
            Ok(())
        }
        Commands::Generate { category, reveal } => {
            let options = GenerateConfig {
                category: category.as_deref(),
                reveal,
            };
            let result = generate(&categories, &options, &config, &mut rng)?;
            print_generated(&result);
            Ok(())
        }
        Commands::Categories => {
            print_categories(&categories);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!(
                "Generating {count} grids for each of {} categories...",
                categories.len()
            );
            let result = run_benchmark(&categories, &config, count, &mut rng)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
