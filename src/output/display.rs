//! Display functions for command results

use super::formatters::{answer_key, create_progress_bar, describe_placement};
use crate::categories::Category;
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::Orientation;
use crate::game::{Outcome, Session};
use colored::Colorize;

/// Print the end-of-game banner
pub fn print_outcome(outcome: Outcome, session: &Session) {
    println!("\n\n================");
    match outcome {
        Outcome::Won => println!("{}", "You Win! You found all the words!".green().bold()),
        Outcome::OutOfTime => println!("{}", "Game Over! You ran out of time!".red().bold()),
        Outcome::InputClosed => println!("{}", "Game Over! No more guesses.".red().bold()),
    }
    println!("================");

    if !outcome.is_win() {
        let missed: Vec<String> = session
            .words()
            .remaining()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!(
            "Score: {}/{} | Missed: {}",
            session.score(),
            session.words().len(),
            missed.join(", ").yellow()
        );
    }
}

/// Print a generated puzzle, with the answer key if requested
pub fn print_generated(result: &GenerateResult<'_>) {
    let GenerateResult {
        category,
        puzzle,
        reveal,
    } = result;

    println!("\n{}", "─".repeat(puzzle.grid.width() * 3).cyan());
    println!(
        "Category: {}",
        category.name().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(puzzle.grid.width() * 3).cyan());
    print!("{}", puzzle.grid);

    println!("\nFind these words:");
    for word in category.words() {
        println!("  • {}", word.text().to_uppercase());
    }

    for err in &puzzle.report.skipped {
        println!("{} {err}", "⚠".yellow());
    }

    if *reveal {
        println!("\n{}", "Answer key:".bright_cyan().bold());
        print!("{}", answer_key(&puzzle.grid, &puzzle.report.placements));
        println!();
        for placement in &puzzle.report.placements {
            println!("  {}", describe_placement(placement));
        }
    }
}

/// Print the available categories
pub fn print_categories(categories: &[Category]) {
    println!("\n{}", "Categories".bright_cyan().bold());
    for (i, category) in categories.iter().enumerate() {
        let words: Vec<&str> = category.words().iter().map(|w| w.text()).collect();
        println!(
            "  [{}] {:<10} {}",
            i + 1,
            category.name().bright_yellow(),
            words.join(", ")
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Grids generated:  {}", result.total_grids);
    println!("   Words placed:     {}", result.words_placed);
    println!(
        "   Words skipped:    {}",
        if result.words_skipped == 0 {
            "0".green()
        } else {
            result.words_skipped.to_string().red()
        }
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Worst case:       {}", result.max_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    println!("\n📈 {}", "Orientations:".bright_cyan().bold());
    for orientation in Orientation::ALL {
        let count = result.orientations.get(&orientation).copied().unwrap_or(0);
        let pct = if result.words_placed > 0 {
            count as f64 / result.words_placed as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {:<22} {} {count:6} ({pct:5.1}%)", orientation.label(), bar.green());
    }
}
