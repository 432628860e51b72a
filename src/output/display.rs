//! Display functions for command results

use super::formatters::{best_label, create_progress_bar};
use crate::commands::BenchmarkResult;
use crate::engine::DifficultyEntry;
use colored::Colorize;

/// Print the best score for every difficulty
pub fn print_scores(entries: &[DifficultyEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HIGH SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in entries {
        let best = best_label(entry.best);
        let best = if entry.best.is_some() {
            best.bright_yellow().bold()
        } else {
            best.bright_black()
        };
        println!(
            "   {}. {:<8} ({:>2} chances)  {}",
            entry.index,
            entry.difficulty.name(),
            entry.difficulty.attempt_budget(),
            best
        );
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK:".bright_cyan().bold(),
        format!(
            "{} ({} attempts) / {strategy_name}",
            result.difficulty.name(),
            result.difficulty.attempt_budget()
        )
        .bright_yellow()
        .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts).bright_yellow()
    );
    if let (Some(min), Some(max)) = (result.min_attempts, result.max_attempts) {
        println!("   Best case:        {}", format!("{min}").green());
        println!("   Worst win:        {}", format!("{max}").yellow());
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.difficulty.attempt_budget() {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    let lost = result.total_rounds - result.wins;
    let pct = (lost as f64 / result.total_rounds as f64) * 100.0;
    println!(
        "   {}: {} {lost:4} ({pct:5.1}%)",
        "✗ ".red(),
        create_progress_bar(pct, 100.0, 40).red()
    );
}
