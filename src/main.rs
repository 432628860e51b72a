//! Number Guessing Game - CLI
//!
//! Line-mode and TUI front ends, a high-score viewer and a strategy benchmark.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use number_guess::{
    autoplay::StrategyType,
    commands::{run_benchmark, run_simple},
    core::{DIFFICULTIES, Difficulty},
    engine::Game,
    output::{print_benchmark_result, print_scores},
    scores::DEFAULT_SCORES_FILE,
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "number_guess",
    about = "Guess the number between 1 and 100 before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// High score file
    #[arg(long, global = true, default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Seed for secrets and the random benchmark strategy (reproducible runs)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Difficulty by name or menu number; skips the menu
    #[arg(short, long, global = true)]
    difficulty: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default - classic line-by-line game)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Show the best score for every difficulty
    Scores,

    /// Play every secret with an automatic strategy
    Benchmark {
        /// Strategy: bisect (default), hint-bisect, random
        #[arg(short, long, default_value = "bisect")]
        strategy: String,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let preset = cli
        .difficulty
        .as_deref()
        .map(parse_difficulty)
        .transpose()?;

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple_command(&cli.scores, cli.seed, preset),
        Commands::Play => run_play_command(&cli.scores, cli.seed, preset),
        Commands::Scores => {
            let game = Game::from_file(&cli.scores, cli.seed);
            print_scores(&game.list_difficulties());
            Ok(())
        }
        Commands::Benchmark { strategy, quiet } => {
            let strategy = StrategyType::from_name(&strategy, cli.seed);
            run_benchmark_command(&strategy, preset, !quiet);
            Ok(())
        }
    }
}

fn parse_difficulty(choice: &str) -> Result<Difficulty> {
    match Difficulty::from_choice(choice) {
        Some(difficulty) => Ok(difficulty),
        None => bail!(
            "unknown difficulty '{choice}' (expected {} or 1-{})",
            DIFFICULTIES
                .iter()
                .copied()
                .map(Difficulty::name)
                .collect::<Vec<_>>()
                .join(", "),
            DIFFICULTIES.len()
        ),
    }
}

fn run_simple_command(scores: &Path, seed: Option<u64>, preset: Option<Difficulty>) -> Result<()> {
    let mut game = Game::from_file(scores, seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_simple(&mut game, preset, &mut input, &mut out)
}

fn run_play_command(scores: &Path, seed: Option<u64>, preset: Option<Difficulty>) -> Result<()> {
    use number_guess::interactive::{App, run_tui};

    let app = App::new(Game::from_file(scores, seed), preset);
    run_tui(app)
}

fn run_benchmark_command(strategy: &StrategyType, only: Option<Difficulty>, show_progress: bool) {
    let difficulties: Vec<Difficulty> = only.map_or_else(|| DIFFICULTIES.to_vec(), |d| vec![d]);

    for difficulty in difficulties {
        println!(
            "Running benchmark on every secret with {} attempts...",
            difficulty.attempt_budget()
        );
        let result = run_benchmark(strategy, difficulty, show_progress);
        print_benchmark_result(&result, strategy.name());
    }
}
