//! Benchmark command
//!
//! Plays every possible secret on a difficulty with an automatic strategy
//! and summarises how often the budget is enough.

use crate::autoplay::Strategy;
use crate::core::{Difficulty, SECRET_MAX, SECRET_MIN};
use crate::engine::{Output, Round, RoundResult};
use crate::scores::{MemoryStore, ScoreLedger};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run on one difficulty
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub total_rounds: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Average attempts over won rounds
    pub average_attempts: f64,
    pub min_attempts: Option<u32>,
    pub max_attempts: Option<u32>,
    /// Won rounds by attempts used
    pub distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round against `secret` until it ends
///
/// Returns the terminal result and the attempts used.
pub fn play_round<S: Strategy>(
    strategy: &S,
    difficulty: Difficulty,
    secret: u32,
) -> (RoundResult, u32) {
    let mut ledger = ScoreLedger::empty(MemoryStore::new());
    let mut round = match Round::with_secret(difficulty, secret) {
        Ok(round) => round,
        Err(e) => {
            log::warn!("skipping secret {secret}: {e}");
            return (RoundResult::Quit, 0);
        }
    };

    loop {
        match round.apply(strategy.choose(&round), &mut ledger) {
            Ok(Output {
                terminal: Some(result),
                ..
            }) => return (result, round.attempts_used()),
            Ok(_) => {}
            Err(e) => {
                log::warn!("strategy action rejected on secret {secret}: {e}");
                return (RoundResult::Quit, round.attempts_used());
            }
        }
    }
}

/// Run the strategy against every secret on `difficulty`
pub fn run_benchmark<S: Strategy + Sync>(
    strategy: &S,
    difficulty: Difficulty,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let secrets: Vec<u32> = (SECRET_MIN..=SECRET_MAX).collect();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(difficulty.name());

    let outcomes: Vec<(RoundResult, u32)> = secrets
        .par_iter()
        .map(|&secret| {
            let outcome = play_round(strategy, difficulty, secret);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut total_attempts = 0u64;
    for (result, attempts) in &outcomes {
        if matches!(result, RoundResult::Won { .. }) {
            *distribution.entry(*attempts).or_insert(0) += 1;
            total_attempts += u64::from(*attempts);
        }
    }

    let duration = start.elapsed();
    let total_rounds = outcomes.len();
    let wins: usize = distribution.values().sum();

    BenchmarkResult {
        difficulty,
        total_rounds,
        wins,
        win_rate: wins as f64 / total_rounds as f64,
        average_attempts: if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        },
        min_attempts: distribution.keys().min().copied(),
        max_attempts: distribution.keys().max().copied(),
        distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{BisectStrategy, HintBisectStrategy, RandomStrategy};
    use crate::core::DIFFICULTIES;

    #[test]
    fn play_round_bisect_finds_fifty_first() {
        let (result, attempts) = play_round(&BisectStrategy, DIFFICULTIES[0], 50);
        assert!(matches!(result, RoundResult::Won { attempts: 1, .. }));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn play_round_respects_budget() {
        for secret in 1..=100 {
            let (_, attempts) = play_round(&BisectStrategy, DIFFICULTIES[2], secret);
            assert!(attempts <= 3);
        }
    }

    #[test]
    fn bisect_always_wins_on_easy() {
        // 100 values need at most 7 bisection steps
        let result = run_benchmark(&BisectStrategy, DIFFICULTIES[0], false);

        assert_eq!(result.total_rounds, 100);
        assert_eq!(result.wins, 100);
        assert!((result.win_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.min_attempts, Some(1));
        assert!(result.max_attempts.unwrap() <= 7);
    }

    #[test]
    fn bisect_wins_at_most_seven_on_hard() {
        // Three guesses can only ever reach 1 + 2 + 4 distinct secrets
        let result = run_benchmark(&BisectStrategy, DIFFICULTIES[2], false);
        assert_eq!(result.wins, 7);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.get(&2), Some(&2));
        assert_eq!(result.distribution.get(&3), Some(&4));
    }

    #[test]
    fn play_round_rejects_secret_outside_domain() {
        let (result, attempts) = play_round(&BisectStrategy, DIFFICULTIES[0], 0);
        assert_eq!(result, RoundResult::Quit);
        assert_eq!(attempts, 0);
    }

    #[test]
    fn seeded_random_benchmark_is_reproducible() {
        let first = run_benchmark(&RandomStrategy::new(42), DIFFICULTIES[1], false);
        let second = run_benchmark(&RandomStrategy::new(42), DIFFICULTIES[1], false);

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn hint_bisect_never_wins_on_first_attempt() {
        let result = run_benchmark(&HintBisectStrategy::default(), DIFFICULTIES[1], false);
        assert!(result.distribution.get(&1).is_none());
        assert!(result.wins > 0);
    }
}
