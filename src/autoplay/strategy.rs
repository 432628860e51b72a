//! Automatic players
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Action;
use crate::engine::Round;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the next action in a round
pub trait Strategy {
    /// Pick the next action given the visible round state
    fn choose(&self, round: &Round) -> Action;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Binary search on the known bounds (default)
    Bisect(BisectStrategy),
    /// Spend a hint first when the budget allows, then bisect
    HintBisect(HintBisectStrategy),
    /// Uniform guess inside the known bounds
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn choose(&self, round: &Round) -> Action {
        match self {
            Self::Bisect(s) => s.choose(round),
            Self::HintBisect(s) => s.choose(round),
            Self::Random(s) => s.choose(round),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisect", "hint-bisect", "random".
    /// Defaults to bisect if name is unrecognized. `seed` fixes the random
    /// strategy's choices; without it they are seeded from the OS.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "hint-bisect" | "hint" => Self::HintBisect(HintBisectStrategy::default()),
            "random" => Self::Random(seed.map_or_else(RandomStrategy::default, RandomStrategy::new)),
            _ => Self::Bisect(BisectStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bisect(_) => "bisect",
            Self::HintBisect(_) => "hint-bisect",
            Self::Random(_) => "random",
        }
    }
}

/// Always guess the midpoint of the known interval
pub struct BisectStrategy;

impl Strategy for BisectStrategy {
    fn choose(&self, round: &Round) -> Action {
        Action::Guess(i64::from(round.bounds().midpoint()))
    }
}

/// Buy one hint up front when the budget is generous, then bisect
pub struct HintBisectStrategy {
    /// Only hint when the budget is at least this large
    pub min_budget: u32,
}

impl HintBisectStrategy {
    #[must_use]
    pub const fn new(min_budget: u32) -> Self {
        Self { min_budget }
    }
}

impl Default for HintBisectStrategy {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Strategy for HintBisectStrategy {
    fn choose(&self, round: &Round) -> Action {
        if round.attempts_used() == 0 && round.difficulty().attempt_budget() >= self.min_budget {
            Action::Hint
        } else {
            BisectStrategy.choose(round)
        }
    }
}

/// Guess uniformly inside the known interval
///
/// Each choice is drawn from a generator seeded by `seed` and the visible
/// round state.
pub struct RandomStrategy {
    seed: u64,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(rand::rng().random())
    }
}

impl Strategy for RandomStrategy {
    fn choose(&self, round: &Round) -> Action {
        let bounds = round.bounds();
        let state = (u64::from(bounds.min()) << 40)
            | (u64::from(bounds.max()) << 20)
            | u64::from(round.attempts_used());
        let mut rng = StdRng::seed_from_u64(self.seed ^ state);

        Action::Guess(i64::from(rng.random_range(bounds.min()..=bounds.max())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DIFFICULTIES;
    use crate::scores::{MemoryStore, ScoreLedger};

    #[test]
    fn bisect_starts_at_fifty() {
        let round = Round::with_secret(DIFFICULTIES[0], 10).unwrap();
        assert_eq!(BisectStrategy.choose(&round), Action::Guess(50));
    }

    #[test]
    fn bisect_follows_bounds() {
        let mut ledger = ScoreLedger::load(MemoryStore::new());
        let mut round = Round::with_secret(DIFFICULTIES[0], 80).unwrap();

        round.apply(Action::Guess(50), &mut ledger).unwrap();
        assert_eq!(BisectStrategy.choose(&round), Action::Guess(75));
    }

    #[test]
    fn hint_bisect_hints_once_on_generous_budget() {
        let mut ledger = ScoreLedger::load(MemoryStore::new());
        let mut round = Round::with_secret(DIFFICULTIES[1], 30).unwrap();
        let strategy = HintBisectStrategy::default();

        assert_eq!(strategy.choose(&round), Action::Hint);
        round.apply(Action::Hint, &mut ledger).unwrap();
        assert_eq!(strategy.choose(&round), Action::Guess(50));
    }

    #[test]
    fn hint_bisect_skips_hint_on_small_budget() {
        let round = Round::with_secret(DIFFICULTIES[2], 30).unwrap();
        assert_eq!(HintBisectStrategy::default().choose(&round), Action::Guess(50));
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut ledger = ScoreLedger::load(MemoryStore::new());
        let mut round = Round::with_secret(DIFFICULTIES[0], 40).unwrap();
        round.apply(Action::Guess(30), &mut ledger).unwrap();
        round.apply(Action::Guess(45), &mut ledger).unwrap();

        for seed in 0..100 {
            let Action::Guess(n) = RandomStrategy::new(seed).choose(&round) else {
                panic!("random strategy must guess");
            };
            assert!((31..=44).contains(&n));
        }
    }

    #[test]
    fn random_with_same_seed_repeats_choices() {
        let round = Round::with_secret(DIFFICULTIES[0], 40).unwrap();
        let first = RandomStrategy::new(17).choose(&round);

        for _ in 0..10 {
            assert_eq!(RandomStrategy::new(17).choose(&round), first);
        }
        assert_eq!(
            StrategyType::from_name("random", Some(17)).choose(&round),
            first
        );
    }

    #[test]
    fn from_name_defaults_to_bisect() {
        assert_eq!(StrategyType::from_name("random", None).name(), "random");
        assert_eq!(StrategyType::from_name("hint-bisect", None).name(), "hint-bisect");
        assert_eq!(StrategyType::from_name("whatever", Some(3)).name(), "bisect");
    }
}
