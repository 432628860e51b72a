//! Game facade used by front ends
//!
//! Owns the score ledger and the random source for the lifetime of a
//! session, and hands out rounds.

use super::round::{Output, Round, RoundResult};
use crate::core::{Action, DIFFICULTIES, Difficulty, ValidationError};
use crate::scores::{JsonFileStore, ScoreLedger, ScoreStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// One row of the difficulty menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyEntry {
    /// 1-based position in the menu
    pub index: usize,
    pub difficulty: Difficulty,
    pub best: Option<u32>,
}

/// A play session: ledger plus secret generator
pub struct Game<S: ScoreStore, R: Rng = StdRng> {
    ledger: ScoreLedger<S>,
    rng: R,
}

impl Game<JsonFileStore> {
    /// Session backed by a ledger file, seeded from `seed` or the OS
    pub fn from_file(path: impl AsRef<Path>, seed: Option<u64>) -> Self {
        let ledger = ScoreLedger::load(JsonFileStore::new(path.as_ref()));
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(ledger, rng)
    }
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    pub const fn new(ledger: ScoreLedger<S>, rng: R) -> Self {
        Self { ledger, rng }
    }

    #[must_use]
    pub const fn ledger(&self) -> &ScoreLedger<S> {
        &self.ledger
    }

    /// Menu rows for every difficulty with its current best
    #[must_use]
    pub fn list_difficulties(&self) -> Vec<DifficultyEntry> {
        DIFFICULTIES
            .iter()
            .enumerate()
            .map(|(i, &difficulty)| DifficultyEntry {
                index: i + 1,
                difficulty,
                best: self.ledger.best(difficulty.name()),
            })
            .collect()
    }

    /// Start a fresh round
    pub fn start_round(&mut self, difficulty: Difficulty) -> Round {
        Round::start(difficulty, &mut self.rng)
    }

    /// Submit any raw token: a number, `hint` or `quit`
    ///
    /// # Errors
    /// Returns a `ValidationError` if the token is not understood, the guess
    /// is out of range, or the round is over.
    pub fn submit(&mut self, round: &mut Round, raw: &str) -> Result<Output, ValidationError> {
        let action = Action::parse(raw)?;
        round.apply(action, &mut self.ledger)
    }

    /// Submit a guess token
    ///
    /// Command words are not accepted here; use [`Game::submit`] for mixed
    /// input.
    ///
    /// # Errors
    /// Returns `NotANumber`, `OutOfDomain` or `RoundOver`.
    pub fn submit_guess(
        &mut self,
        round: &mut Round,
        raw: &str,
    ) -> Result<Output, ValidationError> {
        match Action::parse(raw)? {
            action @ Action::Guess(_) => round.apply(action, &mut self.ledger),
            Action::Hint | Action::Quit => Err(ValidationError::NotANumber),
        }
    }

    /// Ask for a hint, spending one attempt
    ///
    /// # Errors
    /// Returns `RoundOver` if the round has finished.
    pub fn submit_hint(&mut self, round: &mut Round) -> Result<Output, ValidationError> {
        round.apply(Action::Hint, &mut self.ledger)
    }

    /// Abandon the round
    ///
    /// # Errors
    /// Returns `RoundOver` if the round has already finished.
    pub fn submit_quit(&mut self, round: &mut Round) -> Result<RoundResult, ValidationError> {
        round
            .apply(Action::Quit, &mut self.ledger)
            .map(|output| output.terminal.unwrap_or(RoundResult::Quit))
    }
}
