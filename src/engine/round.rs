//! Round state machine
//!
//! A round starts `Active` and ends `Won`, `Quit` or `Exhausted`. Every
//! accepted action produces an [`Output`]; rejected input leaves the round
//! untouched.

use crate::core::{
    Action, Bounds, Difficulty, Hint, HintSet, ProximityBand, SECRET_MAX, SECRET_MIN,
    ValidationError, next_hint, validate_guess,
};
use crate::scores::{RecordUpdate, ScoreLedger, ScoreStore};
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// Remaining-attempt counts at which a free hint is given after a miss
const AUTO_HINT_REMAINING: [u32; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Quit,
    Exhausted,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won { attempts: u32, elapsed: Duration },
    Quit,
    Exhausted { secret: u32 },
}

/// One display event produced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Secret is greater than the guess
    Higher(u32),
    /// Secret is less than the guess
    Lower(u32),
    Proximity(ProximityBand),
    /// Hint requested by the player
    Hint(Hint),
    /// Free hint given when attempts run low
    AutoHint(Hint),
    HintUsed { remaining: u32 },
    Won { attempts: u32, elapsed: Duration },
    NewRecord { difficulty: &'static str, attempts: u32 },
    RecordRetained { difficulty: &'static str, best: u32 },
    Quit,
    Exhausted { secret: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher(guess) => write!(f, "Incorrect! The number is greater than {guess}."),
            Self::Lower(guess) => write!(f, "Incorrect! The number is less than {guess}."),
            Self::Proximity(band) => write!(f, "{band}"),
            Self::Hint(hint) => write!(f, "{hint}"),
            Self::AutoHint(hint) => write!(f, "Auto-hint: {hint} (no attempt cost)"),
            Self::HintUsed { remaining } => {
                write!(f, "(Hint used. Attempts remaining: {remaining})")
            }
            Self::Won { attempts, elapsed } => write!(
                f,
                "Congratulations! You guessed the number in {attempts} attempts and {:.2} seconds!",
                elapsed.as_secs_f64()
            ),
            Self::NewRecord {
                difficulty,
                attempts,
            } => write!(f, "New high score for {difficulty}: {attempts} attempts!"),
            Self::RecordRetained { difficulty, best } => {
                write!(f, "High score for {difficulty} remains: {best} attempts.")
            }
            Self::Quit => write!(f, "Round ended. Better luck next time!"),
            Self::Exhausted { secret } => write!(f, "Out of attempts! The number was {secret}."),
        }
    }
}

/// Result of one accepted action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub messages: Vec<Feedback>,
    pub terminal: Option<RoundResult>,
}

impl Output {
    /// Messages rendered as display strings
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.messages.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, feedback: Feedback) {
        self.messages.push(feedback);
    }

    fn finish(&mut self, result: RoundResult) {
        self.terminal = Some(result);
    }
}

/// State of one guessing round
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: u32,
    attempts_used: u32,
    bounds: Bounds,
    hints_given: HintSet,
    last_guess: Option<u32>,
    started_at: Instant,
    status: RoundStatus,
}

impl Round {
    /// Start a round with a secret drawn uniformly from the domain
    pub fn start<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::new(difficulty, rng.random_range(SECRET_MIN..=SECRET_MAX))
    }

    /// Start a round with a known secret
    ///
    /// # Errors
    /// Returns `ValidationError::OutOfDomain` if `secret` lies outside
    /// `SECRET_MIN..=SECRET_MAX`.
    pub fn with_secret(difficulty: Difficulty, secret: u32) -> Result<Self, ValidationError> {
        if !(SECRET_MIN..=SECRET_MAX).contains(&secret) {
            return Err(ValidationError::OutOfDomain);
        }
        Ok(Self::new(difficulty, secret))
    }

    fn new(difficulty: Difficulty, secret: u32) -> Self {
        log::debug!(
            "round started on {difficulty} ({} attempts)",
            difficulty.attempt_budget()
        );

        Self {
            difficulty,
            secret,
            attempts_used: 0,
            bounds: Bounds::FULL,
            hints_given: HintSet::new(),
            last_guess: None,
            started_at: Instant::now(),
            status: RoundStatus::Active,
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn secret(&self) -> u32 {
        self.secret
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.difficulty.attempt_budget() - self.attempts_used
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub const fn hints_given(&self) -> HintSet {
        self.hints_given
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<u32> {
        self.last_guess
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Apply one action
    ///
    /// A win is offered to `ledger`, which saves itself only on a new record.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the round is over or a guess lies
    /// outside the secret domain. No attempt is charged in either case.
    pub fn apply<S: ScoreStore>(
        &mut self,
        action: Action,
        ledger: &mut ScoreLedger<S>,
    ) -> Result<Output, ValidationError> {
        if self.status.is_terminal() {
            return Err(ValidationError::RoundOver);
        }

        match action {
            Action::Quit => Ok(self.quit()),
            Action::Hint => Ok(self.hint()),
            Action::Guess(value) => {
                let guess = validate_guess(value)?;
                Ok(self.guess(guess, ledger))
            }
        }
    }

    fn quit(&mut self) -> Output {
        self.status = RoundStatus::Quit;
        log::debug!("round quit after {} attempts", self.attempts_used);

        let mut output = Output::default();
        output.push(Feedback::Quit);
        output.finish(RoundResult::Quit);
        output
    }

    fn hint(&mut self) -> Output {
        self.attempts_used += 1;

        let (hint, given) = next_hint(self.secret, self.bounds, self.hints_given);
        self.hints_given = given;

        let mut output = Output::default();
        output.push(Feedback::Hint(hint));
        output.push(Feedback::HintUsed {
            remaining: self.attempts_remaining(),
        });
        self.finish_if_exhausted(&mut output);
        output
    }

    fn guess<S: ScoreStore>(&mut self, guess: u32, ledger: &mut ScoreLedger<S>) -> Output {
        self.attempts_used += 1;
        self.last_guess = Some(guess);

        let mut output = Output::default();

        if guess == self.secret {
            self.win(&mut output, ledger);
            return output;
        }

        self.bounds = self.bounds.narrowed(guess, self.secret);
        output.push(if guess < self.secret {
            Feedback::Higher(guess)
        } else {
            Feedback::Lower(guess)
        });
        output.push(Feedback::Proximity(ProximityBand::classify(
            guess,
            self.secret,
        )));

        if AUTO_HINT_REMAINING.contains(&self.attempts_remaining())
            && !self.hints_given.is_complete()
        {
            let (hint, given) = next_hint(self.secret, self.bounds, self.hints_given);
            self.hints_given = given;
            output.push(Feedback::AutoHint(hint));
        }

        self.finish_if_exhausted(&mut output);
        output
    }

    fn win<S: ScoreStore>(&mut self, output: &mut Output, ledger: &mut ScoreLedger<S>) {
        let attempts = self.attempts_used;
        let elapsed = self.elapsed();
        let difficulty = self.difficulty.name();

        self.status = RoundStatus::Won;
        output.push(Feedback::Won { attempts, elapsed });

        let update = ledger.record_if_better(difficulty, attempts);
        log::debug!(
            "round won in {attempts} attempts (new record: {})",
            update.is_improvement()
        );
        output.push(match update {
            RecordUpdate::NewRecord { .. } => Feedback::NewRecord {
                difficulty,
                attempts,
            },
            RecordUpdate::Retained { best } => Feedback::RecordRetained { difficulty, best },
        });
        output.finish(RoundResult::Won { attempts, elapsed });
    }

    fn finish_if_exhausted(&mut self, output: &mut Output) {
        if self.attempts_remaining() > 0 {
            return;
        }

        self.status = RoundStatus::Exhausted;
        log::debug!("round exhausted, secret was {}", self.secret);

        output.push(Feedback::Exhausted {
            secret: self.secret,
        });
        output.finish(RoundResult::Exhausted {
            secret: self.secret,
        });
    }
}
