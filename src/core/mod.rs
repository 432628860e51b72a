//! Core domain types for the guessing game
//!
//! Pure value types with no I/O: difficulties, player actions, the
//! narrowing interval and the hint cycle.

mod action;
mod bounds;
mod difficulty;
mod hint;

pub use action::{Action, ValidationError, validate_guess};
pub use bounds::{Bounds, ProximityBand, SECRET_MAX, SECRET_MIN};
pub use difficulty::{DIFFICULTIES, Difficulty};
pub use hint::{HINT_DIVISORS, Hint, HintCategory, HintSet, Parity, SpanBand, next_hint};
