//! Round resolution engine
//!
//! [`Round`] holds the state machine for a single round; [`Game`] wraps it
//! with the ledger and random source a front end needs.

mod game;
mod round;

pub use game::{DifficultyEntry, Game};
pub use round::{Feedback, Output, Round, RoundResult, RoundStatus};
