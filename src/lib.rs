//! Number Guessing Game
//!
//! A guessing game over 1..=100 with narrowing feedback, cycling hints, an
//! attempt budget per difficulty and a persistent best-score ledger.
//!
//! # Quick Start
//!
//! ```rust
//! use number_guess::core::DIFFICULTIES;
//! use number_guess::engine::{Game, RoundResult};
//! use number_guess::scores::{MemoryStore, ScoreLedger};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut game = Game::new(
//!     ScoreLedger::load(MemoryStore::new()),
//!     StdRng::seed_from_u64(7),
//! );
//! let mut round = game.start_round(DIFFICULTIES[0]);
//!
//! let output = game.submit(&mut round, "hint").unwrap();
//! println!("{}", output.lines().join("\n"));
//!
//! let guess = round.secret().to_string();
//! let output = game.submit(&mut round, &guess).unwrap();
//! assert!(matches!(output.terminal, Some(RoundResult::Won { attempts: 2, .. })));
//! assert_eq!(game.ledger().best("Easy"), Some(2));
//! ```

// Core domain types
pub mod core;

// Round resolution engine
pub mod engine;

// Best-score persistence
pub mod scores;

// Automatic players
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
