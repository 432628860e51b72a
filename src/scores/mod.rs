//! Persistent best scores

mod ledger;
pub mod store;

pub use ledger::{RecordUpdate, ScoreLedger};
pub use store::{DEFAULT_SCORES_FILE, JsonFileStore, MemoryStore, PersistenceError, ScoreStore};
