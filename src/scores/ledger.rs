//! Best-score ledger
//!
//! Maps each difficulty name to the fewest attempts ever needed to win, or
//! `null` when there is no record yet. Loading never fails: missing or
//! corrupt data yields an empty ledger. Saving is best-effort.

use super::store::{PersistenceError, ScoreStore};
use crate::core::DIFFICULTIES;
use serde_json::{Map, Value};

/// Outcome of offering a new attempt count to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordUpdate {
    /// Stored best replaced (`previous` is `None` for a first record)
    NewRecord { previous: Option<u32> },
    /// Existing best kept; the offered count was equal or worse
    Retained { best: u32 },
}

impl RecordUpdate {
    #[must_use]
    pub const fn is_improvement(self) -> bool {
        matches!(self, Self::NewRecord { .. })
    }
}

/// Persisted best attempts per difficulty
#[derive(Debug)]
pub struct ScoreLedger<S: ScoreStore> {
    store: S,
    records: Map<String, Value>,
}

impl<S: ScoreStore> ScoreLedger<S> {
    /// Load the ledger from `store`, falling back to an empty ledger
    ///
    /// Every known difficulty has an entry afterwards. Unknown keys are kept
    /// as they were stored.
    pub fn load(store: S) -> Self {
        let records = match store.read().and_then(|text| text.map(parse).transpose()) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                log::warn!("ignoring unreadable score ledger: {e}");
                Map::new()
            }
        };

        let mut ledger = Self { store, records };
        ledger.normalize();
        ledger
    }

    /// Ledger with no records that has not touched `store`
    pub fn empty(store: S) -> Self {
        let mut ledger = Self {
            store,
            records: Map::new(),
        };
        ledger.normalize();
        ledger
    }

    fn normalize(&mut self) {
        for difficulty in &DIFFICULTIES {
            let entry = self
                .records
                .entry(difficulty.name())
                .or_insert(Value::Null);

            if !entry.is_null() && positive(entry).is_none() {
                log::warn!(
                    "discarding invalid best score for {}: {entry}",
                    difficulty.name()
                );
                *entry = Value::Null;
            }
        }
    }

    /// Best attempt count stored for `name`
    #[must_use]
    pub fn best(&self, name: &str) -> Option<u32> {
        self.records.get(name).and_then(positive)
    }

    /// Known difficulties with their best score, in menu order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Option<u32>)> + '_ {
        DIFFICULTIES
            .iter()
            .map(|difficulty| (difficulty.name(), self.best(difficulty.name())))
    }

    /// Every stored entry, including unknown keys
    #[must_use]
    pub const fn records(&self) -> &Map<String, Value> {
        &self.records
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Record `attempts` for `name` if it beats the stored best
    ///
    /// Only a strictly lower count (or a first record) replaces the best,
    /// and the ledger is saved immediately when it does.
    pub fn record_if_better(&mut self, name: &str, attempts: u32) -> RecordUpdate {
        match self.best(name) {
            Some(best) if attempts >= best => RecordUpdate::Retained { best },
            previous => {
                self.records.insert(name.to_string(), Value::from(attempts));
                log::info!("new best for {name}: {attempts} attempts (was {previous:?})");
                self.save();
                RecordUpdate::NewRecord { previous }
            }
        }
    }

    /// Serialize the ledger as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Write the full ledger to the store
    ///
    /// # Errors
    /// Returns an error if the ledger cannot be serialized or written.
    pub fn try_save(&mut self) -> Result<(), PersistenceError> {
        let json = self.to_json()?;
        self.store.write(&json)
    }

    /// Write the full ledger, logging and swallowing any failure
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            log::warn!("could not save score ledger: {e}");
        }
    }
}

fn parse(text: String) -> Result<Map<String, Value>, PersistenceError> {
    match serde_json::from_str(&text)? {
        Value::Object(map) => Ok(map),
        _ => Err(PersistenceError::NotAnObject),
    }
}

fn positive(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .filter(|&v| v > 0)
        .and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::store::{JsonFileStore, MemoryStore};

    fn ledger_from(text: &str) -> ScoreLedger<MemoryStore> {
        ScoreLedger::load(MemoryStore::with_contents(text))
    }

    #[test]
    fn empty_store_gives_empty_ledger() {
        let ledger = ScoreLedger::load(MemoryStore::new());
        assert_eq!(ledger.records().len(), 3);
        assert!(ledger.entries().all(|(_, best)| best.is_none()));
    }

    #[test]
    fn corrupt_json_falls_back_to_empty() {
        let ledger = ledger_from("{not json");
        assert!(ledger.entries().all(|(_, best)| best.is_none()));
        assert_eq!(ledger.records().len(), 3);
    }

    #[test]
    fn non_object_falls_back_to_empty() {
        let ledger = ledger_from("[1, 2, 3]");
        assert!(ledger.entries().all(|(_, best)| best.is_none()));
    }

    #[test]
    fn missing_known_keys_are_filled() {
        let ledger = ledger_from(r#"{"Easy": 4}"#);
        assert_eq!(ledger.best("Easy"), Some(4));
        assert_eq!(ledger.best("Medium"), None);
        assert_eq!(ledger.records().get("Hard"), Some(&Value::Null));
    }

    #[test]
    fn invalid_known_values_become_null() {
        let ledger = ledger_from(r#"{"Easy": "seven", "Medium": 0, "Hard": -2}"#);
        assert!(ledger.entries().all(|(_, best)| best.is_none()));
        assert!(ledger.records().values().all(Value::is_null));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let mut ledger = ledger_from(r#"{"Nightmare": "x", "Easy": 9}"#);
        ledger.record_if_better("Easy", 2);

        let saved: Value = serde_json::from_str(ledger.store().contents().unwrap()).unwrap();
        assert_eq!(saved["Nightmare"], Value::from("x"));
        assert_eq!(saved["Easy"], Value::from(2));
        assert_eq!(ledger.entries().count(), 3);
    }

    #[test]
    fn first_record_is_stored() {
        let mut ledger = ScoreLedger::load(MemoryStore::new());
        let update = ledger.record_if_better("Hard", 3);

        assert_eq!(update, RecordUpdate::NewRecord { previous: None });
        assert!(update.is_improvement());
        assert_eq!(ledger.best("Hard"), Some(3));
        assert_eq!(ledger.store().writes(), 1);
    }

    #[test]
    fn only_strictly_better_replaces() {
        let mut ledger = ledger_from(r#"{"Medium": 4}"#);

        let tie = ledger.record_if_better("Medium", 4);
        assert_eq!(tie, RecordUpdate::Retained { best: 4 });
        assert!(!tie.is_improvement());
        assert_eq!(
            ledger.record_if_better("Medium", 5),
            RecordUpdate::Retained { best: 4 }
        );
        assert_eq!(ledger.store().writes(), 0);

        assert_eq!(
            ledger.record_if_better("Medium", 3),
            RecordUpdate::NewRecord { previous: Some(4) }
        );
        assert_eq!(ledger.best("Medium"), Some(3));
        assert_eq!(ledger.store().writes(), 1);
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut ledger = ledger_from(r#"{"Easy": 3, "Medium": null, "Hard": 1}"#);
        ledger.save();

        let reloaded = ledger_from(ledger.store().contents().unwrap());
        assert_eq!(reloaded.records(), ledger.records());
        assert_eq!(reloaded.best("Easy"), Some(3));
        assert_eq!(reloaded.best("Medium"), None);
        assert_eq!(reloaded.best("Hard"), Some(1));
    }

    #[test]
    fn write_failure_does_not_panic() {
        let path = std::env::temp_dir()
            .join(format!("number_guess_missing_dir_{}", std::process::id()))
            .join("scores.json");
        let mut ledger = ScoreLedger::load(JsonFileStore::new(path));

        let update = ledger.record_if_better("Easy", 6);

        assert_eq!(update, RecordUpdate::NewRecord { previous: None });
        assert_eq!(ledger.best("Easy"), Some(6));
        assert!(ledger.try_save().is_err());
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("number_guess_ledger_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut ledger = ScoreLedger::load(JsonFileStore::new(&path));
        ledger.record_if_better("Medium", 4);

        let reloaded = ScoreLedger::load(JsonFileStore::new(&path));
        assert_eq!(reloaded.best("Medium"), Some(4));
        assert_eq!(reloaded.best("Easy"), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn pretty_printed_output() {
        let ledger = ScoreLedger::empty(MemoryStore::new());
        let json = ledger.to_json().unwrap();
        assert!(json.contains("\n  \"Easy\": null"));
    }
}
