//! Storage backends for the score ledger

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default ledger file, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "high_scores.json";

/// Failure to read or write persisted scores
///
/// Never surfaces to the player; the ledger logs it and carries on.
#[derive(Debug)]
pub enum PersistenceError {
    Io { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    NotAnObject,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "malformed score data: {e}"),
            Self::NotAnObject => write!(f, "score data is not a JSON object"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Where the serialized ledger lives
pub trait ScoreStore {
    /// Read the stored text, or `None` if nothing has been stored yet
    ///
    /// # Errors
    /// Returns an error if the backing storage exists but cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replace the stored text
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn write(&mut self, contents: &str) -> Result<(), PersistenceError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}

impl ScoreStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), PersistenceError> {
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }
}

/// In-process store for tests and simulations
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            writes: 0,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), PersistenceError> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("number_guess_store_{}_{name}", std::process::id()))
    }

    #[test]
    fn missing_file_reads_as_none() {
        let store = JsonFileStore::new(temp_path("missing.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn file_store_write_then_read() {
        let path = temp_path("write_read.json");
        let mut store = JsonFileStore::new(&path);

        store.write("{\"Easy\": 3}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"Easy\": 3}"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let mut store = JsonFileStore::new(temp_path("no_such_dir").join("scores.json"));
        let err = store.write("{}").unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        assert!(store.read().unwrap().is_none());

        store.write("{}").unwrap();
        store.write("{\"Hard\": 1}").unwrap();

        assert_eq!(store.writes(), 2);
        assert_eq!(store.contents(), Some("{\"Hard\": 1}"));
    }

    #[test]
    fn default_file_name() {
        assert_eq!(JsonFileStore::default().path(), Path::new("high_scores.json"));
    }
}
