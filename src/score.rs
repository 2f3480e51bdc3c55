use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "slither";
const HIGH_SCORE_FILE_NAME: &str = "high_score.json";

/// On-disk shape of the persisted high score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Errors from reading or writing the high-score file.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to read high score file")]
    Read(#[source] io::Error),
    #[error("high score file is corrupt")]
    Parse(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] io::Error),
}

/// Persists the single high-score scalar to a JSON file in the platform
/// data directory.
///
/// The store holds its target path so tests can point it at a temp
/// location.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store at the platform-default location.
    #[must_use]
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(HIGH_SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the high score; a missing file means no score yet (0).
    ///
    /// A present-but-unreadable file is an error, so the caller can warn
    /// before entering raw terminal mode.
    pub fn load(&self) -> Result<u32, ScoreStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(ScoreStoreError::Read(e)),
        };

        serde_json::from_str::<HighScoreFile>(&raw)
            .map(|file| file.high_score)
            .map_err(ScoreStoreError::Parse)
    }

    /// Saves the high score, creating parent directories when needed.
    pub fn save(&self, high_score: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(ScoreStoreError::Write)?;
        }

        let payload = HighScoreFile { high_score };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| ScoreStoreError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, json).map_err(ScoreStoreError::Write)
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::HighScoreStore;

    #[test]
    fn round_trip() {
        let store = HighScoreStore::at_path(unique_test_path("round_trip"));

        store.save(130).expect("save should succeed");
        assert_eq!(store.load().expect("load should succeed"), 130);

        cleanup(&store);
    }

    #[test]
    fn missing_file_means_zero() {
        let store = HighScoreStore::at_path(unique_test_path("missing"));
        assert_eq!(store.load().expect("missing file should be Ok(0)"), 0);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = HighScoreStore::at_path(unique_test_path("corrupt"));
        if let Some(parent) = store.path().parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(store.path(), "not-json").expect("test file write should succeed");

        assert!(store.load().is_err());

        cleanup(&store);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("slither-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup(store: &HighScoreStore) {
        let _ = fs::remove_file(store.path());
        if let Some(parent) = store.path().parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
