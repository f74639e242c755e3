//! Best score kept in a small JSON file.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strictly_2048::{BestScoreStore, StoreError};
use tracing::{debug, instrument};

/// On-disk record.
#[derive(Debug, Serialize, Deserialize)]
struct BestRecord {
    best: u64,
}

/// Best-score store backed by a JSON file (`{"best": 1234}`).
///
/// A missing file reads as no score saved yet.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<u64>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No best score file yet");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::new(format!("Failed to read best score: {}", e))),
        };

        let record: BestRecord = serde_json::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse best score: {}", e)))?;
        Ok(Some(record.best))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::new(format!("Failed to create directory: {}", e)))?;
        }

        let json = serde_json::to_string(&BestRecord { best })
            .map_err(|e| StoreError::new(format!("Failed to encode best score: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| StoreError::new(format!("Failed to write best score: {}", e)))?;

        debug!("Best score saved");
        Ok(())
    }
}
