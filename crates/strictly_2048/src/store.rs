//! Best-score persistence boundary.
//!
//! The core treats the store as an opaque key-value slot holding one
//! integer. Failures never reach gameplay: a failed load reads as 0 and a
//! failed save is logged and dropped.

use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// Persistent slot for the best score.
pub trait BestScoreStore {
    /// Loads the stored best score, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<u64>, StoreError>;

    /// Saves a new best score.
    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for &mut S {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        (**self).save(best)
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: Option<u64>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a best score.
    pub fn with_best(best: u64) -> Self {
        Self { best: Some(best) }
    }

    /// Returns the stored value.
    pub fn best(&self) -> Option<u64> {
        self.best
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        self.best = Some(best);
        Ok(())
    }
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Loads the best score, reading any failure or absence as 0.
#[instrument(skip(store))]
pub fn load_best<S: BestScoreStore + ?Sized>(store: &S) -> u64 {
    match store.load() {
        Ok(Some(best)) => {
            debug!(best, "Loaded best score");
            best
        }
        Ok(None) => 0,
        Err(e) => {
            warn!(error = %e, "Failed to load best score, starting from 0");
            0
        }
    }
}

/// Saves the best score, logging and ignoring failures.
#[instrument(skip(store))]
pub fn save_best<S: BestScoreStore + ?Sized>(store: &mut S, best: u64) {
    if let Err(e) = store.save(best) {
        warn!(error = %e, best, "Failed to save best score");
    }
}
