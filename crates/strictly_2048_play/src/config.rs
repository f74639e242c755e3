//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_2048.toml";

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// File holding the best score.
    #[serde(default = "default_best_score_path")]
    best_score_path: PathBuf,

    /// Fixed seed for tile spawning; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_best_score_path() -> PathBuf {
    PathBuf::from("strictly_2048_best.json")
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            best_score_path: default_best_score_path(),
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(best_score_path = %config.best_score_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads an explicit config file, or the default file if it exists, or
    /// falls back to built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, best_file: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(best_file) = best_file {
            self.best_score_path = best_file;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.best_score_path(), &default_best_score_path());
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "best_score_path = \"/tmp/best.json\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.best_score_path(), &PathBuf::from("/tmp/best.json"));
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();

        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(PlayConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(Some(PathBuf::from("b.json")), Some(9));
        assert_eq!(config.best_score_path(), &PathBuf::from("b.json"));
        assert_eq!(*config.seed(), Some(9));

        let kept = PlayConfig::default().with_overrides(None, None);
        assert_eq!(kept, PlayConfig::default());
    }
}
