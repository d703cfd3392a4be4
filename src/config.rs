//! Tracker configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::board::DEFAULT_SIZE;

/// Configuration for the tracker, loaded from an optional TOML file.
///
/// Every field has a default, so an absent or partial file is fine.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Path of the state file holding the persisted board blob.
    #[serde(default = "default_state_path")]
    state_path: PathBuf,

    /// Grid dimension used when no saved board exists.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Directory export artifacts are written into.
    #[serde(default = "default_export_dir")]
    export_dir: PathBuf,
}

fn default_state_path() -> PathBuf {
    PathBuf::from("bingo_state.json")
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl TrackerConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// TOML, or sets a zero board size.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }

        info!(
            state_path = %config.state_path.display(),
            board_size = config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path` if given, degrading to defaults with
    /// a warning when the file is unusable.
    #[instrument(skip(path))]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_file(path).unwrap_or_else(|err| {
                warn!(error = %err, "Failed to load config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            board_size: default_board_size(),
            export_dir: default_export_dir(),
        }
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::new();
        assert_eq!(config.board_size(), &DEFAULT_SIZE);
        assert_eq!(config.state_path(), &PathBuf::from("bingo_state.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: TrackerConfig = toml::from_str("board_size = 5").unwrap();
        assert_eq!(config.board_size(), &5);
        assert_eq!(config.export_dir(), &PathBuf::from("."));
    }
}
