//! File-backed persistence for the board blob.
//!
//! One state file holds the whole board as a single opaque JSON blob, read
//! once at startup and rewritten after every mutation. Export writes the
//! same schema to a timestamped artifact; import reads it back from a
//! user-supplied file.

use chrono::Local;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::board::BoardModel;
use crate::codec::{self, CorruptStateError};

/// Persistence error with location tracking.
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

impl From<CorruptStateError> for StoreError {
    #[track_caller]
    fn from(err: CorruptStateError) -> Self {
        Self::new(err.to_string())
    }
}

/// File-backed store for the single board blob.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Creates a store backed by the given state file path.
    ///
    /// The file does not have to exist yet; a missing file reads as "no
    /// saved board".
    #[instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = %path.display(), "Creating state store");
        Self { path }
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved board, if any.
    ///
    /// Returns `Ok(None)` when no state file exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or its
    /// blob is not parseable JSON.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<BoardModel>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No state file, starting fresh");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let model = codec::decode(&raw)?;
        info!(size = model.size(), checked = model.checked().len(), "Board loaded");
        Ok(Some(model))
    }

    /// Loads the saved board, degrading to a fresh default on any failure.
    ///
    /// This is the startup boundary: a corrupt or unreadable state file is
    /// logged and replaced by the default board rather than crashing.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_or_default(&self) -> BoardModel {
        match self.load() {
            Ok(Some(model)) => model,
            Ok(None) => BoardModel::new(),
            Err(err) => {
                warn!(error = %err, "Failed to load saved board, using defaults");
                BoardModel::new()
            }
        }
    }

    /// Writes the board blob to the state file.
    ///
    /// Every mutation commits through here before the mutating call returns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    #[instrument(skip(self, model), fields(path = %self.path.display()))]
    pub fn commit(&self, model: &BoardModel) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let blob = codec::encode(model)?;
        std::fs::write(&self.path, blob)?;
        debug!("Board committed");
        Ok(())
    }

    /// Writes a timestamped export artifact into `dir` and returns its path.
    ///
    /// The artifact carries the same schema as the state file, indented for
    /// readability.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    #[instrument(skip(self, model), fields(dir = %dir.as_ref().display()))]
    pub fn export(&self, model: &BoardModel, dir: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        let name = format!("bingo-{}.json", Local::now().format("%Y%m%d-%H%M%S"));
        let path = dir.as_ref().join(name);
        std::fs::create_dir_all(dir.as_ref())?;
        std::fs::write(&path, codec::encode_pretty(model)?)?;
        info!(path = %path.display(), "Board exported");
        Ok(path)
    }

    /// Reads a board from an externally supplied file.
    ///
    /// The blob is decoded defensively (unknown fields ignored, malformed
    /// fields healed), but an unreadable file or unparseable JSON is an
    /// error: the caller leaves its current state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or is not JSON.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn import(path: impl AsRef<Path>) -> Result<BoardModel, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let model = codec::decode(&raw)?;
        info!(size = model.size(), "Board imported");
        Ok(model)
    }
}
