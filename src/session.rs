//! Board session - the mutate, persist, recompute, diff pipeline.
//!
//! Every user action flows through [`BoardSession`]: the model mutates, the
//! store commits the new state, the complete-line set is recomputed, and the
//! tracker diffs it against the previous evaluation. The returned
//! [`BoardUpdate`] is the whole renderer contract: full state for redraw,
//! the complete set for persistent marking, and the newly-completed set for
//! one-shot feedback.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::board::{
    BoardError, BoardModel, Cell, CompletionTracker, LineRef, complete_lines, is_board_full,
};
use crate::store::{StateStore, StoreError};

/// Error from a session operation.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// A board mutator rejected the operation.
    #[display("{_0}")]
    Board(BoardError),
    /// Persistence failed.
    #[display("{_0}")]
    Store(StoreError),
}

/// Result of one trip through the pipeline, consumed by the renderer.
#[derive(Debug, Clone, Getters)]
pub struct BoardUpdate {
    /// Grid dimension at the time of the update.
    size: usize,
    /// Cell contents in row-major order, for redraw.
    cells: Vec<Cell>,
    /// Checked cell indices.
    checked: BTreeSet<usize>,
    /// Every line currently complete, for persistent visual marking.
    complete: BTreeSet<LineRef>,
    /// Lines that became complete in this update, for one-shot feedback.
    newly_completed: BTreeSet<LineRef>,
    /// Whether every cell on the board is checked.
    board_full: bool,
}

/// Owns the board model, its completion tracker, and the backing store.
///
/// Single-threaded by design: every operation runs to completion before the
/// next event. A multi-threaded host must serialize access with a mutex or
/// a single-writer actor.
#[derive(Debug)]
pub struct BoardSession {
    model: BoardModel,
    tracker: CompletionTracker,
    store: StateStore,
}

impl BoardSession {
    /// Opens a session against the given store.
    ///
    /// Loads the saved board if one exists; otherwise starts a fresh board
    /// of `fresh_size` cells per side. Load failures degrade to the default
    /// board with a warning, never an error. The tracker starts empty, so
    /// the first [`refresh`](Self::refresh) reports restored complete lines
    /// as newly completed once.
    #[instrument(skip(store))]
    pub fn open(store: StateStore, fresh_size: usize) -> Self {
        let model = match store.load() {
            Ok(Some(model)) => model,
            Ok(None) => BoardModel::with_size(fresh_size).unwrap_or_else(|err| {
                warn!(error = %err, "Invalid fresh board size, using defaults");
                BoardModel::new()
            }),
            Err(err) => {
                warn!(error = %err, "Failed to load saved board, using defaults");
                BoardModel::new()
            }
        };
        info!(size = model.size(), "Session opened");
        Self {
            model,
            tracker: CompletionTracker::new(),
            store,
        }
    }

    /// Returns the current board model.
    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    /// Re-evaluates completion without mutating or persisting anything.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> BoardUpdate {
        self.evaluate()
    }

    /// Toggles the checked state of the cell at `index`.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, index: usize) -> Result<BoardUpdate, SessionError> {
        self.model.toggle_checked(index)?;
        self.commit_and_evaluate()
    }

    /// Sets the goal text of the cell at `index`.
    #[instrument(skip(self, text))]
    pub fn set_goal(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<BoardUpdate, SessionError> {
        self.model.set_cell_value(index, text)?;
        self.commit_and_evaluate()
    }

    /// Resizes the grid, clearing checks and completion state.
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: usize) -> Result<BoardUpdate, SessionError> {
        self.model.set_size(size)?;
        self.tracker.reset();
        self.commit_and_evaluate()
    }

    /// Shuffles the cell values, clearing checks and completion state.
    #[instrument(skip(self))]
    pub fn shuffle(&mut self) -> Result<BoardUpdate, SessionError> {
        let mut rng = rand::thread_rng();
        self.model.shuffle_visible_cells(&mut rng);
        self.tracker.reset();
        self.commit_and_evaluate()
    }

    /// Unchecks every cell, clearing completion state.
    #[instrument(skip(self))]
    pub fn clear_checked(&mut self) -> Result<BoardUpdate, SessionError> {
        self.model.clear_checked();
        self.tracker.reset();
        self.commit_and_evaluate()
    }

    /// Empties every goal text. Checks and completion state are untouched.
    #[instrument(skip(self))]
    pub fn clear_goals(&mut self) -> Result<BoardUpdate, SessionError> {
        self.model.clear_all_cell_values();
        self.commit_and_evaluate()
    }

    /// Replaces the board with one imported from an external file.
    ///
    /// On any import failure the current board is left untouched.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<BoardUpdate, SessionError> {
        let imported = StateStore::import(path)?;
        self.model = imported;
        self.tracker.reset();
        self.commit_and_evaluate()
    }

    /// Writes a timestamped export artifact into `dir` and returns its path.
    #[instrument(skip(self, dir))]
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<PathBuf, SessionError> {
        Ok(self.store.export(&self.model, dir)?)
    }

    /// The commit step: mutation is durable before the mutating call
    /// returns, then the pipeline recomputes and diffs.
    fn commit_and_evaluate(&mut self) -> Result<BoardUpdate, SessionError> {
        self.store.commit(&self.model)?;
        Ok(self.evaluate())
    }

    fn evaluate(&mut self) -> BoardUpdate {
        let complete = complete_lines(self.model.size(), self.model.checked());
        let newly_completed = self.tracker.observe(complete.clone());
        BoardUpdate {
            size: self.model.size(),
            cells: self.model.cells().to_vec(),
            checked: self.model.checked().clone(),
            complete,
            newly_completed,
            board_full: is_board_full(self.model.checked(), self.model.size()),
        }
    }
}
