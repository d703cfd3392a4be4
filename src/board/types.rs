//! Core domain types for the bingo board.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

use super::error::BoardError;

/// Grid dimension used for a fresh board and for healing malformed input.
pub const DEFAULT_SIZE: usize = 3;

/// A single goal cell on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Free-text goal label. Empty means the cell renders as a placeholder.
    value: String,
}

impl Cell {
    /// Creates a cell with the given goal text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the goal text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this cell should render as a placeholder.
    ///
    /// Empty and whitespace-only values are placeholders; any other value,
    /// however short, is a real goal.
    pub fn is_placeholder(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// In-memory model of the bingo board.
///
/// Invariants held after every mutation:
/// - `size >= 1`
/// - `cells.len() == size * size` (index `i` maps to row `i / size`,
///   column `i % size`)
/// - every index in `checked` is in `[0, size * size)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    size: usize,
    cells: Vec<Cell>,
    checked: BTreeSet<usize>,
}

impl BoardModel {
    /// Creates an empty board at [`DEFAULT_SIZE`].
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE).expect("default size is positive")
    }

    /// Creates an empty board with the given grid dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { requested: size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
            checked: BTreeSet::new(),
        })
    }

    /// Rebuilds a board from persisted or imported parts, healing anything
    /// malformed rather than failing.
    ///
    /// A zero size becomes [`DEFAULT_SIZE`], the cell vector is padded or
    /// truncated to `size * size`, and out-of-range checked indices are
    /// dropped.
    #[instrument(skip(cells, checked))]
    pub fn from_parts(
        size: usize,
        mut cells: Vec<Cell>,
        checked: impl IntoIterator<Item = usize>,
    ) -> Self {
        let size = if size == 0 {
            debug!(requested = size, healed = DEFAULT_SIZE, "Healing invalid size");
            DEFAULT_SIZE
        } else {
            size
        };
        let total = size * size;
        cells.resize(total, Cell::default());

        let mut kept = BTreeSet::new();
        for index in checked {
            if index < total {
                kept.insert(index);
            } else {
                debug!(index, total, "Dropping out-of-range checked index");
            }
        }

        Self {
            size,
            cells,
            checked: kept,
        }
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells on the board (`size * size`).
    pub fn total(&self) -> usize {
        self.size * self.size
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at the given index, if in range.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns the checked cell indices.
    pub fn checked(&self) -> &BTreeSet<usize> {
        &self.checked
    }

    /// Whether the cell at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Whether every cell on the board is checked.
    pub fn is_full(&self) -> bool {
        self.checked.len() == self.total()
    }

    /// Sets the grid dimension, resizing the cell vector to `size * size`.
    ///
    /// Existing cell content is preserved by index: growth appends empty
    /// cells, shrinking truncates. The checked set is cleared, since check
    /// positions are meaningless across a resize.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument(skip(self))]
    pub fn set_size(&mut self, size: usize) -> Result<(), BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { requested: size });
        }
        self.size = size;
        self.cells.resize(size * size, Cell::default());
        self.checked.clear();
        debug!(size, total = self.total(), "Board resized");
        Ok(())
    }

    /// Sets the goal text of the cell at `index`.
    ///
    /// Any string is a valid value, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index` is outside the
    /// current grid.
    #[instrument(skip(self, value))]
    pub fn set_cell_value(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), BoardError> {
        self.in_range(index)?;
        self.cells[index] = Cell::new(value);
        Ok(())
    }

    /// Flips the checked state of the cell at `index` and returns the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index` is outside the
    /// current grid.
    #[instrument(skip(self))]
    pub fn toggle_checked(&mut self, index: usize) -> Result<bool, BoardError> {
        self.in_range(index)?;
        let now_checked = if self.checked.remove(&index) {
            false
        } else {
            self.checked.insert(index);
            true
        };
        debug!(index, now_checked, "Toggled cell");
        Ok(now_checked)
    }

    /// Unchecks every cell.
    #[instrument(skip(self))]
    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    /// Empties the goal text of every cell. Checked state is untouched.
    #[instrument(skip(self))]
    pub fn clear_all_cell_values(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Permutes the cell values with an unbiased Fisher-Yates shuffle and
    /// clears the checked set.
    ///
    /// Checks are tied to the content positions that just moved, so they
    /// cannot survive a shuffle.
    #[instrument(skip(self, rng))]
    pub fn shuffle_visible_cells<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.shuffle(rng);
        self.checked.clear();
        debug!(total = self.total(), "Shuffled cells");
    }

    fn in_range(&self, index: usize) -> Result<(), BoardError> {
        if index < self.total() {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange {
                index,
                size: self.size,
            })
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
