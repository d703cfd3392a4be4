//! Win-line detection for the bingo board.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Which diagonal of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Diagonal {
    /// Top-left to bottom-right.
    Main,
    /// Top-right to bottom-left.
    Anti,
}

/// Reference to a single line of cells evaluated together for completion.
///
/// Identity is the tag plus its index, which makes `LineRef` the diff key
/// when completion state is compared between evaluations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LineRef {
    /// Row `r`, rows numbered from the top.
    Row(usize),
    /// Column `c`, columns numbered from the left.
    Col(usize),
    /// One of the two diagonals.
    Diag(Diagonal),
}

impl LineRef {
    /// Cell indices belonging to this line on a `size`-dimension grid, in
    /// ascending traversal order.
    ///
    /// This is the inverse of [`complete_lines`]: renderers use it to map a
    /// completed line back to the cells it covers.
    pub fn indices(self, size: usize) -> Vec<usize> {
        match self {
            LineRef::Row(r) => (0..size).map(|k| r * size + k).collect(),
            LineRef::Col(c) => (0..size).map(|k| c + k * size).collect(),
            LineRef::Diag(Diagonal::Main) => (0..size).map(|k| k * (size + 1)).collect(),
            LineRef::Diag(Diagonal::Anti) => (0..size).map(|k| (k + 1) * (size - 1)).collect(),
        }
    }

    /// Human-readable label for this line, rows and columns numbered from 1.
    pub fn label(self) -> String {
        match self {
            LineRef::Row(r) => format!("row {}", r + 1),
            LineRef::Col(c) => format!("column {}", c + 1),
            LineRef::Diag(Diagonal::Main) => "main diagonal".to_string(),
            LineRef::Diag(Diagonal::Anti) => "anti diagonal".to_string(),
        }
    }
}

impl std::fmt::Display for LineRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every line on a `size`-dimension grid: `size` rows, `size` columns, and
/// both diagonals.
pub fn all_lines(size: usize) -> impl Iterator<Item = LineRef> {
    (0..size)
        .map(LineRef::Row)
        .chain((0..size).map(LineRef::Col))
        .chain([LineRef::Diag(Diagonal::Main), LineRef::Diag(Diagonal::Anti)])
}

/// Computes the set of currently complete lines.
///
/// A line is complete iff every one of its cell indices is in `checked`.
/// Pure function of `(size, checked)` with no hidden state.
#[instrument(skip(checked), fields(checked_count = checked.len()))]
pub fn complete_lines(size: usize, checked: &BTreeSet<usize>) -> BTreeSet<LineRef> {
    all_lines(size)
        .filter(|line| line.indices(size).iter().all(|i| checked.contains(i)))
        .collect()
}
