//! Completion tracking - diffs complete-line sets between evaluations.

use std::collections::BTreeSet;
use tracing::{debug, instrument};

use super::lines::LineRef;

/// Lines in `current` that are not in `previous`.
///
/// Order-independent set difference; membership is by [`LineRef`] identity.
pub fn diff(previous: &BTreeSet<LineRef>, current: &BTreeSet<LineRef>) -> BTreeSet<LineRef> {
    current.difference(previous).copied().collect()
}

/// Whether every cell of a `size`-dimension grid is checked.
pub fn is_board_full(checked: &BTreeSet<usize>, size: usize) -> bool {
    checked.len() == size * size
}

/// Remembers the complete-line set of the last evaluation so completion
/// feedback fires exactly once per 0-to-1 transition.
///
/// A line reported as newly completed is not reported again until it first
/// leaves the complete set (a cell unchecked) and re-enters it. This state
/// lives only in memory and is reset on bulk changes to the board (resize,
/// shuffle, check-clearing, import).
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    previous: BTreeSet<LineRef>,
}

impl CompletionTracker {
    /// Creates a tracker with no remembered lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diffs `current` against the last observed set, stores `current` as
    /// the new baseline, and returns the newly completed lines.
    #[instrument(skip(self, current), fields(current_count = current.len()))]
    pub fn observe(&mut self, current: BTreeSet<LineRef>) -> BTreeSet<LineRef> {
        let newly = diff(&self.previous, &current);
        if !newly.is_empty() {
            debug!(newly_count = newly.len(), "New lines completed");
        }
        self.previous = current;
        newly
    }

    /// Forgets all remembered lines.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// The complete-line set as of the last observation.
    pub fn previous(&self) -> &BTreeSet<LineRef> {
        &self.previous
    }
}
