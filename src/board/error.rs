//! Board error types.

use derive_more::{Display, Error};

/// Errors raised by board mutators.
///
/// These indicate a defect in the caller, not bad external input: the
/// defensive codec path heals malformed persisted data before it ever
/// reaches a mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Grid size must be a positive integer.
    #[display("invalid grid size {requested}: size must be at least 1")]
    InvalidSize {
        /// The rejected size.
        requested: usize,
    },
    /// Cell index outside the current grid.
    #[display("index {index} out of range for a {size}x{size} board")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Grid dimension at the time of the call.
        size: usize,
    },
}
