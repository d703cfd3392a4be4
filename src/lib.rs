//! Bingo board tracker - a grid of user-defined goal cells with persistent
//! state and win-line detection.
//!
//! # Architecture
//!
//! - **Board**: in-memory model of cells and checks with invariant-preserving
//!   mutators, pure win-line detection, and edge-triggered completion diffing
//! - **Codec**: defensive serialization of the single persisted JSON blob
//! - **Store**: file-backed persistence, export artifacts, and import
//! - **Session**: the mutate, persist, recompute, diff pipeline and the
//!   renderer contract
//!
//! # Example
//!
//! ```no_run
//! use bingo_tracker::{BoardSession, StateStore};
//!
//! let store = StateStore::new("bingo_state.json");
//! let mut session = BoardSession::open(store, 3);
//!
//! let update = session.toggle(4)?;
//! for line in update.newly_completed() {
//!     println!("completed {line}!");
//! }
//! # Ok::<(), bingo_tracker::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod codec;
mod config;
mod session;
mod store;

// Crate-level exports - Board model and line detection
pub use board::{
    BoardError, BoardModel, Cell, CompletionTracker, DEFAULT_SIZE, Diagonal, LineRef, all_lines,
    complete_lines, diff, is_board_full,
};

// Crate-level exports - Persistence codec
pub use codec::{CorruptStateError, decode, encode, encode_pretty};

// Crate-level exports - Configuration
pub use config::{ConfigError, TrackerConfig};

// Crate-level exports - Session pipeline
pub use session::{BoardSession, BoardUpdate, SessionError};

// Crate-level exports - State store
pub use store::{StateStore, StoreError};
