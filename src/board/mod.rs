mod error;
mod lines;
mod tracker;
mod types;

pub use error::BoardError;
pub use lines::{Diagonal, LineRef, all_lines, complete_lines};
pub use tracker::{CompletionTracker, diff, is_board_full};
pub use types::{BoardModel, Cell, DEFAULT_SIZE};
