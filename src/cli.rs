//! Command-line interface for the bingo tracker.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bingo Tracker - persistent goal board with win-line detection
#[derive(Parser, Debug)]
#[command(name = "bingo_tracker")]
#[command(about = "Track a bingo board of personal goals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// State file path (overrides the configured one)
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current board
    Show,

    /// Toggle the checked state of a cell
    Toggle {
        /// Cell number, counted row by row from 1
        cell: usize,
    },

    /// Set the goal text of a cell
    Goal {
        /// Cell number, counted row by row from 1
        cell: usize,

        /// Goal text (empty clears the cell back to a placeholder)
        text: String,
    },

    /// Resize the grid, clearing all checks
    Resize {
        /// Cells per side
        size: usize,
    },

    /// Shuffle the goals and reset all checks
    Shuffle,

    /// Uncheck every cell
    ClearChecks,

    /// Erase every goal text, keeping checks
    ClearGoals,

    /// Export the board to a timestamped JSON artifact
    Export {
        /// Directory to write the artifact into (defaults to the configured
        /// export directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Import a board from a JSON file
    Import {
        /// File holding an exported board
        file: PathBuf,
    },
}
