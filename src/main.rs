//! Bingo Tracker - command-line board client.
//!
//! The binary is the rendering collaborator: it drives the library session
//! through one operation per invocation and draws the resulting
//! [`BoardUpdate`] to the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use bingo_tracker::{BoardSession, BoardUpdate, StateStore, TrackerConfig};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = TrackerConfig::load_or_default(cli.config.as_deref());
    let state_path = cli.state.unwrap_or_else(|| config.state_path().clone());

    let store = StateStore::new(state_path);
    let mut session = BoardSession::open(store, *config.board_size());

    // Prime completion state with the restored board so a mutation below
    // reports only the lines it completed itself.
    let startup = session.refresh();

    match cli.command {
        Command::Show => {
            draw(&startup);
        }
        Command::Toggle { cell } => {
            let update = session.toggle(cell_index(cell)?)?;
            announce(&update);
            draw(&update);
        }
        Command::Goal { cell, text } => {
            let update = session.set_goal(cell_index(cell)?, text)?;
            draw(&update);
        }
        Command::Resize { size } => {
            let update = session.resize(size)?;
            info!(size, "Grid resized");
            draw(&update);
        }
        Command::Shuffle => {
            let update = session.shuffle()?;
            draw(&update);
        }
        Command::ClearChecks => {
            let update = session.clear_checked()?;
            draw(&update);
        }
        Command::ClearGoals => {
            let update = session.clear_goals()?;
            draw(&update);
        }
        Command::Export { dir } => {
            let dir = dir.unwrap_or_else(|| config.export_dir().clone());
            let path = session.export(dir)?;
            println!("Exported board to {}", path.display());
        }
        Command::Import { file } => {
            let update = session
                .import(&file)
                .with_context(|| format!("Could not import {}", file.display()))?;
            println!("Imported board from {}", file.display());
            draw(&update);
        }
    }

    Ok(())
}

/// Converts a 1-based cell number from the command line to a model index.
fn cell_index(cell: usize) -> Result<usize> {
    cell.checked_sub(1).context("cell numbers start at 1")
}

/// One-shot feedback for lines completed by this operation.
fn announce(update: &BoardUpdate) {
    for line in update.newly_completed() {
        println!("*** Completed {line}! ***");
    }
    if *update.board_full() {
        println!("*** Blackout - every cell is checked! ***");
    }
}

/// Draws the board grid and its persistent completion marks.
fn draw(update: &BoardUpdate) {
    let size = *update.size();
    for row in 0..size {
        let mut text = String::new();
        for col in 0..size {
            let index = row * size + col;
            let cell = &update.cells()[index];
            let mark = if update.checked().contains(&index) { 'x' } else { ' ' };
            let label = if cell.is_placeholder() {
                "(goal)".to_string()
            } else {
                clip(cell.value(), 14)
            };
            text.push_str(&format!("[{mark}] {label:<14}"));
            if col + 1 < size {
                text.push_str("  ");
            }
        }
        println!("{text}");
    }

    let complete: Vec<String> = update.complete().iter().map(|l| l.label()).collect();
    if !complete.is_empty() {
        println!("Complete: {}", complete.join(", "));
    }
}

/// Clips a label to at most `max` characters.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
