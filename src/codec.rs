//! Serialization of board state to and from the persisted JSON blob.
//!
//! The blob is versionless: `{ "size": n, "cells": [{"value": ".."}],
//! "checked": [..] }`. Encoding is a straight serde serialization. Decoding
//! is defensive field-by-field over [`serde_json::Value`], because the blob
//! may come from an older save, a hand-edited file, or a user import: only a
//! top-level parse failure is an error, every malformed field heals to its
//! default.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::board::{BoardModel, Cell, DEFAULT_SIZE};

/// Persisted or imported blob is not parseable JSON.
#[derive(Debug, Clone, Display, Error)]
#[display("Corrupt board state: {} at {}:{}", message, file, line)]
pub struct CorruptStateError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CorruptStateError {
    /// Creates a new corrupt-state error with caller location tracking.
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

impl From<serde_json::Error> for CorruptStateError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Wire form of the board blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedBoard {
    size: usize,
    cells: Vec<Cell>,
    checked: Vec<usize>,
}

impl From<&BoardModel> for SavedBoard {
    fn from(model: &BoardModel) -> Self {
        Self {
            size: model.size(),
            cells: model.cells().to_vec(),
            checked: model.checked().iter().copied().collect(),
        }
    }
}

/// Serializes a model to the compact blob written to the state file.
///
/// # Errors
///
/// Returns [`CorruptStateError`] if serialization fails.
#[instrument(skip(model))]
pub fn encode(model: &BoardModel) -> Result<String, CorruptStateError> {
    Ok(serde_json::to_string(&SavedBoard::from(model))?)
}

/// Serializes a model to the indented blob used for export artifacts.
///
/// # Errors
///
/// Returns [`CorruptStateError`] if serialization fails.
#[instrument(skip(model))]
pub fn encode_pretty(model: &BoardModel) -> Result<String, CorruptStateError> {
    Ok(serde_json::to_string_pretty(&SavedBoard::from(model))?)
}

/// Deserializes a blob into a board model, healing malformed fields.
///
/// Missing or non-positive `size` defaults to [`DEFAULT_SIZE`]; a missing or
/// non-array `cells` becomes empty and is padded to `size * size`; a cell
/// without a usable string `value` coerces to the empty string and unknown
/// cell fields are ignored; non-numeric or out-of-range `checked` entries are
/// dropped silently.
///
/// # Errors
///
/// Returns [`CorruptStateError`] only when `raw` is not parseable JSON.
#[instrument(skip(raw), fields(len = raw.len()))]
pub fn decode(raw: &str) -> Result<BoardModel, CorruptStateError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(decode_value(&value))
}

fn decode_value(value: &Value) -> BoardModel {
    let size = value
        .get("size")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .filter(|n| *n > 0)
        .unwrap_or_else(|| {
            debug!("Missing or invalid size, defaulting");
            DEFAULT_SIZE
        });
    let total = size * size;

    let cells: Vec<Cell> = match value.get("cells").and_then(Value::as_array) {
        Some(entries) => entries.iter().map(decode_cell).collect(),
        None => {
            debug!("Missing or non-array cells, defaulting to empty");
            Vec::new()
        }
    };

    let checked = match value.get("checked").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(Value::as_u64)
            .map(|n| n as usize)
            .filter(|n| *n < total)
            .collect(),
        None => Vec::new(),
    };

    BoardModel::from_parts(size, cells, checked)
}

fn decode_cell(entry: &Value) -> Cell {
    match entry.get("value").and_then(Value::as_str) {
        Some(text) => Cell::new(text),
        None => Cell::default(),
    }
}
