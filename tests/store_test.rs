//! Tests for the file-backed state store.

use bingo_tracker::{BoardModel, StateStore};
use tempfile::TempDir;

#[test]
fn test_load_absent_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_commit_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    let mut model = BoardModel::new();
    model.set_cell_value(2, "run a marathon").unwrap();
    model.toggle_checked(2).unwrap();

    store.commit(&model).unwrap();
    assert_eq!(store.load().unwrap(), Some(model));
}

#[test]
fn test_commit_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("nested/deeper/state.json"));
    store.commit(&BoardModel::new()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_load_corrupt_blob_errors_but_default_path_degrades() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "]{ garbage").unwrap();

    let store = StateStore::new(path);
    assert!(store.load().is_err());
    // The startup boundary never propagates the failure.
    assert_eq!(store.load_or_default(), BoardModel::new());
}

#[test]
fn test_export_writes_timestamped_artifact() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let model = BoardModel::new();

    let artifact = store.export(&model, dir.path().join("exports")).unwrap();
    let name = artifact.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("bingo-"));
    assert!(name.ends_with(".json"));

    assert_eq!(StateStore::import(&artifact).unwrap(), model);
}

#[test]
fn test_import_missing_file_errors() {
    let dir = TempDir::new().unwrap();
    assert!(StateStore::import(dir.path().join("nope.json")).is_err());
}
