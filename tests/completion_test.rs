//! Tests for line detection and edge-triggered completion tracking.

use bingo_tracker::{
    CompletionTracker, Diagonal, LineRef, complete_lines, diff, is_board_full,
};
use std::collections::BTreeSet;

fn checked(indices: &[usize]) -> BTreeSet<usize> {
    indices.iter().copied().collect()
}

fn lines(refs: &[LineRef]) -> BTreeSet<LineRef> {
    refs.iter().copied().collect()
}

#[test]
fn test_top_row_then_second_row() {
    let mut tracker = CompletionTracker::new();

    // Checking the top row completes Row(0), reported once.
    let current = complete_lines(3, &checked(&[0, 1, 2]));
    assert_eq!(current, lines(&[LineRef::Row(0)]));
    let newly = tracker.observe(current);
    assert_eq!(newly, lines(&[LineRef::Row(0)]));

    // Additionally checking the second row reports only Row(1).
    let current = complete_lines(3, &checked(&[0, 1, 2, 3, 4, 5]));
    assert_eq!(current, lines(&[LineRef::Row(0), LineRef::Row(1)]));
    let newly = tracker.observe(current);
    assert_eq!(newly, lines(&[LineRef::Row(1)]));
}

#[test]
fn test_diagonals() {
    let main = complete_lines(3, &checked(&[0, 4, 8]));
    assert_eq!(main, lines(&[LineRef::Diag(Diagonal::Main)]));

    let anti = complete_lines(3, &checked(&[2, 4, 6]));
    assert_eq!(anti, lines(&[LineRef::Diag(Diagonal::Anti)]));
}

#[test]
fn test_edge_trigger_law() {
    let mut tracker = CompletionTracker::new();
    let full_row = checked(&[0, 1, 2]);

    // 0 -> 1 transition fires exactly once.
    let newly = tracker.observe(complete_lines(3, &full_row));
    assert_eq!(newly.len(), 1);

    // Re-evaluating an unchanged complete line never re-fires.
    for _ in 0..3 {
        let newly = tracker.observe(complete_lines(3, &full_row));
        assert!(newly.is_empty());
    }

    // Unchecking one cell and re-checking it fires again.
    let newly = tracker.observe(complete_lines(3, &checked(&[0, 1])));
    assert!(newly.is_empty());
    let newly = tracker.observe(complete_lines(3, &full_row));
    assert_eq!(newly, lines(&[LineRef::Row(0)]));
}

#[test]
fn test_diff_is_plain_set_difference() {
    let previous = lines(&[LineRef::Row(0), LineRef::Col(2)]);
    let current = lines(&[LineRef::Col(2), LineRef::Diag(Diagonal::Main)]);
    assert_eq!(
        diff(&previous, &current),
        lines(&[LineRef::Diag(Diagonal::Main)])
    );
    // Lines that disappeared are not reported either way.
    assert!(!diff(&previous, &current).contains(&LineRef::Row(0)));
}

#[test]
fn test_is_board_full_all_subset_sizes() {
    for size in 1..=6 {
        let total = size * size;
        for count in 0..=total {
            let set: BTreeSet<usize> = (0..count).collect();
            assert_eq!(is_board_full(&set, size), count == total);
        }
    }
}

#[test]
fn test_indices_for_line_matches_detection() {
    // Checking exactly the indices a line reports must complete that line.
    for size in [1, 3, 4, 6] {
        for line in [
            LineRef::Row(size - 1),
            LineRef::Col(0),
            LineRef::Diag(Diagonal::Main),
            LineRef::Diag(Diagonal::Anti),
        ] {
            let set: BTreeSet<usize> = line.indices(size).into_iter().collect();
            assert!(
                complete_lines(size, &set).contains(&line),
                "line {line} incomplete on size {size}"
            );
        }
    }
}
