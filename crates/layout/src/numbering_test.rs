use crate::instructions::written_row_instructions;
use crate::numbering::{row_direction, run_length_labels};
use crate::test_utils::{row_of, test_palette};
use yarnpress_chart::Grid;

#[test]
fn test_standard_direction_alternates_from_left_to_right() {
    assert!(!row_direction(0, false).reversed, "row 1 reads left to right");
    assert!(row_direction(1, false).reversed, "row 2 reads right to left");
    assert!(!row_direction(2, false).reversed);
    assert!(row_direction(3, false).reversed);
}

#[test]
fn test_left_handed_mode_inverts_every_row() {
    for row in 0..24 {
        assert_ne!(
            row_direction(row, false).reversed,
            row_direction(row, true).reversed,
            "row index {}",
            row
        );
    }
}

#[test]
fn test_run_length_resets_across_gaps() {
    let row = row_of(&[Some("a"), Some("a"), Some("a"), None, Some("a"), Some("a")]);
    let labels = run_length_labels(&row, 0, false);
    assert_eq!(labels, vec!["1", "2", "3", "", "1", "2"]);
}

#[test]
fn test_run_length_resets_on_color_change() {
    let row = row_of(&[Some("a"), Some("a"), Some("b"), Some("a")]);
    let labels = run_length_labels(&row, 0, false);
    assert_eq!(labels, vec!["1", "2", "1", "1"]);
}

#[test]
fn test_run_length_walks_reversed_rows_from_the_right() {
    // Row index 1 is reversed for right-handed work, so counting
    // starts at the rightmost cell.
    let row = row_of(&[Some("a"), Some("a"), Some("b"), Some("b")]);
    let labels = run_length_labels(&row, 1, false);
    assert_eq!(labels, vec!["2", "1", "2", "1"]);
}

#[test]
fn test_run_length_direction_follows_handedness() {
    let row = row_of(&[Some("a"), Some("a"), Some("b")]);
    // Row 1: forward for right-handed, reversed for left-handed.
    assert_eq!(run_length_labels(&row, 0, false), vec!["1", "2", "1"]);
    assert_eq!(run_length_labels(&row, 0, true), vec!["2", "1", "1"]);
}

#[test]
fn test_instructions_share_the_chart_direction() {
    let palette = test_palette(&["a", "b"]);
    let mut cells = row_of(&[Some("a"), Some("a"), Some("b")]);
    cells.extend(row_of(&[Some("a"), Some("b"), Some("b")]));
    let grid = Grid::new(3, 2, cells).unwrap();

    let rows = written_row_instructions(&grid, &palette, false);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row_number, 1);
    assert!(!rows[0].reversed);
    assert_eq!(rows[0].text, "2 Yarn A, 1 Yarn B");
    // Row 2 is worked right to left, so its runs come out mirrored.
    assert!(rows[1].reversed);
    assert_eq!(rows[1].text, "2 Yarn B, 1 Yarn A");
}

#[test]
fn test_instructions_flip_with_handedness() {
    let palette = test_palette(&["a", "b"]);
    let cells = row_of(&[Some("a"), Some("a"), Some("b")]);
    let grid = Grid::new(3, 1, cells).unwrap();

    let right = written_row_instructions(&grid, &palette, false);
    let left = written_row_instructions(&grid, &palette, true);
    assert_eq!(right[0].text, "2 Yarn A, 1 Yarn B");
    assert_eq!(left[0].text, "1 Yarn B, 2 Yarn A");
    assert!(left[0].reversed);
}

#[test]
fn test_instructions_describe_gaps_as_open() {
    let palette = test_palette(&["a"]);
    let cells = row_of(&[Some("a"), None, None, Some("a")]);
    let grid = Grid::new(4, 1, cells).unwrap();

    let rows = written_row_instructions(&grid, &palette, false);
    assert_eq!(rows[0].text, "1 Yarn A, 2 open, 1 Yarn A");
}
