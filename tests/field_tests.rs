//! PlayField tests: border layout, locking and row marking.

use ascii_tetris::core::PlayField;
use ascii_tetris::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

fn count(field: &PlayField, wanted: Cell) -> usize {
    field.cells().iter().filter(|&&c| c == wanted).count()
}

#[test]
fn test_field_dimensions_and_border() {
    let field = PlayField::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);
    // 17 rows x 2 sides + 12 floor cells.
    assert_eq!(count(&field, Cell::Border), 17 * 2 + 12);
    assert_eq!(count(&field, Cell::Empty), 17 * 10);
    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, FIELD_HEIGHT as i8), None);
}

#[test]
fn test_lock_writes_exactly_the_filled_cells() {
    let mut field = PlayField::new();
    let before = field.clone();

    field.lock(PieceKind::S, Rotation::East, 3, 8);

    // S East: box cells where the rotated index hits the pattern.
    let expected: Vec<(i8, i8)> = ascii_tetris::core::pieces::filled_cells(PieceKind::S, Rotation::East)
        .iter()
        .map(|&(px, py)| (3 + px as i8, 8 + py as i8))
        .collect();

    for y in 0..FIELD_HEIGHT as i8 {
        for x in 0..FIELD_WIDTH as i8 {
            let cell = field.get(x, y).unwrap();
            if expected.contains(&(x, y)) {
                assert_eq!(cell, Cell::Locked(PieceKind::S));
            } else {
                assert_eq!(cell, before.get(x, y).unwrap(), "({}, {}) changed", x, y);
            }
        }
    }
}

#[test]
fn test_scan_marks_only_complete_rows() {
    let mut field = PlayField::new();
    for x in 1..=10 {
        field.set(x, 12, Cell::Locked(PieceKind::T));
        if x != 7 {
            field.set(x, 13, Cell::Locked(PieceKind::T));
        }
    }

    let rows = field.scan_and_clear(10);

    assert_eq!(rows.as_slice(), &[12]);
    for x in 1..=10 {
        assert_eq!(field.get(x, 12), Some(Cell::Cleared));
    }
    assert_eq!(field.get(0, 12), Some(Cell::Border));
    assert_eq!(field.get(11, 12), Some(Cell::Border));
    assert_eq!(field.get(1, 13), Some(Cell::Locked(PieceKind::T)));
}

#[test]
fn test_scan_only_looks_at_spanned_rows() {
    let mut field = PlayField::new();
    for x in 1..=10 {
        field.set(x, 5, Cell::Locked(PieceKind::J));
    }
    // Rows 6..=9 do not include row 5.
    assert!(field.scan_and_clear(6).is_empty());
    assert_eq!(field.get(3, 5), Some(Cell::Locked(PieceKind::J)));
    // Rows 2..=5 do.
    assert_eq!(field.scan_and_clear(2).as_slice(), &[5]);
}

#[test]
fn test_scan_skips_floor_row() {
    let mut field = PlayField::new();
    let rows = field.scan_and_clear(14);
    assert!(rows.is_empty());
    assert!(field.row(17).iter().all(|&c| c == Cell::Border));
}

#[test]
fn test_cleared_cells_count_as_full() {
    let mut field = PlayField::new();
    for x in 1..=10 {
        field.set(x, 9, Cell::Cleared);
    }
    // An already-marked row is complete again on the next scan.
    assert_eq!(field.scan_and_clear(8).as_slice(), &[9]);
    assert_eq!(count(&field, Cell::Cleared), 10);
}

#[test]
fn test_collapse_removes_rows_and_keeps_borders() {
    let mut field = PlayField::new();
    field.set(2, 0, Cell::Locked(PieceKind::O));
    for x in 1..=10 {
        field.set(x, 4, Cell::Locked(PieceKind::I));
    }
    let rows = field.scan_and_clear(1);
    field.collapse_rows(&rows);

    assert_eq!(field.get(2, 1), Some(Cell::Locked(PieceKind::O)));
    assert_eq!(field.get(2, 0), Some(Cell::Empty));
    assert_eq!(count(&field, Cell::Cleared), 0);
    assert_eq!(count(&field, Cell::Border), 17 * 2 + 12);
}
