//! Catalog, rotation index and fit test, exercised through the facade.

use ascii_tetris::core::pieces::{filled_cells, is_filled, rotate, shape_of};
use ascii_tetris::core::{fits, PlayField};
use ascii_tetris::types::{Cell, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_rotate_formulas() {
    for py in 0..4u8 {
        for px in 0..4u8 {
            let (x, y) = (px as usize, py as usize);
            assert_eq!(rotate(px, py, Rotation::North), y * 4 + x);
            assert_eq!(rotate(px, py, Rotation::East), 12 + y - 4 * x);
            assert_eq!(rotate(px, py, Rotation::South), 15 - 4 * y - x);
            assert_eq!(rotate(px, py, Rotation::West), 3 - y + 4 * x);
        }
    }
}

#[test]
fn test_rotation_taken_modulo_four() {
    for r in 0..12u32 {
        let rotation = Rotation::from_quarter_turns(r);
        assert_eq!(rotate(1, 3, rotation), rotate(1, 3, ROTATIONS[(r % 4) as usize]));
    }
}

#[test]
fn test_catalog_patterns() {
    let rows = |kind| -> String {
        shape_of(kind)
            .iter()
            .map(|&filled| if filled { 'X' } else { '.' })
            .collect()
    };
    assert_eq!(rows(PieceKind::I), "..X...X...X...X.");
    assert_eq!(rows(PieceKind::Z), "..X..XX..X......");
    assert_eq!(rows(PieceKind::S), ".X...XX...X.....");
    assert_eq!(rows(PieceKind::O), ".....XX..XX.....");
    assert_eq!(rows(PieceKind::T), "..X..XX...X.....");
    assert_eq!(rows(PieceKind::L), ".....XX...X...X.");
    assert_eq!(rows(PieceKind::J), ".....XX..X...X..");
}

#[test]
fn test_rotated_views_keep_four_cells() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let cells = filled_cells(kind, rotation);
            assert_eq!(cells.len(), 4, "{:?} {:?}", kind, rotation);
            for (px, py) in cells {
                assert!(is_filled(kind, rotation, px, py));
            }
        }
    }
}

#[test]
fn test_t_piece_quarter_turns() {
    assert_eq!(
        filled_cells(PieceKind::T, Rotation::North).as_slice(),
        &[(2, 0), (1, 1), (2, 1), (2, 2)]
    );
    assert_eq!(
        filled_cells(PieceKind::T, Rotation::South).as_slice(),
        &[(1, 1), (1, 2), (2, 2), (1, 3)]
    );
}

#[test]
fn test_all_spawn_poses_fit_on_empty_field() {
    let field = PlayField::new();
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert!(fits(&field, kind, rotation, SPAWN_X, SPAWN_Y), "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_fit_fails_on_any_occupied_cell_kind() {
    for blocker in [Cell::Locked(PieceKind::L), Cell::Cleared] {
        let mut field = PlayField::new();
        // Vertical I at spawn occupies column 6, rows 0..=3.
        field.set(6, 3, blocker);
        assert!(!fits(&field, PieceKind::I, Rotation::North, SPAWN_X, SPAWN_Y));
        // Moving one column over clears it.
        assert!(fits(&field, PieceKind::I, Rotation::North, SPAWN_X + 1, SPAWN_Y));
    }
}

#[test]
fn test_out_of_bounds_cells_are_skipped() {
    let field = PlayField::new();
    // Box partly above the top edge.
    assert!(fits(&field, PieceKind::I, Rotation::North, SPAWN_X, -2));
    // Border cells are in bounds and block.
    assert!(!fits(&field, PieceKind::I, Rotation::East, -1, 0));
    assert!(!fits(&field, PieceKind::O, Rotation::North, 4, 15));
}
