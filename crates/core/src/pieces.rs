//! Pieces module - tetromino catalog and rotation indexing
//!
//! Every shape is stored once, as a 4x4 occupancy pattern in its 0° form.
//! Rotated views are never materialized: [`rotate`] maps a box coordinate to
//! an index into the unrotated pattern with one closed-form formula per
//! quarter turn.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, PIECE_BOX};

/// Row-major 4x4 occupancy pattern, `true` = filled
pub type Pattern = [bool; 16];

/// Box-relative coordinate of a filled cell
pub type BoxCell = (u8, u8);

const fn parse(rows: &[u8; 16]) -> Pattern {
    let mut out = [false; 16];
    let mut i = 0;
    while i < 16 {
        out[i] = rows[i] == b'X';
        i += 1;
    }
    out
}

/// Catalog indexed by shape id, `.` = clear, `X` = set
const CATALOG: [Pattern; 7] = [
    parse(b"..X...X...X...X."),
    parse(b"..X..XX..X......"),
    parse(b".X...XX...X....."),
    parse(b".....XX..XX....."),
    parse(b"..X..XX...X....."),
    parse(b".....XX...X...X."),
    parse(b".....XX..X...X.."),
];

/// Get the unrotated pattern for a piece kind
pub fn shape_of(kind: PieceKind) -> &'static Pattern {
    &CATALOG[kind.index() as usize]
}

/// Map box coordinate `(px, py)` under `rotation` to an index into the
/// unrotated pattern.
///
/// Both coordinates must lie in `0..4`.
///
/// # Examples
///
/// ```
/// use ascii_tetris_core::pieces::rotate;
/// use ascii_tetris_core::types::Rotation;
///
/// assert_eq!(rotate(1, 2, Rotation::North), 9);
/// assert_eq!(rotate(0, 0, Rotation::East), 12);
/// assert_eq!(rotate(0, 0, Rotation::South), 15);
/// assert_eq!(rotate(0, 0, Rotation::West), 3);
/// ```
#[inline(always)]
pub fn rotate(px: u8, py: u8, rotation: Rotation) -> usize {
    debug_assert!(px < PIECE_BOX && py < PIECE_BOX);
    let (x, y) = (px as usize, py as usize);
    match rotation {
        Rotation::North => y * 4 + x,
        Rotation::East => 12 + y - 4 * x,
        Rotation::South => 15 - 4 * y - x,
        Rotation::West => 3 + 4 * x - y,
    }
}

/// Whether box cell `(px, py)` is filled for `kind` at `rotation`
#[inline(always)]
pub fn is_filled(kind: PieceKind, rotation: Rotation, px: u8, py: u8) -> bool {
    shape_of(kind)[rotate(px, py, rotation)]
}

/// Filled box cells of `kind` at `rotation`, scanned row by row
pub fn filled_cells(kind: PieceKind, rotation: Rotation) -> ArrayVec<BoxCell, 4> {
    let mut out = ArrayVec::new();
    for py in 0..PIECE_BOX {
        for px in 0..PIECE_BOX {
            if is_filled(kind, rotation, px, py) {
                out.push((px, py));
            }
        }
    }
    out
}
