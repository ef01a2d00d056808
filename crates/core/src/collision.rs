//! Collision module - does a piece fit at a given pose?
//!
//! Filled piece cells that land inside the field must sit on `Cell::Empty`.
//! Filled cells that land outside the field are not checked at all: they
//! neither pass nor fail. This lets the vertical I piece spawn with part of
//! its box above row 0. The side borders are real cells, so nothing can
//! escape sideways anyway.

use crate::field::PlayField;
use crate::pieces::is_filled;
use crate::types::{Cell, PieceKind, Rotation, PIECE_BOX};

/// Test whether `kind` at `rotation` with its box at (`pos_x`, `pos_y`)
/// overlaps any occupied in-bounds field cell.
pub fn fits(field: &PlayField, kind: PieceKind, rotation: Rotation, pos_x: i8, pos_y: i8) -> bool {
    for px in 0..PIECE_BOX {
        for py in 0..PIECE_BOX {
            if !is_filled(kind, rotation, px, py) {
                continue;
            }
            match field.get(pos_x + px as i8, pos_y + py as i8) {
                Some(Cell::Empty) | None => {}
                Some(_) => return false,
            }
        }
    }
    true
}
