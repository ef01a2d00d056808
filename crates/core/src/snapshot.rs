//! Read-only view of a game for the render collaborator.

use crate::game_state::Tetromino;
use crate::pieces::{filled_cells, BoxCell};
use crate::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

pub type Grid = [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Field coordinates of the piece's filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        filled_cells(self.kind, self.rotation)
            .into_iter()
            .map(move |(px, py): BoxCell| (self.x + px as i8, self.y + py as i8))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: Grid,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub speed: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell as displayed: the active piece drawn over the field
    pub fn display_cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x >= FIELD_WIDTH as i8 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        if let Some(active) = self.active {
            if active.cells().any(|c| c == (x, y)) {
                return Some(Cell::Locked(active.kind));
            }
        }
        Some(self.field[y as usize][x as usize])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[Cell::Empty; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            speed: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_cell_overlays_active_piece() {
        let mut snap = GameSnapshot::default();
        snap.field[16][1] = Cell::Cleared;
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 4,
            y: 0,
        });

        assert_eq!(snap.display_cell(5, 1), Some(Cell::Locked(PieceKind::O)));
        assert_eq!(snap.display_cell(4, 0), Some(Cell::Empty));
        assert_eq!(snap.display_cell(1, 16), Some(Cell::Cleared));
        assert_eq!(snap.display_cell(-1, 0), None);
        assert_eq!(snap.display_cell(0, 18), None);
    }
}
