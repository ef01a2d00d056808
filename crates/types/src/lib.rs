//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! The playfield is 12 columns by 18 rows **including** its border:
//!
//! - **Width**: 12 columns (0 and 11 are border, 1..=10 are playable)
//! - **Height**: 18 rows (row 17 is the floor border)
//! - **Spawn position**: top-left of the 4x4 box at (`FIELD_WIDTH / 2 - 2`, 0)
//!
//! # Rule Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Host tick interval |
//! | `START_SPEED` | 20 | Ticks between gravity steps at start |
//! | `SPEED_FLOOR` | 10 | Gravity never gets faster than this |
//! | `PIECES_PER_SPEEDUP` | 50 | Locked pieces between speed steps |
//! | `SCORE_PER_PIECE` | 25 | Flat award for every lock |
//! | `LINE_BONUS_BASE` | 100 | Multi-line bonus unit (collapse mode only) |
//!
//! # Examples
//!
//! ```
//! use ascii_tetris_types::{Cell, PieceKind, Rotation, FIELD_WIDTH};
//!
//! let kind = PieceKind::from_index(3).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(Cell::Locked(kind).glyph(), 'D');
//!
//! assert_eq!(Rotation::from_quarter_turns(5), Rotation::East);
//! assert_eq!(FIELD_WIDTH, 12);
//! ```

/// Field width in cells, border columns included
pub const FIELD_WIDTH: u8 = 12;

/// Field height in cells, floor row included
pub const FIELD_HEIGHT: u8 = 18;

/// Side length of a piece bounding box
pub const PIECE_BOX: u8 = 4;

/// Host tick interval in milliseconds
pub const TICK_MS: u32 = 50;

/// Gravity threshold (ticks per forced drop) at game start
pub const START_SPEED: u32 = 20;

/// Lowest gravity threshold the speed ramp may reach
pub const SPEED_FLOOR: u32 = 10;

/// Number of locked pieces between speed increases
pub const PIECES_PER_SPEEDUP: u32 = 50;

/// Flat score for every locked piece
pub const SCORE_PER_PIECE: u32 = 25;

/// Multi-line bonus unit: `(1 << lines) * LINE_BONUS_BASE`
pub const LINE_BONUS_BASE: u32 = 100;

/// Spawn column of the piece bounding box
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2) as i8 - 2;

/// Spawn row of the piece bounding box
pub const SPAWN_Y: i8 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_defaults() {
        assert_eq!(FIELD_WIDTH, 12);
        assert_eq!(FIELD_HEIGHT, 18);
        assert_eq!(TICK_MS, 50);
        assert_eq!(START_SPEED, 20);
        assert_eq!(SPEED_FLOOR, 10);
        assert_eq!(PIECES_PER_SPEEDUP, 50);
        assert_eq!(SCORE_PER_PIECE, 25);
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn piece_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index() as usize, i);
            assert_eq!(PieceKind::from_index(i as u8), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn cell_glyphs() {
        assert_eq!(Cell::Empty.glyph(), ' ');
        assert_eq!(Cell::Locked(PieceKind::I).glyph(), 'A');
        assert_eq!(Cell::Locked(PieceKind::J).glyph(), 'G');
        assert_eq!(Cell::Cleared.glyph(), '=');
        assert_eq!(Cell::Border.glyph(), '#');
    }

    #[test]
    fn rotation_wraps_modulo_four() {
        assert_eq!(Rotation::from_quarter_turns(0), Rotation::North);
        assert_eq!(Rotation::from_quarter_turns(3), Rotation::West);
        assert_eq!(Rotation::from_quarter_turns(4), Rotation::North);
        assert_eq!(Rotation::from_quarter_turns(7), Rotation::West);
        assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    }
}

/// The seven tetromino kinds, in catalog order
///
/// The discriminant is the shape id (0..=6) and also keys the display letter
/// `A`..`G`. Canonical (0°) orientations in the catalog:
/// - **I**: vertical bar
/// - **Z**: vertical Z
/// - **S**: vertical S
/// - **O**: 2x2 square
/// - **T**: T pointing left
/// - **L**: L hanging from its foot
/// - **J**: J hanging from its foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    O,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in shape-id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Shape id in `0..7`
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a kind by shape id
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Display letter, `A` for shape 0 through `G` for shape 6
    pub fn letter(self) -> char {
        (b'A' + self.index()) as char
    }
}

/// Rotation states, one per quarter turn
///
/// - **North**: 0°, the catalog orientation
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any number of quarter turns (taken modulo 4)
    pub fn from_quarter_turns(r: u32) -> Self {
        match r % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Quarter turns from North, in `0..4`
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() as u32 + 1)
    }
}

/// One discrete player command, at most one per tick
///
/// Quit is not a command: the host handles it by no longer ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Shift the piece one row down
    MoveDown,
    /// Rotate the piece a quarter turn
    Rotate,
}

/// A cell of the playfield
///
/// Border cells are written once when the field is built and never change.
/// Interior cells only ever hold `Empty`, `Locked` or `Cleared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
    /// Interior cell of a completed row
    Cleared,
    Border,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used by the terminal view
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Locked(kind) => kind.letter(),
            Cell::Cleared => '=',
            Cell::Border => '#',
        }
    }
}
