//! Field module - the 12x18 playfield grid
//!
//! The field is a flat, row-major array of [`Cell`]s. Column 0, column 11 and
//! row 17 are border; everything else is the playable interior.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..17
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::filled_cells;
use crate::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH, PIECE_BOX};

/// Total number of cells on the field
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

const WIDTH: usize = FIELD_WIDTH as usize;

/// Index of the floor row
pub const FLOOR_ROW: u8 = FIELD_HEIGHT - 1;

/// Rows completed by a single lock (a piece spans at most 4 rows)
pub type CompletedRows = ArrayVec<u8, 4>;

/// The playfield with its border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayField {
    cells: [Cell; FIELD_SIZE],
}

impl PlayField {
    /// Create an empty field surrounded by border
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; FIELD_SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (x, y) = (i % WIDTH, i / WIDTH);
            if Self::is_border_position(x, y) {
                *cell = Cell::Border;
            }
        }
        Self { cells }
    }

    fn is_border_position(x: usize, y: usize) -> bool {
        x == 0 || x == WIDTH - 1 || y == FLOOR_ROW as usize
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set an interior cell.
    ///
    /// Returns false, leaving the field unchanged, when (x, y) is out of
    /// bounds, is a border cell, or `cell` is `Cell::Border`.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some(idx) = Self::index(x, y) else {
            return false;
        };
        if cell == Cell::Border || self.cells[idx] == Cell::Border {
            return false;
        }
        self.cells[idx] = cell;
        true
    }

    /// True when (x, y) is inside the field and holds `Cell::Empty`
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Write `Locked(kind)` into every filled cell of the piece.
    ///
    /// Callers only lock a pose that already passed the fit test, so no
    /// occupancy check is repeated here. Cells outside the field are skipped.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, pos_x: i8, pos_y: i8) {
        for (px, py) in filled_cells(kind, rotation) {
            if let Some(idx) = Self::index(pos_x + px as i8, pos_y + py as i8) {
                self.cells[idx] = Cell::Locked(kind);
            }
        }
    }

    /// Check whether every interior cell of row `y` is non-empty
    pub fn is_row_complete(&self, y: u8) -> bool {
        if y >= FLOOR_ROW {
            return false;
        }
        let start = y as usize * WIDTH;
        self.cells[start + 1..start + WIDTH - 1]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    /// Mark completed rows among the four spanned by a piece locked at row
    /// `pos_y`.
    ///
    /// Interior cells of each complete row become `Cell::Cleared`; the rows
    /// stay where they are. The floor row and rows outside the field are
    /// skipped. Returns the completed rows, top to bottom.
    pub fn scan_and_clear(&mut self, pos_y: i8) -> CompletedRows {
        let mut completed = CompletedRows::new();
        for dy in 0..PIECE_BOX as i8 {
            let y = pos_y + dy;
            if y < 0 || y >= FLOOR_ROW as i8 {
                continue;
            }
            let y = y as u8;
            if self.is_row_complete(y) {
                let start = y as usize * WIDTH;
                self.cells[start + 1..start + WIDTH - 1].fill(Cell::Cleared);
                completed.push(y);
            }
        }
        completed
    }

    /// Remove the given rows and shift everything above them down.
    ///
    /// `rows` must be sorted top to bottom, as returned by
    /// [`PlayField::scan_and_clear`]. Vacated rows at the top come back empty
    /// with their side borders intact.
    pub fn collapse_rows(&mut self, rows: &[u8]) {
        // Top-most first: shifting rows above a removed row leaves the indices
        // of the lower rows untouched.
        for &row in rows {
            if row >= FLOOR_ROW {
                continue;
            }
            let end = row as usize * WIDTH;
            // Every non-floor row shares the same border columns, so whole
            // rows can be moved.
            self.cells.copy_within(0..end, WIDTH);
            self.cells[1..WIDTH - 1].fill(Cell::Empty);
        }
    }

    /// Row `y` as a slice of cells
    pub fn row(&self, y: u8) -> &[Cell] {
        let start = y as usize * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (used by snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y as u8));
        }
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new()
    }
}
