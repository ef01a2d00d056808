//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, for the classic 80x24 screen:
//!
//! ```text
//! row 0  Controls are Arrow keys Left, Right & Down.
//! row 1  Use 'Z' to rotate the piece. 'Q' to quit.
//! row 2  Score:       25
//! row 3  Game Over! Hit a key to exit.      (only after game over)
//!        12x18 field, one character per cell, centered in the viewport
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

pub const HELP_MOVE: &str = "Controls are Arrow keys Left, Right & Down.";
pub const HELP_ROTATE: &str = "Use 'Z' to rotate the piece. 'Q' to quit.";
pub const GAME_OVER: &str = "Game Over! Hit a key to exit.";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// The 80x24 screen the layout was designed for
    pub const CLASSIC: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Top-left corner of the field for a viewport
    pub fn field_origin(viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(FIELD_WIDTH as u16) / 2,
            viewport.height.saturating_sub(FIELD_HEIGHT as u16) / 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let text = CellStyle::default();
        fb.put_str(0, 0, HELP_MOVE, text);
        fb.put_str(0, 1, HELP_ROTATE, text);
        fb.put_str(0, 2, &format!("Score: {:8}", snap.score), text.bold());
        if snap.game_over {
            fb.put_str(0, 3, GAME_OVER, CellStyle::fg(Rgb::new(255, 90, 90)).bold());
        }

        let (ox, oy) = Self::field_origin(viewport);
        for y in 0..FIELD_HEIGHT as i8 {
            for x in 0..FIELD_WIDTH as i8 {
                let Some(cell) = snap.display_cell(x, y) else {
                    continue;
                };
                fb.put_char(ox + x as u16, oy + y as u16, cell.glyph(), cell_style(cell));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn cell_style(cell: Cell) -> CellStyle {
    match cell {
        Cell::Empty => CellStyle::default(),
        Cell::Locked(kind) => CellStyle::fg(piece_color(kind)).bold(),
        Cell::Cleared => CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        Cell::Border => CellStyle::fg(Rgb::new(140, 140, 150)),
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActiveSnapshot;
    use crate::types::Rotation;

    #[test]
    fn field_is_centered_in_classic_viewport() {
        assert_eq!(GameView::field_origin(Viewport::CLASSIC), (34, 3));
        assert_eq!(GameView::field_origin(Viewport::new(10, 10)), (0, 0));
    }

    #[test]
    fn cleared_row_renders_as_equals() {
        let mut snap = GameSnapshot::default();
        for x in 0..FIELD_WIDTH as usize {
            snap.field[10][x] = Cell::Border;
        }
        for x in 1..FIELD_WIDTH as usize - 1 {
            snap.field[10][x] = Cell::Cleared;
        }
        let fb = GameView.render(&snap, Viewport::new(12, 18));
        assert_eq!(fb.row_text(10), "#==========#");
    }

    #[test]
    fn active_piece_uses_its_letter() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::T,
            rotation: Rotation::North,
            x: 0,
            y: 0,
        });
        let fb = GameView.render(&snap, Viewport::new(12, 18));
        // T: box cells (2,0), (1,1), (2,1), (2,2).
        assert_eq!(fb.get(2, 0).unwrap().ch, 'E');
        assert_eq!(fb.get(1, 1).unwrap().ch, 'E');
        assert_eq!(fb.get(1, 0).unwrap().ch, ' ');
    }
}
