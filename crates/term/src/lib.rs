//! Terminal rendering module.
//!
//! The game is drawn one character per field cell into a framebuffer, which
//! is then flushed to the terminal, rewriting only the runs that changed.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: snapshot → framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer → terminal via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use ascii_tetris_core as core;
pub use ascii_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
