//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and collapses
//! everything typed between two ticks into the single command the engine
//! accepts per tick.

pub mod latch;
pub mod map;

pub use ascii_tetris_types as types;

pub use latch::CommandLatch;
pub use map::{map_key, should_quit};
