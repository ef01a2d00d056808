//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the falling-block rules and the tick-driven engine.
//! It has **no dependencies** on terminal rendering, keyboard polling or
//! timing, which keeps it:
//!
//! - **Deterministic**: Same seed and command sequence give the same game
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: The host decides how often to tick and how to draw
//!
//! # Module Structure
//!
//! - [`pieces`]: 7 tetromino patterns and the closed-form rotation index
//! - [`collision`]: the fit test against field bounds and occupied cells
//! - [`field`]: 12x18 bordered grid, locking and row marking
//! - [`scoring`]: per-piece score and the gravity speed ramp
//! - [`rules`]: tunable rule set with validation
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the per-tick state machine
//! - [`snapshot`]: read-only copy for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: uniformly random shape, rotation 0, box at (4, 0)
//! - **Movement**: left, right, down or rotate; a move that does not fit is
//!   dropped without error
//! - **Gravity**: one row every `speed` ticks (20 at start)
//! - **Lock**: when gravity cannot move the piece down
//! - **Lines**: complete interior rows are marked `=` and stay in place
//!   (see [`LineClearMode`] for the collapsing variant)
//! - **Score**: 25 per locked piece
//! - **Speed**: one tick faster every 50 locked pieces, down to 10
//! - **Game over**: a fresh piece does not fit at its spawn pose
//!
//! # Example
//!
//! ```
//! use ascii_tetris_core::GameState;
//! use ascii_tetris_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.tick(Some(Command::MoveRight));
//! game.tick(Some(Command::Rotate));
//! while !game.tick(None) {}
//!
//! assert_eq!(game.score(), 25);
//! ```

pub mod collision;
pub mod field;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use ascii_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::fits;
pub use field::{CompletedRows, PlayField};
pub use game_state::{GameState, LockEvent, Phase, Tetromino};
pub use pieces::{rotate, shape_of};
pub use rng::SimpleRng;
pub use rules::{LineClearMode, Rules, RulesError};
pub use scoring::{lock_score, SpeedRamp};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
