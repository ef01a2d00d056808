//! ASCII Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `ascii_tetris::{core,input,term,types}`
//! so integration tests and the binary share one set of paths.

pub use ascii_tetris_core as core;
pub use ascii_tetris_input as input;
pub use ascii_tetris_term as term;
pub use ascii_tetris_types as types;
