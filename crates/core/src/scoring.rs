//! Scoring module - per-piece score and the gravity speed ramp
//!
//! # Scoring
//!
//! Every locked piece is worth a flat `score_per_piece` (25 by default),
//! regardless of lines. In [`LineClearMode::Collapse`] a bonus of
//! `(1 << lines) * 100` is added when the lock completes at least one row.
//!
//! | Lines | MarkOnly | Collapse |
//! |-------|----------|----------|
//! | 0 | 25 | 25 |
//! | 1 | 25 | 225 |
//! | 2 | 25 | 425 |
//! | 3 | 25 | 825 |
//! | 4 | 25 | 1625 |
//!
//! # Speed
//!
//! Gravity fires once every `threshold` ticks. Every `pieces_per_speedup`
//! locks the threshold drops by one, stopping at the floor.

use crate::rules::{LineClearMode, Rules};
use crate::types::LINE_BONUS_BASE;

/// Bonus for completing `lines` rows with one piece (collapse mode)
pub fn line_bonus(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    (1u32 << lines) * LINE_BONUS_BASE
}

/// Total score awarded for one lock that completed `lines` rows
pub fn lock_score(rules: &Rules, lines: usize) -> u32 {
    match rules.line_clear {
        LineClearMode::MarkOnly => rules.score_per_piece,
        LineClearMode::Collapse => rules.score_per_piece + line_bonus(lines),
    }
}

/// Gravity threshold that speeds up as pieces lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRamp {
    threshold: u32,
    floor: u32,
    step: u32,
    pieces_locked: u32,
}

impl SpeedRamp {
    /// A zero `pieces_per_speedup` is treated as 1.
    pub fn new(rules: &Rules) -> Self {
        Self {
            threshold: rules.start_speed,
            floor: rules.speed_floor,
            step: rules.pieces_per_speedup.max(1),
            pieces_locked: 0,
        }
    }

    /// Ticks between forced drops
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Pieces locked since the game started
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Count one locked piece. Returns true when the threshold changed.
    pub fn record_lock(&mut self) -> bool {
        self.pieces_locked += 1;
        if self.pieces_locked % self.step == 0 && self.threshold > self.floor {
            self.threshold -= 1;
            return true;
        }
        false
    }
}
