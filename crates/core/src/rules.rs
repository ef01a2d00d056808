//! Rule configuration for a game session.

use thiserror::Error;

use crate::types::{PIECES_PER_SPEEDUP, SCORE_PER_PIECE, SPEED_FLOOR, START_SPEED};

/// What happens to a completed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClearMode {
    /// Classic behavior: the row's interior turns into `=` markers and stays
    /// on the field. Only the flat per-piece score is awarded.
    #[default]
    MarkOnly,
    /// The marked row is removed, rows above shift down, and a bonus of
    /// `(1 << lines) * 100` is added on top of the flat score.
    Collapse,
}

/// Tunable rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Ticks between gravity steps at game start
    pub start_speed: u32,
    /// Gravity threshold never drops below this
    pub speed_floor: u32,
    /// Locked pieces between speed steps
    pub pieces_per_speedup: u32,
    /// Flat score per locked piece
    pub score_per_piece: u32,
    pub line_clear: LineClearMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("start speed must be at least 1 tick")]
    ZeroStartSpeed,
    #[error("speed floor {floor} is above the start speed {start}")]
    FloorAboveStart { floor: u32, start: u32 },
    #[error("pieces per speedup must be at least 1")]
    ZeroSpeedupStep,
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.start_speed == 0 {
            return Err(RulesError::ZeroStartSpeed);
        }
        if self.speed_floor > self.start_speed {
            return Err(RulesError::FloorAboveStart {
                floor: self.speed_floor,
                start: self.start_speed,
            });
        }
        if self.pieces_per_speedup == 0 {
            return Err(RulesError::ZeroSpeedupStep);
        }
        Ok(())
    }

    pub fn with_line_clear(mut self, mode: LineClearMode) -> Self {
        self.line_clear = mode;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            start_speed: START_SPEED,
            speed_floor: SPEED_FLOOR,
            pieces_per_speedup: PIECES_PER_SPEEDUP,
            score_per_piece: SCORE_PER_PIECE,
            line_clear: LineClearMode::MarkOnly,
        }
    }
}
