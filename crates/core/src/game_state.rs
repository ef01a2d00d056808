//! Game state module - the per-tick engine
//!
//! `GameState` owns the field, the active piece, the RNG and the counters.
//! The host calls [`GameState::tick`] at a fixed cadence with zero or one
//! [`Command`]; everything else (spawn, gravity, lock, line check, game over)
//! happens inside that call.
//!
//! ```text
//! Spawning ──fits──▶ Active ──gravity blocked──▶ Locking ──▶ LineCheck ──▶ Spawning
//!     │
//!     └──does not fit──▶ GameOver
//! ```

use tracing::{debug, info};

use crate::collision::fits;
use crate::field::{CompletedRows, PlayField};
use crate::rng::SimpleRng;
use crate::rules::{LineClearMode, Rules, RulesError};
use crate::scoring::{lock_score, SpeedRamp};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Active,
    Locking,
    LineCheck,
    GameOver,
}

/// Active falling piece; (x, y) is the top-left of its 4x4 box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn pose
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn fits(&self, field: &PlayField) -> bool {
        fits(field, self.kind, self.rotation, self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..self
        }
    }
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Rows completed by this lock, top to bottom
    pub rows: CompletedRows,
    pub score_awarded: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: PlayField,
    active: Option<Tetromino>,
    rules: Rules,
    rng: SimpleRng,
    phase: Phase,
    speed: SpeedRamp,
    /// Ticks since the last gravity step
    tick_count: u32,
    /// Total ticks processed while playing
    ticks: u64,
    score: u32,
    lines: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a game with default rules and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let rules = Rules::default();
        let mut state = Self::blank(rules, seed);
        state.spawn_piece();
        state
    }

    /// Create a game with custom rules and spawn the first piece
    pub fn with_rules(rules: Rules, seed: u32) -> Result<Self, RulesError> {
        rules.validate()?;
        let mut state = Self::blank(rules, seed);
        state.spawn_piece();
        Ok(state)
    }

    /// Resume from a prepared field and piece.
    ///
    /// If the piece does not fit, the game is over from the start.
    pub fn with_position(
        rules: Rules,
        seed: u32,
        field: PlayField,
        piece: Tetromino,
    ) -> Result<Self, RulesError> {
        rules.validate()?;
        let mut state = Self::blank(rules, seed);
        state.field = field;
        state.place(piece);
        Ok(state)
    }

    fn blank(rules: Rules, seed: u32) -> Self {
        Self {
            field: PlayField::new(),
            active: None,
            rules,
            rng: SimpleRng::new(seed),
            phase: Phase::Spawning,
            speed: SpeedRamp::new(&rules),
            tick_count: 0,
            ticks: 0,
            score: 0,
            lines: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows completed since the game started
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity threshold in ticks
    pub fn speed(&self) -> u32 {
        self.speed.threshold()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.speed.pieces_locked()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The falling piece. After game over this is the piece that failed to
    /// spawn.
    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.speed = self.speed.threshold();
        out.pieces_locked = self.speed.pieces_locked();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game by one tick.
    ///
    /// `command` is applied first (silently ignored if the new pose does not
    /// fit), then gravity runs if the tick counter reached the threshold.
    /// Returns true when the active piece locked during this tick.
    pub fn tick(&mut self, command: Option<Command>) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        self.ticks += 1;
        self.tick_count += 1;
        let force_down = self.tick_count >= self.speed.threshold();

        if let Some(command) = command {
            self.apply_command(command);
        }

        if !force_down {
            return false;
        }
        self.tick_count = 0;
        self.gravity_step()
    }

    /// Try one command against the active piece. Returns true if it moved.
    fn apply_command(&mut self, command: Command) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = match command {
            Command::MoveLeft => active.shifted(-1, 0),
            Command::MoveRight => active.shifted(1, 0),
            Command::MoveDown => active.shifted(0, 1),
            Command::Rotate => active.rotated(),
        };

        if candidate.fits(&self.field) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Check if the active piece can move one row down
    fn can_descend(&self) -> bool {
        self.active
            .map(|p| p.shifted(0, 1).fits(&self.field))
            .unwrap_or(false)
    }

    fn gravity_step(&mut self) -> bool {
        if self.can_descend() {
            if let Some(active) = self.active.as_mut() {
                active.y += 1;
            }
            return false;
        }

        self.phase = Phase::Locking;
        while !matches!(self.phase, Phase::Active | Phase::GameOver) {
            self.advance_phase();
        }
        true
    }

    /// Run one transition of the lock / line check / spawn sequence.
    fn advance_phase(&mut self) {
        match self.phase {
            Phase::Locking => {
                self.lock_active();
                self.phase = Phase::LineCheck;
            }
            Phase::LineCheck => {
                self.check_lines();
                self.phase = Phase::Spawning;
            }
            Phase::Spawning => {
                self.spawn_piece();
            }
            Phase::Active | Phase::GameOver => {}
        }
    }

    fn lock_active(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        self.field
            .lock(active.kind, active.rotation, active.x, active.y);
        debug!(
            kind = ?active.kind,
            x = active.x,
            y = active.y,
            rotation = ?active.rotation,
            "piece locked"
        );

        if self.speed.record_lock() {
            info!(
                speed = self.speed.threshold(),
                pieces = self.speed.pieces_locked(),
                "speed increased"
            );
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            rows: CompletedRows::new(),
            score_awarded: 0,
        });
    }

    fn check_lines(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let rows = self.field.scan_and_clear(active.y);
        let award = lock_score(&self.rules, rows.len());
        self.score += award;
        self.lines += rows.len() as u32;

        if !rows.is_empty() {
            info!(rows = ?rows.as_slice(), score = self.score, "lines completed");
            if self.rules.line_clear == LineClearMode::Collapse {
                self.field.collapse_rows(&rows);
            }
        }

        if let Some(event) = self.last_event.as_mut() {
            event.rows = rows;
            event.score_awarded = award;
        }
    }

    /// Spawn a random piece at the spawn pose, or end the game if it does
    /// not fit.
    fn spawn_piece(&mut self) {
        let kind = self.rng.next_kind();
        self.place(Tetromino::new(kind));
    }

    fn place(&mut self, piece: Tetromino) {
        self.active = Some(piece);
        self.tick_count = 0;
        if piece.fits(&self.field) {
            self.phase = Phase::Active;
            debug!(kind = ?piece.kind, "piece spawned");
        } else {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                pieces = self.speed.pieces_locked(),
                "game over"
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
