//! Single-slot command buffer between the input poller and the engine.
//!
//! Terminals deliver key presses whenever they arrive, but the engine takes at
//! most one command per tick. The latch keeps only the most recent one.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::Command;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandLatch {
    pending: Option<Command>,
}

impl CommandLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command, replacing any earlier one from the same tick.
    pub fn push(&mut self, command: Command) {
        self.pending = Some(command);
    }

    /// Feed a raw key event. Returns true if it produced a command.
    ///
    /// Releases are ignored; presses and auto-repeats both count.
    pub fn feed(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match map_key(key) {
            Some(command) => {
                self.push(command);
                true
            }
            None => false,
        }
    }

    pub fn peek(&self) -> Option<Command> {
        self.pending
    }

    /// Take the command for this tick, leaving the latch empty.
    pub fn take(&mut self) -> Option<Command> {
        self.pending.take()
    }
}
