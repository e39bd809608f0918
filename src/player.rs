//! Player records.

use alloc::string::String;

/// A player and their running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    brains: usize,
    turns: usize,
}

impl Player {
    /// Creates a player with no brains and no turns played.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brains: 0,
            turns: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brains banked so far.
    #[must_use]
    pub const fn brains(&self) -> usize {
        self.brains
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Banks brains eaten during a turn.
    pub const fn add_brains(&mut self, brains: usize) {
        self.brains += brains;
    }

    /// Sets the brain total directly.
    pub const fn set_brains(&mut self, brains: usize) {
        self.brains = brains;
    }

    /// Records a completed turn.
    pub const fn add_turn(&mut self) {
        self.turns += 1;
    }
}
