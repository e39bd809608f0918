//! Read-only view of a game for rendering.

use alloc::vec::Vec;

use crate::die::Die;
use crate::game::GameState;
use crate::player::Player;

/// Everything a front end needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current state.
    pub state: GameState,
    /// Players still in the game, in turn order.
    pub players: Vec<Player>,
    /// Index of the active player into `players`.
    pub active: usize,
    /// Player count entered during setup.
    pub expected_players: usize,
    /// Dice left in the bag.
    pub bag: usize,
    /// Dice from the current roll.
    pub rolled: Vec<Die>,
    /// Brain store.
    pub brains: Vec<Die>,
    /// Shot store.
    pub shots: Vec<Die>,
    /// Players removed by tie-breaks.
    pub eliminated: Vec<Player>,
    /// Brains needed to win.
    pub brains_to_win: usize,
    /// Whether a tie-break round is being played.
    pub tie_break: bool,
}

impl Snapshot {
    /// Returns the active player.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active)
    }

    /// Returns the player who plays after the active one.
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        if self.players.is_empty() {
            return None;
        }
        self.players.get((self.active + 1) % self.players.len())
    }

    /// Returns the most turns any remaining player has completed.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.players.iter().map(Player::turns).max().unwrap_or(0)
    }

    /// Returns the highest brain total among the players.
    #[must_use]
    pub fn leader_brains(&self) -> usize {
        self.players.iter().map(Player::brains).max().unwrap_or(0)
    }
}
