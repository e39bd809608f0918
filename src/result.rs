//! Final game results.

use alloc::vec::Vec;

use crate::player::Player;

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game was decided. Holds more than one player only when a
    /// tie-break could not separate them.
    Won {
        /// The winning players.
        winners: Vec<Player>,
    },
    /// A player quit; nobody wins.
    Abandoned,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// How the game ended.
    pub outcome: Outcome,
    /// Players still in the game at the end, in turn order.
    pub standings: Vec<Player>,
    /// Players removed by tie-breaks, in removal order.
    pub eliminated: Vec<Player>,
}

impl GameResult {
    /// Returns the winners, or an empty slice if the game was abandoned.
    #[must_use]
    pub fn winners(&self) -> &[Player] {
        match &self.outcome {
            Outcome::Won { winners } => winners,
            Outcome::Abandoned => &[],
        }
    }
}
