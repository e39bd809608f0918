//! Game state types and the pure parts of the transition table.

use crate::error::{CountError, NamesError};
use crate::pool::BUST_SHOTS;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Nothing has happened yet.
    Begin,
    /// Showing the welcome text.
    Welcome,
    /// Waiting for the number of players.
    ReadingSize,
    /// The player count was not a number.
    InvalidSize,
    /// The player count was below two.
    LessThanTwo,
    /// Waiting for the comma-separated player names.
    ReadingPlayers,
    /// The names were rejected.
    InvalidNames(NamesError),
    /// Picking a random starting player.
    InitPlayer,
    /// Announcing the player about to start a turn.
    Init,
    /// Ready-to-play prompt at the start of a turn.
    Start,
    /// Drawing and rolling three dice.
    Rolling,
    /// Showing the dice just rolled.
    ShowDice,
    /// Moving rolled dice to their stores.
    ParsingDice,
    /// Checking for a bust.
    Parsing,
    /// Showing the turn so far and waiting for the next command.
    ShowScoreboard,
    /// The last command was not recognized.
    InvalidOption,
    /// Banking the turn's brains.
    Holding,
    /// The turn ended with three or more shots.
    ForceQuit,
    /// Recording the completed turn.
    AddingTurn,
    /// Passing play to the next player.
    Preparing,
    /// Clearing the turn's dice.
    Cleaning,
    /// Eliminating players below the qualifying threshold.
    ParsingTie,
    /// Announcing a tie-break round.
    InitTie,
    /// Game finished with a winner.
    End,
    /// Game abandoned by a player.
    Quit,
}

/// Kind of input a state waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A player count.
    PlayerCount,
    /// Comma-separated player names.
    PlayerNames,
    /// A turn command: Enter, `h` or `q`.
    Command,
    /// Just Enter.
    Acknowledge,
}

/// A command entered during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll three dice (Enter).
    Roll,
    /// Bank the brains and end the turn (`h`).
    Hold,
    /// Abandon the game (`q`).
    Quit,
    /// Anything else.
    Invalid,
}

impl Command {
    /// Parses a line of input. Surrounding whitespace is ignored and
    /// letters are case-insensitive.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => Self::Roll,
            "h" | "H" => Self::Hold,
            "q" | "Q" => Self::Quit,
            _ => Self::Invalid,
        }
    }

    /// Returns the state a command leads to.
    #[must_use]
    pub const fn next_state(self) -> GameState {
        match self {
            Self::Roll => GameState::Rolling,
            Self::Hold => GameState::Holding,
            Self::Quit => GameState::Quit,
            Self::Invalid => GameState::InvalidOption,
        }
    }
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::End | Self::Quit)
    }

    /// Returns the input this state consumes, or `None` if it advances on
    /// its own.
    #[must_use]
    pub const fn input(self) -> Option<InputKind> {
        match self {
            Self::ReadingSize | Self::InvalidSize | Self::LessThanTwo => {
                Some(InputKind::PlayerCount)
            }
            Self::ReadingPlayers | Self::InvalidNames(_) => Some(InputKind::PlayerNames),
            Self::Start | Self::ShowScoreboard | Self::InvalidOption => Some(InputKind::Command),
            Self::Init | Self::ShowDice | Self::ForceQuit | Self::InitTie => {
                Some(InputKind::Acknowledge)
            }
            _ => None,
        }
    }

    /// State reached after a player count is checked.
    #[must_use]
    pub const fn after_count(result: Result<usize, CountError>) -> Self {
        match result {
            Ok(_) => Self::ReadingPlayers,
            Err(CountError::NotANumber) => Self::InvalidSize,
            Err(CountError::LessThanTwo) => Self::LessThanTwo,
        }
    }

    /// State reached after resolving a roll, given the shots taken so far.
    #[must_use]
    pub const fn after_resolution(shots: usize) -> Self {
        if shots >= BUST_SHOTS {
            Self::ForceQuit
        } else {
            Self::ShowScoreboard
        }
    }
}
