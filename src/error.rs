//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing dice from the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer than three dice are left, even after returning the brain dice.
    #[error("not enough dice in the bag: {available} available, 3 needed")]
    NotEnoughDice {
        /// Dice left after replenishing.
        available: usize,
    },
}

/// Errors that can occur while stepping the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The game already ended.
    #[error("the game is over")]
    GameOver,
    /// The dice pool ran dry.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Reasons a player count is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// Input is not a non-negative integer.
    #[error("invalid size")]
    NotANumber,
    /// Fewer than two players.
    #[error("at least two players are needed")]
    LessThanTwo,
}

/// Reasons a list of player names is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NamesError {
    /// Nothing was entered.
    #[error("empty input")]
    Empty,
    /// One of the comma-separated names is blank.
    #[error("one of the names is empty")]
    BlankName,
    /// The number of names does not match the player count.
    #[error("expected exactly {expected} names, found {found}")]
    WrongCount {
        /// Player count entered earlier.
        expected: usize,
        /// Names found in the input.
        found: usize,
    },
    /// The same name was entered twice.
    #[error("player names must be unique")]
    Duplicate,
}

/// Errors that can occur when loading a configuration file.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path has no extension.
    #[error("configuration file has no extension, expected .ini")]
    MissingExtension,
    /// The path has an extension other than `.ini`.
    #[error("extension .{0} is not valid, expected .ini")]
    UnsupportedExtension(alloc::string::String),
    /// The file could not be read.
    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),
}
