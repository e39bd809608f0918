//! A Zombie Dice game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a full session as an
//! explicit state machine: player setup, turns of rolling and holding,
//! busts, and tie-break rounds. Dice move between the bag and the turn's
//! stores inside a [`DicePool`].
//!
//! # Example
//!
//! ```
//! use zombie_dice::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! for input in ["", "", "2", "Ann, Bo", ""] {
//!     game.update(input).unwrap();
//! }
//! assert_eq!(game.state(), GameState::Init);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod pool;
pub mod result;
pub mod snapshot;
mod sync;

// Re-export main types
pub use die::{Die, DieType, FACES_PER_DIE, Face, Faces};
#[cfg(feature = "std")]
pub use error::ConfigError;
pub use error::{CountError, DrawError, NamesError, StepError};
pub use game::{
    Command, Game, GameState, InputKind, parse_player_count, parse_player_names,
};
pub use options::{DEFAULT_BRAINS_TO_WIN, DieSpec, GameOptions};
pub use player::Player;
pub use pool::{BUST_SHOTS, DICE_PER_ROLL, DicePool, RollOutcome};
pub use result::{GameResult, Outcome};
pub use snapshot::Snapshot;
