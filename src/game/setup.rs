use core::sync::atomic::Ordering;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::error::{CountError, NamesError};
use crate::options::parse_count;
use crate::player::Player;

use super::{Game, GameState};

/// Checks a player count entered at the prompt.
///
/// # Errors
///
/// Returns [`CountError::NotANumber`] unless the trimmed input is a plain
/// non-negative integer, and [`CountError::LessThanTwo`] for 0 or 1.
///
/// # Example
///
/// ```
/// use zombie_dice::{CountError, parse_player_count};
///
/// assert_eq!(parse_player_count("3"), Ok(3));
/// assert_eq!(parse_player_count("1"), Err(CountError::LessThanTwo));
/// assert_eq!(parse_player_count("two"), Err(CountError::NotANumber));
/// ```
pub fn parse_player_count(input: &str) -> Result<usize, CountError> {
    let count = parse_count(input.trim()).ok_or(CountError::NotANumber)?;
    if count < 2 {
        return Err(CountError::LessThanTwo);
    }
    Ok(count)
}

/// Splits and checks a comma-separated list of player names.
///
/// # Errors
///
/// Returns an error if the input is empty, a name is blank, the number of
/// names differs from `expected`, or a name repeats.
///
/// # Example
///
/// ```
/// use zombie_dice::{NamesError, parse_player_names};
///
/// assert_eq!(parse_player_names(" Ann , Bo ", 2).unwrap(), ["Ann", "Bo"]);
/// assert_eq!(parse_player_names("Ann,,Bo", 3), Err(NamesError::BlankName));
/// ```
pub fn parse_player_names(input: &str, expected: usize) -> Result<Vec<String>, NamesError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(NamesError::Empty);
    }

    let names: Vec<&str> = input.split(',').map(str::trim).collect();
    if names.iter().any(|name| name.is_empty()) {
        return Err(NamesError::BlankName);
    }

    if names.len() != expected {
        return Err(NamesError::WrongCount {
            expected,
            found: names.len(),
        });
    }

    let mut seen = HashSet::new();
    if !names.iter().all(|name| seen.insert(*name)) {
        return Err(NamesError::Duplicate);
    }

    Ok(names.into_iter().map(ToString::to_string).collect())
}

impl<R: Rng> Game<R> {
    pub(super) fn read_size(&self, input: &str) -> GameState {
        let result = parse_player_count(input);
        if let Ok(count) = result {
            self.expected_players.store(count, Ordering::SeqCst);
        }
        GameState::after_count(result)
    }

    pub(super) fn read_players(&self, input: &str) -> GameState {
        match parse_player_names(input, self.expected_players()) {
            Ok(names) => {
                log::debug!("players: {names:?}");
                *self.players.lock() = names.into_iter().map(Player::new).collect();
                GameState::InitPlayer
            }
            Err(err) => GameState::InvalidNames(err),
        }
    }

    /// Picks a random player to open the game or the tie-break round.
    pub(super) fn init_player(&self) -> GameState {
        let count = self.players.lock().len();
        let index = if count > 1 {
            self.rng.lock().random_range(0..count)
        } else {
            0
        };

        self.set_active(index);
        log::debug!("starting player index {index}");
        GameState::Init
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_be_a_plain_integer() {
        assert_eq!(parse_player_count("2"), Ok(2));
        assert_eq!(parse_player_count(" 4\n"), Ok(4));
        assert_eq!(parse_player_count(""), Err(CountError::NotANumber));
        assert_eq!(parse_player_count("-3"), Err(CountError::NotANumber));
        assert_eq!(parse_player_count("2.5"), Err(CountError::NotANumber));
        assert_eq!(parse_player_count("0"), Err(CountError::LessThanTwo));
        assert_eq!(parse_player_count("1"), Err(CountError::LessThanTwo));
    }

    #[test]
    fn names_are_trimmed_and_counted() {
        assert_eq!(
            parse_player_names("player #1, player #2,player #3", 3).unwrap(),
            ["player #1", "player #2", "player #3"]
        );
        assert_eq!(parse_player_names("   ", 2), Err(NamesError::Empty));
        assert_eq!(parse_player_names("Ann, ", 2), Err(NamesError::BlankName));
        assert_eq!(
            parse_player_names("Ann, Bo", 3),
            Err(NamesError::WrongCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_player_names("Ann, Ann", 2),
            Err(NamesError::Duplicate)
        );
    }
}
