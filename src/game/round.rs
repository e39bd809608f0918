use core::sync::atomic::Ordering;

use alloc::vec::Vec;
use rand::Rng;

use crate::player::Player;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Records the finished turn and checks whether the round decides the
    /// game.
    pub(super) fn add_turn(&self) -> GameState {
        let mut players = self.players.lock();
        if let Some(player) = players.get_mut(self.active_index()) {
            player.add_turn();
        }

        let even = players.windows(2).all(|w| w[0].turns() == w[1].turns());
        let reached = players
            .iter()
            .any(|p| p.brains() >= self.options.brains_to_win);
        drop(players);

        if even && reached {
            GameState::ParsingTie
        } else {
            GameState::Preparing
        }
    }

    pub(super) fn prepare_next(&self) -> GameState {
        let count = self.players.lock().len().max(1);
        self.set_active((self.active_index() + 1) % count);
        GameState::Cleaning
    }

    pub(super) fn clean(&self) -> GameState {
        self.pool.lock().clear_turn();
        GameState::Init
    }

    /// Removes everyone below the qualifying mark.
    ///
    /// The mark is the win threshold on the first check and the best score
    /// among the survivors once a tie-break has been played. A tie-break
    /// check that removes nobody ends the game with every survivor as a
    /// co-winner.
    pub(super) fn parse_tie(&self) -> GameState {
        let tie_break = self.is_tie_break();
        let mut players = self.players.lock();

        let mark = if tie_break {
            players.iter().map(Player::brains).max().unwrap_or(0)
        } else {
            self.options.brains_to_win
        };

        let (kept, removed): (Vec<Player>, Vec<Player>) =
            players.drain(..).partition(|p| p.brains() >= mark);
        *players = kept;
        let remaining = players.len();
        drop(players);

        for player in &removed {
            log::debug!("eliminated {} with {} brains", player.name(), player.brains());
        }
        let stalemate = tie_break && removed.is_empty();
        self.eliminated.lock().extend(removed);

        self.set_active(0);
        self.pool.lock().clear_turn();

        if remaining > 1 && !stalemate {
            let mut rng = self.rng.lock();
            self.pool.lock().reset(&self.options, &mut *rng);
            self.tie_break.store(true, Ordering::SeqCst);
            log::debug!("tie-break among {remaining} players above {mark}");
            GameState::InitTie
        } else {
            GameState::End
        }
    }
}
