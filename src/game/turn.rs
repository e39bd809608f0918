use rand::Rng;

use crate::error::DrawError;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Refills the bag for the turn that is about to start.
    pub(super) fn init_turn(&self) -> GameState {
        let mut rng = self.rng.lock();
        self.pool.lock().reset(&self.options, &mut *rng);
        GameState::Start
    }

    pub(super) fn roll(&self) -> Result<GameState, DrawError> {
        let mut rng = self.rng.lock();
        let mut pool = self.pool.lock();
        let rolled = pool.draw_three(&mut *rng)?;
        log::debug!(
            "rolled {:?}",
            rolled.iter().map(|die| die.face()).collect::<alloc::vec::Vec<_>>()
        );
        Ok(GameState::ShowDice)
    }

    pub(super) fn parse_dice(&self) -> GameState {
        let outcome = self.pool.lock().resolve_rolled();
        log::debug!("roll outcome {outcome:?}");
        GameState::Parsing
    }

    /// Banks the brain store for the active player.
    pub(super) fn hold(&self) -> GameState {
        let brains = self.pool.lock().brains().len();
        if let Some(player) = self.players.lock().get_mut(self.active_index()) {
            player.add_brains(brains);
            log::debug!("{} holds with {brains} brains", player.name());
        }
        GameState::AddingTurn
    }
}
