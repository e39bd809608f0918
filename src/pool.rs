//! The dice pool: bag, rolled set, brain store and shot store.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::die::{Die, Face};
use crate::error::DrawError;
use crate::options::GameOptions;

/// Dice drawn per roll.
pub const DICE_PER_ROLL: usize = 3;

/// Shots that end a turn.
pub const BUST_SHOTS: usize = 3;

/// Face counts for one resolved roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollOutcome {
    /// Dice that landed on a brain.
    pub brains: usize,
    /// Dice that landed on a shot.
    pub shots: usize,
    /// Dice that landed on footprints.
    pub runs: usize,
}

/// Owns every die in play and moves them between the four areas.
///
/// Between resets each die lives in exactly one of the bag, the rolled set,
/// the brain store or the shot store.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    bag: Vec<Die>,
    rolled: Vec<Die>,
    brains: Vec<Die>,
    shots: Vec<Die>,
}

impl DicePool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bag: Vec::new(),
            rolled: Vec::new(),
            brains: Vec::new(),
            shots: Vec::new(),
        }
    }

    /// Rebuilds the bag from the dice table and shuffles it.
    pub fn reset<R: Rng + ?Sized>(&mut self, options: &GameOptions, rng: &mut R) {
        self.clear_turn();
        self.bag.clear();

        for spec in options.dice() {
            self.bag
                .extend(core::iter::repeat_n(Die::new(spec.kind, spec.faces), spec.count));
        }
        self.bag.shuffle(rng);

        log::debug!("pool reset with {} dice", self.bag.len());
    }

    /// Draws three dice from the bag and rolls them.
    ///
    /// When the bag holds fewer than three dice, the brain store is poured
    /// back into it first. Those brains no longer count for the turn.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughDice`] if three dice still cannot be
    /// drawn. The pool is left untouched apart from the replenishment.
    pub fn draw_three<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[Die], DrawError> {
        // Dice left over from an unresolved roll go back to the bag first.
        self.bag.append(&mut self.rolled);

        if self.bag.len() < DICE_PER_ROLL {
            log::debug!(
                "bag has {} dice, returning {} brains to it",
                self.bag.len(),
                self.brains.len()
            );
            self.bag.append(&mut self.brains);
        }

        if self.bag.len() < DICE_PER_ROLL {
            return Err(DrawError::NotEnoughDice {
                available: self.bag.len(),
            });
        }

        let start = self.bag.len() - DICE_PER_ROLL;
        self.rolled.extend(self.bag.drain(start..));
        for die in &mut self.rolled {
            die.roll(rng);
        }

        Ok(&self.rolled)
    }

    /// Moves the rolled dice to their stores: brains and shots are kept
    /// aside, footprints go back into the bag.
    pub fn resolve_rolled(&mut self) -> RollOutcome {
        let mut outcome = RollOutcome::default();

        for die in self.rolled.drain(..) {
            match die.face() {
                Some(Face::Brain) => {
                    outcome.brains += 1;
                    self.brains.push(die);
                }
                Some(Face::Shot) => {
                    outcome.shots += 1;
                    self.shots.push(die);
                }
                Some(Face::Run) | None => {
                    outcome.runs += 1;
                    self.bag.push(die);
                }
            }
        }

        outcome
    }

    /// Returns the number of shots taken this turn.
    #[must_use]
    pub fn bust_count(&self) -> usize {
        self.shots.len()
    }

    /// Returns whether the turn has taken enough shots to bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.bust_count() >= BUST_SHOTS
    }

    /// Drops the turn's stores and rolled set. The dice come back with the
    /// next [`reset`](Self::reset).
    pub fn clear_turn(&mut self) {
        self.rolled.clear();
        self.brains.clear();
        self.shots.clear();
    }

    /// Returns the dice still in the bag.
    #[must_use]
    pub fn bag(&self) -> &[Die] {
        &self.bag
    }

    /// Returns the dice from the current roll.
    #[must_use]
    pub fn rolled(&self) -> &[Die] {
        &self.rolled
    }

    /// Returns the brain store.
    #[must_use]
    pub fn brains(&self) -> &[Die] {
        &self.brains
    }

    /// Returns the shot store.
    #[must_use]
    pub fn shots(&self) -> &[Die] {
        &self.shots
    }

    /// Returns the number of dice across all four areas.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bag.len() + self.rolled.len() + self.brains.len() + self.shots.len()
    }
}
