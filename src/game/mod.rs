//! Game engine and state management.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::error::StepError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::pool::DicePool;
use crate::result::{GameResult, Outcome};
use crate::snapshot::Snapshot;

mod round;
mod setup;
pub mod state;
mod turn;

pub use setup::{parse_player_count, parse_player_names};
pub use state::{Command, GameState, InputKind};

/// A Zombie Dice session: player setup, the turn loop and tie-breaks.
///
/// The game owns the dice pool, the players and the random number
/// generator. Drive it by calling [`Game::update`] once per step, passing a
/// line of input whenever [`GameState::input`] asks for one.
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Dice in play.
    pub pool: Mutex<DicePool>,
    /// Players still in the game, in turn order.
    pub players: Mutex<Vec<Player>>,
    /// Players removed by tie-break elimination, in removal order.
    eliminated: Mutex<Vec<Player>>,
    /// Player count entered during setup.
    expected_players: AtomicUsize,
    /// Index of the player whose turn it is.
    active: AtomicUsize,
    /// Whether a tie-break round has started.
    tie_break: AtomicBool,
    /// Random number generator.
    rng: Mutex<R>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use zombie_dice::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Begin);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game that draws its randomness from `rng`.
    #[must_use]
    pub const fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::Begin),
            pool: Mutex::new(DicePool::new()),
            players: Mutex::new(Vec::new()),
            eliminated: Mutex::new(Vec::new()),
            expected_players: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            tie_break: AtomicBool::new(false),
            rng: Mutex::new(rng),
        }
    }

    /// Performs one transition.
    ///
    /// `input` is only read by states whose [`GameState::input`] is not
    /// `None`; pass an empty string otherwise. Invalid input never fails:
    /// the game moves to a state that asks again.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::GameOver`] once the game has ended, or
    /// [`StepError::Draw`] if the dice pool cannot supply a roll. In the
    /// latter case the state is left unchanged.
    pub fn update(&self, input: &str) -> Result<GameState, StepError> {
        let state = self.state();

        let next = match state {
            GameState::Begin => GameState::Welcome,
            GameState::Welcome => GameState::ReadingSize,
            GameState::ReadingSize | GameState::InvalidSize | GameState::LessThanTwo => {
                self.read_size(input)
            }
            GameState::ReadingPlayers | GameState::InvalidNames(_) => self.read_players(input),
            GameState::InitPlayer => self.init_player(),
            GameState::Init => self.init_turn(),
            GameState::Start | GameState::ShowScoreboard | GameState::InvalidOption => {
                Command::parse(input).next_state()
            }
            GameState::Rolling => self.roll()?,
            GameState::ShowDice => GameState::ParsingDice,
            GameState::ParsingDice => self.parse_dice(),
            GameState::Parsing => GameState::after_resolution(self.pool.lock().bust_count()),
            GameState::Holding => self.hold(),
            GameState::ForceQuit => GameState::AddingTurn,
            GameState::AddingTurn => self.add_turn(),
            GameState::Preparing => self.prepare_next(),
            GameState::Cleaning => self.clean(),
            GameState::ParsingTie => self.parse_tie(),
            GameState::InitTie => GameState::InitPlayer,
            GameState::End | GameState::Quit => return Err(StepError::GameOver),
        };

        let previous = self.state.replace(next);
        log::debug!("{previous:?} -> {next:?}");

        if next.is_over() {
            log::info!("game over: {next:?}");
        }

        Ok(next)
    }
}

impl<R> Game<R> {
    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whether the game has ended, with a winner or by quitting.
    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// Returns the index of the player whose turn it is.
    pub fn active_index(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Returns a copy of the player whose turn it is.
    pub fn active_player(&self) -> Option<Player> {
        self.players.lock().get(self.active_index()).cloned()
    }

    /// Returns the players still in the game.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns the players removed during tie-breaks.
    pub fn eliminated(&self) -> Vec<Player> {
        self.eliminated.lock().clone()
    }

    /// Returns the player count entered during setup.
    pub fn expected_players(&self) -> usize {
        self.expected_players.load(Ordering::SeqCst)
    }

    /// Returns whether a tie-break round is being played.
    pub fn is_tie_break(&self) -> bool {
        self.tie_break.load(Ordering::SeqCst)
    }

    /// Captures everything a front end needs to draw the current screen.
    pub fn snapshot(&self) -> Snapshot {
        let (bag, rolled, brains, shots) = {
            let pool = self.pool.lock();
            (
                pool.bag().len(),
                pool.rolled().to_vec(),
                pool.brains().to_vec(),
                pool.shots().to_vec(),
            )
        };

        Snapshot {
            state: self.state(),
            players: self.players(),
            active: self.active_index(),
            expected_players: self.expected_players(),
            bag,
            rolled,
            brains,
            shots,
            eliminated: self.eliminated(),
            brains_to_win: self.options.brains_to_win,
            tie_break: self.is_tie_break(),
        }
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        let outcome = match self.state() {
            GameState::End => Outcome::Won {
                winners: self.players(),
            },
            GameState::Quit => Outcome::Abandoned,
            _ => return None,
        };

        Some(GameResult {
            outcome,
            standings: self.players(),
            eliminated: self.eliminated(),
        })
    }

    fn set_active(&self, index: usize) {
        self.active.store(index, Ordering::SeqCst);
    }
}
