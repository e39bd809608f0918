//! Terminal front end: option loading, logging and the game loop.

mod render;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use thiserror::Error;
use zombie_dice::{ConfigError, Game, GameOptions, StepError};

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The configuration file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The game hit an unrecoverable condition.
    #[error(transparent)]
    Step(#[from] StepError),
    /// Reading the terminal or creating the log file failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A logger was already installed.
    #[error("could not set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Sends debug logs to `path`, if given. Without a path nothing is logged,
/// so the game screen stays clean.
pub(crate) fn setup_logging(path: Option<&Path>) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };

    WriteLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        File::create(path)?,
    )?;
    Ok(())
}

/// Reads options from the configuration file, or uses the defaults.
pub(crate) fn load_options(path: Option<&Path>) -> Result<GameOptions, CliError> {
    match path {
        Some(path) => {
            let options = GameOptions::load(path)?;
            log::info!("loaded {}: {options:?}", path.display());
            Ok(options)
        }
        None => Ok(GameOptions::default()),
    }
}

/// Runs a full game on stdin and stdout.
pub(crate) fn play(options: GameOptions, seed: u64) -> Result<(), CliError> {
    log::info!("new game, seed {seed}");
    let game = Game::new(options, seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    while !game.is_over() {
        let line = if game.state().input().is_some() {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "\nInput closed. Bye!")?;
                return Ok(());
            }
            line
        } else {
            String::new()
        };

        game.update(&line)?;

        let screen = render::screen(&game.snapshot());
        if !screen.is_empty() {
            write!(out, "{screen}")?;
            out.flush()?;
        }
    }

    if let Some(result) = game.result() {
        log::info!("result: {:?}", result.outcome);
    }
    writeln!(out)?;
    Ok(())
}
