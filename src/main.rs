//! Zombie Dice - play Zombie Dice in the terminal.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

/// Zombie Dice - eat 13 brains before the others do
#[derive(Parser, Debug)]
#[command(name = "zombie-dice")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (.ini)
    config: Option<PathBuf>,

    /// Random seed (default: time based)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let result = cli::setup_logging(args.log.as_deref())
        .and_then(|()| cli::load_options(args.config.as_deref()))
        .and_then(|options| cli::play(options, seed));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
