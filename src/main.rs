//! Pawns-Only Chess - console game
//!
//! Two players take turns entering moves such as `e2e4` until one side
//! wins, the game stalls, or someone types `exit`.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use pawns_only_chess::{GameConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the game transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    run_game(config)
}

/// Builds the game config from the optional file and CLI overrides.
#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::new(),
    };

    let show_board = *base.show_board() && !cli.no_board;
    Ok(base
        .with_white_name(cli.white.clone())
        .with_black_name(cli.black.clone())
        .with_show_board(show_board))
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = Session::new(stdin.lock(), stdout.lock(), config).run()?;
    info!(?end, "Session finished");
    Ok(())
}
