//! Command-line interface for pawns_only_chess.

use clap::Parser;
use std::path::PathBuf;

/// Pawns-Only Chess - two players, sixteen pawns, one console
#[derive(Parser, Debug)]
#[command(name = "pawns_only_chess")]
#[command(about = "Play pawns-only chess in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the player commanding White (asked for if omitted)
    #[arg(long)]
    pub white: Option<String>,

    /// Name of the player commanding Black (asked for if omitted)
    #[arg(long)]
    pub black: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not print the board after each move
    #[arg(long)]
    pub no_board: bool,
}
