//! Command-line interface for tictactoe.

use crate::game_loop::Mode;
use crate::players::Difficulty;
use clap::Parser;

/// Terminal tic-tac-toe with human and computer players.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with human and computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode. Asked interactively when omitted.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Computer difficulty tier. Asked interactively when omitted and a
    /// computer opponent is in play.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random number generator, for reproducible
    /// games.
    #[arg(long)]
    pub seed: Option<u64>,
}
