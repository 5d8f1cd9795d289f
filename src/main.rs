//! Terminal tic-tac-toe binary.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Console, GameLoop};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(mode = ?cli.mode, difficulty = ?cli.difficulty, "Starting tic-tac-toe");

    let console = Console::new();
    let mut game = GameLoop::new(console, cli.mode, cli.difficulty, cli.seed);
    game.run().await
}
