//! Terminal tic-tac-toe with human and computer players.
//!
//! # Architecture
//!
//! - **Board**: owns the 3x3 grid, validates and applies moves, detects
//!   win and draw conditions
//! - **MoveSource**: where a participant's moves come from - terminal
//!   input or the computer strategy
//! - **Session**: one game from empty board to win or draw
//! - **GameLoop**: replays sessions until the player declines a rematch
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{Console, GameLoop};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let console = Console::new();
//! let mut game = GameLoop::new(console, None, None, None);
//! game.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod game;
mod game_loop;
mod players;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Console collaborator
pub use console::Console;

// Crate-level exports - Game types
pub use game::{
    Board, Mark, MoveError, Participant, Position, Session, SessionStatus, Square, TurnAdvance,
};

// Crate-level exports - Driver
pub use game_loop::{GameLoop, Mode};

// Crate-level exports - Move sources
pub use players::{Computer, Difficulty, HumanInput, MoveSource};
