//! Move sources: where each participant's moves come from.

mod computer;
mod human;

pub use computer::{Computer, Difficulty};
pub use human::HumanInput;

use crate::game::{Board, Position};
use anyhow::Result;

/// Trait for sources that can produce moves.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Produces the next move for the given board.
    ///
    /// Computer sources only ever return empty squares and fail when the
    /// board is full. Human input may name any square; the session
    /// rejects occupied ones and asks again.
    async fn select_move(&mut self, board: &Board) -> Result<Position>;
}
