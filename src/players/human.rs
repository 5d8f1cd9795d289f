//! Move source that defers to terminal input.

use super::MoveSource;
use crate::console::Console;
use crate::game::{Board, Position};
use anyhow::Result;

/// Human participant reading moves from the console.
///
/// Malformed and out-of-range input is re-prompted by the console and
/// never reaches the session; occupied squares are the session's problem.
pub struct HumanInput {
    console: Console,
}

impl HumanInput {
    /// Creates a human move source over the shared console.
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

#[async_trait::async_trait]
impl MoveSource for HumanInput {
    async fn select_move(&mut self, _board: &Board) -> Result<Position> {
        self.console.read_move().await
    }
}
