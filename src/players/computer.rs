//! Computer opponent with difficulty-driven move selection.

use super::MoveSource;
use crate::game::{Board, Mark, Position};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Configured strength tier for a computer participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// Mostly random play.
    Easy,
    /// Random play half the time.
    Medium,
    /// Exact search every move.
    #[default]
    Hard,
}

/// Computer participant.
///
/// Each turn draws a chance value in 1-100 and picks between uniform
/// random choice over empty squares and exact minimax, weighted by the
/// difficulty tier: Easy searches 10% of the time, Medium 50%, Hard
/// always.
pub struct Computer {
    mark: Mark,
    difficulty: Difficulty,
    rng: StdRng,
}

impl Computer {
    /// Creates a computer player with an OS-seeded rng.
    pub fn new(mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            mark,
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a computer player with a fixed rng seed, for reproducible
    /// games.
    pub fn seeded(mark: Mark, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            mark,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks uniformly among the empty squares.
    fn random_move(&mut self, board: &Board) -> Result<Position> {
        let empty = board.empty_positions();
        empty
            .choose(&mut self.rng)
            .copied()
            .context("no legal move available")
    }

    /// Picks the minimax-optimal square.
    ///
    /// Ties break toward the earliest square in row-major order, so the
    /// choice is deterministic for a given board.
    fn minimax_move(&self, board: &Board) -> Result<Position> {
        let mut best: Option<(Position, i32)> = None;
        for pos in board.empty_positions() {
            let mut child = board.clone();
            child
                .apply_move(pos, self.mark)
                .expect("position drawn from empty_positions");
            let score = minimax(&child, self.mark.opponent(), self.mark, 1, i32::MIN / 2, i32::MAX / 2);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos).context("no legal move available")
    }
}

impl std::fmt::Debug for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Computer")
            .field("mark", &self.mark)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl MoveSource for Computer {
    #[instrument(skip_all, fields(mark = %self.mark, difficulty = %self.difficulty))]
    async fn select_move(&mut self, board: &Board) -> Result<Position> {
        let chance = self.rng.gen_range(1..=100);

        let position = match self.difficulty {
            Difficulty::Easy if chance <= 90 => self.random_move(board)?,
            Difficulty::Medium if chance <= 50 => self.random_move(board)?,
            _ => self.minimax_move(board)?,
        };

        debug!(chance, %position, "computer chose position");
        Ok(position)
    }
}

/// Scores a board from `root`'s perspective with alpha-beta pruning.
///
/// Wins score +10 minus depth, losses depth minus 10, draws 0, so faster
/// wins and slower losses are preferred.
fn minimax(board: &Board, to_move: Mark, root: Mark, depth: i32, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(winner) = board.winning_mark() {
        return if winner == root { 10 - depth } else { depth - 10 };
    }
    if board.is_full() {
        return 0;
    }

    if to_move == root {
        let mut best = i32::MIN / 2;
        for pos in board.empty_positions() {
            let mut child = board.clone();
            child
                .apply_move(pos, to_move)
                .expect("position drawn from empty_positions");
            let score = minimax(&child, to_move.opponent(), root, depth + 1, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX / 2;
        for pos in board.empty_positions() {
            let mut child = board.clone();
            child
                .apply_move(pos, to_move)
                .expect("position drawn from empty_positions");
            let score = minimax(&child, to_move.opponent(), root, depth + 1, alpha, beta);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
