//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two symbols a participant places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("square at {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Clears all squares in place.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] without mutating the board if the
    /// square already holds a mark.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Checks for a completed line on the board.
    ///
    /// Scans rows, then columns, then diagonals. The order is an arbitrary
    /// but fixed tie-break; a finished line is unique in a valid game.
    pub fn winning_mark(&self) -> Option<Mark> {
        const LINES: [[usize; 3]; 8] = [
            // Rows
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            // Columns
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            // Diagonals
            [0, 4, 8],
            [2, 4, 6],
        ];

        for [a, b, c] in LINES {
            let occ = self.squares[a];

            if occ != Square::Empty && occ == self.squares[b] && occ == self.squares[c] {
                return match occ {
                    Square::Occupied(mark) => Some(mark),
                    Square::Empty => None,
                };
            }
        }

        None
    }

    /// Returns all currently empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
