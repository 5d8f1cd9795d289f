//! Validated board coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) pair on the 3x3 board, both components in `0..=2`.
///
/// Out-of-range coordinates are unrepresentable: the only public
/// constructor is [`Position::new`], which rejects them before any board
/// access can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
