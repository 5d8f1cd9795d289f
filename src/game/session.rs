//! The turn-resolution state machine for one game.

use super::position::Position;
use super::types::{Board, Mark, MoveError};
use crate::console::Console;
use crate::players::MoveSource;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl SessionStatus {
    /// Returns true once the session has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != SessionStatus::InProgress
    }
}

/// One of the two players in a session: a display name, an assigned mark,
/// and the source its moves come from.
pub struct Participant {
    name: String,
    mark: Mark,
    source: Box<dyn MoveSource>,
}

impl Participant {
    /// Creates a participant bound to a move source.
    pub fn new(name: impl Into<String>, mark: Mark, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.into(),
            mark,
            source,
        }
    }

    /// The participant's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this participant places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("mark", &self.mark)
            .finish_non_exhaustive()
    }
}

/// Result of a single turn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    /// The proposed move was applied and the turn passed on (unless the
    /// session just ended).
    Applied {
        /// Square the mark was placed on.
        position: Position,
        /// Mark that was placed.
        mark: Mark,
    },
    /// The proposed square was occupied; the same participant retries.
    Rejected {
        /// Square that was refused.
        position: Position,
        /// Mark that failed to place.
        mark: Mark,
    },
}

/// One complete game: a board, two participants, and whose turn it is.
///
/// The session alternates requesting moves from each participant's
/// [`MoveSource`], applies them through board validation, and settles on
/// [`SessionStatus::Won`] or [`SessionStatus::Draw`]. A rejected move does
/// not advance the turn.
#[derive(Debug)]
pub struct Session {
    board: Board,
    participants: [Participant; 2],
    turn: usize,
    status: SessionStatus,
}

impl Session {
    /// Creates a session over a fresh board.
    ///
    /// # Panics
    ///
    /// Panics if both participants hold the same mark; that is a
    /// configuration bug, not a runtime condition.
    pub fn new(first: Participant, second: Participant) -> Self {
        assert_ne!(
            first.mark(),
            second.mark(),
            "participants must hold distinct marks"
        );
        Self {
            board: Board::new(),
            participants: [first, second],
            turn: 0,
            status: SessionStatus::InProgress,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The participant whose turn it is.
    pub fn current(&self) -> &Participant {
        &self.participants[self.turn]
    }

    /// Looks up the participant holding the given mark.
    pub fn participant(&self, mark: Mark) -> Option<&Participant> {
        self.participants.iter().find(|p| p.mark() == mark)
    }

    /// Clears the board and returns the session to its initial state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = 0;
        self.status = SessionStatus::InProgress;
    }

    /// Requests one move from the current participant and attempts to
    /// apply it.
    ///
    /// On success the status is re-evaluated (win, draw, or turn flip);
    /// on an occupied square nothing changes and the same participant
    /// keeps the turn.
    ///
    /// # Errors
    ///
    /// Fails if the session is already over, or if the move source itself
    /// fails (no legal move available, input stream closed).
    pub async fn advance(&mut self) -> Result<TurnAdvance> {
        anyhow::ensure!(!self.status.is_over(), "session is already over");

        let participant = &mut self.participants[self.turn];
        let mark = participant.mark;
        let position = participant.source.select_move(&self.board).await?;

        match self.board.apply_move(position, mark) {
            Ok(()) => {
                debug!(%position, %mark, "move applied");
                if let Some(winner) = self.board.winning_mark() {
                    self.status = SessionStatus::Won(winner);
                } else if self.board.is_full() {
                    self.status = SessionStatus::Draw;
                } else {
                    self.turn = 1 - self.turn;
                }
                Ok(TurnAdvance::Applied { position, mark })
            }
            Err(MoveError::Occupied(position)) => {
                warn!(%position, %mark, "move rejected, square occupied");
                Ok(TurnAdvance::Rejected { position, mark })
            }
        }
    }

    /// Drives the turn loop to completion against the given console.
    ///
    /// Each turn: clear the screen, render the board, announce whose turn
    /// it is, then attempt one move. Occupied-square rejections print a
    /// warning and loop back to the same participant.
    #[instrument(skip_all)]
    pub async fn run(&mut self, console: &Console) -> Result<SessionStatus> {
        while !self.status.is_over() {
            console.clear_screen()?;
            console.render_board(&self.board);

            let current = self.current();
            console.announce_turn(current.name(), current.mark());

            if let TurnAdvance::Rejected { .. } = self.advance().await? {
                console.warn_invalid_move();
            }
        }

        info!(status = ?self.status, "session finished");
        Ok(self.status)
    }
}
