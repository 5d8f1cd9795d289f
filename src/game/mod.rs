//! Core game rules: board, positions, and the session state machine.

mod position;
mod session;
mod types;

pub use position::Position;
pub use session::{Participant, Session, SessionStatus, TurnAdvance};
pub use types::{Board, Mark, MoveError, Square};
