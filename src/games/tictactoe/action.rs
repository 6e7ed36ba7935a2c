//! Moves and the errors that reject them.
//!
//! Moves are domain events, not side effects. A rejected move never
//! changes any state.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The board index (0-8) where the mark goes.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// A placement the board itself refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),
}

/// A command that is not valid in the match's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TransitionError {
    /// The match has been decided; only a new match is accepted.
    #[display("Match is over")]
    MatchOver,

    /// The round has ended and the board has not been cleared yet.
    #[display("Round is over")]
    RoundOver,

    /// It is the computer's turn; external placements are refused.
    #[display("It's the computer's turn ({:?})", _0)]
    ComputerToMove(#[error(not(source))] Player),

    /// A computer move was requested while a human is to move.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// The selector found no empty square.
    #[display("No moves available")]
    NoMovesAvailable,
}

/// Any error a match command can produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// Placement at an occupied or out-of-range square.
    #[display("Illegal move: {}", _0)]
    IllegalMove(#[error(source)] MoveError),

    /// Command not allowed in the current match state.
    #[display("Invalid state transition: {}", _0)]
    InvalidStateTransition(#[error(source)] TransitionError),
}

impl GameError {
    /// True for [`GameError::IllegalMove`].
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove(_))
    }

    /// True for [`GameError::InvalidStateTransition`].
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, GameError::InvalidStateTransition(_))
    }
}
