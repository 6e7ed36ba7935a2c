//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the search code and the match controller read terminal
//! status from the same place.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_winner, winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a round, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A side completed a line.
    Won(Player),
    /// Full board, no line.
    Drawn,
}

impl RoundOutcome {
    /// True once the round can accept no more moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Won(player) => write!(f, "{} wins", player),
            RoundOutcome::Drawn => write!(f, "Draw"),
        }
    }
}

/// Computes the round outcome. Win is checked before draw.
pub fn outcome(board: &Board) -> RoundOutcome {
    if let Some(player) = check_winner(board) {
        RoundOutcome::Won(player)
    } else if is_full(board) {
        RoundOutcome::Drawn
    } else {
        RoundOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_queries() {
        assert!(!RoundOutcome::InProgress.is_terminal());
        assert!(RoundOutcome::Drawn.is_terminal());
        assert!(RoundOutcome::Won(Player::O).is_terminal());
        assert_eq!(RoundOutcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(RoundOutcome::Drawn.winner(), None);
    }

    #[test]
    fn test_outcome_in_progress_on_empty_board() {
        assert_eq!(outcome(&Board::new()), RoundOutcome::InProgress);
    }

    #[test]
    fn test_outcome_prefers_win_over_full_board() {
        use Player::{O, X};
        let mut board = Board::new();
        for (index, player) in [X, X, X, O, O, X, X, O, O].into_iter().enumerate() {
            board.place(index, player).unwrap();
        }
        assert_eq!(outcome(&board), RoundOutcome::Won(X));
    }
}
