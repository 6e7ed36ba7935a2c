//! History consistency invariant: the move list rebuilds the board.

use super::super::{Board, Player, RoundInProgress};
use super::Invariant;

/// Invariant: replaying the history on an empty board yields the current
/// board, with X first and sides alternating.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let mut board = Board::new();
        let mut expected = Player::X;

        for mv in round.history() {
            if mv.player != expected || board.place(mv.index, mv.player).is_err() {
                return false;
            }
            expected = expected.opponent();
        }

        board == *round.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, RoundResult};

    #[test]
    fn test_new_round_holds() {
        assert!(HistoryConsistentInvariant::holds(&RoundInProgress::new()));
    }

    #[test]
    fn test_replayed_round_holds() {
        let Ok(RoundResult::InProgress(round)) = RoundInProgress::replay(&[8, 0, 4]) else {
            panic!("Expected in-progress round");
        };
        assert!(HistoryConsistentInvariant::holds(&round));
        assert_eq!(round.history().len(), 3);
    }

    #[test]
    fn test_missing_move_violates() {
        let Ok(RoundResult::InProgress(mut round)) = RoundInProgress::replay(&[8, 0]) else {
            panic!("Expected in-progress round");
        };
        round.history.pop();
        assert!(!HistoryConsistentInvariant::holds(&round));

        round.history.push(Move::new(Player::X, 0));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
