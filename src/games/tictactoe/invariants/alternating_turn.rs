//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, RoundInProgress};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// X never trails O and leads by at most one mark, and the side to move
/// follows from the mark counts.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let board = round.board();
        let (x, o) = (board.count(Player::X), board.count(Player::O));

        let expected_next = match x.checked_sub(o) {
            Some(0) => Player::X,
            Some(1) => Player::O,
            _ => return false,
        };

        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
