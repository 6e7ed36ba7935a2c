//! Phase-specific typestate structs for a single round.
//!
//! A round in progress can accept moves; a finished round always has a
//! terminal outcome. Moving between them consumes the old phase.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::rules::{self, RoundOutcome, WinLine};
use super::{Board, Player};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept moves.
///
/// X always moves first; `to_move` flips after every move that does not
/// end the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Player,
}

impl RoundInProgress {
    /// Starts a round on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Places the side-to-move's mark at `index`, consuming the round.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the square is occupied or out of range.
    /// The round is dropped in that case; callers that need to keep it
    /// place on a clone.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(mut self, index: usize) -> Result<RoundResult, MoveError> {
        let player = self.to_move;
        self.board.place(index, player)?;
        self.history.push(Move::new(player, index));

        let outcome = rules::outcome(&self.board);
        if !outcome.is_terminal() {
            self.to_move = player.opponent();
            assert_invariants(&self);
            return Ok(RoundResult::InProgress(self));
        }

        let line = rules::winner(&self.board).map(|(line, _)| line);
        debug!(%outcome, ?line, "Round finished");
        Ok(RoundResult::Finished(RoundFinished {
            board: self.board,
            history: self.history,
            outcome,
            line,
        }))
    }

    /// Replays moves from an empty board.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move. Moves after a finishing move are
    /// ignored.
    #[instrument(skip(indices))]
    pub fn replay(indices: &[usize]) -> Result<RoundResult, MoveError> {
        let mut round = RoundInProgress::new();
        for &index in indices {
            match round.place(index)? {
                RoundResult::InProgress(r) => round = r,
                finished @ RoundResult::Finished(_) => return Ok(finished),
            }
        }
        Ok(RoundResult::InProgress(round))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for RoundInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
///
/// The outcome is never [`RoundOutcome::InProgress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    outcome: RoundOutcome,
    line: Option<WinLine>,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// The completed line when the round was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Clears the board for the next round (consumes the finished round).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundInProgress {
        RoundInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

impl RoundResult {
    /// Board after the move, in either phase.
    pub fn board(&self) -> &Board {
        match self {
            RoundResult::InProgress(round) => round.board(),
            RoundResult::Finished(round) => round.board(),
        }
    }

    /// Outcome after the move.
    pub fn outcome(&self) -> RoundOutcome {
        match self {
            RoundResult::InProgress(_) => RoundOutcome::InProgress,
            RoundResult::Finished(round) => round.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternates() {
        let round = RoundInProgress::new();
        assert_eq!(round.to_move(), Player::X);

        let RoundResult::InProgress(round) = round.place(4).unwrap() else {
            panic!("Round shouldn't finish after one move");
        };
        assert_eq!(round.to_move(), Player::O);
        assert_eq!(round.history(), &[Move::new(Player::X, 4)]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let RoundResult::InProgress(round) = RoundInProgress::new().place(4).unwrap() else {
            panic!("Unexpected finish");
        };
        assert_eq!(round.place(4), Err(MoveError::SquareOccupied(4)));
    }

    #[test]
    fn test_replay_to_win_reports_line() {
        // X: 0, 1, 2   O: 3, 4
        let result = RoundInProgress::replay(&[0, 3, 1, 4, 2]).unwrap();
        let RoundResult::Finished(round) = result else {
            panic!("Expected finished round");
        };
        assert_eq!(round.outcome(), RoundOutcome::Won(Player::X));
        assert_eq!(round.winning_line(), Some(WinLine::TopRow));
        assert_eq!(round.history().len(), 5);
    }

    #[test]
    fn test_replay_to_draw() {
        // X O X / X O O / O X X
        let result = RoundInProgress::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(result.outcome(), RoundOutcome::Drawn);
    }

    #[test]
    fn test_restart_gives_empty_board() {
        let RoundResult::Finished(round) = RoundInProgress::replay(&[0, 3, 1, 4, 2]).unwrap()
        else {
            panic!("Expected finished round");
        };
        let next = round.restart();
        assert_eq!(next.board(), &Board::new());
        assert_eq!(next.to_move(), Player::X);
    }
}
