//! Unbeatable opponent: exhaustive minimax over the remaining game tree.
//!
//! Scores are taken from the searching side's point of view and are not
//! discounted by depth, so a win now and a win in five moves rank the
//! same. Ties at the root go to the lowest index.

use super::MoveSelector;
use crate::games::tictactoe::rules::{self, RoundOutcome};
use crate::games::tictactoe::{BOARD_SIZE, Board, Player};
use tracing::{debug, instrument};

/// Score of a position the searching side has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Full-depth minimax. Stateless; every call searches from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MinimaxSelector {
    /// Creates the selector.
    pub fn new() -> Self {
        Self
    }

    /// Best square for `side`, or `None` if the board is full.
    ///
    /// Candidates are tried in ascending index order and only a strictly
    /// greater score replaces the current best.
    #[instrument(level = "trace", skip(self, board), fields(board = %board.display()))]
    pub fn best_move(&self, board: &Board, side: Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;

        for index in board.empty_indices() {
            let Some(next) = with_mark(board, index, side) else {
                continue;
            };
            let score = evaluate(&next, side.opponent(), side);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        debug!(?side, ?best, "Minimax selected square");
        best.map(|(index, _)| index)
    }
}

impl MoveSelector for MinimaxSelector {
    fn select(&mut self, board: &Board, side: Player) -> Option<usize> {
        self.best_move(board, side)
    }
}

/// Minimax value of `board` for `me`, with `to_move` about to play.
///
/// `me`'s turns maximize, the opponent's turns minimize. Terminal boards
/// score [`WIN_SCORE`], `-WIN_SCORE` or [`DRAW_SCORE`].
pub fn evaluate(board: &Board, to_move: Player, me: Player) -> i32 {
    match rules::outcome(board) {
        RoundOutcome::Won(player) if player == me => return WIN_SCORE,
        RoundOutcome::Won(_) => return -WIN_SCORE,
        RoundOutcome::Drawn => return DRAW_SCORE,
        RoundOutcome::InProgress => {}
    }

    let scores = (0..BOARD_SIZE)
        .filter_map(|index| with_mark(board, index, to_move))
        .map(|next| evaluate(&next, to_move.opponent(), me));

    let best = if to_move == me {
        scores.max()
    } else {
        scores.min()
    };

    // An in-progress board always has an empty square.
    best.unwrap_or(DRAW_SCORE)
}

/// Copy of `board` with `player` at `index`, or `None` if the square is
/// taken. The input board is never modified.
fn with_mark(board: &Board, index: usize, player: Player) -> Option<Board> {
    let mut next = *board;
    next.place(index, player).ok()?;
    Some(next)
}
