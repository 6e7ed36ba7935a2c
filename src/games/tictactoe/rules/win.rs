//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning index-triples.
///
/// Declaration order is the detection order: rows, then columns, then
/// diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// Board indices covered by this line.
    pub const fn indices(self) -> [usize; 3] {
        match self {
            WinLine::TopRow => [0, 1, 2],
            WinLine::MiddleRow => [3, 4, 5],
            WinLine::BottomRow => [6, 7, 8],
            WinLine::LeftColumn => [0, 3, 6],
            WinLine::CenterColumn => [1, 4, 7],
            WinLine::RightColumn => [2, 5, 8],
            WinLine::MainDiagonal => [0, 4, 8],
            WinLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// True if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Returns the owner if all three squares hold the same mark.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.indices();
        match board.get(a)? {
            Square::Occupied(player)
                if board.get(b) == Some(Square::Occupied(player))
                    && board.get(c) == Some(Square::Occupied(player)) =>
            {
                Some(player)
            }
            _ => None,
        }
    }
}

/// Returns the first completed line and its owner, if any.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<(WinLine, Player)> {
    <WinLine as strum::IntoEnumIterator>::iter()
        .find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winner(board).map(|(_, player)| player)
}
