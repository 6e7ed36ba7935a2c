//! Easy opponent: any empty square, chosen uniformly.

use super::MoveSelector;
use crate::games::tictactoe::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks uniformly among the empty squares. No lookahead.
#[derive(Debug)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Wraps a random source. Pass `&mut rng` to borrow a long-lived one.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, board: &Board, side: Player) -> Option<usize> {
        let choice = board.empty_indices().choose(&mut self.rng).copied();
        debug!(?side, ?choice, "Random selector chose square");
        choice
    }
}
