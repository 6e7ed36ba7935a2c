//! Tic-tac-toe: board, rules, computer opponents and the match controller.

mod action;
pub mod ai;
mod controller;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{GameError, Move, MoveError, TransitionError};
pub use ai::{Difficulty, MinimaxSelector, MoveSelector, RandomSelector};
pub use controller::{
    COMPUTER_SIDE, Match, MatchEvent, MatchScore, MatchSnapshot, MatchState, Opponent,
    ROUNDS_TO_WIN,
};
pub use position::Position;
pub use rules::{RoundOutcome, WinLine};
pub use types::{BOARD_SIZE, Board, Player, Square};
pub use typestate::{RoundFinished, RoundInProgress, RoundResult};
