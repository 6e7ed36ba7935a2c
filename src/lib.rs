//! Noughts library - tic-tac-toe matches against a human or the computer
//!
//! # Architecture
//!
//! - **Board / Rules**: a 3x3 grid plus pure win and draw detection
//! - **Selectors**: a uniform random opponent and an exhaustive minimax one
//! - **Match**: a state machine running rounds until a side has 3 wins
//! - **Simulation**: headless self-play between two strategies
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, Match, MatchState, Opponent, TicTacToePlayer};
//!
//! let mut game = Match::with_seed(Opponent::Computer, Difficulty::Optimal, 7);
//! game.place_at(4)?;
//! let reply = game.play_computer_turn()?;
//! assert!([0, 2, 6, 8].contains(&reply));
//! assert_eq!(game.state(), MatchState::AwaitingMove(TicTacToePlayer::X));
//! # Ok::<(), noughts::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, MatchConfig};

// Crate-level exports - Simulation
pub use simulate::{Tally, play_round, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, COMPUTER_SIDE, Difficulty, GameError, Match, MatchEvent, MatchScore,
    MatchSnapshot, MatchState, MinimaxSelector, Move, MoveError, MoveSelector, Opponent,
    Player as TicTacToePlayer, Position, ROUNDS_TO_WIN, RandomSelector, RoundFinished,
    RoundInProgress, RoundOutcome, RoundResult, Square, TransitionError, WinLine,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::ai::{DRAW_SCORE, WIN_SCORE, evaluate};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, RoundInvariants,
};
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, outcome, winner};
