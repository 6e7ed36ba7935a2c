//! Computer opponents.
//!
//! Two strategies share the [`MoveSelector`] seam: a uniform random pick
//! and an exhaustive minimax search.

mod minimax;
mod random;

pub use minimax::{DRAW_SCORE, MinimaxSelector, WIN_SCORE, evaluate};
pub use random::RandomSelector;

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Picks a square for a side.
pub trait MoveSelector {
    /// Returns the index to play for `side`, or `None` on a full board.
    fn select(&mut self, board: &Board, side: Player) -> Option<usize>;
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random choice among empty squares.
    #[default]
    #[serde(alias = "easy")]
    #[strum(serialize = "random", serialize = "easy")]
    Random,
    /// Full game-tree search; never loses.
    #[serde(alias = "unbeatable")]
    #[strum(serialize = "optimal", serialize = "unbeatable")]
    Optimal,
}

impl Difficulty {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Easy",
            Self::Optimal => "Unbeatable",
        }
    }

    /// Toggles between `Random` and `Optimal`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Random => Self::Optimal,
            Self::Optimal => Self::Random,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parses_aliases() {
        assert_eq!(Difficulty::from_str("random"), Ok(Difficulty::Random));
        assert_eq!(Difficulty::from_str("Easy"), Ok(Difficulty::Random));
        assert_eq!(Difficulty::from_str("OPTIMAL"), Ok(Difficulty::Optimal));
        assert_eq!(Difficulty::from_str("unbeatable"), Ok(Difficulty::Optimal));
        assert!(Difficulty::from_str("hard").is_err());
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Difficulty::Random.toggle(), Difficulty::Optimal);
        assert_eq!(Difficulty::Random.toggle().toggle(), Difficulty::Random);
    }
}
