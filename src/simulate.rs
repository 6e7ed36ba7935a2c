//! Headless self-play between two computer strategies.

use crate::games::tictactoe::{
    Difficulty, MinimaxSelector, MoveError, MoveSelector, Player, RandomSelector,
    RoundInProgress, RoundOutcome, RoundResult,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Results of a batch of rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Tally {
    /// Total rounds played.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Losses for `player`, i.e. the other side's wins.
    pub fn losses(&self, player: Player) -> u32 {
        match player {
            Player::X => self.o_wins,
            Player::O => self.x_wins,
        }
    }

    fn record(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None if outcome.is_terminal() => self.draws += 1,
            None => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: X won {}, O won {}, {} drawn",
            self.rounds(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one round to completion and returns its outcome.
///
/// # Errors
///
/// Propagates a [`MoveError`] if a selector picks an unplayable square.
pub fn play_round<R: Rng>(
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<RoundOutcome, MoveError> {
    let mut round = RoundInProgress::new();
    loop {
        let side = round.to_move();
        let strategy = if side == Player::X { x } else { o };
        let index = match strategy {
            Difficulty::Random => RandomSelector::new(&mut *rng).select(round.board(), side),
            Difficulty::Optimal => MinimaxSelector::new().select(round.board(), side),
        };

        // An in-progress round always has an empty square.
        let Some(index) = index else {
            return Ok(RoundOutcome::Drawn);
        };

        match round.place(index)? {
            RoundResult::InProgress(next) => round = next,
            finished => {
                let outcome = finished.outcome();
                debug!(board = %finished.board().display(), %outcome, "Round done");
                return Ok(outcome);
            }
        }
    }
}

/// Plays `rounds` rounds between two strategies.
///
/// # Errors
///
/// Stops at the first round that fails in [`play_round`].
#[instrument(skip(rng))]
pub fn simulate<R: Rng>(
    rounds: u32,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<Tally, MoveError> {
    let mut tally = Tally::default();
    for _ in 0..rounds {
        tally.record(play_round(x, o, rng)?);
    }
    info!(%tally, "Simulation finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_record_sorts_outcomes() {
        let mut tally = Tally::default();
        for outcome in [
            RoundOutcome::Won(Player::X),
            RoundOutcome::Won(Player::O),
            RoundOutcome::Won(Player::O),
            RoundOutcome::Drawn,
            RoundOutcome::InProgress,
        ] {
            tally.record(outcome);
        }
        assert_eq!(
            tally,
            Tally {
                x_wins: 1,
                o_wins: 2,
                draws: 1
            }
        );
        assert_eq!(tally.losses(Player::X), 2);
    }

    #[test]
    fn test_tally_counts_every_round() {
        let mut rng = StdRng::seed_from_u64(11);
        let tally = simulate(40, Difficulty::Random, Difficulty::Random, &mut rng).unwrap();
        assert_eq!(tally.rounds(), 40);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let a = simulate(
            25,
            Difficulty::Random,
            Difficulty::Random,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        let b = simulate(
            25,
            Difficulty::Random,
            Difficulty::Random,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
