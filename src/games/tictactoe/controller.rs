//! Match controller: the state machine driving a best-of series.
//!
//! One [`Match`] owns the board, the turn, the score and the opponent
//! settings. Every mutation goes through its commands, and every accepted
//! command is announced to subscribers as a [`MatchEvent`].

use super::action::{GameError, TransitionError};
use super::ai::{Difficulty, MinimaxSelector, MoveSelector, RandomSelector};
use super::rules::{RoundOutcome, WinLine};
use super::typestate::{RoundFinished, RoundInProgress, RoundResult};
use super::{Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Round wins needed to take the match.
pub const ROUNDS_TO_WIN: u32 = 3;

/// The side the computer plays when it is the opponent.
pub const COMPUTER_SIDE: Player = Player::O;

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Opponent {
    /// A second human at the same keyboard.
    Human,
    /// The computer, using the current [`Difficulty`].
    #[default]
    Computer,
}

impl Opponent {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Round wins per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
}

impl MatchScore {
    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// The side that has reached [`ROUNDS_TO_WIN`], if any.
    pub fn match_winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&p| self.wins(p) >= ROUNDS_TO_WIN)
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} O", self.x, self.o)
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for `Player` to place a mark.
    AwaitingMove(Player),
    /// The round is decided; waiting for `new_round`.
    RoundOver(RoundOutcome),
    /// A side has won the match. Terminal until `new_match`.
    MatchOver(Player),
}

/// Emitted on every accepted transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Score reset, empty board, X to move.
    MatchStarted,
    /// Board cleared, X to move.
    RoundStarted,
    /// A mark was placed.
    MarkPlaced {
        /// Board index of the new mark.
        index: usize,
        /// Side that placed it.
        side: Player,
    },
    /// The computer should reply; schedule `play_computer_turn`.
    ComputerToMove {
        /// Strategy the reply will use.
        difficulty: Difficulty,
    },
    /// The round has ended.
    RoundOver {
        /// Final outcome.
        outcome: RoundOutcome,
        /// Completed line to highlight on a win.
        line: Option<WinLine>,
        /// Score including this round.
        score: MatchScore,
    },
    /// A side reached the winning round count.
    MatchOver {
        /// Match winner.
        winner: Player,
        /// Final score.
        score: MatchScore,
    },
    /// The opponent strength changed.
    DifficultyChanged(Difficulty),
    /// The opponent kind changed.
    OpponentChanged(Opponent),
}

/// Read-only view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Board contents.
    pub board: Board,
    /// Side to move in the current (or last) round.
    pub turn: Player,
    /// Outcome derived from the board.
    pub outcome: RoundOutcome,
    /// Line to highlight, if the round was won.
    pub winning_line: Option<WinLine>,
    /// Series score.
    pub score: MatchScore,
    /// State-machine state.
    pub state: MatchState,
    /// Computer strength.
    pub difficulty: Difficulty,
    /// Who plays O.
    pub opponent: Opponent,
}

#[derive(Debug, Clone)]
enum Phase {
    Playing(RoundInProgress),
    RoundOver(RoundFinished),
    MatchOver {
        round: RoundFinished,
        winner: Player,
    },
}

type Listener = Box<dyn FnMut(&MatchEvent) + Send>;

/// A series of rounds between X and O.
pub struct Match {
    phase: Phase,
    score: MatchScore,
    difficulty: Difficulty,
    opponent: Opponent,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("difficulty", &self.difficulty)
            .field("opponent", &self.opponent)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Match {
    /// Creates a match with an entropy-seeded random source.
    #[instrument]
    pub fn new(opponent: Opponent, difficulty: Difficulty) -> Self {
        Self::with_rng(opponent, difficulty, StdRng::from_entropy())
    }

    /// Creates a match whose random opponent is reproducible.
    #[instrument]
    pub fn with_seed(opponent: Opponent, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(opponent, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(opponent: Opponent, difficulty: Difficulty, rng: StdRng) -> Self {
        info!(?opponent, ?difficulty, "Creating match");
        Self {
            phase: Phase::Playing(RoundInProgress::new()),
            score: MatchScore::default(),
            difficulty,
            opponent,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called synchronously for every event.
    pub fn subscribe(&mut self, listener: impl FnMut(&MatchEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Resets the score and starts the first round. Always allowed.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        info!("Starting new match");
        self.score = MatchScore::default();
        self.phase = Phase::Playing(RoundInProgress::new());
        self.emit(MatchEvent::MatchStarted);
    }

    /// Clears the board and hands the move to X.
    ///
    /// # Errors
    ///
    /// [`TransitionError::MatchOver`] once the match is decided.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let next = match std::mem::replace(&mut self.phase, Phase::Playing(RoundInProgress::new()))
        {
            Phase::MatchOver { round, winner } => {
                self.phase = Phase::MatchOver { round, winner };
                return Err(TransitionError::MatchOver.into());
            }
            Phase::RoundOver(round) => round.restart(),
            Phase::Playing(_) => {
                debug!("Abandoning round in progress");
                RoundInProgress::new()
            }
        };
        self.phase = Phase::Playing(next);
        self.emit(MatchEvent::RoundStarted);
        Ok(())
    }

    /// Places the side-to-move's mark at `index` for a human player.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidStateTransition`] if the round or match is
    ///   over, or the computer is to move.
    /// - [`GameError::IllegalMove`] if the square is taken or out of range.
    ///
    /// No state changes on error.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, index: usize) -> Result<(), GameError> {
        if self.pending_computer_turn() {
            warn!(index, "Rejecting placement on the computer's turn");
            return Err(TransitionError::ComputerToMove(COMPUTER_SIDE).into());
        }
        self.apply(index)
    }

    /// Lets the computer choose and play its square.
    ///
    /// Returns the index played.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotComputerTurn`] unless the computer is to move;
    /// round/match-over errors as for [`Match::place_at`].
    #[instrument(skip(self), fields(difficulty = ?self.difficulty))]
    pub fn play_computer_turn(&mut self) -> Result<usize, GameError> {
        self.ensure_playing()?;
        if !self.pending_computer_turn() {
            return Err(TransitionError::NotComputerTurn.into());
        }

        let board = *self.board();
        let index = match self.difficulty {
            Difficulty::Random => RandomSelector::new(&mut self.rng).select(&board, COMPUTER_SIDE),
            Difficulty::Optimal => MinimaxSelector::new().select(&board, COMPUTER_SIDE),
        }
        .ok_or(TransitionError::NoMovesAvailable)?;

        info!(index, "Computer plays");
        self.apply(index)?;
        Ok(index)
    }

    /// Changes the computer's strength. Allowed at any time.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.emit(MatchEvent::DifficultyChanged(difficulty));
    }

    /// Switches O between human and computer. Allowed at any time.
    ///
    /// If this hands O's pending turn to the computer, a
    /// [`MatchEvent::ComputerToMove`] follows.
    #[instrument(skip(self))]
    pub fn set_opponent(&mut self, opponent: Opponent) {
        self.opponent = opponent;
        self.emit(MatchEvent::OpponentChanged(opponent));
        if self.pending_computer_turn() {
            self.emit(MatchEvent::ComputerToMove {
                difficulty: self.difficulty,
            });
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// True when the computer owes a move.
    pub fn pending_computer_turn(&self) -> bool {
        self.opponent == Opponent::Computer
            && matches!(&self.phase, Phase::Playing(round) if round.to_move() == COMPUTER_SIDE)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        match &self.phase {
            Phase::Playing(round) => round.board(),
            Phase::RoundOver(round) | Phase::MatchOver { round, .. } => round.board(),
        }
    }

    /// State-machine state.
    pub fn state(&self) -> MatchState {
        match &self.phase {
            Phase::Playing(round) => MatchState::AwaitingMove(round.to_move()),
            Phase::RoundOver(round) => MatchState::RoundOver(round.outcome()),
            Phase::MatchOver { winner, .. } => MatchState::MatchOver(*winner),
        }
    }

    /// Series score.
    pub fn score(&self) -> MatchScore {
        self.score
    }

    /// Computer strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Who plays O.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Snapshot of everything a renderer needs.
    pub fn current_state(&self) -> MatchSnapshot {
        let (turn, winning_line) = match &self.phase {
            Phase::Playing(round) => (round.to_move(), None),
            Phase::RoundOver(round) | Phase::MatchOver { round, .. } => {
                let last = round.history().last().map_or(Player::X, |m| m.player);
                (last, round.winning_line())
            }
        };

        MatchSnapshot {
            board: *self.board(),
            turn,
            outcome: super::rules::outcome(self.board()),
            winning_line,
            score: self.score,
            state: self.state(),
            difficulty: self.difficulty,
            opponent: self.opponent,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    fn ensure_playing(&self) -> Result<&RoundInProgress, GameError> {
        match &self.phase {
            Phase::Playing(round) => Ok(round),
            Phase::RoundOver(_) => Err(TransitionError::RoundOver.into()),
            Phase::MatchOver { .. } => Err(TransitionError::MatchOver.into()),
        }
    }

    fn apply(&mut self, index: usize) -> Result<(), GameError> {
        let round = self.ensure_playing()?.clone();
        let side = round.to_move();

        match round.place(index)? {
            RoundResult::InProgress(round) => {
                self.phase = Phase::Playing(round);
                self.emit(MatchEvent::MarkPlaced { index, side });
                if self.pending_computer_turn() {
                    self.emit(MatchEvent::ComputerToMove {
                        difficulty: self.difficulty,
                    });
                }
            }
            RoundResult::Finished(round) => {
                self.emit(MatchEvent::MarkPlaced { index, side });
                self.finish_round(round);
            }
        }
        Ok(())
    }

    fn finish_round(&mut self, round: RoundFinished) {
        let outcome = round.outcome();
        if let Some(player) = outcome.winner() {
            self.score.record_win(player);
        }
        info!(%outcome, score = %self.score, "Round over");

        let line = round.winning_line();
        match self.score.match_winner() {
            Some(winner) => {
                self.phase = Phase::MatchOver { round, winner };
                self.emit(MatchEvent::RoundOver {
                    outcome,
                    line,
                    score: self.score,
                });
                info!(%winner, "Match over");
                self.emit(MatchEvent::MatchOver {
                    winner,
                    score: self.score,
                });
            }
            None => {
                self.phase = Phase::RoundOver(round);
                self.emit(MatchEvent::RoundOver {
                    outcome,
                    line,
                    score: self.score,
                });
            }
        }
    }

    fn emit(&mut self, event: MatchEvent) {
        debug!(?event, "Match event");
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Opponent::default(), Difficulty::default())
    }
}
