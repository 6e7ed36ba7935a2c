//! Application state and logic.
//!
//! The app adapts key presses into match commands and match events into
//! status text. Pacing lives here: the controller never waits.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use noughts::{
    Match, MatchConfig, MatchEvent, MatchSnapshot, Opponent, Position, RoundOutcome,
    TicTacToePlayer,
};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Work the controller has asked to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Ask the computer for its reply.
    ComputerMove,
    /// Clear the board for the next round.
    NextRound,
}

/// Main application state.
pub struct App {
    game: Match,
    events: mpsc::UnboundedReceiver<MatchEvent>,
    cursor: Position,
    status_message: String,
    scheduled: Option<(Instant, Deferred)>,
    computer_delay: Duration,
    round_pause: Duration,
    should_quit: bool,
}

impl App {
    /// Creates the app and subscribes it to the match.
    pub fn new(config: &MatchConfig) -> Self {
        let mut game = config.build_match();
        let (event_tx, events) = mpsc::unbounded_channel();
        game.subscribe(move |event| {
            // The receiver lives as long as the app.
            let _ = event_tx.send(event.clone());
        });

        Self {
            game,
            events,
            cursor: Position::Center,
            status_message: "X to move. Arrows + Enter or keys 1-9.".to_string(),
            scheduled: None,
            computer_delay: config.computer_delay(),
            round_pause: config.round_pause(),
            should_quit: false,
        }
    }

    /// Gets the current match state for rendering.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.game.current_state()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The pending deferred action, if any.
    #[cfg(test)]
    pub fn scheduled(&self) -> Option<(Instant, Deferred)> {
        self.scheduled
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if let Some(action) = action_for(self.cursor, key) {
            self.apply(action, now);
        }
    }

    /// Applies a user action to the match.
    pub fn apply(&mut self, action: Action, now: Instant) {
        debug!(?action, "Applying action");
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::ToggleDifficulty => {
                let difficulty = self.game.difficulty().toggle();
                self.game.set_difficulty(difficulty);
            }
            Action::ToggleOpponent => {
                let opponent = self.game.opponent().toggle();
                self.game.set_opponent(opponent);
            }
            Action::NewMatch => self.game.new_match(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        self.drain_events(now);
    }

    /// Runs the deferred action once its time has come.
    pub fn tick(&mut self, now: Instant) {
        let Some((due, deferred)) = self.scheduled else {
            return;
        };
        if now < due {
            return;
        }
        self.scheduled = None;

        let result = match deferred {
            Deferred::ComputerMove => self.game.play_computer_turn().map(|_| ()),
            Deferred::NextRound => self.game.new_round(),
        };
        if let Err(e) = result {
            // The match moved on since scheduling (new match, opponent switch).
            warn!(error = %e, ?deferred, "Dropping deferred action");
        }
        self.drain_events(now);
    }

    fn place(&mut self, pos: Position) {
        if let Err(e) = self.game.place_at(pos.to_index()) {
            debug!(error = %e, position = %pos, "Ignoring placement");
            self.status_message = e.to_string();
        }
    }

    fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event, now);
        }
    }

    /// Handles a match event.
    fn handle_event(&mut self, event: MatchEvent, now: Instant) {
        debug!(?event, "Handling match event");

        match event {
            MatchEvent::MatchStarted => {
                self.scheduled = None;
                self.status_message = "New match. X to move.".to_string();
            }
            MatchEvent::RoundStarted => {
                self.scheduled = None;
                self.status_message = "New round. X to move.".to_string();
            }
            MatchEvent::MarkPlaced { index, side } => {
                let label = Position::from_index(index).map_or("?", |p| p.label());
                self.status_message =
                    format!("{} played {}. {} to move.", side, label, side.opponent());
            }
            MatchEvent::ComputerToMove { difficulty } => {
                self.status_message = format!("Computer ({}) is thinking...", difficulty);
                self.scheduled = Some((now + self.computer_delay, Deferred::ComputerMove));
            }
            MatchEvent::RoundOver { outcome, score, .. } => {
                self.status_message = match outcome {
                    RoundOutcome::Won(player) => format!("{} wins the round! ({})", player, score),
                    _ => format!("Draw! ({})", score),
                };
                self.scheduled = Some((now + self.round_pause, Deferred::NextRound));
            }
            MatchEvent::MatchOver { winner, score } => {
                self.scheduled = None;
                self.status_message = format!(
                    "{} wins the match {}! Press 'r' to restart or 'q' to quit.",
                    winner, score
                );
            }
            MatchEvent::DifficultyChanged(difficulty) => {
                self.status_message = format!("Computer set to {}.", difficulty);
            }
            MatchEvent::OpponentChanged(opponent) => {
                if opponent == Opponent::Human
                    && self.scheduled.is_some_and(|(_, d)| d == Deferred::ComputerMove)
                {
                    self.scheduled = None;
                }
                self.status_message = match opponent {
                    Opponent::Human => format!("{} plays against a friend.", TicTacToePlayer::X),
                    Opponent::Computer => "Playing against the computer.".to_string(),
                };
            }
        }
    }
}
