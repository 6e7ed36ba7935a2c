//! Keyboard mapping for the match screen.

use crossterm::event::KeyCode;
use noughts::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new square.
    Cursor(Position),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place directly at a square (keys 1-9).
    PlaceAt(Position),
    /// Switch between easy and unbeatable.
    ToggleDifficulty,
    /// Switch O between human and computer.
    ToggleOpponent,
    /// Reset the score and start over.
    NewMatch,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('d') => Some(Action::ToggleDifficulty),
        KeyCode::Char('o') => Some(Action::ToggleOpponent),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewMatch),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
