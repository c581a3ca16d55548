//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use noughts::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place at a cell index (0-8).
    Place(usize),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new round, keeping the score.
    NewRound,
    /// Start a new match, clearing the score.
    NewMatch,
    /// Switch between player-vs-player and player-vs-AI.
    ToggleMode,
    /// Switch opponent difficulty.
    ToggleDifficulty,
    /// Leave the game.
    Quit,
}

/// Maps a key event to a command. Key releases and repeats map to nothing.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::Place(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::MoveCursor(code))
        }
        KeyCode::Char('r') => Some(Command::NewRound),
        KeyCode::Char('n') => Some(Command::NewMatch),
        KeyCode::Char('m') => Some(Command::ToggleMode),
        KeyCode::Char('d') => Some(Command::ToggleDifficulty),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
