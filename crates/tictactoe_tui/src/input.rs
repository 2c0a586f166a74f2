//! Key mapping for keyboard play.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by a row/column delta.
    MoveCursor(isize, isize),
    /// Tap the cell under the cursor.
    TapCursor,
    /// Tap the cell with this index.
    Tap(usize),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key to a command, or `None` for keys without a binding.
///
/// Digits `1`-`9` name cells in reading order, so `1` is index 0.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left => Some(Command::MoveCursor(0, -1)),
        KeyCode::Right => Some(Command::MoveCursor(0, 1)),
        KeyCode::Up => Some(Command::MoveCursor(-1, 0)),
        KeyCode::Down => Some(Command::MoveCursor(1, 0)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::TapCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Command::Tap(d as usize - 1)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor, staying put at the board edges.
pub fn move_cursor(cursor: Position, rows: isize, columns: isize) -> Position {
    cursor.offset(rows, columns).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_indices() {
        assert_eq!(command_for(KeyCode::Char('1')), Some(Command::Tap(0)));
        assert_eq!(command_for(KeyCode::Char('9')), Some(Command::Tap(8)));
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(KeyCode::Enter), Some(Command::TapCursor));
        assert_eq!(command_for(KeyCode::Char(' ')), Some(Command::TapCursor));
        assert_eq!(command_for(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(command_for(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, 0, 1), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, -1, 0), Position::TopCenter);
        assert_eq!(move_cursor(Position::BottomLeft, 0, -1), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, -1, 0), Position::TopRight);
    }
}
