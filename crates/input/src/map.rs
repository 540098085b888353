//! Key mapping from terminal events to game actions.

use crate::types::{CellPos, Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// The keyboard is a fallback for terminals without mouse reporting: a cursor
/// walks the board, Enter/Space claims the cursor cell, and the digits 1-9
/// claim a cell directly (1 = top-left, row-major).
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveCursor(Direction::Down))
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            CellPos::from_index(index).map(GameAction::Select)
        }

        // Next round
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(GameAction::PlayAgain)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
