//! Terminal input module (game-facing).
//!
//! This module is independent of any UI framework. It turns `crossterm`
//! events into [`InputEvent`]s: pointer motion and presses in terminal cell
//! coordinates, keyboard game actions, quit requests and resizes.

pub mod map;
pub mod pointer;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, PointerEvent};

use crossterm::event::{Event, KeyEventKind};

use crate::types::GameAction;

/// One unit of input for the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Action(GameAction),
    QuitRequested,
    Resized { width: u16, height: u16 },
}

/// Translate a terminal event.
///
/// Key releases and auto-repeats are dropped so a held key claims at most one
/// cell.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(InputEvent::QuitRequested)
            } else {
                handle_key_event(key).map(InputEvent::Action)
            }
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse).map(InputEvent::Pointer),
        Event::Resize(width, height) => Some(InputEvent::Resized { width, height }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    #[test]
    fn test_translate_quit() {
        let ev = Event::Key(KeyEvent::from(KeyCode::Char('q')));
        assert_eq!(translate(ev), Some(InputEvent::QuitRequested));
    }

    #[test]
    fn test_translate_key_action() {
        let ev = Event::Key(KeyEvent::from(KeyCode::Left));
        assert_eq!(
            translate(ev),
            Some(InputEvent::Action(GameAction::MoveCursor(Direction::Left)))
        );
    }

    #[test]
    fn test_translate_ignores_key_release() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(key)), None);
    }

    #[test]
    fn test_translate_mouse_press() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(ev),
            Some(InputEvent::Pointer(PointerEvent::Pressed { x: 4, y: 9 }))
        );
    }

    #[test]
    fn test_translate_resize() {
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(InputEvent::Resized {
                width: 80,
                height: 24
            })
        );
        assert_eq!(translate(Event::FocusGained), None);
    }
}
