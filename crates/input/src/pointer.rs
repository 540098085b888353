//! Mouse mapping.
//!
//! Turns raw terminal mouse reports into pointer events in terminal cell
//! coordinates. What lies under the pointer is decided later against a
//! [`crate::types::BoardLayout`].

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved (with or without a button held)
    Moved { x: u16, y: u16 },
    /// Primary button went down
    Pressed { x: u16, y: u16 },
}

impl PointerEvent {
    pub fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Moved { x, y } | PointerEvent::Pressed { x, y } => (x, y),
        }
    }
}

/// Map a mouse report to a pointer event.
///
/// Only the left button counts as a press; releases, scrolling and other
/// buttons are dropped.
pub fn handle_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Moved { x, y }),
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Pressed { x, y }),
        _ => None,
    }
}
