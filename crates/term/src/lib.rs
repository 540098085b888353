//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It renders into a plain
//! framebuffer and flushes only the cells that changed, with no widget or
//! layout framework in between.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] and
//!   owns the screen geometry used for pointer hit-testing
//! - [`TerminalRenderer`] owns the terminal session and writes frames
//! - [`Animations`] and [`RenderThrottle`] decide what and when to draw

pub mod animation;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use animation::Animations;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, UiState, Viewport};
pub use render_throttle::{Redraw, RenderThrottle};
pub use renderer::{
    encode_diff_into, encode_full_into, install_panic_hook, restore_terminal, TerminalRenderer,
};
