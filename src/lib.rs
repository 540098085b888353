//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces the
//! binary is built from: [`app::App`] (frame-level glue), [`cli::Cli`] and
//! [`logging`].

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod app;
pub mod cli;
pub mod logging;

pub use app::App;
pub use cli::Cli;
