//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Tic-Tac-Toe rules and round state. It has no
//! dependencies on the terminal, input devices, or I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces the same sequence of starting players
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can drive any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid, move application and the eight winning lines
//! - [`rules`]: Outcome evaluation (win before draw)
//! - [`game_state`]: Turn/round controller (`AwaitingMove` / `RoundOver`)
//! - [`rng`]: Seeded LCG used for the starting-player coin flip
//! - [`scoring`]: Per-session win counters
//! - [`snapshot`]: Copyable per-frame view of the state for rendering
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{CellPos, Outcome, Phase};
//!
//! let mut game = GameState::new(12345);
//! let opener = game.current_player();
//!
//! let center = CellPos::new(1, 1).unwrap();
//! assert_eq!(game.select_cell(center), Ok(Outcome::InProgress));
//! assert_eq!(game.current_player(), opener.other());
//!
//! // Taken cells are rejected without changing anything.
//! assert!(game.select_cell(center).is_err());
//! assert_eq!(game.moves_remaining(), 8);
//! assert_eq!(game.phase(), Phase::AwaitingMove);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveError, WIN_LINES};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use rules::evaluate_outcome;
pub use scoring::Scoreboard;
pub use snapshot::GameSnapshot;
