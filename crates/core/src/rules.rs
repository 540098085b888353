//! Outcome evaluation.

use tracing::trace;

use crate::board::Board;
use crate::types::{Outcome, Player};

/// Decide the round result after `last_player` has moved.
///
/// Only `last_player` can have completed a line with that move, so only their
/// marks are checked. A win takes precedence over a full board: the ninth
/// move completing a line is a win, not a draw.
pub fn evaluate_outcome(board: &Board, last_player: Player, moves_remaining: u8) -> Outcome {
    let outcome = if board.has_line(last_player) {
        Outcome::Won(last_player)
    } else if moves_remaining == 0 {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(?last_player, moves_remaining, ?outcome, "evaluated board");
    outcome
}
