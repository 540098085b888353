//! Game state module - turn and round control
//!
//! Ties together the board, the outcome rules, the coin-flip RNG and the
//! session scoreboard. A round is a two-state machine:
//!
//! ```text
//!   AwaitingMove --(move ends the round)--> RoundOver --(play_again)--> AwaitingMove
//! ```

use tracing::{debug, info};

use crate::board::{Board, MoveError};
use crate::rng::SimpleRng;
use crate::rules::evaluate_outcome;
use crate::scoring::Scoreboard;
use crate::snapshot::GameSnapshot;
use crate::types::{CellPos, Outcome, Phase, Player, CELL_COUNT};

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Player whose move is awaited.
    current: Player,
    /// Player who made the most recent accepted move this round.
    last_mover: Option<Player>,
    /// Decremented only by accepted moves.
    moves_remaining: u8,
    /// Result of the last evaluation; `InProgress` until the round ends.
    outcome: Outcome,
    phase: Phase,
    scores: Scoreboard,
    rng: SimpleRng,
    /// Monotonic round id (increments on play-again).
    round_id: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    ///
    /// The first round starts immediately with a coin-flipped opener.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = rng.coin_flip();
        debug!(seed, starting = ?current, "new game");

        Self {
            board: Board::new(),
            current,
            last_mover: None,
            moves_remaining: CELL_COUNT,
            outcome: Outcome::InProgress,
            phase: Phase::AwaitingMove,
            scores: Scoreboard::new(),
            rng,
            round_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    pub fn moves_remaining(&self) -> u8 {
        self.moves_remaining
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    /// Whether a press on `pos` would be accepted right now
    pub fn can_select(&self, pos: CellPos) -> bool {
        self.phase == Phase::AwaitingMove && self.board.is_empty_at(pos)
    }

    /// Claim `pos` for the current player.
    ///
    /// On success the move counter drops by one, the turn passes to the other
    /// player and the board is evaluated for the player who just moved. A
    /// terminal outcome switches to [`Phase::RoundOver`] and is recorded on the
    /// scoreboard.
    ///
    /// Rejected moves leave every field untouched.
    pub fn select_cell(&mut self, pos: CellPos) -> Result<Outcome, MoveError> {
        if self.phase == Phase::RoundOver {
            debug!(row = pos.row(), col = pos.col(), "move ignored, round over");
            return Err(MoveError::RoundOver);
        }

        let mover = self.current;
        if let Err(e) = self.board.apply_move(pos, mover) {
            debug!(row = pos.row(), col = pos.col(), error = %e, "move rejected");
            return Err(e);
        }

        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        self.last_mover = Some(mover);
        self.current = mover.other();
        self.outcome = evaluate_outcome(&self.board, mover, self.moves_remaining);

        debug!(
            player = mover.as_str(),
            row = pos.row(),
            col = pos.col(),
            moves_remaining = self.moves_remaining,
            "move accepted"
        );

        if self.outcome.is_terminal() {
            self.phase = Phase::RoundOver;
            self.scores.record(self.outcome);
            info!(
                round = self.round_id,
                outcome = ?self.outcome,
                x_wins = self.scores.wins(Player::X),
                o_wins = self.scores.wins(Player::O),
                "round over"
            );
        }

        Ok(self.outcome)
    }

    /// Start a fresh round after the current one has ended.
    ///
    /// Returns `false` (and does nothing) while a round is still in progress.
    /// The scoreboard is kept.
    pub fn play_again(&mut self) -> bool {
        if self.phase != Phase::RoundOver {
            return false;
        }
        self.reset_round();
        info!(round = self.round_id, starting = ?self.current, "play again");
        true
    }

    fn reset_round(&mut self) {
        self.board.clear();
        self.current = self.rng.coin_flip();
        self.last_mover = None;
        self.moves_remaining = CELL_COUNT;
        self.outcome = Outcome::InProgress;
        self.phase = Phase::AwaitingMove;
        self.round_id = self.round_id.wrapping_add(1);
    }

    /// Copy the presentation-relevant state into `out` (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.current = self.current;
        out.last_mover = self.last_mover;
        out.outcome = self.outcome;
        out.phase = self.phase;
        out.moves_remaining = self.moves_remaining;
        out.scores = self.scores;
        out.winning_line = self
            .outcome
            .winner()
            .and_then(|p| self.board.winning_line(p));
        out.round_id = self.round_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
