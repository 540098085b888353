use crate::scoring::Scoreboard;
use crate::types::{Cell, CellPos, Outcome, Phase, Player, CELL_COUNT};

/// Everything the presentation layer needs for one frame.
///
/// Plain `Copy` data so the view never borrows the live game state, and
/// `Hash` so the render loop can fingerprint frames cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Cell; CELL_COUNT as usize],
    pub current: Player,
    pub last_mover: Option<Player>,
    pub outcome: Outcome,
    pub phase: Phase,
    pub moves_remaining: u8,
    pub scores: Scoreboard,
    pub winning_line: Option<[CellPos; 3]>,
    pub round_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, pos: CellPos) -> Cell {
        self.board[pos.index()]
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::AwaitingMove
    }

    pub fn is_winning_cell(&self, pos: CellPos) -> bool {
        self.winning_line
            .map(|line| line.contains(&pos))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; CELL_COUNT as usize],
            current: Player::X,
            last_mover: None,
            outcome: Outcome::InProgress,
            phase: Phase::AwaitingMove,
            moves_remaining: CELL_COUNT,
            scores: Scoreboard::default(),
            winning_line: None,
            round_id: 0,
        }
    }
}
