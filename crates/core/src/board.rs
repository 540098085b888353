//! Board module - manages the 3x3 grid
//!
//! Each cell is empty or owned by a player. Uses a flat row-major array
//! (`row * 3 + col`), same as [`CellPos::index`].
//! A taken cell is never overwritten within a round; only [`Board::clear`]
//! empties it again.

use arrayvec::ArrayVec;
use derive_more::Display;

use crate::types::{Cell, CellPos, Player, CELL_COUNT};

/// Total number of cells on the board
const BOARD_SIZE: usize = CELL_COUNT as usize;

/// The eight winning triples: 3 rows, 3 columns, 2 diagonals (row-major indices)
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Why a move was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The target cell already holds a mark
    #[display("cell ({}, {}) is already taken", _0.row(), _0.col())]
    Occupied(CellPos),
    /// The round is finished; only "play again" is accepted
    #[display("round is over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// The game board - 3x3 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: CellPos) -> Cell {
        self.cells[pos.index()]
    }

    pub fn is_empty_at(&self, pos: CellPos) -> bool {
        self.get(pos).is_none()
    }

    /// Mark `pos` for `player`.
    ///
    /// Fails with [`MoveError::Occupied`] if the cell is taken; the board is
    /// left untouched in that case.
    pub fn apply_move(&mut self, pos: CellPos, player: Player) -> Result<(), MoveError> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_some() {
            return Err(MoveError::Occupied(pos));
        }
        *cell = Some(player);
        Ok(())
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty positions in row-major order (stack-only)
    pub fn empty_cells(&self) -> ArrayVec<CellPos, BOARD_SIZE> {
        CellPos::ALL
            .iter()
            .copied()
            .filter(|p| self.is_empty_at(*p))
            .collect()
    }

    /// First triple fully owned by `player`, if any
    pub fn winning_line(&self, player: Player) -> Option<[CellPos; 3]> {
        WIN_LINES
            .iter()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
            .map(|line| line.map(|i| CellPos::ALL[i]))
    }

    /// Check whether `player` owns any complete row, column or diagonal
    pub fn has_line(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Empty every cell (start of a new round)
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
