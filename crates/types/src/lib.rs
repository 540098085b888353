//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! Classic Tic-Tac-Toe grid:
//!
//! - **Rows / columns**: 3 (indexed 0-2)
//! - **Cells**: 9, stored row-major (`row * 3 + col`)
//!
//! # Frame Timing and Animation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `GRID_ANIM_TICKS` | 80 | Frames for the grid lines to reach full length |
//! | `TEXT_FADE_STEP` | 2 | HUD text alpha gained per frame |
//! | `TEXT_FADE_MAX` | 249 | Alpha at which the fade-in stops |
//! | `CELL_HOVER_ALPHA` | 35 | Tint strength of a hovered board cell |
//! | `BUTTON_HOVER_ALPHA` | 50 | Tint strength of the hovered "Play Again?" box |
//! | `STATIC_FRAME_INTERVAL_MS` | 250 | Redraw interval once nothing is animating |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{CellPos, Direction, Outcome, Player, BOARD_DIM};
//!
//! assert_eq!(Player::X.other(), Player::O);
//! assert_eq!(Player::O.as_str(), "O");
//!
//! let center = CellPos::new(1, 1).unwrap();
//! assert_eq!(center.index(), 4);
//! assert_eq!(center.step(Direction::Up), CellPos::new(0, 1).unwrap());
//!
//! assert!(Outcome::Draw.is_terminal());
//! assert_eq!(BOARD_DIM, 3);
//! ```

/// Rows and columns on the board
pub const BOARD_DIM: u8 = 3;

/// Total number of cells (also the move budget of a round)
pub const CELL_COUNT: u8 = BOARD_DIM * BOARD_DIM;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of frames the opening grid-line animation takes
pub const GRID_ANIM_TICKS: u16 = 80;

/// Alpha added to the HUD text per frame during the fade-in
pub const TEXT_FADE_STEP: u8 = 2;

/// Alpha at which the HUD text fade-in stops
pub const TEXT_FADE_MAX: u8 = 249;

/// Highlight strength over a hovered board cell (0-255)
pub const CELL_HOVER_ALPHA: u8 = 35;

/// Highlight strength over the hovered "Play Again?" box (0-255)
pub const BUTTON_HOVER_ALPHA: u8 = 50;

/// Minimum interval between redraws of an unchanged, non-animating frame
pub const STATIC_FRAME_INTERVAL_MS: u64 = 250;


/// The two players
///
/// X is "player A" and O is "player B". Which one opens a round is decided
/// by a coin flip, not by the enum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent. Turn alternation goes through this and nothing else.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Upper-case display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell taken by that player for the rest of the round
pub type Cell = Option<Player>;

/// Cursor / navigation direction on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A valid board coordinate
///
/// Construction is checked, so every `CellPos` in circulation addresses one of
/// the nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    row: u8,
    col: u8,
}

impl CellPos {
    /// All nine positions in row-major order
    pub const ALL: [CellPos; CELL_COUNT as usize] = [
        CellPos::raw(0, 0),
        CellPos::raw(0, 1),
        CellPos::raw(0, 2),
        CellPos::raw(1, 0),
        CellPos::raw(1, 1),
        CellPos::raw(1, 2),
        CellPos::raw(2, 0),
        CellPos::raw(2, 1),
        CellPos::raw(2, 2),
    ];

    const fn raw(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns `None` when either coordinate is outside 0..3
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_DIM && col < BOARD_DIM {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Position from a row-major index (0..9)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index (0..9)
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.row as usize) * (BOARD_DIM as usize) + (self.col as usize)
    }

    /// Neighbouring position, clamped to the board edge
    pub fn step(self, dir: Direction) -> Self {
        let last = BOARD_DIM - 1;
        match dir {
            Direction::Up => Self::raw(self.row.saturating_sub(1), self.col),
            Direction::Down => Self::raw((self.row + 1).min(last), self.col),
            Direction::Left => Self::raw(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::raw(self.row, (self.col + 1).min(last)),
        }
    }
}

/// Result of evaluating the board after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    /// True for a win or a draw
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(p) => Some(*p),
            _ => None,
        }
    }
}

/// Round controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Moves are accepted
    AwaitingMove,
    /// Only "play again" is accepted
    RoundOver,
}

/// Actions a player can take, independent of the device that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Claim a specific cell
    Select(CellPos),
    /// Move the keyboard cursor
    MoveCursor(Direction),
    /// Claim the cell under the keyboard cursor
    SelectCursor,
    /// Start a new round (only meaningful once the round is over)
    PlayAgain,
}

/// Axis-aligned rectangle in terminal cells
///
/// Containment is half-open: `x..x+w`, `y..y+h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.w
            && (y - self.y) < self.h
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// Something the pointer can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Cell(CellPos),
    PlayAgain,
}

/// Screen geometry of the interactive elements for one viewport size
///
/// Produced by the renderer, consumed by pointer hit-testing so both sides
/// agree on where each cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Area covered by the board including grid lines
    pub board: Rect,
    /// Cell rectangles, row-major
    pub cells: [Rect; CELL_COUNT as usize],
    /// Side panel with turn, result and scores
    pub hud: Rect,
    /// "Play Again?" box inside the HUD
    pub play_again: Rect,
}

impl BoardLayout {
    /// Map a pointer position to the element under it.
    ///
    /// Grid gaps and the area outside the board hit nothing.
    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if let Some(i) = self.cells.iter().position(|r| r.contains(x, y)) {
            return CellPos::from_index(i).map(HitTarget::Cell);
        }
        if self.play_again.contains(x, y) {
            Some(HitTarget::PlayAgain)
        } else {
            None
        }
    }

    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        self.cells[pos.index()]
    }
}
