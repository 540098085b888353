//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen arrangement (cell sizes in terminal columns/rows):
//!
//! ```text
//! +-------------- board (37x19) --------------+  +---- HUD (20x19) ----+
//! | 11x5 | 11x5 | 11x5   (1-cell grid lines)  |  | status text         |
//! |------+------+------                       |  | [ Play Again? ]     |
//! | ...                                       |  | X Points / O Points |
//! +-------------------------------------------+  +---------------------+
//! ```

use crate::animation::Animations;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BoardLayout, CellPos, HitTarget, Outcome, Phase, Player, Rect, BOARD_DIM,
    BUTTON_HOVER_ALPHA, CELL_COUNT, CELL_HOVER_ALPHA,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state that is not part of the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UiState {
    /// Element under the mouse pointer
    pub hover: Option<HitTarget>,
    /// Keyboard cursor, shown once the keyboard has been used
    pub cursor: Option<CellPos>,
    pub anim: Animations,
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(0x1A, 0x1A, 0x1A);
const GRID_FG: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
const HUD_BG: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
const BUTTON_BG: Rgb = Rgb::new(0xAF, 0xAF, 0xA8);
const HIGHLIGHT: Rgb = Rgb::new(0x42, 0xE2, 0xF4);
const INK: Rgb = Rgb::new(0, 0, 0);
const CURSOR_FG: Rgb = Rgb::new(255, 255, 255);

/// Width of the HUD panel
const HUD_W: u16 = 20;
/// Columns between the board and the HUD
const HUD_GAP: u16 = 2;

const X_ART: [&str; 5] = [
    " ██     ██ ",
    "   ██ ██   ",
    "    ███    ",
    "   ██ ██   ",
    " ██     ██ ",
];

const O_ART: [&str; 5] = [
    "   █████   ",
    " ██     ██ ",
    " ██     ██ ",
    " ██     ██ ",
    "   █████   ",
];

/// HUD text colour of a player
fn player_text(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(0x55, 0xA3, 0x00),
        Player::O => Rgb::new(0x9D, 0x00, 0x00),
    }
}

/// Board mark colour of a player (brighter, drawn on the dark board)
fn player_mark(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(110, 200, 40),
        Player::O => Rgb::new(220, 70, 70),
    }
}

/// A lightweight terminal renderer for the Tic-Tac-Toe game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 11x5 looks roughly square with typical 1:2 terminal glyphs.
        Self {
            cell_w: 11,
            cell_h: 5,
        }
    }
}

impl GameView {
    fn board_size(&self) -> (u16, u16) {
        let dim = BOARD_DIM as u16;
        // cells + grid lines between them + 1 cell padding each side
        let w = dim * self.cell_w + (dim - 1) + 2;
        let h = dim * self.cell_h + (dim - 1) + 2;
        (w, h)
    }

    /// Smallest viewport the game can be drawn in.
    pub fn min_viewport(&self) -> Viewport {
        let (bw, bh) = self.board_size();
        Viewport::new(bw + HUD_GAP + HUD_W, bh.max(self.hud_min_h()))
    }

    fn hud_min_h(&self) -> u16 {
        // status, box, two score rows, hint
        14
    }

    /// Geometry of the board, cells and HUD for `viewport`.
    ///
    /// `None` when the viewport is smaller than [`GameView::min_viewport`];
    /// nothing is clickable then.
    pub fn layout(&self, viewport: Viewport) -> Option<BoardLayout> {
        let min = self.min_viewport();
        if viewport.width < min.width || viewport.height < min.height {
            return None;
        }

        let start_x = (viewport.width - min.width) / 2;
        let start_y = (viewport.height - min.height) / 2;
        let (bw, _) = self.board_size();

        let board = Rect::new(start_x, start_y, bw, min.height);
        let mut cells = [Rect::default(); CELL_COUNT as usize];
        for pos in CellPos::ALL {
            cells[pos.index()] = Rect::new(
                start_x + 1 + (pos.col() as u16) * (self.cell_w + 1),
                start_y + 1 + (pos.row() as u16) * (self.cell_h + 1),
                self.cell_w,
                self.cell_h,
            );
        }

        let hud = Rect::new(start_x + bw + HUD_GAP, start_y, HUD_W, min.height);
        let play_again = Rect::new(hud.x + 2, hud.y + 4, hud.w - 4, 7);

        Some(BoardLayout {
            board,
            cells,
            hud,
            play_again,
        })
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        ui: &UiState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(GRID_FG, SCREEN_BG).into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        let board = layout.board;
        fb.fill_rect(
            board.x,
            board.y,
            board.w,
            board.h,
            ' ',
            CellStyle::new(GRID_FG, BOARD_BG),
        );
        self.draw_grid(fb, &layout, &ui.anim);

        for pos in CellPos::ALL {
            let rect = layout.cell_rect(pos);
            if snap.is_winning_cell(pos) {
                if let Some(p) = snap.cell(pos) {
                    fb.tint_rect(rect.x, rect.y, rect.w, rect.h, player_mark(p), 60);
                }
            }
            if let Some(p) = snap.cell(pos) {
                self.draw_mark(fb, rect, p, snap.is_winning_cell(pos));
            }
        }

        if snap.phase == Phase::AwaitingMove {
            if let Some(HitTarget::Cell(pos)) = ui.hover {
                let r = layout.cell_rect(pos);
                fb.tint_rect(r.x, r.y, r.w, r.h, HIGHLIGHT, CELL_HOVER_ALPHA);
            }
            if let Some(pos) = ui.cursor {
                self.draw_cursor(fb, layout.cell_rect(pos));
            }
        }

        self.draw_hud(fb, snap, ui, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, ui: &UiState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout, anim: &Animations) {
        let style = CellStyle::new(GRID_FG, BOARD_BG);
        let inner = Rect::new(
            layout.board.x + 1,
            layout.board.y + 1,
            layout.board.w - 2,
            layout.board.h - 2,
        );

        // Vertical lines slide down, horizontal lines slide right.
        let v_len = anim.grid_len(inner.h);
        let h_len = anim.grid_len(inner.w);

        for col in 0..(BOARD_DIM as usize - 1) {
            let x = layout.cells[col].right();
            for dy in 0..v_len {
                fb.put_char(x, inner.y + dy, '│', style);
            }
        }
        for row in 0..(BOARD_DIM as usize - 1) {
            let y = layout.cells[row * BOARD_DIM as usize].bottom();
            for dx in 0..h_len {
                let x = inner.x + dx;
                let ch = match fb.get(x, y) {
                    Some(c) if c.ch == '│' => '┼',
                    _ => '─',
                };
                fb.put_char(x, y, ch, style);
            }
        }
    }

    fn draw_mark(&self, fb: &mut FrameBuffer, rect: Rect, player: Player, winning: bool) {
        let art = match player {
            Player::X => &X_ART,
            Player::O => &O_ART,
        };
        let art_w = art[0].chars().count() as u16;
        let art_h = art.len() as u16;
        let ox = rect.x + rect.w.saturating_sub(art_w) / 2;
        let oy = rect.y + rect.h.saturating_sub(art_h) / 2;

        for (dy, line) in art.iter().enumerate() {
            let y = oy + dy as u16;
            if y >= rect.bottom() {
                break;
            }
            for (dx, ch) in line.chars().enumerate() {
                let x = ox + dx as u16;
                if x >= rect.right() {
                    break;
                }
                if ch == ' ' {
                    continue;
                }
                let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(BOARD_BG);
                let mut style = CellStyle::new(player_mark(player), bg);
                style.bold = winning;
                fb.put_char(x, y, ch, style);
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, rect: Rect) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let corners = [
            (rect.x, rect.y, '┌'),
            (rect.right() - 1, rect.y, '┐'),
            (rect.x, rect.bottom() - 1, '└'),
            (rect.right() - 1, rect.bottom() - 1, '┘'),
        ];
        for (x, y, ch) in corners {
            let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(BOARD_BG);
            fb.put_char(x, y, ch, CellStyle::new(CURSOR_FG, bg).bold());
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ui: &UiState, layout: &BoardLayout) {
        let hud = layout.hud;
        fb.fill_rect(hud.x, hud.y, hud.w, hud.h, ' ', CellStyle::new(INK, HUD_BG));

        let alpha = ui.anim.text_alpha();
        let faded = |color: Rgb| CellStyle::new(HUD_BG.blend(color, alpha), HUD_BG);

        // Status line
        let status_y = hud.y + 1;
        match snap.outcome {
            Outcome::InProgress => {
                let text = match snap.current {
                    Player::X => "Player X Turn",
                    Player::O => "Player O Turn",
                };
                fb.put_str_centered(hud.x, hud.w, status_y, text, faded(player_text(snap.current)));
            }
            Outcome::Won(p) => {
                let text = match p {
                    Player::X => "X WON",
                    Player::O => "O WON",
                };
                let style = CellStyle::new(player_text(p), HUD_BG).bold();
                fb.put_str_centered(hud.x, hud.w, status_y, text, style);
            }
            Outcome::Draw => {
                let style = CellStyle::new(INK, HUD_BG).bold();
                fb.put_str_centered(hud.x, hud.w, status_y, "DRAW", style);
            }
        }

        if snap.phase == Phase::RoundOver {
            let b = layout.play_again;
            let mut bg = BUTTON_BG;
            if ui.hover == Some(HitTarget::PlayAgain) {
                bg = bg.blend(HIGHLIGHT, BUTTON_HOVER_ALPHA);
            }
            fb.fill_rect(b.x, b.y, b.w, b.h, ' ', CellStyle::new(INK, bg));
            fb.put_str_centered(b.x, b.w, b.y + b.h / 2, "Play Again?", CellStyle::new(INK, bg));
        } else {
            let style = faded(INK);
            let y = layout.play_again.y + 1;
            fb.put_str(hud.x + 2, y, "Moves left:", style);
            fb.put_u32(hud.x + 14, y, snap.moves_remaining as u32, style);
        }

        // Scores
        let score_y = hud.bottom().saturating_sub(4);
        for (i, p) in [Player::X, Player::O].into_iter().enumerate() {
            let y = score_y + i as u16;
            let label = match p {
                Player::X => "X Points:",
                Player::O => "O Points:",
            };
            fb.put_str(hud.x + 2, y, label, faded(player_text(p)));
            fb.put_u32(hud.x + 12, y, snap.scores.wins(p), faded(INK));
        }

        let hint = CellStyle::new(Rgb::new(0x50, 0x50, 0x50), HUD_BG).dim();
        fb.put_str(hud.x + 2, hud.bottom().saturating_sub(1), "q: quit", hint);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let min = self.min_viewport();
        let style = CellStyle::new(GRID_FG, SCREEN_BG).bold();
        let mid = viewport.height / 2;
        fb.put_str_centered(0, viewport.width, mid.saturating_sub(1), "Terminal too small", style);

        // "need WxH" without allocating
        let need = "need ";
        let w_digits = digits(min.width);
        let h_digits = digits(min.height);
        let total = need.len() as u16 + w_digits + 1 + h_digits;
        let x = viewport.width.saturating_sub(total) / 2;
        let plain = CellStyle::new(GRID_FG, SCREEN_BG);
        fb.put_str(x, mid, need, plain);
        let mut cx = x + need.len() as u16;
        fb.put_u32(cx, mid, min.width as u32, plain);
        cx += w_digits;
        fb.put_char(cx, mid, 'x', plain);
        fb.put_u32(cx + 1, mid, min.height as u32, plain);
    }
}

fn digits(mut n: u16) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
