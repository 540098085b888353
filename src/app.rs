//! Frame-level glue between input, game state and the view.
//!
//! `App` owns everything the frame loop mutates. It does no I/O, so the whole
//! click-to-pixels path can be driven from tests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::core::{GameSnapshot, GameState};
use crate::input::{InputEvent, PointerEvent};
use crate::term::{FrameBuffer, GameView, UiState, Viewport};
use crate::types::{BoardLayout, CellPos, GameAction, HitTarget, Phase};

pub struct App {
    state: GameState,
    view: GameView,
    ui: UiState,
    viewport: Viewport,
    layout: Option<BoardLayout>,
    snapshot: GameSnapshot,
    quit: bool,
}

impl App {
    pub fn new(seed: u32, viewport: Viewport) -> Self {
        let view = GameView::default();
        let layout = view.layout(viewport);
        let state = GameState::new(seed);
        let snapshot = state.snapshot();
        Self {
            state,
            view,
            ui: UiState::default(),
            viewport,
            layout,
            snapshot,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Current screen geometry, `None` while the terminal is too small
    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Route one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::QuitRequested => {
                debug!("quit requested");
                self.quit = true;
            }
            InputEvent::Resized { width, height } => self.resize(Viewport::new(width, height)),
            InputEvent::Pointer(PointerEvent::Moved { x, y }) => {
                self.ui.hover = self.hit(x, y);
            }
            InputEvent::Pointer(PointerEvent::Pressed { x, y }) => {
                let target = self.hit(x, y);
                self.ui.hover = target;
                match target {
                    Some(HitTarget::Cell(pos)) => self.press_cell(pos),
                    Some(HitTarget::PlayAgain) => self.press_play_again(),
                    None => {}
                }
            }
            InputEvent::Action(action) => self.apply_action(action),
        }
    }

    fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Select(pos) => {
                self.ui.cursor = Some(pos);
                self.press_cell(pos);
            }
            GameAction::MoveCursor(dir) => {
                self.ui.cursor = Some(match self.ui.cursor {
                    Some(pos) => pos.step(dir),
                    None => center(),
                });
            }
            GameAction::SelectCursor => match self.ui.cursor {
                Some(pos) => self.press_cell(pos),
                // First key press only reveals the cursor.
                None => self.ui.cursor = Some(center()),
            },
            GameAction::PlayAgain => self.press_play_again(),
        }
    }

    fn press_cell(&mut self, pos: CellPos) {
        if self.state.phase() != Phase::AwaitingMove {
            trace!(row = pos.row(), col = pos.col(), "cell press outside a round");
            return;
        }
        if let Err(e) = self.state.select_cell(pos) {
            debug!(error = %e, "invalid move ignored");
        }
    }

    fn press_play_again(&mut self) {
        if self.state.phase() != Phase::RoundOver {
            trace!("play again pressed during a round");
            return;
        }
        self.state.play_again();
    }

    fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.layout.as_ref().and_then(|l| l.hit(x, y))
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "resize");
        self.viewport = viewport;
        self.layout = self.view.layout(viewport);
        // Hover refers to the old geometry.
        self.ui.hover = None;
    }

    /// Advance per-frame animations.
    pub fn tick(&mut self) {
        self.ui.anim.tick();
    }

    pub fn is_animating(&self) -> bool {
        !self.ui.anim.is_done()
    }

    /// Hash of everything that ends up on screen.
    pub fn fingerprint(&mut self) -> u64 {
        self.state.snapshot_into(&mut self.snapshot);
        let mut h = DefaultHasher::new();
        self.snapshot.hash(&mut h);
        self.ui.hash(&mut h);
        self.viewport.width.hash(&mut h);
        self.viewport.height.hash(&mut h);
        h.finish()
    }

    /// Draw the current frame into `fb`.
    pub fn render_into(&mut self, fb: &mut FrameBuffer) {
        self.state.snapshot_into(&mut self.snapshot);
        self.view
            .render_into(&self.snapshot, &self.ui, self.viewport, fb);
    }
}

fn center() -> CellPos {
    CellPos::ALL[4]
}
