//! Frame-driven animations: the grid lines sliding in and the HUD text fading in.
//!
//! Both advance once per rendered frame and then hold at their end value.
//! They run once per session; starting a new round does not replay them.

use crate::types::{GRID_ANIM_TICKS, TEXT_FADE_MAX, TEXT_FADE_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animations {
    grid_ticks: u16,
    text_alpha: u8,
}

impl Animations {
    pub fn new() -> Self {
        Self {
            grid_ticks: 0,
            text_alpha: 0,
        }
    }

    /// Both animations already at their end state
    pub fn finished() -> Self {
        Self {
            grid_ticks: GRID_ANIM_TICKS,
            text_alpha: TEXT_FADE_MAX,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.grid_ticks < GRID_ANIM_TICKS {
            self.grid_ticks += 1;
        }
        if self.text_alpha < TEXT_FADE_MAX {
            self.text_alpha = self.text_alpha.saturating_add(TEXT_FADE_STEP).min(TEXT_FADE_MAX);
        }
    }

    pub fn is_done(&self) -> bool {
        self.grid_ticks >= GRID_ANIM_TICKS && self.text_alpha >= TEXT_FADE_MAX
    }

    /// Visible part of a grid line of full length `full`.
    pub fn grid_len(&self, full: u16) -> u16 {
        ((full as u32) * (self.grid_ticks as u32) / (GRID_ANIM_TICKS as u32)) as u16
    }

    pub fn text_alpha(&self) -> u8 {
        self.text_alpha
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self::new()
    }
}
