//! Skips redundant terminal writes.
//!
//! While an animation runs every frame is drawn. Once the picture is still,
//! a frame is drawn only when its fingerprint changes, plus a slow keep-alive
//! that repaints the whole screen so a terminal that dropped output recovers.

/// What the frame loop should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing to do
    Skip,
    /// Draw and send only the cells that changed
    Changed,
    /// Draw and resend every cell
    Full,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        self != Redraw::Skip
    }
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    keepalive_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(keepalive_ms: u64) -> Self {
        Self {
            keepalive_ms,
            last: None,
        }
    }

    /// Decide how to draw the frame identified by `fingerprint` at `now_ms`.
    ///
    /// A keep-alive on an unchanged frame asks for [`Redraw::Full`]; a diff
    /// against an identical frame would send nothing.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> Redraw {
        let redraw = match self.last {
            None => Redraw::Full,
            Some(_) if animating => Redraw::Changed,
            Some((_, prev)) if prev != fingerprint => Redraw::Changed,
            Some((at, _)) if now_ms.saturating_sub(at) >= self.keepalive_ms => Redraw::Full,
            Some(_) => Redraw::Skip,
        };
        if redraw.is_needed() {
            self.last = Some((now_ms, fingerprint));
        }
        redraw
    }

    /// Force the next call to draw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
