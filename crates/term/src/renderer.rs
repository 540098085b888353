//! TerminalRenderer: owns the terminal and flushes framebuffers to it.
//!
//! Acquiring the renderer puts the terminal into raw mode on the alternate
//! screen with mouse reporting on. Whatever happens afterwards (a normal
//! quit, an error, a failure half-way through [`TerminalRenderer::enter`])
//! the terminal is handed back in its original state, either by
//! [`TerminalRenderer::exit`] or by `Drop`.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::{debug, warn};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

const FALLBACK_SIZE: (u16, u16) = (80, 24);

fn viewport_or_default(size: Result<(u16, u16)>) -> Viewport {
    let (w, h) = size.unwrap_or_else(|e| {
        warn!(error = %e, "terminal size unavailable, assuming 80x24");
        FALLBACK_SIZE
    });
    Viewport::new(w, h)
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    raw_mode: bool,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            raw_mode: false,
            entered: false,
        }
    }

    /// Take over the terminal.
    ///
    /// On failure everything already switched on is switched off again before
    /// the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        let res = self.try_enter();
        if res.is_err() {
            if let Err(e) = self.exit() {
                warn!(error = %e, "terminal restore after failed init");
            }
        }
        res
    }

    fn try_enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.raw_mode = true;

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.entered = true;
        self.flush_buf().context("switching to the alternate screen")?;

        self.last = None;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    ///
    /// Raw mode is switched off even when leaving the alternate screen fails.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered && !self.raw_mode {
            return Ok(());
        }
        let screen = if self.entered {
            self.entered = false;
            self.leave_screen()
        } else {
            Ok(())
        };
        if self.raw_mode {
            self.raw_mode = false;
            terminal::disable_raw_mode().context("disabling raw mode")?;
        }
        debug!("terminal restored");
        screen
    }

    fn leave_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("querying terminal size")
    }

    /// Current viewport, falling back to 80x24 (with a warning) when the
    /// size query fails.
    pub fn viewport(&self) -> Viewport {
        viewport_or_default(self.size())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.encode_swap(fb)?;
        self.flush_buf()
    }

    /// Encode `fb` into the output buffer (diff or full) and keep it as the
    /// new previous frame.
    fn encode_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            warn!(error = %e, "terminal restore on drop");
        }
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // SGR 0 also clears colours, so it has to come first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..w {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            f(start, y, w - start)?;
        }
    }
    Ok(())
}

/// Best-effort terminal restore for paths that never reach `Drop`
/// (a panic with `panic = "abort"`).
pub fn restore_terminal() {
    let mut out = io::stdout();
    let _ = crossterm::execute!(
        out,
        DisableMouseCapture,
        ResetColor,
        SetAttribute(Attribute::Reset),
        terminal::EnableLineWrap,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

/// Chain a panic hook that restores the terminal before the default hook
/// prints the panic message.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}
