//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Single-threaded frame loop: render (throttled), poll input until the next
//! tick, route events, advance animations. Uses crossterm for input and a
//! custom framebuffer-based renderer.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use tracing::{error, info};

use tui_tictactoe::input::{translate, InputEvent};
use tui_tictactoe::term::{
    install_panic_hook, FrameBuffer, Redraw, RenderThrottle, TerminalRenderer,
};
use tui_tictactoe::types::STATIC_FRAME_INTERVAL_MS;
use tui_tictactoe::{logging, App, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.no_log {
        if let Err(e) = logging::init_file_logging(&cli.log_file) {
            eprintln!("warning: logging disabled: {e:#}");
        }
    }

    let seed = cli.seed.unwrap_or_else(rand::random::<u32>);
    info!(seed, tick_ms = cli.tick_ms, "starting");

    // Release builds abort on panic, which skips `Drop`.
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        error!(error = %e, "terminal init failed");
        eprintln!("tui-tictactoe: could not initialise the terminal: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = run(&mut term, &cli, seed);

    // Always try to restore terminal state.
    let restored = term.exit();

    match result.and(restored) {
        Ok(()) => {
            info!("bye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "fatal");
            eprintln!("tui-tictactoe: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, cli: &Cli, seed: u32) -> Result<()> {
    let viewport = term.viewport();
    let mut app = App::new(seed, viewport);

    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut throttle = RenderThrottle::new(STATIC_FRAME_INTERVAL_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(cli.tick_ms as u64);

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = app.fingerprint();
        let redraw = throttle.should_render(now_ms, fingerprint, app.is_animating());
        if redraw == Redraw::Full {
            term.invalidate();
        }
        if redraw.is_needed() {
            app.render_into(&mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            // Drain what is already queued, then go back to rendering.
            loop {
                if let Some(ev) = translate(event::read()?) {
                    let resized = matches!(ev, InputEvent::Resized { .. });
                    app.handle(ev);
                    if resized {
                        term.invalidate();
                        throttle.invalidate();
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick();
        }
    }
}
