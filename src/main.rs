//! Terminal word-scramble runner (default binary).
//!
//! Reads configuration from the environment, builds the session, and runs a
//! crossterm event loop that redraws the screen after every handled key.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use unscramble::config::AppConfig;
use unscramble::core::{session_rng, RoundState};
use unscramble::engine::ScreenController;
use unscramble::input::{handle_key_event, should_quit};
use unscramble::logging::init_logging;
use unscramble::term::{FrameBuffer, ScreenView, TerminalRenderer, Viewport};
use unscramble::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    let bank = config.word_bank()?;
    let round = RoundState::new(bank, config.session, session_rng(config.seed))
        .context("invalid game configuration")?;
    let mut controller = ScreenController::new(round);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut controller);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = controller.round().score(), "game closed");
    result
}

fn run(term: &mut TerminalRenderer, controller: &mut ScreenController) -> Result<()> {
    let view = ScreenView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let poll_timeout = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    while !controller.is_finished() {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let viewport = Viewport::new(w, h);
            let snap = controller.snapshot();
            view.render_into(&snap, viewport, &mut fb);
            term.draw(&fb, view.cursor_position(&snap, viewport))?;
            dirty = false;
        }

        if !event::poll(poll_timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, controller.input_mode()) {
                    controller.apply_action(action)?;
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }

    Ok(())
}
