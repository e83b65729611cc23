//! Terminal blockfall runner (default binary).
//!
//! Wires the three outside collaborators of the engine together: crossterm
//! key events feed the session, a fixed frame cadence drives gravity, and the
//! canvas renderer draws whatever game the session currently holds.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::engine::Session;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{Canvas, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, GameConfig, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid BLOCKFALL_* configuration")?;
    let seed = seed_from_env()?;
    let mut session = Session::seeded(config, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = session.game();
    eprintln!(
        "[blockfall] seed={} score={} lines={} status={:?}",
        seed,
        game.score(),
        game.lines(),
        game.status()
    );
    result
}

fn seed_from_env() -> Result<u32> {
    match std::env::var("BLOCKFALL_SEED") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("BLOCKFALL_SEED is not a u32: {:?}", raw)),
        Err(_) => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1);
            Ok(nanos)
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::new(session.config().cell_size);
    let mut canvas = Canvas::new(0, 0);
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            session.game(),
            session.is_suspended(),
            Viewport::new(w, h),
            &mut canvas,
        );
        term.draw(&canvas)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    // Terminal auto-repeat is fine for movement, not for toggles.
                    let accept = match key.kind {
                        KeyEventKind::Press => true,
                        KeyEventKind::Repeat => matches!(
                            action,
                            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown
                        ),
                        KeyEventKind::Release => false,
                    };
                    if accept {
                        session.apply_action(action);
                    }
                }
            }
        }

        // Gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            session.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
