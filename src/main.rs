//! Terminal blockfall runner (default binary).
//!
//! Owns the frame loop: render a snapshot, poll input until the frame
//! deadline, feed the measured elapsed time into the engine. All game
//! rules live in `blockfall-core`; this binary only shuttles commands in
//! and snapshots out.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let seed = seed_from_args();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Optional seed argument; defaults to a clock-derived one.
fn seed_from_args() -> u32 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut engine = GameEngine::new(seed);
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame deadline.
        let timeout = frame_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        engine.apply(command);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Advance game time by what actually elapsed.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame_duration {
            last_tick = Instant::now();
            engine.tick(elapsed.as_millis() as u32);
        }
    }
}
