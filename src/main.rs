//! Terminal game runner.
//!
//! One serializing loop over two event sources: the gravity deadline and the
//! keyboard. `event::poll` with a timeout derived from the session's current
//! drop interval gives the cooperative wait; whichever source is ready first
//! is processed, then a snapshot is rendered before waiting again. Because
//! the timeout is recomputed every iteration, switching between the normal
//! and hard-drop intervals replaces the timer atomically.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use bitris::core::{Session, Snapshot};
use bitris::input::map_key;
use bitris::term::{FrameBuffer, GameView, TerminalRenderer};
use bitris::types::InputEvent;

/// Poll interval while the gravity timer is stopped (game over).
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut session = Session::new(seed);

    let (view_w, view_h) = GameView::required_size();
    let mut fb = FrameBuffer::new(view_w, view_h);
    let mut snapshot = Snapshot::default();

    let mut last_tick = Instant::now();

    loop {
        // Render the state produced by the previous event.
        session.snapshot_into(&mut snapshot);
        GameView::render(&snapshot, &mut fb);
        term.draw(&fb)?;

        // Wait for input or the next gravity deadline, whichever is first.
        let timeout = if session.game_over() {
            Duration::from_millis(IDLE_POLL_MS)
        } else {
            session
                .drop_interval()
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        };

        let input_ready = event::poll(timeout).context("polling input source")?;
        if input_ready {
            let ev = event::read().context("reading input source")?;
            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(InputEvent::Quit) => return Ok(()),
                        Some(input) => {
                            if input == InputEvent::Restart {
                                last_tick = Instant::now();
                            }
                            session.apply(input);
                        }
                        None => {}
                    }
                }
            }
            continue;
        }

        // Gravity deadline reached; the tick branch is skipped entirely once
        // the game is over, which is how the timer stops.
        if !session.game_over() && last_tick.elapsed() >= session.drop_interval() {
            last_tick = Instant::now();
            session.on_tick();
        }
    }
}
