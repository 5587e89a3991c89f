//! Terminal runner (default binary).
//!
//! One cooperative loop: drain key events until the tick boundary, apply
//! the buffered commands in arrival order, run the gravity step once,
//! then redraw. A quit key finishes the current tick's draw first.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameSession, SimpleRng};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(SimpleRng::from_time().next_u32());
    let view = GameView::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Drain input until the next tick boundary; commands are buffered
        // and take effect before this tick's gravity evaluation.
        let mut commands: ArrayVec<GameAction, 32> = ArrayVec::new();
        let mut quit = false;

        loop {
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if timeout.is_zero() {
                break;
            }

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            quit = true;
                        } else if let Some(action) = handle_key_event(key) {
                            let _ = commands.try_push(action);
                        }
                    }
                }
            }
        }

        last_tick = Instant::now();

        for action in commands {
            session.apply_action(action);
        }
        session.step();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(session.board(), &session.active(), Viewport::new(w, h));
        term.draw(&fb)?;

        if quit {
            return Ok(());
        }
    }
}
