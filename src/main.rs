//! Terminal snake runner.
//!
//! One tick is: wait for the clock, drain input, advance the game, log the
//! outcome, render. Quitting is the only way out of the loop.

use anyhow::Result;

use tui_snake::clock::TickClock;
use tui_snake::config::Config;
use tui_snake::core::GameState;
use tui_snake::event_log::{EventLog, LogRecord};
use tui_snake::input::{EventPump, InputEvent};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut log = EventLog::open(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, log: &mut EventLog) -> Result<()> {
    let mut game = GameState::new(config.resolve_seed());
    log.record(&LogRecord::start(&game, config.ticks_per_second));

    let mut clock = TickClock::new(config.ticks_per_second);
    let mut input = EventPump::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        clock.tick();

        for &event in input.poll()? {
            match event {
                InputEvent::Quit => {
                    log.record(&LogRecord::quit(&game));
                    return Ok(());
                }
                InputEvent::Turn(dir) => {
                    game.set_pending_direction(dir);
                }
                InputEvent::Resize => term.invalidate(),
            }
        }

        let length_before = game.snake().target_length();
        let outcome = game.tick();
        if let Some(rec) = LogRecord::from_outcome(outcome, &game, length_before) {
            log.record(&rec);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
