//! Terminal falling-block game (default binary).
//!
//! crossterm provides input and the raw-mode terminal; frames are painted by
//! `tetris_canvas::term`.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_canvas::config::AppConfig;
use tetris_canvas::core::GameState;
use tetris_canvas::engine::{FrameClock, FrameDriver};
use tetris_canvas::input::{handle_event, should_quit};
use tetris_canvas::logging;
use tetris_canvas::term::{GameView, Screen, TermSink};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut screen = Screen::new();
    screen.open()?;
    let mut sink = TermSink::new(screen, GameView::default());

    let result = run(&config, &mut sink);

    // Always try to restore terminal state.
    let _ = sink.screen_mut().close();
    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

fn run(config: &AppConfig, sink: &mut TermSink) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, frame_ms = config.frame_ms, "starting");

    let mut driver = FrameDriver::new(GameState::new(seed));
    let mut clock = FrameClock::new(config.frame_interval(), Instant::now());

    // First frame shows the paused board before any tick.
    driver.render(sink)?;

    while driver.is_running() {
        if event::poll(clock.timeout(Instant::now()))? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    driver.stop();
                    break;
                }
                Event::Resize(..) => {
                    sink.invalidate();
                    driver.render(sink)?;
                }
                _ => {}
            }

            if let Some(action) = handle_event(&ev) {
                driver.handle(action);
            }
        }

        if clock.poll_due(Instant::now()) {
            driver.frame(sink)?;
        }
    }

    Ok(())
}
