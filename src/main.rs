//! Terminal Snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The outcome message is printed after the
//! terminal is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::core::{SimpleRng, SnakeGame};
use tui_arcade::engine::{logging, SnakeConfig};
use tui_arcade::input::snake_action;
use tui_arcade::term::{FrameBuffer, SnakeView, TerminalRenderer, Viewport};
use tui_arcade::types::{Status, TICK_MS};

fn main() -> Result<()> {
    logging::init()?;

    let config = SnakeConfig::from_env();
    let seed = config.seed.unwrap_or_else(|| SimpleRng::from_time().state());
    let mut game = SnakeGame::new(seed).with_frames_per_move(config.frames_per_move);
    log::info!(
        "snake starting: seed={} frames_per_move={}",
        seed,
        game.frames_per_move()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    let status = result?;

    log::info!("snake finished: {} score={}", status.as_str(), game.score());
    if let Some(msg) = status.message() {
        println!("{}", msg);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut SnakeGame) -> Result<Status> {
    let view = SnakeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = snake_action(key) {
                        let status = game.apply_action(action);
                        if status.is_terminal() {
                            return Ok(status);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame update; a move happens every `frames_per_move` of these.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            let status = game.update();
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }
}
