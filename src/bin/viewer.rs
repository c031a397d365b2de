//! Sprite viewer: draws one image's footprint centered on the canvas.
//!
//! Usage: `viewer [PATH]` (defaults to the bundled bunny).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::engine::{logging, Sprite};
use tui_arcade::input::should_quit;
use tui_arcade::term::{fingerprint, FrameBuffer, ImageView, RenderThrottle, TerminalRenderer, Viewport};

/// Redraw interval for the unchanging picture.
const STATIC_REDRAW_MS: u64 = 250;
const POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    logging::init()?;

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let sprite = Sprite::load_or_bundled(path.as_deref())?;
    log::info!(
        "viewing {} ({}x{})",
        sprite.name(),
        sprite.width(),
        sprite.height()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &sprite);

    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, sprite: &Sprite) -> Result<()> {
    let view = ImageView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let start = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let now_ms = start.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(w, h, 0), true) {
            view.render_into(sprite, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if event::poll(POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }
}
