//! BunnyMark particle benchmark.
//!
//! Left click adds 10 bunnies, right click rounds the count up to the next
//! 100, middle click to the next 1000 (`1`/`2`/`3` on the keyboard). With
//! `BUNNYMARK_MODE=stream`, holding the left button adds 10 every tick.
//!
//! The loop renders once per iteration and pays simulation ticks out of a
//! fixed 60 Hz accumulator. Rates are shown on screen, published to the
//! metrics endpoint once per second, and the frame/input perf report is
//! logged at `info`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::adapter::MetricsAdapter;
use tui_arcade::core::{BunnyWorld, SimpleRng};
use tui_arcade::engine::{
    logging, BunnyMarkConfig, FixedStep, PerfMonitor, RateCounter, SpawnMode, Sprite,
};
use tui_arcade::input::{should_quit, spawn_for_key, PointerTracker};
use tui_arcade::term::{BunnyView, FrameBuffer, TerminalRenderer, Viewport};
use tui_arcade::types::MetricsSnapshot;

fn main() -> Result<()> {
    logging::init()?;

    let config = BunnyMarkConfig::from_env();
    // A bad sprite is fatal before the terminal is touched.
    let sprite = Sprite::load_or_bundled(config.sprite.as_deref())?;
    let seed = config.seed.unwrap_or_else(|| SimpleRng::from_time().state());

    let mut world = BunnyWorld::new(config.world_config(&sprite), seed);
    world.spawn(config.initial);
    log::info!(
        "bunnymark starting: mode={} gravity={} sprite={} {}x{} seed={}",
        config.mode.as_str(),
        config.gravity,
        sprite.name(),
        sprite.width(),
        sprite.height(),
        seed
    );

    let adapter = MetricsAdapter::start_from_env();
    if let Some(a) = &adapter {
        log::info!("metrics endpoint on {}", a.addr());
    }

    let mut term = TerminalRenderer::new().with_mouse_capture(true);
    term.enter()?;

    let result = run(&mut term, &mut world, config.mode, adapter.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("bunnymark finished with {} bunnies", world.len());
    result
}

fn run(
    term: &mut TerminalRenderer,
    world: &mut BunnyWorld,
    mode: SpawnMode,
    adapter: Option<&MetricsAdapter>,
) -> Result<()> {
    let view = BunnyView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FixedStep::default();
    let mut rates = RateCounter::default();
    let mut perf = PerfMonitor::default();
    let mut pointer = match mode {
        SpawnMode::Burst => PointerTracker::new(),
        SpawnMode::Stream => PointerTracker::streaming(),
    };

    let mut readout = MetricsSnapshot {
        bunnies: world.len() as u64,
        ..MetricsSnapshot::default()
    };
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let delta = now.saturating_duration_since(last);
        last = now;

        // Clicks apply once; the held stream and physics run per tick.
        for req in pointer.take_presses() {
            world.request(req);
        }
        let ticks = clock.advance(delta);
        for _ in 0..ticks {
            if let Some(req) = pointer.stream_request() {
                world.request(req);
            }
            world.step();
        }
        rates.record_ticks(ticks);

        if rates.record_frame(delta) {
            readout = rates.snapshot(world.len());
            if let Some(a) = adapter {
                a.publish(readout);
            }
        }
        readout.bunnies = world.len() as u64;

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(world, &readout, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
        if let Some(report) = perf.record_frame(Instant::now()) {
            log::info!("{}", report);
        }

        // Input until the next tick is due.
        let mut timeout = clock.until_next();
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(req) = spawn_for_key(key) {
                        pointer.push(req);
                        perf.record_input(Instant::now());
                    }
                }
                Event::Mouse(m) => {
                    if pointer.handle_mouse(&m) {
                        perf.record_input(Instant::now());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            // Drain whatever else is queued, then go draw.
            timeout = Duration::ZERO;
        }
    }
}
