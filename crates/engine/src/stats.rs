//! Per-second frame and tick counters.

use std::time::Duration;

use crate::types::MetricsSnapshot;

/// Counts frames and ticks and turns them into rates once per window.
#[derive(Debug, Clone)]
pub struct RateCounter {
    window: Duration,
    elapsed: Duration,
    frames: u32,
    ticks: u32,
    fps: f64,
    tps: f64,
}

impl RateCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            elapsed: Duration::ZERO,
            frames: 0,
            ticks: 0,
            fps: 0.0,
            tps: 0.0,
        }
    }

    pub fn record_ticks(&mut self, ticks: u32) {
        self.ticks += ticks;
    }

    /// Record one rendered frame that took `delta` since the previous one.
    ///
    /// Returns true when a window closed and the rates were refreshed.
    pub fn record_frame(&mut self, delta: Duration) -> bool {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.window {
            return false;
        }

        let secs = self.elapsed.as_secs_f64();
        self.fps = self.frames as f64 / secs;
        self.tps = self.ticks as f64 / secs;
        self.frames = 0;
        self.ticks = 0;
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    pub fn snapshot(&self, bunnies: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            fps: self.fps,
            tps: self.tps,
            bunnies: bunnies as u64,
        }
    }
}

impl Default for RateCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
