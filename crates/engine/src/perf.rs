//! Frame time and input latency monitor.
//!
//! Collects frame-to-frame durations and input-to-next-frame latencies and
//! emits one [`PerfReport`] per second. Samples live in fixed-capacity
//! buffers so the frame path never allocates; overflow samples are dropped.

use std::fmt;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

const MAX_SAMPLES: usize = 1024;

/// avg/min/max over a window, in milliseconds. All zero when empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    fn of(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &s in samples {
            min = min.min(s);
            max = max.max(s);
            sum += s;
        }
        Self {
            avg: sum / samples.len() as f64,
            min,
            max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfReport {
    pub fps: u32,
    pub frame: Summary,
    pub input: Summary,
}

impl fmt::Display for PerfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FPS: {} | Frame: avg={:.2}ms min={:.2}ms max={:.2}ms | Input latency: avg={:.2}ms min={:.2}ms max={:.2}ms",
            self.fps,
            self.frame.avg,
            self.frame.min,
            self.frame.max,
            self.input.avg,
            self.input.min,
            self.input.max,
        )
    }
}

#[derive(Debug, Clone)]
pub struct PerfMonitor {
    window: Duration,
    window_start: Option<Instant>,
    last_frame: Option<Instant>,
    pending_input: Option<Instant>,
    frames: u32,
    frame_times: ArrayVec<f64, MAX_SAMPLES>,
    input_latencies: ArrayVec<f64, MAX_SAMPLES>,
}

impl PerfMonitor {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_start: None,
            last_frame: None,
            pending_input: None,
            frames: 0,
            frame_times: ArrayVec::new(),
            input_latencies: ArrayVec::new(),
        }
    }

    /// Mark a user input; its latency is measured at the next frame.
    pub fn record_input(&mut self, at: Instant) {
        self.pending_input = Some(at);
    }

    /// Record a presented frame. Returns a report when the window closes.
    pub fn record_frame(&mut self, now: Instant) -> Option<PerfReport> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        if let Some(prev) = self.last_frame {
            let _ = self.frame_times.try_push(ms(now.saturating_duration_since(prev)));
        }
        self.last_frame = Some(now);

        if let Some(input) = self.pending_input.take() {
            let _ = self
                .input_latencies
                .try_push(ms(now.saturating_duration_since(input)));
        }

        if now.saturating_duration_since(start) < self.window {
            return None;
        }

        let report = PerfReport {
            fps: self.frames,
            frame: Summary::of(&self.frame_times),
            input: Summary::of(&self.input_latencies),
        };
        self.frames = 0;
        self.frame_times.clear();
        self.input_latencies.clear();
        self.window_start = Some(now);
        Some(report)
    }
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
