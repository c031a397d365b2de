//! Fixed-timestep accumulator.
//!
//! The render loop runs as fast as the terminal allows; simulation ticks are
//! paid out of an accumulator so the tick rate stays constant.

use std::time::Duration;

use crate::types::TICKS_PER_SECOND;

/// Upper bound on ticks paid out for a single frame.
///
/// Beyond this the backlog is dropped instead of spiralling.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

#[derive(Debug, Clone)]
pub struct FixedStep {
    tick: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl FixedStep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulator: Duration::ZERO,
            max_ticks: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn per_second(rate: u32) -> Self {
        Self::new(Duration::from_secs(1) / rate.max(1))
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Add elapsed wall time and return how many ticks to simulate now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            ticks += 1;
            if ticks == self.max_ticks {
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        ticks
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.tick.saturating_sub(self.accumulator)
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::per_second(TICKS_PER_SECOND)
    }
}
