//! Fixed-rate tick clock.
//!
//! `tick` blocks the caller until one interval has passed since the previous
//! tick. It is the only place the game loop yields.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last: Instant,
}

impl TickClock {
    /// A clock running at `ticks_per_second` (at least 1).
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            last: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.last.elapsed())
    }

    /// Sleep until the next tick is due and return the time since the
    /// previous tick.
    ///
    /// A tick that is already overdue returns at once. The next deadline is
    /// measured from now, so a stall is never made up with a burst of ticks.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
