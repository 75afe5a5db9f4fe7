//! Wall-clock sources
//!
//! The scheduler only needs "milliseconds since start" and a blocking pause
//! between ticks. `ManualClock` advances virtual time on sleep so whole rounds
//! run instantly and reproducibly.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Milliseconds since the clock was created
    fn now_ms(&self) -> u64;
    /// Block the caller for `ms` milliseconds
    fn sleep_ms(&self, ms: u64);
}

/// Real time
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Virtual time, moved forward only by `sleep_ms` and `advance`
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}
