//! Timed delay gate
//!
//! Lets a slow task (ball or snake movement) share the scheduler with fast
//! tasks (rendering, input). Stepping a gate that has not elapsed is a no-op;
//! nothing ever sleeps here.

/// Fires at most once per `interval_ms` of wall-clock time
#[derive(Debug, Clone)]
pub struct Delay {
    interval_ms: u64,
    /// Time the gate was last (re)armed, `None` until first polled
    armed_at: Option<u64>,
}

impl Delay {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            armed_at: None,
        }
    }

    /// Poll the gate. Returns true when the interval has elapsed since arming,
    /// in which case the gate re-arms at `now_ms`.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        let armed_at = *self.armed_at.get_or_insert(now_ms);
        if now_ms.saturating_sub(armed_at) >= self.interval_ms {
            self.armed_at = Some(now_ms);
            true
        } else {
            false
        }
    }
}
