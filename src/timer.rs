//! Polled interval timer.
//!
//! Holds the instant it was last (re)armed and whether it is running.
//! The caller checks [`IntervalTimer::triggered`] on every loop iteration,
//! nothing fires on its own.

use embassy_time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    period: Duration,
    armed_at: Instant,
    running: bool,
}

impl IntervalTimer {
    /// Create a stopped timer.
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            armed_at: Instant::from_millis(0),
            running: false,
        }
    }

    /// Start the timer, counting the interval from `now`.
    ///
    /// Restarts from zero if it was already running.
    pub fn start(&mut self, now: Instant) {
        self.armed_at = now;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Change the period without touching the run state.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Returns `true` once per elapsed interval.
    ///
    /// The edge is consumed: the next interval is counted from `now`, so a
    /// long stall yields a single trigger instead of a burst.
    pub fn triggered(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if now.saturating_duration_since(self.armed_at) < self.period {
            return false;
        }
        self.armed_at = now;
        true
    }

    /// Instant of the next trigger, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.running.then(|| self.armed_at + self.period)
    }
}
