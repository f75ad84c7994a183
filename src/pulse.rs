//! Breathing animation.
//!
//! Moves brightness by one on every pulse timer trigger, bouncing between 1
//! and the current ceiling. Only brightness is touched, never the color.

use embassy_time::{Duration, Instant};

use crate::state::{LightingState, PulseDirection};
use crate::timer::IntervalTimer;

/// Advance the pulse by one step.
///
/// Returns the direction after the step.
pub fn advance(state: &mut LightingState) -> PulseDirection {
    let max = state.max_brightness();
    let (brightness, direction) = match state.direction() {
        PulseDirection::Rising => {
            let next = state.brightness().saturating_add(1);
            if next >= max {
                (max, PulseDirection::Falling)
            } else {
                (next, PulseDirection::Rising)
            }
        }
        PulseDirection::Falling => {
            // 0 would be off and the color is lost, so bounce at 1
            let next = state.brightness().saturating_sub(1);
            if next <= 1 {
                (1, PulseDirection::Rising)
            } else {
                (next, PulseDirection::Falling)
            }
        }
    };
    state.set_pulse_level(brightness, direction);
    direction
}

/// Pulse engine driven by its own interval timer.
#[derive(Debug, Clone)]
pub struct PulseEngine {
    timer: IntervalTimer,
}

impl PulseEngine {
    /// Create a stopped engine.
    pub const fn new(period: Duration) -> Self {
        Self {
            timer: IntervalTimer::new(period),
        }
    }

    /// Apply `period` and start stepping if the engine was stopped.
    ///
    /// A running engine keeps its phase, only the period changes.
    pub fn enable(&mut self, period: Duration, now: Instant) {
        self.timer.set_period(period);
        if !self.timer.is_running() {
            self.timer.start(now);
        }
    }

    /// Stop stepping, brightness stays where it is.
    pub fn disable(&mut self) {
        self.timer.stop();
    }

    pub const fn is_enabled(&self) -> bool {
        self.timer.is_running()
    }

    pub const fn period(&self) -> Duration {
        self.timer.period()
    }

    /// Change the period without starting a stopped engine.
    pub fn set_period(&mut self, period: Duration) {
        self.timer.set_period(period);
    }

    /// Step the animation if the timer fired.
    ///
    /// Returns `true` if brightness changed and the strip needs a redraw.
    pub fn poll(&mut self, state: &mut LightingState, now: Instant) -> bool {
        if !self.timer.triggered(now) {
            return false;
        }
        advance(state);
        true
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}
