//! Control loop pacing.
//!
//! Portable, no async and no platform timers: the caller passes the current
//! instant to [`ControlLoop::tick`] and sleeps for the returned duration.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::controller::Controller;
use crate::event::EventReceiver;
use crate::link::LinkLayer;

/// Longest the loop sleeps when no timer is due, so new events are picked up.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a loop tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// When the loop should run again.
    pub next_deadline: Instant,
    /// How long to wait until then (zero if already due).
    pub sleep_duration: Duration,
}

/// Drives a [`Controller`] from the event queue.
///
/// # Usage
///
/// ```ignore
/// static EVENTS: EventQueue<8> = EventQueue::new();
///
/// let strip = SmartLedsStrip::<_, DEFAULT_LED_COUNT>::new(ws2812);
/// let controller = Controller::new(strip, ble, ControllerConfig::default());
/// let mut control = ControlLoop::new(controller, EVENTS.receiver());
/// control.boot(Instant::now());
///
/// loop {
///     let result = control.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct ControlLoop<'a, D: StripDriver, L: LinkLayer, const QUEUE_SIZE: usize> {
    controller: Controller<D, L>,
    events: EventReceiver<'a, QUEUE_SIZE>,
    poll_interval: Duration,
}

impl<'a, D: StripDriver, L: LinkLayer, const QUEUE_SIZE: usize> ControlLoop<'a, D, L, QUEUE_SIZE> {
    /// Create a loop polling at least every [`DEFAULT_POLL_INTERVAL`].
    pub fn new(controller: Controller<D, L>, events: EventReceiver<'a, QUEUE_SIZE>) -> Self {
        Self::with_poll_interval(controller, events, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(
        controller: Controller<D, L>,
        events: EventReceiver<'a, QUEUE_SIZE>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            controller,
            events,
            poll_interval,
        }
    }

    pub fn boot(&mut self, now: Instant) {
        self.controller.boot(now);
    }

    /// Run one iteration.
    ///
    /// Drains pending events in arrival order, then lets the controller step
    /// its timers. The returned deadline is the earliest due timer, capped at
    /// the poll interval.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        while let Some(event) = self.events.try_receive() {
            self.controller.handle_event(event, now);
        }
        self.controller.poll(now);

        let latest = now + self.poll_interval;
        let next_deadline = match self.controller.next_deadline() {
            Some(deadline) if deadline < latest => deadline,
            _ => latest,
        };

        TickResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    pub fn controller(&self) -> &Controller<D, L> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<D, L> {
        &mut self.controller
    }
}
