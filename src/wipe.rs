//! Non-blocking color wipe.
//!
//! Paints the strip one pixel at a time, flushing after each pixel. Driven by
//! an interval timer polled from the control loop instead of sleeping.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::color::Rgb;
use crate::timer::IntervalTimer;

#[derive(Debug, Clone)]
pub struct Wipe {
    color: Rgb,
    next_pixel: usize,
    timer: IntervalTimer,
}

impl Wipe {
    pub const fn new(step: Duration) -> Self {
        Self {
            color: Rgb { r: 0, g: 0, b: 0 },
            next_pixel: 0,
            timer: IntervalTimer::new(step),
        }
    }

    /// Start wiping `color` across the strip.
    ///
    /// The first pixel is painted right away. With a zero step the whole strip
    /// is filled at once. Any wipe in progress is replaced.
    pub fn start<D: StripDriver>(&mut self, color: Rgb, driver: &mut D, now: Instant) {
        self.color = color;
        self.next_pixel = 0;
        if self.timer.period().as_ticks() == 0 {
            self.timer.stop();
            driver.fill(color);
            driver.show();
            return;
        }
        self.timer.start(now);
        self.paint_next(driver);
    }

    /// Stop the wipe, leaving painted pixels as they are.
    pub fn cancel(&mut self) {
        self.timer.stop();
    }

    pub const fn is_active(&self) -> bool {
        self.timer.is_running()
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Paint the next pixel if its step has elapsed.
    ///
    /// Returns `true` if the strip was flushed.
    pub fn poll<D: StripDriver>(&mut self, driver: &mut D, now: Instant) -> bool {
        if !self.timer.triggered(now) {
            return false;
        }
        self.paint_next(driver);
        true
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    fn paint_next<D: StripDriver>(&mut self, driver: &mut D) {
        let count = driver.pixel_count();
        if self.next_pixel < count {
            driver.set_pixel(self.next_pixel, self.color);
            driver.show();
            self.next_pixel += 1;
        }
        if self.next_pixel >= count {
            self.timer.stop();
        }
    }
}
