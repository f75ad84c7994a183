#![no_std]

#[macro_use]
mod fmt;

pub mod color;
pub mod command;
pub mod config;
pub mod control_loop;
pub mod controller;
pub mod driver;
pub mod event;
pub mod indicator;
pub mod link;
pub mod live;
pub mod pulse;
pub mod state;
pub mod timer;
pub mod wipe;

pub use command::{Command, CommandEffects, PulseChange, UnknownOpcode, interpret};
pub use config::{BrightnessFloor, ConnectReset, ControllerConfig, PulseLimits};
pub use control_loop::{ControlLoop, TickResult};
pub use controller::Controller;
pub use driver::SmartLedsStrip;
pub use event::{EventPublisher, EventQueue, EventReceiver, LinkEvent, QueueFull};
pub use indicator::{IndicatorError, SwitchIndicator};
pub use link::{
    AdvertisingConfig, ConnectionParams, LinkError, LinkLayer, LinkLifecycle, LinkState,
};
pub use pulse::PulseEngine;
pub use state::{LightingState, PulseDirection};
pub use timer::IntervalTimer;
pub use wipe::Wipe;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver.
///
/// Owns the pixel buffer and the global brightness scalar. Nothing reaches
/// the LEDs until [`StripDriver::show`].
pub trait StripDriver {
    /// Number of pixels on the strip.
    fn pixel_count(&self) -> usize;

    /// Set one pixel in the buffer; out of range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every pixel in the buffer.
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }

    /// Set the brightness applied on the next flush (0-255).
    fn set_brightness(&mut self, brightness: u8);

    /// Flush the buffer to the LEDs.
    fn show(&mut self);
}
