//! Lighting state and its clamping rules.
//!
//! Every mutator clamps at the mutation site, callers never need to
//! range-check brightness, ceiling or pulse period themselves.

use embassy_time::Duration;

use crate::color::Rgb;
use crate::config::{BrightnessFloor, ControllerConfig, PulseLimits};

/// Direction of the breathing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseDirection {
    Rising,
    Falling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightingState {
    color: Rgb,
    brightness: u8,
    max_brightness: u8,
    direction: PulseDirection,
    pulse_period: Duration,
    connected: bool,
}

impl LightingState {
    /// Boot state: idle color, brightness at the default ceiling, rising.
    pub fn new(config: &ControllerConfig) -> Self {
        let max_brightness = config.default_max_brightness.max(1);
        Self {
            color: config.idle_color,
            brightness: max_brightness,
            max_brightness,
            direction: PulseDirection::Rising,
            pulse_period: config.pulse_limits.clamp(config.default_pulse_period),
            connected: false,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    pub const fn direction(&self) -> PulseDirection {
        self.direction
    }

    pub const fn pulse_period(&self) -> Duration {
        self.pulse_period
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Set brightness, clamped to `[floor, max_brightness]`.
    pub fn set_brightness(&mut self, brightness: u8, floor: BrightnessFloor) {
        self.brightness = brightness.clamp(floor.value(), self.max_brightness);
    }

    pub fn darken(&mut self, step: u8, floor: BrightnessFloor) {
        self.set_brightness(self.brightness.saturating_sub(step), floor);
    }

    pub fn brighten(&mut self, step: u8) {
        self.set_brightness(
            self.brightness.saturating_add(step),
            BrightnessFloor::KeepVisible,
        );
    }

    /// Lower the ceiling, never below `min` (and never below 1).
    ///
    /// The rendered brightness is left alone.
    pub fn lower_max_brightness(&mut self, step: u8, min: u8) {
        self.max_brightness = self.max_brightness.saturating_sub(step).max(min.max(1));
    }

    /// Raise the ceiling, saturating at 255.
    pub fn raise_max_brightness(&mut self, step: u8) {
        self.max_brightness = self.max_brightness.saturating_add(step);
    }

    /// Set both brightness and ceiling to `value`.
    pub fn reset_brightness(&mut self, value: u8) {
        let value = value.max(1);
        self.max_brightness = value;
        self.brightness = value;
    }

    pub fn set_pulse_period(&mut self, period: Duration, limits: PulseLimits) {
        self.pulse_period = limits.clamp(period);
    }

    pub fn shorten_pulse_period(&mut self, limits: PulseLimits) {
        let period = self
            .pulse_period
            .checked_sub(limits.step)
            .unwrap_or(limits.min);
        self.set_pulse_period(period, limits);
    }

    pub fn lengthen_pulse_period(&mut self, limits: PulseLimits) {
        let period = self
            .pulse_period
            .checked_add(limits.step)
            .unwrap_or(limits.max);
        self.set_pulse_period(period, limits);
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Raw write used by the pulse engine, which enforces its own bounds.
    pub(crate) fn set_pulse_level(&mut self, brightness: u8, direction: PulseDirection) {
        self.brightness = brightness;
        self.direction = direction;
    }
}
