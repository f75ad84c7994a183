//! Shared mocks for the integration tests

#![allow(dead_code)] // Each test file uses a different subset

use core::convert::Infallible;

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, OutputPin};
use led_box_controller::config::DEFAULT_LED_COUNT;
use led_box_controller::{
    AdvertisingConfig, ConnectionParams, Controller, ControllerConfig, LinkError, LinkLayer, Rgb, StripDriver,
};

pub const LED_COUNT: usize = DEFAULT_LED_COUNT;

/// Strip driver that records every call
pub struct MockStrip {
    pub pixels: [Rgb; LED_COUNT],
    pub brightness: u8,
    pub shows: usize,
    pub shown_brightness: Vec<u8>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::default(); LED_COUNT],
            brightness: 255,
            shows: 0,
            shown_brightness: Vec::new(),
        }
    }

    pub fn all(&self, color: Rgb) -> bool {
        self.pixels.iter().all(|pixel| *pixel == color)
    }

    pub fn painted(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|pixel| **pixel == color).count()
    }
}

impl StripDriver for MockStrip {
    fn pixel_count(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) {
        self.shows += 1;
        self.shown_brightness.push(self.brightness);
    }
}

/// Link layer that counts requests and can be told to fail
#[derive(Default)]
pub struct MockLink {
    pub advertising_starts: usize,
    pub last_advertising: Option<AdvertisingConfig>,
    pub fail_advertising: bool,
    pub params_requests: Vec<ConnectionParams>,
    pub reject_params: bool,
}

impl LinkLayer for MockLink {
    fn start_advertising(&mut self, config: &AdvertisingConfig) -> Result<(), LinkError> {
        self.advertising_starts += 1;
        self.last_advertising = Some(*config);
        if self.fail_advertising {
            return Err(LinkError::AdvertisingFailed);
        }
        Ok(())
    }

    fn request_connection_params(&mut self, params: &ConnectionParams) -> Result<(), LinkError> {
        self.params_requests.push(*params);
        if self.reject_params {
            return Err(LinkError::ConnectionParamsRejected);
        }
        Ok(())
    }
}

/// Output pin that remembers its level
#[derive(Default)]
pub struct MockPin {
    pub high: Option<bool>,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        Ok(())
    }
}

pub fn ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

pub fn controller() -> Controller<MockStrip, MockLink> {
    controller_with(ControllerConfig::default())
}

pub fn controller_with(config: ControllerConfig) -> Controller<MockStrip, MockLink> {
    Controller::new(MockStrip::new(), MockLink::default(), config)
}

/// Controller that has booted at t=0 and finished its boot wipe
pub fn booted() -> Controller<MockStrip, MockLink> {
    let mut controller = controller();
    controller.boot(ms(0));
    finish_wipe(&mut controller, 0);
    controller
}

/// Poll every 20 ms until the wipe is done; returns the last instant polled
pub fn finish_wipe(controller: &mut Controller<MockStrip, MockLink>, start: u64) -> u64 {
    let mut now = start;
    while controller.wipe().is_active() {
        now += 20;
        controller.poll(ms(now));
    }
    now
}
