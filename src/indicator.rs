//! Power switch indicator LED.
//!
//! The switch has an onboard LED wired between two GPIOs. It is lit as soon
//! as the controller boots and never touched again.

use core::fmt;

use embedded_hal::digital::{Error, ErrorKind, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// Driving the supply pin high failed.
    Vcc(ErrorKind),
    /// Driving the ground pin low failed.
    Gnd(ErrorKind),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vcc(kind) => write!(f, "indicator vcc pin: {}", kind),
            Self::Gnd(kind) => write!(f, "indicator gnd pin: {}", kind),
        }
    }
}

/// Holds the indicator pins at their lit levels.
pub struct SwitchIndicator<V, G> {
    vcc: V,
    gnd: G,
}

impl<V: OutputPin, G: OutputPin> SwitchIndicator<V, G> {
    /// Take the pins and light the LED: VCC high, GND low.
    pub fn new(mut vcc: V, mut gnd: G) -> Result<Self, IndicatorError> {
        vcc.set_high().map_err(|e| IndicatorError::Vcc(e.kind()))?;
        gnd.set_low().map_err(|e| IndicatorError::Gnd(e.kind()))?;
        info!("indicator: switch led on");
        Ok(Self { vcc, gnd })
    }

    pub fn release(self) -> (V, G) {
        (self.vcc, self.gnd)
    }
}
