//! [`StripDriver`] adapter for any `smart_leds` writer.

use smart_leds::{SmartLedsWrite, brightness};

use crate::StripDriver;
use crate::color::{BLACK, Rgb};

/// Frame buffer plus global brightness in front of a `SmartLedsWrite` device.
///
/// N is the number of LEDs in the strip.
pub struct SmartLedsStrip<W, const N: usize> {
    writer: W,
    frame: [Rgb; N],
    brightness: u8,
    write_failed: bool,
}

impl<W, const N: usize> SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a dark strip at full brightness.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [BLACK; N],
            brightness: 255,
            write_failed: false,
        }
    }

    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripDriver for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.frame = [color; N];
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn show(&mut self) {
        let result = self
            .writer
            .write(brightness(self.frame.iter().copied(), self.brightness));
        match result {
            Err(_) if !self.write_failed => {
                warn!("strip: write failed");
                self.write_failed = true;
            }
            Ok(()) if self.write_failed => {
                info!("strip: write recovered");
                self.write_failed = false;
            }
            _ => {}
        }
    }
}
