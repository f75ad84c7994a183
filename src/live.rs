//! Live brightness channel.
//!
//! Maps a 0-255 slider value onto `[0, max_brightness]`.

use crate::config::BrightnessFloor;

/// Remap a live brightness input against the current ceiling.
///
/// The integer remap rounds down, so with a ceiling of 100 an input of 1
/// would land on 0. Any nonzero input is lifted to at least 1. An input of 0
/// maps to the floor of `policy`.
#[allow(clippy::cast_possible_truncation)]
pub const fn remap(input: u8, max_brightness: u8, policy: BrightnessFloor) -> u8 {
    if input == 0 {
        return policy.value();
    }
    let adjusted = (input as u16 * max_brightness as u16 / 255) as u8;
    if adjusted == 0 { 1 } else { adjusted }
}
