//! Compile-time defaults and controller configuration.

use embassy_time::Duration;

use crate::color::{RED, Rgb};
use crate::link::{AdvertisingConfig, ConnectionParams};

/// Number of pixels on the strip.
pub const DEFAULT_LED_COUNT: usize = 30;

/// Default brightness ceiling.
///
/// The 5V buck boost only handles ~0.8A, a full 255 would draw ~1.8A.
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 90;

/// Default pulse step period.
pub const DEFAULT_PULSE_PERIOD: Duration = Duration::from_millis(40);

/// Pulse period bounds and step used by the faster/slower commands.
pub const PULSE_PERIOD_MIN: Duration = Duration::from_millis(10);
pub const PULSE_PERIOD_MAX: Duration = Duration::from_millis(100);
pub const PULSE_PERIOD_STEP: Duration = Duration::from_millis(10);

/// Brightness change per darker/brighter command.
pub const BRIGHTNESS_STEP: u8 = 20;

/// Ceiling change per max darker/brighter command.
pub const MAX_BRIGHTNESS_STEP: u8 = 20;

/// Lowest ceiling the max darker command can reach.
pub const MIN_MAX_BRIGHTNESS: u8 = 1;

/// Wait after a disconnect before advertising again.
pub const RECONNECT_COOLDOWN: Duration = Duration::from_millis(1500);

/// Delay between pixels of a wipe.
pub const WIPE_STEP: Duration = Duration::from_millis(20);

/// Lowest brightness a command may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessFloor {
    /// Never drop below 1, so the selected color stays visible.
    KeepVisible,
    /// Allow 0, which turns the strip off.
    AllowOff,
}

impl BrightnessFloor {
    pub const fn value(self) -> u8 {
        match self {
            Self::KeepVisible => 1,
            Self::AllowOff => 0,
        }
    }
}

/// What happens to brightness when a client connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectReset {
    /// Keep the brightness and ceiling from before the connection.
    Keep,
    /// Restore the default brightness and ceiling.
    RestoreDefaults,
}

/// Bounds for the pulse period commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseLimits {
    pub min: Duration,
    pub max: Duration,
    pub step: Duration,
}

impl PulseLimits {
    pub const DEFAULT: Self = Self {
        min: PULSE_PERIOD_MIN,
        max: PULSE_PERIOD_MAX,
        step: PULSE_PERIOD_STEP,
    };

    /// Clamp a period into `[min, max]`.
    pub fn clamp(self, period: Duration) -> Duration {
        period.max(self.min).min(self.max)
    }
}

/// Configuration for the controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Color shown at boot and after a disconnect.
    pub idle_color: Rgb,
    /// Brightness and ceiling restored by reset and disconnect.
    pub default_max_brightness: u8,
    /// Pulse period restored by reset and disconnect.
    pub default_pulse_period: Duration,
    pub pulse_limits: PulseLimits,
    pub brightness_step: u8,
    pub max_brightness_step: u8,
    pub min_max_brightness: u8,
    /// Floor for the darker command.
    pub command_floor: BrightnessFloor,
    /// Floor for a live brightness input of 0.
    pub live_floor: BrightnessFloor,
    pub connect_reset: ConnectReset,
    /// Passed to the link layer whenever advertising (re)starts.
    pub advertising: AdvertisingConfig,
    /// Ask the link layer to advertise again right after a connection.
    ///
    /// Some centrals renegotiate through several hops and drop the first link.
    pub renew_advertising_on_connect: bool,
    /// Connection parameters requested from the central, if any.
    pub connection_params: Option<ConnectionParams>,
    pub reconnect_cooldown: Duration,
    /// Per-pixel delay of the connect/disconnect/boot wipes.
    pub wipe_step: Duration,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        idle_color: RED,
        default_max_brightness: DEFAULT_MAX_BRIGHTNESS,
        default_pulse_period: DEFAULT_PULSE_PERIOD,
        pulse_limits: PulseLimits::DEFAULT,
        brightness_step: BRIGHTNESS_STEP,
        max_brightness_step: MAX_BRIGHTNESS_STEP,
        min_max_brightness: MIN_MAX_BRIGHTNESS,
        command_floor: BrightnessFloor::KeepVisible,
        live_floor: BrightnessFloor::KeepVisible,
        connect_reset: ConnectReset::Keep,
        advertising: AdvertisingConfig::DEFAULT,
        renew_advertising_on_connect: true,
        connection_params: Some(ConnectionParams::PREFERRED),
        reconnect_cooldown: RECONNECT_COOLDOWN,
        wipe_step: WIPE_STEP,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
