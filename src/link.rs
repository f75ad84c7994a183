//! Wireless link layer boundary and connection lifecycle.

use core::fmt;

use embassy_time::{Duration, Instant};

use crate::state::LightingState;
use crate::timer::IntervalTimer;

/// GATT service exposing the control characteristics.
pub const SERVICE_UUID: u128 = 0x68a3_891c_3667_4937_b89b_f694_7985_4ae7;
/// Write-only, one opcode byte.
pub const COMMAND_CHARACTERISTIC_UUID: u128 = 0x284c_702d_3609_4939_bd2a_7f88_a7d3_83f8;
/// Write-only, one 0-255 brightness byte.
pub const LIVE_BRIGHTNESS_CHARACTERISTIC_UUID: u128 = 0x39cd_b833_ad1b_442f_8845_715d_69e2_7614;

pub const DEVICE_NAME: &str = "BLE NeoPixel Board Control";
pub const MAX_MTU: u16 = 350;

/// Advertising setup handed to the link layer on every advertising start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisingConfig {
    pub name: &'static str,
    pub service_uuid: u128,
    /// Without scan response the companion app cannot find the device.
    pub scan_response: bool,
    pub min_preferred: u16,
    pub mtu: u16,
}

impl AdvertisingConfig {
    pub const DEFAULT: Self = Self {
        name: DEVICE_NAME,
        service_uuid: SERVICE_UUID,
        scan_response: true,
        min_preferred: 0,
        mtu: MAX_MTU,
    };
}

impl Default for AdvertisingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Connection parameters requested from the central after it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionParams {
    /// Minimum connection interval, units of 1.25 ms.
    pub min_interval: u16,
    /// Maximum connection interval, units of 1.25 ms.
    pub max_interval: u16,
    /// Connection events the peripheral may skip.
    pub latency: u16,
    /// Supervision timeout, units of 10 ms.
    pub supervision_timeout: u16,
}

impl ConnectionParams {
    /// 7.5-40 ms interval, no latency, link dropped after 2 s of silence.
    pub const PREFERRED: Self = Self {
        min_interval: 0x06,
        max_interval: 0x20,
        latency: 0,
        supervision_timeout: 0x00C8,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The stack refused to (re)start advertising.
    AdvertisingFailed,
    /// The central rejected the parameter update.
    ConnectionParamsRejected,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdvertisingFailed => write!(f, "failed to start advertising"),
            Self::ConnectionParamsRejected => write!(f, "connection parameter update rejected"),
        }
    }
}

/// Wireless stack operations the controller needs.
///
/// Implement this on top of the platform BLE stack.
pub trait LinkLayer {
    /// Make the device discoverable with `config`.
    fn start_advertising(&mut self, config: &AdvertisingConfig) -> Result<(), LinkError>;

    /// Ask the connected central for new connection parameters.
    fn request_connection_params(&mut self, params: &ConnectionParams) -> Result<(), LinkError>;
}

/// Connection state of the wireless link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Disconnected,
    Connected,
}

impl LightingState {
    pub const fn link_state(&self) -> LinkState {
        if self.is_connected() {
            LinkState::Connected
        } else {
            LinkState::Disconnected
        }
    }
}

/// Tracks connect/disconnect and gates re-advertising behind a cooldown.
#[derive(Debug, Clone)]
pub struct LinkLifecycle {
    cooldown: IntervalTimer,
}

impl LinkLifecycle {
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            cooldown: IntervalTimer::new(cooldown),
        }
    }

    pub const fn is_cooldown_running(&self) -> bool {
        self.cooldown.is_running()
    }

    /// Mark the link connected and cancel a pending re-advertise.
    ///
    /// Returns `false` if the link was already connected.
    pub fn connect(&mut self, state: &mut LightingState) -> bool {
        if state.is_connected() {
            return false;
        }
        state.set_connected(true);
        self.cooldown.stop();
        true
    }

    /// Mark the link disconnected and start the cooldown from `now`.
    ///
    /// Returns `false` if the link was already disconnected.
    pub fn disconnect(&mut self, state: &mut LightingState, now: Instant) -> bool {
        if !state.is_connected() {
            return false;
        }
        state.set_connected(false);
        self.cooldown.start(now);
        true
    }

    /// Restart advertising once the cooldown has elapsed.
    ///
    /// A failed attempt re-arms the cooldown so the next expiry retries.
    /// Returns `true` if advertising was restarted.
    pub fn poll<L: LinkLayer>(
        &mut self,
        state: &LightingState,
        link: &mut L,
        advertising: &AdvertisingConfig,
        now: Instant,
    ) -> bool {
        if state.is_connected() || !self.cooldown.triggered(now) {
            return false;
        }
        self.cooldown.stop();
        match link.start_advertising(advertising) {
            Ok(()) => {
                info!("link: advertising restarted");
                true
            }
            Err(err) => {
                warn!("link: {}, retrying after cooldown", err);
                self.cooldown.start(now);
                false
            }
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.cooldown.deadline()
    }
}
