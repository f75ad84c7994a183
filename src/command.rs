//! Opcode commands and their state transitions.
//!
//! [`interpret`] only mutates [`LightingState`]. Strip writes and pulse timer
//! changes are reported back as [`CommandEffects`] for the controller to
//! perform.

use core::fmt;

use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::config::ControllerConfig;
use crate::state::LightingState;

const OPCODE_RED: u8 = 0;
const OPCODE_GREEN: u8 = 1;
const OPCODE_BLUE: u8 = 2;
const OPCODE_PULSE_FASTER: u8 = 3;
const OPCODE_PULSE_SLOWER: u8 = 4;
const OPCODE_DARKER: u8 = 5;
const OPCODE_BRIGHTER: u8 = 6;
const OPCODE_MAX_DARKER: u8 = 7;
const OPCODE_MAX_BRIGHTER: u8 = 8;
const OPCODE_RESET: u8 = 9;

/// A single-byte command written to the command characteristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Fill with red.
    Red = OPCODE_RED,
    /// Fill with green.
    Green = OPCODE_GREEN,
    /// Fill with blue.
    Blue = OPCODE_BLUE,
    /// Shorten the pulse period and start pulsing.
    PulseFaster = OPCODE_PULSE_FASTER,
    /// Lengthen the pulse period and start pulsing.
    PulseSlower = OPCODE_PULSE_SLOWER,
    /// Lower the current brightness.
    Darker = OPCODE_DARKER,
    /// Raise the current brightness.
    Brighter = OPCODE_BRIGHTER,
    /// Lower the brightness ceiling.
    MaxDarker = OPCODE_MAX_DARKER,
    /// Raise the brightness ceiling.
    MaxBrighter = OPCODE_MAX_BRIGHTER,
    /// Stop pulsing and restore default brightness and pulse period.
    Reset = OPCODE_RESET,
}

impl Command {
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OPCODE_RED => Some(Self::Red),
            OPCODE_GREEN => Some(Self::Green),
            OPCODE_BLUE => Some(Self::Blue),
            OPCODE_PULSE_FASTER => Some(Self::PulseFaster),
            OPCODE_PULSE_SLOWER => Some(Self::PulseSlower),
            OPCODE_DARKER => Some(Self::Darker),
            OPCODE_BRIGHTER => Some(Self::Brighter),
            OPCODE_MAX_DARKER => Some(Self::MaxDarker),
            OPCODE_MAX_BRIGHTER => Some(Self::MaxBrighter),
            OPCODE_RESET => Some(Self::Reset),
            _ => None,
        }
    }

    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Fill color for the solid color commands.
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Self::Red => Some(RED),
            Self::Green => Some(GREEN),
            Self::Blue => Some(BLUE),
            _ => None,
        }
    }
}

/// Opcode outside the known command range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownOpcode(pub u8);

impl fmt::Display for UnknownOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown opcode {}", self.0)
    }
}

impl TryFrom<u8> for Command {
    type Error = UnknownOpcode;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        Self::from_opcode(opcode).ok_or(UnknownOpcode(opcode))
    }
}

/// What a command asks of the pulse engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseChange {
    #[default]
    Keep,
    /// Apply the state's period and start if stopped.
    Enable,
    Disable,
}

/// Side effects of a command that the controller should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandEffects {
    /// Fill the whole strip with this color and flush.
    pub fill: Option<Rgb>,
    /// Apply the state's brightness and flush.
    pub render: bool,
    pub pulse: PulseChange,
}

/// Apply a command to the lighting state.
pub fn interpret(
    command: Command,
    state: &mut LightingState,
    config: &ControllerConfig,
) -> CommandEffects {
    let mut effects = CommandEffects::default();

    match command {
        Command::Red | Command::Green | Command::Blue => {
            if let Some(color) = command.color() {
                state.set_color(color);
                effects.fill = Some(color);
            }
        }
        Command::PulseFaster => {
            state.shorten_pulse_period(config.pulse_limits);
            effects.pulse = PulseChange::Enable;
        }
        Command::PulseSlower => {
            state.lengthen_pulse_period(config.pulse_limits);
            effects.pulse = PulseChange::Enable;
        }
        Command::Darker => {
            state.darken(config.brightness_step, config.command_floor);
            effects.render = true;
        }
        Command::Brighter => {
            state.brighten(config.brightness_step);
            effects.render = true;
        }
        Command::MaxDarker => {
            // Ceiling only, what is on the strip stays as is
            state.lower_max_brightness(config.max_brightness_step, config.min_max_brightness);
        }
        Command::MaxBrighter => {
            state.raise_max_brightness(config.max_brightness_step);
        }
        Command::Reset => {
            state.reset_brightness(config.default_max_brightness);
            state.set_pulse_period(config.default_pulse_period, config.pulse_limits);
            effects.pulse = PulseChange::Disable;
            effects.render = true;
        }
    }

    effects
}
