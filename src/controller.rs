//! Controller - the context every handler works on.
//!
//! Owns the lighting state, both timers, the wipe, the strip driver and the
//! link layer. Nothing lives in statics; the control loop holds the only
//! `&mut` to it.

use embassy_time::Instant;

use crate::StripDriver;
use crate::color::GREEN;
use crate::command::{Command, PulseChange, interpret};
use crate::config::{ConnectReset, ControllerConfig};
use crate::event::LinkEvent;
use crate::link::{LinkLayer, LinkLifecycle};
use crate::live;
use crate::pulse::PulseEngine;
use crate::state::LightingState;
use crate::wipe::Wipe;

pub struct Controller<D: StripDriver, L: LinkLayer> {
    config: ControllerConfig,
    state: LightingState,
    pulse: PulseEngine,
    lifecycle: LinkLifecycle,
    wipe: Wipe,
    driver: D,
    link: L,
}

impl<D: StripDriver, L: LinkLayer> Controller<D, L> {
    pub fn new(driver: D, link: L, config: ControllerConfig) -> Self {
        let state = LightingState::new(&config);
        Self {
            pulse: PulseEngine::new(state.pulse_period()),
            lifecycle: LinkLifecycle::new(config.reconnect_cooldown),
            wipe: Wipe::new(config.wipe_step),
            state,
            config,
            driver,
            link,
        }
    }

    /// Bring the strip and link up: advertise, wipe the idle color, breathe.
    pub fn boot(&mut self, now: Instant) {
        info!("controller: boot");
        if let Err(err) = self.link.start_advertising(&self.config.advertising) {
            warn!("controller: {}", err);
        }
        self.driver.set_brightness(self.state.brightness());
        self.wipe.start(self.state.color(), &mut self.driver, now);
        self.pulse.enable(self.state.pulse_period(), now);
    }

    /// One control loop iteration.
    pub fn poll(&mut self, now: Instant) {
        if self.pulse.poll(&mut self.state, now) {
            self.render();
        }
        // Nothing extra runs per connected client yet
        self.wipe.poll(&mut self.driver, now);
        self.lifecycle
            .poll(&self.state, &mut self.link, &self.config.advertising, now);
    }

    pub fn handle_event(&mut self, event: LinkEvent, now: Instant) {
        match event {
            LinkEvent::Connected => self.on_connect(now),
            LinkEvent::Disconnected => self.on_disconnect(now),
            LinkEvent::OpcodeWritten(opcode) => self.apply_opcode(opcode, now),
            LinkEvent::LiveBrightnessWritten(input) => self.apply_live_brightness(input),
        }
    }

    /// Decode and apply an opcode; unknown opcodes are logged and dropped.
    pub fn apply_opcode(&mut self, opcode: u8, now: Instant) {
        match Command::try_from(opcode) {
            Ok(command) => self.apply_command(command, now),
            Err(err) => warn!("command: {}", err),
        }
    }

    pub fn apply_command(&mut self, command: Command, now: Instant) {
        debug!("command: {:?}", command);
        let effects = interpret(command, &mut self.state, &self.config);

        if let Some(color) = effects.fill {
            self.wipe.cancel();
            self.driver.fill(color);
            self.driver.show();
        }
        match effects.pulse {
            PulseChange::Keep => {}
            PulseChange::Enable => self.pulse.enable(self.state.pulse_period(), now),
            PulseChange::Disable => {
                self.pulse.disable();
                self.pulse.set_period(self.state.pulse_period());
            }
        }
        if effects.render {
            self.render();
        }
    }

    /// Live brightness takes over from the pulse animation.
    pub fn apply_live_brightness(&mut self, input: u8) {
        self.pulse.disable();
        let adjusted = live::remap(input, self.state.max_brightness(), self.config.live_floor);
        debug!("live: brightness {} -> {}", input, adjusted);
        self.state.set_brightness(adjusted, self.config.live_floor);
        self.render();
    }

    pub fn on_connect(&mut self, now: Instant) {
        if !self.lifecycle.connect(&mut self.state) {
            debug!("link: already connected");
            return;
        }
        info!("link: connected");

        if let Some(params) = self.config.connection_params {
            if let Err(err) = self.link.request_connection_params(&params) {
                warn!("link: {}", err);
            }
        }

        // Keep leaves brightness wherever the pulse stopped, possibly 1
        self.pulse.disable();
        if self.config.connect_reset == ConnectReset::RestoreDefaults {
            self.state.reset_brightness(self.config.default_max_brightness);
        }
        self.driver.set_brightness(self.state.brightness());
        self.state.set_color(GREEN);
        self.wipe.start(GREEN, &mut self.driver, now);

        if self.config.renew_advertising_on_connect {
            if let Err(err) = self.link.start_advertising(&self.config.advertising) {
                warn!("link: {}", err);
            }
        }
    }

    pub fn on_disconnect(&mut self, now: Instant) {
        if !self.lifecycle.disconnect(&mut self.state, now) {
            debug!("link: already disconnected");
            return;
        }
        info!("link: disconnected");

        self.pulse.disable();
        self.state.reset_brightness(self.config.default_max_brightness);
        self.state
            .set_pulse_period(self.config.default_pulse_period, self.config.pulse_limits);
        self.driver.set_brightness(self.state.brightness());

        let idle = self.config.idle_color;
        self.state.set_color(idle);
        self.wipe.start(idle, &mut self.driver, now);

        self.pulse.enable(self.state.pulse_period(), now);
    }

    /// Earliest instant at which [`Controller::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.pulse.deadline(),
            self.wipe.deadline(),
            self.lifecycle.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub const fn state(&self) -> &LightingState {
        &self.state
    }

    pub const fn pulse(&self) -> &PulseEngine {
        &self.pulse
    }

    pub const fn lifecycle(&self) -> &LinkLifecycle {
        &self.lifecycle
    }

    pub const fn wipe(&self) -> &Wipe {
        &self.wipe
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub const fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Push the current brightness to the strip.
    fn render(&mut self) {
        self.driver.set_brightness(self.state.brightness());
        self.driver.show();
    }
}
