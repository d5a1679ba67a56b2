//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the input pins, the mode-button debouncer, the clock, and all
//! output drivers, exposing them through [`InputPort`] and
//! [`ActuatorPort`].  This is the only module in the crate that touches
//! pins.  Any `embedded-hal` 1.0 implementation works; the host tests
//! use in-memory pins.

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{ActuatorPort, ClockPort, InputPort};
use crate::drivers::button::Debouncer;
use crate::drivers::motors::MotorDriver;
use crate::drivers::relay::RelayDriver;
use crate::error::{ActuatorError, InputError, Result};
use crate::fsm::context::{MotorCommand, SystemInputs};

/// Panel inputs.  Buttons are active-low (pull-up); the PIR is active-high.
pub struct InputPins<I> {
    pub mode: I,
    pub pir: I,
    pub forward: I,
    pub backward: I,
    pub left: I,
    pub right: I,
}

/// Output drivers, already initialised to their released levels.
pub struct OutputDrivers<O> {
    pub relay: RelayDriver<O>,
    pub aux_relay: RelayDriver<O>,
    pub motors: MotorDriver<O>,
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, O, C> {
    inputs: InputPins<I>,
    mode_button: Debouncer,
    outputs: OutputDrivers<O>,
    clock: C,
}

impl<I, O, C> HardwareAdapter<I, O, C>
where
    I: InputPin,
    O: OutputPin,
    C: ClockPort,
{
    pub fn new(inputs: InputPins<I>, outputs: OutputDrivers<O>, clock: C, debounce_ms: u32) -> Self {
        Self {
            inputs,
            mode_button: Debouncer::new(debounce_ms),
            outputs,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn outputs(&self) -> &OutputDrivers<O> {
        &self.outputs
    }

    fn button(pin: &mut I) -> Result<bool> {
        pin.is_low().map_err(|_| InputError::ButtonReadFailed.into())
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I, O, C> InputPort for HardwareAdapter<I, O, C>
where
    I: InputPin,
    O: OutputPin,
    C: ClockPort,
{
    fn sample(&mut self) -> Result<SystemInputs> {
        let now_ms = self.clock.uptime_ms();

        // Read every level before the debouncer sees the mode button, so a
        // failed read later in the snapshot cannot consume a press edge.
        let mode_level = Self::button(&mut self.inputs.mode)?;
        let motion_detected = self
            .inputs
            .pir
            .is_high()
            .map_err(|_| InputError::MotionReadFailed)?;
        let forward_pressed = Self::button(&mut self.inputs.forward)?;
        let backward_pressed = Self::button(&mut self.inputs.backward)?;
        let left_pressed = Self::button(&mut self.inputs.left)?;
        let right_pressed = Self::button(&mut self.inputs.right)?;

        let mode_toggle_pressed = self.mode_button.tick(mode_level, now_ms);

        // An unset RTC reads as an invalid time, which never matches a window.
        let (hour, minute) = self
            .clock
            .time_of_day()
            .map_or((-1, -1), |(h, m)| (i32::from(h), i32::from(m)));

        Ok(SystemInputs {
            mode_toggle_pressed,
            motion_detected,
            forward_pressed,
            backward_pressed,
            left_pressed,
            right_pressed,
            hour,
            minute,
        })
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I, O, C> ActuatorPort for HardwareAdapter<I, O, C>
where
    I: InputPin,
    O: OutputPin,
    C: ClockPort,
{
    fn set_relay(&mut self, on: bool) -> Result<()> {
        self.outputs
            .relay
            .set(on)
            .map_err(|_| ActuatorError::RelayWriteFailed.into())
    }

    fn set_motors(&mut self, command: MotorCommand) -> Result<()> {
        self.outputs
            .motors
            .set(command)
            .map_err(|_| ActuatorError::MotorWriteFailed.into())
    }

    fn set_aux_relay(&mut self, on: bool) -> Result<()> {
        self.outputs
            .aux_relay
            .set(on)
            .map_err(|_| ActuatorError::AuxRelayWriteFailed.into())
    }

    fn all_off(&mut self) {
        if self.outputs.relay.set(false).is_err() {
            warn!("all_off: UV relay release failed");
        }
        if self.outputs.motors.stop().is_err() {
            warn!("all_off: motor stop failed");
        }
        if self.outputs.aux_relay.set(false).is_err() {
            warn!("all_off: aux relay release failed");
        }
    }
}
