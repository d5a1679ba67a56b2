//! Relay coil driver.
//!
//! Used for the UV emitter relay and the auxiliary relay.  Some relay
//! boards energise on a low level, so polarity is configurable.
//!
//! The driver is a dumb actuator: whether the UV relay *may* be on is
//! decided by the control-cycle transition, never here.

use embedded_hal::digital::{OutputPin, PinState};

pub struct RelayDriver<P> {
    pin: P,
    active_low: bool,
    on: bool,
}

impl<P: OutputPin> RelayDriver<P> {
    /// Wrap `pin` and drive it to the released level.
    pub fn new(pin: P, active_low: bool) -> Result<Self, P::Error> {
        let mut relay = Self {
            pin,
            active_low,
            on: false,
        };
        relay.set(false)?;
        Ok(relay)
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        let level = on != self.active_low;
        self.pin.set_state(PinState::from(level))?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
