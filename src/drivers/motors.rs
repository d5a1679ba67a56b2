//! Differential-drive motor driver (dual H-bridge, L298N style).
//!
//! Four digital inputs: forward/reverse for the left and right channel.
//! Turning is done in place by running the channels in opposite
//! directions.
//!
//! | Command   | L fwd | L rev | R fwd | R rev |
//! |-----------|-------|-------|-------|-------|
//! | Stop      |   0   |   0   |   0   |   0   |
//! | Forward   |   1   |   0   |   1   |   0   |
//! | Backward  |   0   |   1   |   0   |   1   |
//! | TurnLeft  |   0   |   1   |   1   |   0   |
//! | TurnRight |   1   |   0   |   0   |   1   |
//!
//! Pins that go low are written before pins that go high, so a channel is
//! never driven both ways at once during a direction change.

use embedded_hal::digital::OutputPin;

use crate::fsm::context::MotorCommand;

/// H-bridge pin levels for a command: `[l_fwd, l_rev, r_fwd, r_rev]`.
pub const fn pin_pattern(command: MotorCommand) -> [bool; 4] {
    match command {
        MotorCommand::Stop => [false, false, false, false],
        MotorCommand::Forward => [true, false, true, false],
        MotorCommand::Backward => [false, true, false, true],
        MotorCommand::TurnLeft => [false, true, true, false],
        MotorCommand::TurnRight => [true, false, false, true],
    }
}

pub struct MotorDriver<P> {
    /// `[l_fwd, l_rev, r_fwd, r_rev]`.
    pins: [P; 4],
    command: MotorCommand,
}

impl<P: OutputPin> MotorDriver<P> {
    /// Wrap the four bridge inputs and drive them all low.
    pub fn new(left_fwd: P, left_rev: P, right_fwd: P, right_rev: P) -> Result<Self, P::Error> {
        let mut drv = Self {
            pins: [left_fwd, left_rev, right_fwd, right_rev],
            command: MotorCommand::Stop,
        };
        for pin in &mut drv.pins {
            pin.set_low()?;
        }
        Ok(drv)
    }

    pub fn set(&mut self, command: MotorCommand) -> Result<(), P::Error> {
        let pattern = pin_pattern(command);

        for (pin, &high) in self.pins.iter_mut().zip(pattern.iter()) {
            if !high {
                pin.set_low()?;
            }
        }
        for (pin, &high) in self.pins.iter_mut().zip(pattern.iter()) {
            if high {
                pin.set_high()?;
            }
        }

        self.command = command;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), P::Error> {
        self.set(MotorCommand::Stop)
    }

    pub fn command(&self) -> MotorCommand {
        self.command
    }
}
