//! Runtime counters.
//!
//! Collected by the application service every control cycle and exposed
//! for telemetry.  `encode` produces a postcard frame so a host harness
//! or a serial bridge can ship the counters without an allocator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fsm::context::{MotorCommand, SystemState};

/// Upper bound on an encoded [`RuntimeStats`] frame (six varint u64s).
pub const STATS_FRAME_MAX: usize = 6 * 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeStats {
    /// Control cycles executed.
    pub cycles: u64,
    /// Cycles in which the operating mode flipped.
    pub mode_toggles: u64,
    /// Relay on -> off edges caused by the motion sensor.
    pub uv_cutoffs: u64,
    /// Cycles spent driving forward in automatic mode.
    pub auto_forward_cycles: u64,
    /// Cycles that ran on fail-safe inputs because sampling failed.
    pub input_faults: u64,
    /// Actuator writes that failed.
    pub actuator_faults: u64,
}

impl RuntimeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one completed transition.
    pub fn record_cycle(&mut self, prev: &SystemState, next: &SystemState) {
        self.cycles = self.cycles.wrapping_add(1);
        if prev.auto_mode != next.auto_mode {
            self.mode_toggles += 1;
        }
        if prev.relay_on && !next.relay_on {
            self.uv_cutoffs += 1;
        }
        if next.auto_mode && next.motors == MotorCommand::Forward {
            self.auto_forward_cycles += 1;
        }
    }

    pub fn record_input_fault(&mut self) {
        self.input_faults += 1;
    }

    pub fn record_actuator_fault(&mut self) {
        self.actuator_faults += 1;
    }

    /// Serialise into `buf`, returning the used prefix.
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8]> {
        postcard::to_slice(self, buf).map_err(|_| Error::Encoding)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        postcard::from_bytes(bytes).map_err(|_| Error::Encoding)
    }
}
