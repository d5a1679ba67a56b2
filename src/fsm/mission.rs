//! Coarse mission lifecycle.
//!
//! Sits above the per-cycle transition: where [`SystemState`] says what the
//! outputs are *this cycle*, [`RobotState`] says what the robot is *doing*
//! (cleaning on its own, being driven, halted for an emergency, or done
//! with a UV pass).  The application service keeps one of these next to
//! the control state and uses the emergency mode as a latch.

use serde::{Deserialize, Serialize};

use super::context::SystemState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RobotMode {
    Manual = 0,
    Auto = 1,
    Emergency = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    pub mode: RobotMode,
    /// UV emitter energised.
    pub uv_on: bool,
    /// Secondary relay, energised once a UV pass completes.
    pub aux_relay_on: bool,
    /// Drive motors commanded to anything but stop.
    pub moving: bool,
}

/// Begin an automatic cleaning run: UV on, driving immediately.
pub fn start_auto_mode() -> RobotState {
    RobotState {
        mode: RobotMode::Auto,
        uv_on: true,
        aux_relay_on: false,
        moving: true,
    }
}

/// Halt everything and latch the emergency mode.
pub fn trigger_emergency_stop() -> RobotState {
    RobotState {
        mode: RobotMode::Emergency,
        uv_on: false,
        aux_relay_on: false,
        moving: false,
    }
}

/// Leave the emergency latch.  Always lands in manual with everything off.
pub fn reset_emergency() -> RobotState {
    RobotState {
        mode: RobotMode::Manual,
        uv_on: false,
        aux_relay_on: false,
        moving: false,
    }
}

/// A UV pass finished: lamp off, aux relay on, parked, still automatic.
pub fn finish_uv_cycle() -> RobotState {
    RobotState {
        mode: RobotMode::Auto,
        uv_on: false,
        aux_relay_on: true,
        moving: false,
    }
}

impl RobotState {
    /// Summarise a control-cycle state.  The aux relay is not part of
    /// the control state and always reads off.
    pub fn observe(state: &SystemState) -> Self {
        Self {
            mode: if state.auto_mode {
                RobotMode::Auto
            } else {
                RobotMode::Manual
            },
            uv_on: state.relay_on,
            aux_relay_on: false,
            moving: state.motors.is_moving(),
        }
    }

    pub fn is_emergency(&self) -> bool {
        self.mode == RobotMode::Emergency
    }
}
