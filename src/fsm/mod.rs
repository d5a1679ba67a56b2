//! Control-cycle state transition.
//!
//! One pure function turns the previous [`SystemState`] and this cycle's
//! [`SystemInputs`] into the next state:
//!
//! ```text
//!              ┌──────────────┐   toggle?   ┌─────────────┐
//!  inputs ────▶│ 1. mode flip │────────────▶│ auto_mode'  │
//!              └──────────────┘             └──────┬──────┘
//!              ┌──────────────┐                    │
//!  motion ────▶│ 2. relay     │ relay_on = !motion │
//!              └──────────────┘                    ▼
//!              ┌───────────────────────────────────────────┐
//!  clock  ────▶│ 3. motors: auto  → schedule window        │
//!  buttons ───▶│            manual → button priority       │
//!              └───────────────────────────────────────────┘
//! ```
//!
//! No debounce, no hysteresis, no hidden state.  The relay depends only on
//! the current motion reading; the motors depend only on the post-toggle
//! mode and the current inputs.

pub mod context;
pub mod mission;

use crate::schedule::{AutoSchedule, in_window};
use context::{MotorCommand, SystemInputs, SystemState};

/// Compute the next state against the factory schedule.
pub fn update(state: SystemState, inputs: &SystemInputs) -> SystemState {
    next_state(state, inputs, in_window)
}

/// Compute the next state against a configured schedule.
pub fn update_with(
    state: SystemState,
    inputs: &SystemInputs,
    schedule: &AutoSchedule,
) -> SystemState {
    next_state(state, inputs, |h, m| schedule.contains(h, m))
}

/// Resolve simultaneous button presses: Forward > Backward > Left > Right.
pub fn manual_command(inputs: &SystemInputs) -> MotorCommand {
    if inputs.forward_pressed {
        MotorCommand::Forward
    } else if inputs.backward_pressed {
        MotorCommand::Backward
    } else if inputs.left_pressed {
        MotorCommand::TurnLeft
    } else if inputs.right_pressed {
        MotorCommand::TurnRight
    } else {
        MotorCommand::Stop
    }
}

fn next_state(
    state: SystemState,
    inputs: &SystemInputs,
    window: impl Fn(i32, i32) -> bool,
) -> SystemState {
    let auto_mode = if inputs.mode_toggle_pressed {
        !state.auto_mode
    } else {
        state.auto_mode
    };

    let relay_on = !inputs.motion_detected;

    let motors = if auto_mode {
        if window(inputs.hour, inputs.minute) {
            MotorCommand::Forward
        } else {
            MotorCommand::Stop
        }
    } else {
        manual_command(inputs)
    };

    SystemState {
        auto_mode,
        relay_on,
        motors,
    }
}
