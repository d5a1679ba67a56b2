//! Values threaded through every control cycle.
//!
//! [`SystemInputs`] is the per-cycle snapshot assembled by the input side
//! (buttons, PIR, clock).  [`SystemState`] is the only persistent value:
//! the transition function reads the previous one and returns the next.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Whether motor commands come from the schedule or from the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingMode {
    Manual,
    Automatic,
}

impl OperatingMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Manual => Self::Automatic,
            Self::Automatic => Self::Manual,
        }
    }
}

/// Drive motor command.  Exactly one is active per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MotorCommand {
    #[default]
    Stop = 0,
    Forward = 1,
    Backward = 2,
    TurnLeft = 3,
    TurnRight = 4,
}

impl MotorCommand {
    /// True for every command except [`MotorCommand::Stop`].
    pub fn is_moving(self) -> bool {
        self != Self::Stop
    }
}

// ---------------------------------------------------------------------------
// Input snapshot (written by the input side; consumed once)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every input for one control cycle.
///
/// `hour` and `minute` are deliberately wide: the clock source may hand
/// back garbage and the schedule predicate treats that as "outside".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemInputs {
    /// Mode button fired this cycle (edge or level, decided by the caller).
    pub mode_toggle_pressed: bool,
    /// PIR sensor reports a person or animal nearby.
    pub motion_detected: bool,
    pub forward_pressed: bool,
    pub backward_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    /// Hour of day (valid range 0-23).
    pub hour: i32,
    /// Minute of hour (valid range 0-59).
    pub minute: i32,
}

impl SystemInputs {
    /// Inputs to substitute when the real ones could not be read.
    ///
    /// Reports motion (relay off), no buttons, and an invalid time
    /// (automatic mode stops), so the next state is always at rest.
    pub fn fail_safe() -> Self {
        Self {
            mode_toggle_pressed: false,
            motion_detected: true,
            forward_pressed: false,
            backward_pressed: false,
            left_pressed: false,
            right_pressed: false,
            hour: -1,
            minute: -1,
        }
    }

    /// True if any directional button is held.
    pub fn any_direction_pressed(&self) -> bool {
        self.forward_pressed || self.backward_pressed || self.left_pressed || self.right_pressed
    }
}

// ---------------------------------------------------------------------------
// Persistent state
// ---------------------------------------------------------------------------

/// The robot's control state, carried from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    /// `true` = automatic (schedule-driven), `false` = manual.
    pub auto_mode: bool,
    /// UV relay energised.
    pub relay_on: bool,
    /// Active drive command.
    pub motors: MotorCommand,
}

impl Default for SystemState {
    /// Power-on state: automatic, relay off, motors stopped.
    fn default() -> Self {
        Self {
            auto_mode: true,
            relay_on: false,
            motors: MotorCommand::Stop,
        }
    }
}

impl SystemState {
    /// Power-on state in the requested mode.
    pub fn starting_in(mode: OperatingMode) -> Self {
        Self {
            auto_mode: mode == OperatingMode::Automatic,
            ..Self::default()
        }
    }

    /// The mode flag as an enum.
    pub fn mode(&self) -> OperatingMode {
        if self.auto_mode {
            OperatingMode::Automatic
        } else {
            OperatingMode::Manual
        }
    }

    /// Advance this state in place by one cycle.
    ///
    /// Identical to `*self = fsm::update(*self, inputs)`.
    pub fn apply(&mut self, inputs: &SystemInputs) {
        *self = super::update(*self, inputs);
    }
}
