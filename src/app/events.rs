//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use serde::Serialize;

use crate::diagnostics::RuntimeStats;
use crate::error::ConfigError;
use crate::fsm::context::{MotorCommand, OperatingMode, SystemState};
use crate::fsm::mission::RobotMode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// Operating mode flipped.
    ModeChanged {
        from: OperatingMode,
        to: OperatingMode,
    },

    /// UV relay switched.
    RelayChanged(bool),

    /// Drive command changed.
    MotorsChanged {
        from: MotorCommand,
        to: MotorCommand,
    },

    /// Emergency latch engaged.
    EmergencyLatched,

    /// Emergency latch released.
    EmergencyCleared,

    /// A UV pass was marked complete.
    UvCycleFinished,

    /// A config update failed validation and was discarded.
    ConfigRejected(ConfigError),

    /// The application service has started (carries initial state).
    Started(SystemState),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryData {
    pub state: SystemState,
    pub mission: RobotMode,
    /// Last sampled wall-clock time, as fed to the schedule.
    pub hour: i32,
    pub minute: i32,
    pub in_window: bool,
    pub stats: RuntimeStats,
}
