//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (a remote,
//! a supervisor panel, a provisioning tool) that the
//! [`AppService`](super::service::AppService) interprets and acts upon.

use crate::config::SystemConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Halt all outputs and hold them off until reset.
    EmergencyStop,

    /// Release the emergency latch.  The robot resumes in manual mode.
    ResetEmergency,

    /// A UV pass is complete: lamp off and park, aux relay on.
    FinishUvCycle,

    /// Hot-reload configuration.  Rejected if validation fails.
    UpdateConfig(SystemConfig),
}
