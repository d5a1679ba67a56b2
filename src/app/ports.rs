//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (inputs, actuators, event sinks, clocks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::Result;
use crate::fsm::context::{MotorCommand, SystemInputs};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
pub trait InputPort {
    /// Sample buttons, PIR, and clock into one snapshot.
    ///
    /// On error the service substitutes [`SystemInputs::fail_safe`].
    fn sample(&mut self) -> Result<SystemInputs>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command outputs.
pub trait ActuatorPort {
    /// Energise or release the UV relay.
    fn set_relay(&mut self, on: bool) -> Result<()>;

    /// Drive the motors.
    fn set_motors(&mut self, command: MotorCommand) -> Result<()>;

    /// Energise or release the auxiliary relay.
    fn set_aux_relay(&mut self, on: bool) -> Result<()>;

    /// Best-effort safe shutdown: relay off, motors stopped, aux off.
    /// Must attempt every output even if one fails.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC / system timer → input side)
// ───────────────────────────────────────────────────────────────

/// Time source used by input adapters for debounce and the schedule.
pub trait ClockPort {
    /// Milliseconds since boot, wrapping at `u32::MAX`.
    fn uptime_ms(&self) -> u32;

    /// Wall-clock `(hour, minute)`, or `None` if the RTC has not been set.
    fn time_of_day(&self) -> Option<(u8, u8)>;
}
