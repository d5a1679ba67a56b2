//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the control state, the mission lifecycle, and the
//! runtime counters.  It exposes a clean, hardware-agnostic API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AppService         │
//! ActuatorPort ◀──│ update · latch · stats  │
//!                 └────────────────────────┘
//! ```

use log::{debug, error, info, warn};

use crate::config::SystemConfig;
use crate::diagnostics::RuntimeStats;
use crate::fsm;
use crate::fsm::context::{MotorCommand, OperatingMode, SystemInputs, SystemState};
use crate::fsm::mission::{self, RobotState};
use crate::schedule::AutoSchedule;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, InputPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    state: SystemState,
    mission: RobotState,
    config: SystemConfig,
    schedule: AutoSchedule,
    stats: RuntimeStats,
    /// Inputs used by the most recent cycle (for telemetry).
    last_inputs: SystemInputs,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// An invalid configuration is replaced by the defaults.
    pub fn new(config: SystemConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid config ({e}); using defaults");
                SystemConfig::default()
            }
        };
        let schedule = AutoSchedule::new(&config.auto_window_hours).unwrap_or_default();

        let mode = if config.start_in_auto_mode {
            OperatingMode::Automatic
        } else {
            OperatingMode::Manual
        };
        let state = SystemState::starting_in(mode);

        Self {
            state,
            mission: RobotState::observe(&state),
            config,
            schedule,
            stats: RuntimeStats::new(),
            last_inputs: SystemInputs::fail_safe(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.state));
        info!("AppService started in {:?} mode", self.state.mode());
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: sample → update → actuators → events.
    ///
    /// `hw` implements both [`InputPort`] and [`ActuatorPort`], so one
    /// mutable borrow covers sampling and actuation.
    pub fn tick(&mut self, hw: &mut (impl InputPort + ActuatorPort), sink: &mut impl EventSink) {
        // 1. Sample inputs, falling back to a resting snapshot
        let inputs = match hw.sample() {
            Ok(inputs) => inputs,
            Err(e) => {
                warn!("Input sampling failed ({e}); running fail-safe cycle");
                self.stats.record_input_fault();
                SystemInputs::fail_safe()
            }
        };
        self.last_inputs = inputs;

        let prev = self.state;

        // 2. Transition (or hold everything off while latched)
        if self.mission.is_emergency() {
            self.state = Self::at_rest(prev);
            hw.all_off();
        } else {
            self.state = fsm::update_with(prev, &inputs, &self.schedule);
            let aux_was_on = self.mission.aux_relay_on;
            self.mission = RobotState::observe(&self.state);

            // 3. Apply outputs
            if self.apply_outputs(hw) && aux_was_on {
                self.write_or_shutdown(hw, |hw| hw.set_aux_relay(false));
            }
        }

        if prev.relay_on && !self.state.relay_on && inputs.motion_detected {
            info!("UV cutoff: motion detected");
        }

        // 4. Bookkeeping and events
        self.stats.record_cycle(&prev, &self.state);
        Self::emit_changes(&prev, &self.state, sink);

        let every = u64::from(self.config.telemetry_interval_cycles);
        if self.stats.cycles % every == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::EmergencyStop => {
                if self.mission.is_emergency() {
                    return;
                }
                let prev = self.state;
                self.mission = mission::trigger_emergency_stop();
                self.state = Self::at_rest(prev);
                hw.all_off();
                warn!("Emergency stop latched");
                sink.emit(&AppEvent::EmergencyLatched);
                Self::emit_changes(&prev, &self.state, sink);
            }
            AppCommand::ResetEmergency => {
                if !self.mission.is_emergency() {
                    debug!("Emergency reset ignored: not latched");
                    return;
                }
                let prev = self.state;
                self.mission = mission::reset_emergency();
                self.state = SystemState::starting_in(OperatingMode::Manual);
                info!("Emergency cleared; resuming in manual mode");
                sink.emit(&AppEvent::EmergencyCleared);
                Self::emit_changes(&prev, &self.state, sink);
            }
            AppCommand::FinishUvCycle => {
                if self.mission.is_emergency() {
                    warn!("UV cycle completion ignored while emergency latched");
                    return;
                }
                let prev = self.state;
                self.mission = mission::finish_uv_cycle();
                self.state = SystemState {
                    auto_mode: true,
                    ..Self::at_rest(prev)
                };
                let parked = self.apply_outputs(hw)
                    && self.write_or_shutdown(hw, |hw| hw.set_aux_relay(true));
                if !parked {
                    self.mission.aux_relay_on = false;
                }
                info!("UV cycle finished; parked with aux relay on");
                sink.emit(&AppEvent::UvCycleFinished);
                Self::emit_changes(&prev, &self.state, sink);
            }
            AppCommand::UpdateConfig(new_config) => {
                let checked = new_config
                    .validate()
                    .and_then(|()| AutoSchedule::new(&new_config.auto_window_hours));
                match checked {
                    Ok(schedule) => {
                        self.schedule = schedule;
                        self.config = new_config;
                        info!("Configuration updated at runtime");
                    }
                    Err(e) => {
                        warn!("Config update rejected: {e}");
                        sink.emit(&AppEvent::ConfigRejected(e));
                    }
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.state,
            mission: self.mission.mode,
            hour: self.last_inputs.hour,
            minute: self.last_inputs.minute,
            in_window: self
                .schedule
                .contains(self.last_inputs.hour, self.last_inputs.minute),
            stats: self.stats,
        }
    }

    /// Current control state.
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Current mission lifecycle state.
    pub fn mission(&self) -> RobotState {
        self.mission
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    /// The live configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn is_emergency(&self) -> bool {
        self.mission.is_emergency()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Same mode, relay off, motors stopped.
    fn at_rest(state: SystemState) -> SystemState {
        SystemState {
            relay_on: false,
            motors: MotorCommand::Stop,
            ..state
        }
    }

    /// Translate the control state into port calls.  Stops at the first
    /// failed write so nothing is re-energised after the shutdown.
    fn apply_outputs(&mut self, hw: &mut impl ActuatorPort) -> bool {
        let state = self.state;
        self.write_or_shutdown(hw, |hw| hw.set_relay(state.relay_on))
            && self.write_or_shutdown(hw, |hw| hw.set_motors(state.motors))
    }

    /// Perform one actuator write; on failure count it and kill all outputs.
    /// Returns `false` if the write failed.
    fn write_or_shutdown<H: ActuatorPort>(
        &mut self,
        hw: &mut H,
        write: impl FnOnce(&mut H) -> crate::error::Result<()>,
    ) -> bool {
        match write(hw) {
            Ok(()) => true,
            Err(e) => {
                error!("Actuator write failed: {e}; forcing all outputs off");
                self.stats.record_actuator_fault();
                hw.all_off();
                false
            }
        }
    }

    fn emit_changes(prev: &SystemState, next: &SystemState, sink: &mut impl EventSink) {
        if prev.auto_mode != next.auto_mode {
            info!("Mode: {:?} -> {:?}", prev.mode(), next.mode());
            sink.emit(&AppEvent::ModeChanged {
                from: prev.mode(),
                to: next.mode(),
            });
        }
        if prev.relay_on != next.relay_on {
            sink.emit(&AppEvent::RelayChanged(next.relay_on));
        }
        if prev.motors != next.motors {
            debug!("Motors: {:?} -> {:?}", prev.motors, next.motors);
            sink.emit(&AppEvent::MotorsChanged {
                from: prev.motors,
                to: next.motors,
            });
        }
    }
}
