//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! whatever `log` backend the binary installs (UART, RTT, stderr).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as one line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | mission={:?} mode={:?} | relay={} motors={:?} | \
                     clock={:02}:{:02} window={} | cycles={} toggles={} cutoffs={} \
                     auto_fwd={} in_faults={} act_faults={}",
                    t.mission,
                    t.state.mode(),
                    if t.state.relay_on { "ON" } else { "OFF" },
                    t.state.motors,
                    t.hour,
                    t.minute,
                    t.in_window,
                    t.stats.cycles,
                    t.stats.mode_toggles,
                    t.stats.uv_cutoffs,
                    t.stats.auto_forward_cycles,
                    t.stats.input_faults,
                    t.stats.actuator_faults,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::RelayChanged(on) => {
                info!("RELAY | {}", if *on { "ON" } else { "OFF" });
            }
            AppEvent::MotorsChanged { from, to } => {
                info!("MOTORS | {:?} -> {:?}", from, to);
            }
            AppEvent::EmergencyLatched => {
                warn!("EMERGENCY | latched, all outputs off");
            }
            AppEvent::EmergencyCleared => {
                info!("EMERGENCY | cleared, manual mode");
            }
            AppEvent::UvCycleFinished => {
                info!("UV | cycle finished, aux relay on");
            }
            AppEvent::ConfigRejected(e) => {
                warn!("CONFIG | rejected: {}", e);
            }
            AppEvent::Started(state) => {
                info!(
                    "START | mode={:?} relay={} motors={:?}",
                    state.mode(),
                    state.relay_on,
                    state.motors
                );
            }
        }
    }
}
