//! System configuration parameters
//!
//! All tunable parameters for the Lavabot control loop.  Values arrive as
//! JSON from provisioning or as a postcard blob from the host harness, and
//! are validated before use.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::schedule::{AutoSchedule, MAX_WINDOWS, default_window_hours};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Schedule ---
    /// Start hours of the one-hour automatic windows (0-23)
    pub auto_window_hours: Vec<u8, MAX_WINDOWS>,
    /// Power on in automatic mode (otherwise manual)
    pub start_in_auto_mode: bool,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Mode button debounce window (milliseconds)
    pub button_debounce_ms: u32,
    /// Telemetry report interval (control cycles)
    pub telemetry_interval_cycles: u32,

    // --- Outputs ---
    /// UV relay board energises on a low level
    pub relay_active_low: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Schedule
            auto_window_hours: default_window_hours(),
            start_in_auto_mode: true,

            // Timing
            control_loop_interval_ms: 100, // 10 Hz
            button_debounce_ms: 50,
            telemetry_interval_cycles: 600, // 1/min at 10 Hz

            // Outputs
            relay_active_low: false,
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.auto_window_hours.iter().any(|&h| h > 23) {
            return Err(ConfigError::ValidationFailed(
                "auto_window_hours entries must be 0-23",
            ));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be > 0",
            ));
        }
        if self.button_debounce_ms > 1000 {
            return Err(ConfigError::ValidationFailed(
                "button_debounce_ms must be <= 1000",
            ));
        }
        if self.telemetry_interval_cycles == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_cycles must be > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Config JSON rejected: {e}");
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Encode to a compact postcard blob.
    pub fn to_bytes(&self) -> Result<std::vec::Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Malformed.into())
    }

    /// Decode and validate a postcard blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// The automatic schedule these settings describe.
    pub fn schedule(&self) -> Result<AutoSchedule> {
        Ok(AutoSchedule::new(&self.auto_window_hours)?)
    }
}
