//! Automatic-operation time windows.
//!
//! In automatic mode the robot only drives while the wall clock sits inside
//! one of a handful of one-hour cleaning windows.  Each window is identified
//! by its starting hour and spans `HH:00` through `HH:59`.
//!
//! ```text
//!  00      06      09 10        14 15          23
//!  ├───────┼───────█──┼─────────█──┼───────────┤
//!                  ▲            ▲
//!              morning      afternoon
//! ```
//!
//! Any hour outside `0..=23` or minute outside `0..=59` is treated as an
//! invalid reading and never authorises movement.

use heapless::Vec;

use crate::error::ConfigError;

/// Maximum number of daily windows a schedule can hold.
pub const MAX_WINDOWS: usize = 4;

/// Factory window start hours: 09:00–09:59 and 14:00–14:59.
pub const DEFAULT_WINDOW_HOURS: [u8; 2] = [9, 14];

/// True if `hour:minute` falls inside one of the factory windows.
///
/// Total over every `i32` pair: invalid times return `false`.
pub fn in_window(hour: i32, minute: i32) -> bool {
    hour_in(&DEFAULT_WINDOW_HOURS, hour, minute)
}

/// Shared validity + membership check.
fn hour_in(hours: &[u8], hour: i32, minute: i32) -> bool {
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return false;
    }
    hours.iter().any(|&h| i32::from(h) == hour)
}

/// A configurable set of daily one-hour windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSchedule {
    hours: Vec<u8, MAX_WINDOWS>,
}

impl AutoSchedule {
    /// Build a schedule from window start hours.
    ///
    /// Rejects hours above 23 and more than [`MAX_WINDOWS`] entries.
    /// An empty list is allowed: automatic mode then never moves.
    pub fn new(hours: &[u8]) -> Result<Self, ConfigError> {
        if hours.iter().any(|&h| h > 23) {
            return Err(ConfigError::ValidationFailed(
                "auto_window_hours entries must be 0-23",
            ));
        }
        let hours = Vec::from_slice(hours).map_err(|()| {
            ConfigError::ValidationFailed("auto_window_hours holds at most 4 entries")
        })?;
        Ok(Self { hours })
    }

    /// True if `hour:minute` is a valid time inside one of the windows.
    pub fn contains(&self, hour: i32, minute: i32) -> bool {
        hour_in(&self.hours, hour, minute)
    }

    /// Window start hours, in insertion order.
    pub fn hours(&self) -> &[u8] {
        &self.hours
    }
}

const _: () = assert!(DEFAULT_WINDOW_HOURS.len() <= MAX_WINDOWS);

/// The factory window list as a bounded vector.
pub fn default_window_hours() -> Vec<u8, MAX_WINDOWS> {
    // Fits by the assertion above, so the fallback is never taken.
    Vec::from_slice(&DEFAULT_WINDOW_HOURS).unwrap_or_default()
}

impl Default for AutoSchedule {
    fn default() -> Self {
        Self {
            hours: default_window_hours(),
        }
    }
}
