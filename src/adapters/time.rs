//! Host clock adapter.
//!
//! Provides monotonic uptime from `std::time::Instant` and a wall clock
//! that stays unset until [`HostClock::set_time_of_day`] is called, the
//! way an RTC reads before its first sync.

use std::time::Instant;

use crate::app::ports::ClockPort;

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Clock adapter for host-side runs and simulations.
pub struct HostClock {
    start: Instant,
    /// Minutes past midnight at `synced_at`.
    wall_minutes: Option<u64>,
    synced_at: Instant,
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            wall_minutes: None,
            synced_at: now,
        }
    }

    /// Set the wall clock.  Out-of-range values are rejected.
    pub fn set_time_of_day(&mut self, hour: u8, minute: u8) -> bool {
        if hour > 23 || minute > 59 {
            return false;
        }
        self.wall_minutes = Some(u64::from(hour) * 60 + u64::from(minute));
        self.synced_at = Instant::now();
        true
    }
}

impl ClockPort for HostClock {
    fn uptime_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn time_of_day(&self) -> Option<(u8, u8)> {
        let base = self.wall_minutes?;
        let elapsed = self.synced_at.elapsed().as_secs() / 60;
        let now = (base + elapsed) % MINUTES_PER_DAY;
        Some(((now / 60) as u8, (now % 60) as u8))
    }
}
