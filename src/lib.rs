//! Lavabot control core.
//!
//! Decides, once per control cycle, whether the sanitation robot is in
//! automatic or manual mode, whether the UV relay is energised, and what
//! the drive motors do.  The decision itself is the pure
//! [`fsm::update`] function; everything around it (ports, service,
//! drivers, adapters) feeds it inputs and applies its outputs.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fsm;
pub mod schedule;

pub mod adapters;
pub mod drivers;

pub use fsm::context::{MotorCommand, OperatingMode, SystemInputs, SystemState};
pub use fsm::update;
pub use schedule::in_window;
