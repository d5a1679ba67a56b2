//! Application core — orchestration around the pure transition, zero I/O.
//!
//! This module wires the control-cycle transition, the mission lifecycle,
//! and runtime counters into a per-cycle service.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
