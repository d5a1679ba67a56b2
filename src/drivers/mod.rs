//! Actuator drivers and input conditioning over `embedded-hal` pins.

pub mod button;
pub mod motors;
pub mod relay;
