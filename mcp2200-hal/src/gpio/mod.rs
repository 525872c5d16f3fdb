//! Configuration of and interaction with the GP pins.
//!
//! The MCP2200 has eight GP pins, GP0 to GP7. A pin is general-purpose I/O
//! unless its alternate function in [`AltPins`] is enabled.
//!
//! [`AltPins`]: crate::settings::AltPins

mod common;
mod pins;

pub use common::{GpioDirection, GpioValues, LogicLevel};
pub use pins::{GpPin, Input, Output, Pins};
