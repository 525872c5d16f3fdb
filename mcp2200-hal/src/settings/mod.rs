//! Decoded MCP2200 configuration.
//!
//! The device keeps six configuration bytes in its non-volatile memory: the GPIO
//! direction and power-on output bitmaps, two bitmaps of alternate pin functions
//! and UART/LED options, and the two bytes of the baud rate divisor. They are read
//! with [`MCP2200::read_configuration`] and written with [`MCP2200::configure`].
//!
//! [`MCP2200::read_configuration`]: crate::MCP2200::read_configuration
//! [`MCP2200::configure`]: crate::MCP2200::configure

mod alt_opts;
mod alt_pins;
pub(crate) mod bits;
mod configuration;

pub use alt_opts::AltOpts;
pub use alt_pins::AltPins;
pub use bits::Bitmap;
pub use configuration::{ConfigurationSnapshot, ReadAllResponse};
