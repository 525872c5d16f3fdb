#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod baud;
mod commands;
pub mod common;
mod constants;
mod driver;
mod error;
pub mod frame;
pub mod gpio;
#[doc(hidden)]
pub mod mock;
pub mod settings;
pub mod state;
mod transport;

pub use driver::MCP2200;
pub use error::Error;
pub use frame::CommandFrame;
pub use transport::Transport;

/// Microchip's USB vendor ID, the MCP2200 default.
pub const DEFAULT_VENDOR_ID: u16 = constants::MICROCHIP_VID;
/// The MCP2200's default USB product ID.
pub const DEFAULT_PRODUCT_ID: u16 = constants::MCP2200_PID;
/// Length in bytes of every MCP2200 command and response report.
pub const FRAME_LEN: usize = constants::FRAME_LEN;
