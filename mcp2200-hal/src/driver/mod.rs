use std::cell::Cell;

use hidapi::HidDevice;
use log::debug;

use crate::constants::FRAME_LEN;
use crate::error::Error;
use crate::frame::{self, CommandFrame};
use crate::settings::{ConfigurationSnapshot, ReadAllResponse};
use crate::transport::Transport;

mod eeprom;
mod gpio;
mod usb;

/// Driver for the MCP2200.
///
/// # Quick start
///
/// Create the driver struct with default values by calling [`MCP2200::connect`], or
/// [`MCP2200::connect_with_vid_and_pid`] if you have changed either of the USB vendor
/// ID (VID) or product ID (PID).
///
/// Read the stored configuration with [`MCP2200::read_configuration`], change it
/// (directly or through [`ConfigurationState`]) and write it back with
/// [`MCP2200::configure`].
///
/// [`ConfigurationState`]: crate::state::ConfigurationState
///
/// For GPIO digital input and output, use the [`MCP2200::take_pins`] method, and
/// convert the [`GpPin`] objects into [`Input`] or [`Output`] types, which implement
/// the appropriate traits from [`embedded_hal::digital`].
///
/// [`GpPin`]: crate::gpio::GpPin
/// [`Input`]: crate::gpio::Input
/// [`Output`]: crate::gpio::Output
///
/// # Protocol
///
/// Every command is one 16-byte report. Commands are strictly sequential: each
/// write is followed by a blocking read of its response (if it has one) before the
/// method returns, so there is never more than one command in flight. Nothing is
/// retried.
#[derive(Debug)]
pub struct MCP2200<T: Transport = HidDevice> {
    /// Channel to the device.
    ///
    /// The C hidapi library is not thread safe and the `hidapi` types are
    /// appropriately `!Sync`.
    inner: T,
    /// Marker for whether the pin structs have been taken from the driver.
    ///
    /// See [`Self::take_pins`] for the only place it is used.
    pins_taken: Cell<bool>,
}

impl<T: Transport> MCP2200<T> {
    /// Drive an MCP2200 over the given transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            inner: transport,
            pins_taken: Cell::new(false),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.inner
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Report exchange with the MCP2200
    ////////////////////////////////////////////////////////////////////////////////

    /// Write a command that has no response.
    fn command(&self, frame: &CommandFrame) -> Result<(), Error> {
        debug_assert!(!frame.expects_response());
        debug!("Sending command {:#04X}", frame.opcode());
        self.inner.send(frame)
    }

    /// Write a command and read its response.
    fn query(&self, frame: &CommandFrame) -> Result<[u8; FRAME_LEN], Error> {
        debug_assert!(frame.expects_response());
        debug!("Sending query {:#04X}", frame.opcode());
        self.inner.send(frame)?;
        let response = self.inner.receive()?;

        let received = response[0];
        if received != frame.opcode() {
            return Err(Error::MismatchedCommandCodeEcho {
                sent: frame.opcode(),
                received,
            });
        }
        Ok(response)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Configuration
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the stored configuration and the current GPIO pin levels.
    ///
    /// # Datasheet
    ///
    /// See the READ_ALL command.
    pub fn read_all(&self) -> Result<ReadAllResponse, Error> {
        let response = self.query(&CommandFrame::read_all())?;
        frame::parse_read_all(&response)
    }

    /// Read the stored configuration.
    pub fn read_configuration(&self) -> Result<ConfigurationSnapshot, Error> {
        self.read_all().map(|response| response.configuration)
    }

    /// Write a new configuration to the device.
    ///
    /// The whole configuration is written at once, so start from a snapshot read
    /// from the device to leave other settings unchanged. The settings are stored in
    /// the device's non-volatile memory.
    ///
    /// If this returns an error, the configuration must not be assumed to have
    /// been written.
    ///
    /// # Datasheet
    ///
    /// See the CONFIGURE command.
    pub fn configure(&self, snapshot: &ConfigurationSnapshot) -> Result<(), Error> {
        debug!(
            "Configuring: io_bitmap={:08b} io_default={:08b} baud={}",
            snapshot.io_bitmap,
            snapshot.io_default,
            snapshot.baud_rate()
        );
        self.command(&CommandFrame::configure(snapshot))
    }
}
