//! Building and parsing the 16-byte MCP2200 command and response reports.
//!
//! Frames are plain byte buffers. Nothing here talks to the device: see
//! [`Transport`](crate::Transport) for that.

use log::trace;

use crate::Error;
use crate::commands::McpCommand;
use crate::constants::FRAME_LEN;
use crate::settings::{ConfigurationSnapshot, ReadAllResponse};

/// Byte offsets within a frame.
pub(crate) mod offsets {
    pub(crate) const OPCODE: usize = 0;
    pub(crate) const EEPROM_ADDRESS: usize = 1;
    pub(crate) const EEPROM_VALUE: usize = 3;
    pub(crate) const IO_BITMAP: usize = 4;
    pub(crate) const ALT_PINS: usize = 5;
    pub(crate) const IO_DEFAULT: usize = 6;
    pub(crate) const ALT_OPTS: usize = 7;
    pub(crate) const BAUD_HIGH: usize = 8;
    pub(crate) const BAUD_LOW: usize = 9;
    pub(crate) const IO_PORT_VALUES: usize = 10;
    pub(crate) const SET_BITMAP: usize = 11;
    pub(crate) const CLEAR_BITMAP: usize = 12;
}

/// A 16-byte command report to be sent to the MCP2200.
///
/// Bytes not used by a command are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    command: McpCommand,
    bytes: [u8; FRAME_LEN],
}

impl CommandFrame {
    fn new(command: McpCommand) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[offsets::OPCODE] = command.opcode();
        Self { command, bytes }
    }

    /// Request the stored configuration and current GPIO levels.
    pub fn read_all() -> Self {
        Self::new(McpCommand::ReadAll)
    }

    /// Write the given configuration to the device.
    pub fn configure(snapshot: &ConfigurationSnapshot) -> Self {
        let mut frame = Self::new(McpCommand::Configure);
        snapshot.apply_to_buffer(&mut frame.bytes);
        frame
    }

    /// Drive the GPIO pins in `set` high and those in `clear` low.
    ///
    /// Bit `n` of each bitmap is GP`n`. Pins in neither bitmap are left as they are.
    pub fn set_clear_output(set: u8, clear: u8) -> Self {
        let mut frame = Self::new(McpCommand::SetClearOutput);
        frame.bytes[offsets::SET_BITMAP] = set;
        frame.bytes[offsets::CLEAR_BITMAP] = clear;
        frame
    }

    /// Read the EEPROM byte at `address`.
    pub fn read_eeprom(address: u8) -> Self {
        let mut frame = Self::new(McpCommand::ReadEeprom);
        frame.bytes[offsets::EEPROM_ADDRESS] = address;
        frame
    }

    /// Write `value` to the EEPROM byte at `address`.
    pub fn write_eeprom(address: u8, value: u8) -> Self {
        let mut frame = Self::new(McpCommand::WriteEeprom);
        frame.bytes[offsets::EEPROM_ADDRESS] = address;
        frame.bytes[offsets::EEPROM_VALUE] = value;
        frame
    }

    /// Opcode in byte 0.
    pub fn opcode(&self) -> u8 {
        self.bytes[offsets::OPCODE]
    }

    /// The raw 16 bytes of the frame.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Returns true if the device answers this command with a response report.
    pub fn expects_response(&self) -> bool {
        self.command.has_response()
    }

    /// The frame with the HID report number prepended, as written through `hidapi`.
    ///
    /// The MCP2200 does not use numbered reports, so the report number is 0.
    pub fn report_bytes(&self) -> [u8; FRAME_LEN + 1] {
        let mut out = [0u8; FRAME_LEN + 1];
        out[1..].copy_from_slice(&self.bytes);
        out
    }
}

fn as_frame(buf: &[u8]) -> Result<&[u8; FRAME_LEN], Error> {
    trace!("Response frame: {buf:02X?}");
    buf.try_into().map_err(|_| Error::InvalidFrameLength {
        expected: FRAME_LEN,
        actual: buf.len(),
    })
}

/// Decode the configuration bytes of a READ_ALL response.
///
/// Values are accepted as they are. Only the length is checked.
///
/// # Errors
///
/// [`Error::InvalidFrameLength`] if the buffer is not exactly 16 bytes long.
pub fn parse_response(buf: &[u8]) -> Result<ConfigurationSnapshot, Error> {
    as_frame(buf).map(ConfigurationSnapshot::from_buffer)
}

/// Decode a READ_ALL response, including the current GPIO pin levels.
///
/// # Errors
///
/// [`Error::InvalidFrameLength`] if the buffer is not exactly 16 bytes long.
pub fn parse_read_all(buf: &[u8]) -> Result<ReadAllResponse, Error> {
    let frame = as_frame(buf)?;
    Ok(ReadAllResponse {
        configuration: ConfigurationSnapshot::from_buffer(frame),
        io_port_values: frame[offsets::IO_PORT_VALUES],
    })
}

/// Decode a READ_EEPROM response into `(address, value)`.
pub(crate) fn parse_eeprom(buf: &[u8]) -> Result<(u8, u8), Error> {
    let frame = as_frame(buf)?;
    Ok((frame[offsets::EEPROM_ADDRESS], frame[offsets::EEPROM_VALUE]))
}
