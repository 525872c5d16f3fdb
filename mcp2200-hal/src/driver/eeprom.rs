use log::warn;

use super::MCP2200;
use crate::Error;
use crate::frame::{self, CommandFrame};
use crate::transport::Transport;

/// # User EEPROM
///
/// The MCP2200 has 256 bytes of EEPROM for application use, separate from the
/// configuration.
impl<T: Transport> MCP2200<T> {
    /// Read the EEPROM byte at `address`.
    ///
    /// # Datasheet
    ///
    /// See the READ_EEPROM command.
    pub fn eeprom_read(&self, address: u8) -> Result<u8, Error> {
        let response = self.query(&CommandFrame::read_eeprom(address))?;
        let (echoed, value) = frame::parse_eeprom(&response)?;
        if echoed != address {
            warn!("EEPROM read of {address:#04X} answered for {echoed:#04X}");
        }
        Ok(value)
    }

    /// Write `value` to the EEPROM byte at `address`.
    ///
    /// # Datasheet
    ///
    /// See the WRITE_EEPROM command.
    pub fn eeprom_write(&self, address: u8, value: u8) -> Result<(), Error> {
        self.command(&CommandFrame::write_eeprom(address, value))
    }
}
