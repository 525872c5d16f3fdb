use clap::Parser;
use mcp2200_hal::{MCP2200, Transport};

use crate::util;

#[derive(Debug, Parser)]
#[command(flatten_help = true)]
pub(crate) enum EepromCommand {
    /// Read bytes from the user EEPROM.
    Read {
        /// Address of the first byte, decimal or 0x-prefixed hex.
        #[arg(value_parser = util::u8_from_str)]
        address: u8,
        /// Number of bytes to read.
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=256))]
        count: u16,
    },
    /// Write one byte to the user EEPROM.
    Write {
        /// Address, decimal or 0x-prefixed hex.
        #[arg(value_parser = util::u8_from_str)]
        address: u8,
        /// Value, decimal or 0x-prefixed hex.
        #[arg(value_parser = util::u8_from_str)]
        value: u8,
    },
}

pub(crate) fn action<T: Transport>(
    device: &MCP2200<T>,
    command: EepromCommand,
) -> Result<(), mcp2200_hal::Error> {
    match command {
        EepromCommand::Read { address, count } => {
            let end = (u16::from(address) + count).min(256);
            for address in u16::from(address)..end {
                // Addresses below 256 fit in a byte.
                let address = address as u8;
                println!("0x{address:02X}: 0x{:02X}", device.eeprom_read(address)?);
            }
        }
        EepromCommand::Write { address, value } => device.eeprom_write(address, value)?,
    }
    Ok(())
}
