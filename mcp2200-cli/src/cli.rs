use std::path::PathBuf;

use crate::configure::ConfigureArgs;
use crate::eeprom::EepromCommand;
use crate::gpio::GpioCommand;
use crate::util;

use clap::Parser;
use mcp2200_hal::{DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};

/// CLI for the MCP2200 USB to UART converter
///
/// This reads and changes the configuration stored in a Microchip MCP2200:
/// the UART baud rate, polarity and flow control, the UART activity LEDs, the
/// USB status indicator pins, and the direction and power-on level of the GP pins.
///
/// Bitmaps are shown as eight binary digits with GP7 first. They can be given
/// back in that form, or as hexadecimal or binary with a 0x or 0b prefix.
///
/// The shell command starts an interactive session where changes are collected
/// and then written with `configure`.
///
/// Set RUST_LOG=debug to log each command sent to the device.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Device vendor ID in hexadecimal [default: 0x04D8]
    #[arg(short, long = "vid", value_parser = util::u16_from_hex)]
    vid: Option<u16>,
    /// Device product ID in hexadecimal [default: 0x00DF]
    #[arg(short, long = "pid", value_parser = util::u16_from_hex)]
    pid: Option<u16>,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    pub(crate) fn vendor_id(&self) -> u16 {
        self.vid.unwrap_or(DEFAULT_VENDOR_ID)
    }

    pub(crate) fn product_id(&self) -> u16 {
        self.pid.unwrap_or(DEFAULT_PRODUCT_ID)
    }
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read the configuration stored in the device.
    Read,
    /// Change the configuration stored in the device.
    Configure(ConfigureArgs),
    /// Read or drive the GP pins.
    #[command(subcommand)]
    Gpio(GpioCommand),
    /// Read or write the user EEPROM.
    #[command(subcommand)]
    Eeprom(EepromCommand),
    /// Show USB device information.
    Info,
    /// Save the device configuration to a JSON profile.
    Export {
        /// File to write.
        path: PathBuf,
    },
    /// Write a JSON profile to the device.
    Import {
        /// File to read.
        path: PathBuf,
    },
    /// Start an interactive configuration session.
    Shell,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn usb_ids_default_to_the_mcp2200() {
        let cli = Cli::try_parse_from(["mcp2200", "read"]).unwrap();
        assert_eq!(cli.vendor_id(), 0x04D8);
        assert_eq!(cli.product_id(), 0x00DF);

        let cli = Cli::try_parse_from(["mcp2200", "--vid", "0x1234", "-p", "BEEF", "info"]).unwrap();
        assert_eq!(cli.vendor_id(), 0x1234);
        assert_eq!(cli.product_id(), 0xBEEF);
    }
}
