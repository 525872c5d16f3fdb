//! Tests against a real MCP2200.
//!
//! These are ignored by default. Run them with `--ignored` and a single MCP2200
//! connected. They only write to the last byte of the user EEPROM and restore the
//! configuration they change.
use mcp2200_hal::{Error, MCP2200};

#[test]
#[ignore = "requires a connected MCP2200"]
fn hardware_read_configuration() -> Result<(), Error> {
    let device = MCP2200::connect()?;
    let snapshot = device.read_configuration()?;
    // Any divisor is valid, down to 183 baud for 0xFFFF.
    assert!(snapshot.baud_rate() >= 183);
    assert_eq!(device.read_configuration()?, snapshot);
    Ok(())
}

#[test]
#[ignore = "requires a connected MCP2200"]
fn hardware_configure_round_trip() -> Result<(), Error> {
    let device = MCP2200::connect()?;
    let original = device.read_configuration()?;
    let mut changed = original;
    changed.alt_opts.uart_invert = !original.alt_opts.uart_invert;
    device.configure(&changed)?;
    let reread = device.read_configuration()?;
    device.configure(&original)?;
    assert_eq!(reread, changed);
    Ok(())
}

#[test]
#[ignore = "requires a connected MCP2200"]
fn hardware_eeprom_round_trip() -> Result<(), Error> {
    let device = MCP2200::connect()?;
    let original = device.eeprom_read(0xFF)?;
    device.eeprom_write(0xFF, !original)?;
    let reread = device.eeprom_read(0xFF)?;
    device.eeprom_write(0xFF, original)?;
    assert_eq!(reread, !original);
    Ok(())
}
