/// MCP2200 HID commands.
///
/// Every command is a single 16-byte report whose first byte is the opcode.
/// Only READ_ALL and READ_EEPROM produce a response report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum McpCommand {
    /// Change the GPIO pin directions, alternate functions, UART options and
    /// baud rate. The settings are stored in the device's non-volatile memory.
    Configure,
    /// Drive GPIO output pins high (set) or low (clear).
    SetClearOutput,
    /// Read one byte of the user EEPROM.
    ReadEeprom,
    /// Write one byte of the user EEPROM.
    WriteEeprom,
    /// Read the stored configuration and the current GPIO pin levels.
    ReadAll,
}

impl McpCommand {
    /// Opcode written to byte 0 of the outgoing report.
    pub(crate) fn opcode(&self) -> u8 {
        match self {
            McpCommand::Configure => 0x10,
            McpCommand::SetClearOutput => 0x08,
            McpCommand::ReadEeprom => 0x20,
            McpCommand::WriteEeprom => 0x40,
            McpCommand::ReadAll => 0x80,
        }
    }

    /// Returns true if the device answers the command with a report.
    pub(crate) fn has_response(&self) -> bool {
        matches!(self, Self::ReadAll | Self::ReadEeprom)
    }
}
