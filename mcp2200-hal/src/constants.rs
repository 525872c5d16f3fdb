/// Microchip's USB vendor ID.
pub(crate) const MICROCHIP_VID: u16 = 0x04D8;
/// Default USB product ID of the MCP2200.
pub(crate) const MCP2200_PID: u16 = 0x00DF;
/// Length of every command and response report exchanged with the MCP2200.
pub(crate) const FRAME_LEN: usize = 16;
/// Frequency of the clock the baud rate divisor is applied to.
pub(crate) const UART_CLOCK_HZ: u32 = 12_000_000;
