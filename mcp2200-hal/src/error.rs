/// Wrapper for problems when configuring or communicating with the MCP2200.
///
/// The variants fall into two groups. Frame, range and input errors are local:
/// the offending frame or edit is rejected and the device is untouched. Transport
/// errors (see [`Error::is_transport`]) mean communication with the device itself
/// failed, and nothing sent in that exchange should be assumed to have taken effect.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A buffer handed to the frame parser was not exactly 16 bytes long.
    #[error("MCP2200 frames are {expected} bytes long, got {actual} bytes")]
    InvalidFrameLength {
        /// Required length of every MCP2200 frame.
        expected: usize,
        /// Length of the rejected buffer.
        actual: usize,
    },
    /// The baud rate cannot be expressed as a 16-bit clock divisor.
    ///
    /// This covers a rate of zero, rates above the 12 MHz clock, and rates so low
    /// that the divisor would not fit in 16 bits (below 184 baud).
    #[error("baud rate {0} cannot be set on the MCP2200")]
    BaudRateOutOfRange(u32),
    /// The baud rate is not one of the twelve rates in [`BAUD_RATES`].
    ///
    /// [`BAUD_RATES`]: crate::baud::BAUD_RATES
    #[error("baud rate {0} is not a standard MCP2200 rate")]
    BaudRateNotSupported(u32),
    /// User-supplied text could not be parsed for the named field.
    #[error("invalid value for {field}: {input:?}")]
    InvalidInput {
        /// Name of the configuration field being edited.
        field: &'static str,
        /// The rejected input, as given.
        input: String,
    },
    /// The command code echoed by the MCP2200 was not the command code written to it.
    #[error("MCP2200 echoed command code {received:#04X} in response to {sent:#04X}")]
    MismatchedCommandCodeEcho {
        /// Command code that was sent to the MCP2200.
        sent: u8,
        /// Command code echoed from the MCP2200.
        received: u8,
    },
    /// Fewer bytes than a full report were written to or read from the device.
    #[error("incomplete USB HID transfer: expected {expected} bytes, got {actual}")]
    IncompleteTransfer {
        /// Size of a full report.
        expected: usize,
        /// Number of bytes actually transferred.
        actual: usize,
    },
    /// A GPIO pin no longer has the direction it was configured with.
    ///
    /// The enclosed value is the GP pin number `0..=7`.
    #[error("GP{0} direction was changed outside of this pin handle")]
    PinDirectionChanged(u8),
    /// An error occurred in the underlying USB HID library.
    #[error(transparent)]
    HidApi(#[from] hidapi::HidError),
}

impl Error {
    /// Returns true if the error came from communicating with the device.
    ///
    /// Callers driving an interactive session should treat these as the device
    /// having been disconnected.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::MismatchedCommandCodeEcho { .. }
                | Self::IncompleteTransfer { .. }
                | Self::PinDirectionChanged(_)
                | Self::HidApi(_)
        )
    }
}
