use crate::baud;
use crate::constants::FRAME_LEN;
use crate::frame::offsets;
use crate::settings::{AltOpts, AltPins, Bitmap};

/// The six configuration bytes of the MCP2200, decoded.
///
/// A snapshot is read once per device session, edited in place (usually through
/// [`ConfigurationState`]), and written back whole by [`MCP2200::configure`].
///
/// [`ConfigurationState`]: crate::state::ConfigurationState
/// [`MCP2200::configure`]: crate::MCP2200::configure
///
/// ## Datasheet
///
/// See the READ_ALL and CONFIGURE commands in the HID command description,
/// where these are bytes 4 to 9 of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationSnapshot {
    /// GPIO direction bitmap. Bit `n` (LSB first) is GP`n`; 1 is an input.
    pub io_bitmap: u8,
    /// Alternate pin functions.
    pub alt_pins: AltPins,
    /// Power-on output value of each GPIO pin configured as an output.
    pub io_default: u8,
    /// UART and LED options.
    pub alt_opts: AltOpts,
    /// UART clock divisor. See [`baud::to_divisor`].
    pub baud_divisor: u16,
}

impl ConfigurationSnapshot {
    /// Baud rate produced by [`baud_divisor`](Self::baud_divisor).
    pub fn baud_rate(&self) -> u32 {
        baud::from_divisor(self.baud_divisor)
    }

    /// Set the divisor for the given baud rate.
    ///
    /// # Errors
    ///
    /// [`Error::BaudRateOutOfRange`] if the rate has no 16-bit divisor, in which
    /// case the snapshot is unchanged.
    ///
    /// [`Error::BaudRateOutOfRange`]: crate::Error::BaudRateOutOfRange
    pub fn set_baud_rate(&mut self, rate: u32) -> Result<(), crate::Error> {
        self.baud_divisor = baud::to_divisor(rate)?;
        Ok(())
    }

    pub(crate) fn from_buffer(buf: &[u8; FRAME_LEN]) -> Self {
        Self {
            io_bitmap: buf[offsets::IO_BITMAP],
            alt_pins: AltPins::unpack(buf[offsets::ALT_PINS]),
            io_default: buf[offsets::IO_DEFAULT],
            alt_opts: AltOpts::unpack(buf[offsets::ALT_OPTS]),
            baud_divisor: baud::join_divisor(buf[offsets::BAUD_HIGH], buf[offsets::BAUD_LOW]),
        }
    }

    pub(crate) fn apply_to_buffer(&self, buf: &mut [u8; FRAME_LEN]) {
        let (high, low) = baud::split_divisor(self.baud_divisor);
        buf[offsets::IO_BITMAP] = self.io_bitmap;
        buf[offsets::ALT_PINS] = self.alt_pins.pack();
        buf[offsets::IO_DEFAULT] = self.io_default;
        buf[offsets::ALT_OPTS] = self.alt_opts.pack();
        buf[offsets::BAUD_HIGH] = high;
        buf[offsets::BAUD_LOW] = low;
    }
}

/// Everything returned by the READ_ALL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadAllResponse {
    /// Configuration stored in the device.
    pub configuration: ConfigurationSnapshot,
    /// Current logic level of each GPIO pin (bit `n` is GP`n`).
    pub io_port_values: u8,
}
