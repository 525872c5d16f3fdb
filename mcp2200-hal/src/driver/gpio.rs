use bit_field::BitField;
use log::debug;

use super::MCP2200;
use crate::Error;
use crate::frame::CommandFrame;
use crate::gpio::{GpioDirection, GpioValues, Pins};
use crate::transport::Transport;

/// # GPIO
impl<T: Transport> MCP2200<T> {
    /// Take the eight GP pin structs for individual GPIO operation.
    ///
    /// This can only be done once, and will return `None` afterwards.
    pub fn take_pins(&self) -> Option<Pins<'_, T>> {
        if self.pins_taken.get() {
            None
        } else {
            self.pins_taken.set(true);
            Some(Pins::new(self))
        }
    }

    /// Get GPIO pin directions and current logic levels.
    ///
    /// The logic level listed for input pins is the value read at that pin, and for
    /// output pins it is the currently driven output.
    pub fn gpio_read(&self) -> Result<GpioValues, Error> {
        let response = self.read_all()?;
        Ok(GpioValues {
            directions: response.configuration.io_bitmap,
            levels: response.io_port_values,
        })
    }

    /// Drive the output pins in `set` high and those in `clear` low.
    ///
    /// Bit `n` of each bitmap is GP`n`. Pins in neither bitmap keep their level,
    /// and bits for input pins have no effect.
    ///
    /// # Datasheet
    ///
    /// See the SET_CLEAR_OUTPUT command.
    pub fn gpio_write(&self, set: u8, clear: u8) -> Result<(), Error> {
        self.command(&CommandFrame::set_clear_output(set, clear))
    }

    /// Change the direction of a single GP pin.
    ///
    /// This reads the configuration, changes the pin's direction bit, and writes the
    /// configuration back with [`MCP2200::configure`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `pin` is not in `0..8`, without any command sent.
    pub fn gpio_set_direction(&self, pin: u8, direction: GpioDirection) -> Result<(), Error> {
        if pin >= 8 {
            return Err(Error::InvalidInput {
                field: "GP pin number",
                input: pin.to_string(),
            });
        }
        let mut snapshot = self.read_configuration()?;
        if GpioDirection::from(snapshot.io_bitmap.get_bit(pin.into())) == direction {
            return Ok(());
        }
        debug!("Setting GP{pin} direction to {direction:?}");
        snapshot.io_bitmap.set_bit(pin.into(), direction.into());
        self.configure(&snapshot)
    }
}
