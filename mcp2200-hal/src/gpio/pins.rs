use super::{GpioDirection, LogicLevel};
use crate::transport::Transport;
use crate::{Error, MCP2200};

/// A GP pin that can be configured for GPIO input or output.
#[derive(Debug)]
pub struct GpPin<'a, T: Transport> {
    driver: &'a MCP2200<T>,
    number: u8,
}

impl<'a, T: Transport> GpPin<'a, T> {
    /// The GP pin number, `0..=7`.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Set up the GP pin as a GPIO digital input.
    ///
    /// The direction is stored in the device configuration. You can retrieve the
    /// pin (for reconfiguration as an output) by calling [`Input::destroy`].
    pub fn configure_as_digital_input(self) -> Result<Input<'a, T>, Error> {
        self.driver
            .gpio_set_direction(self.number, GpioDirection::Input)?;
        Ok(Input(self))
    }

    /// Set up the GP pin as a GPIO digital output.
    ///
    /// The direction is stored in the device configuration. You can retrieve the
    /// pin (for reconfiguration as an input) by calling [`Output::destroy`].
    pub fn configure_as_digital_output(self) -> Result<Output<'a, T>, Error> {
        self.driver
            .gpio_set_direction(self.number, GpioDirection::Output)?;
        Ok(Output(self))
    }

    /// Read the pin's current direction and level, checking the direction.
    fn checked_level(&self, expected: GpioDirection) -> Result<LogicLevel, Error> {
        let values = self.driver.gpio_read()?;
        if values.direction(self.number) != expected {
            return Err(Error::PinDirectionChanged(self.number));
        }
        Ok(values.level(self.number))
    }

    fn mask(&self) -> u8 {
        1 << self.number
    }
}

impl<'a, T: Transport> TryFrom<GpPin<'a, T>> for Input<'a, T> {
    type Error = Error;
    fn try_from(pin: GpPin<'a, T>) -> Result<Self, Self::Error> {
        pin.configure_as_digital_input()
    }
}

impl<'a, T: Transport> TryFrom<GpPin<'a, T>> for Output<'a, T> {
    type Error = Error;
    fn try_from(pin: GpPin<'a, T>) -> Result<Self, Self::Error> {
        pin.configure_as_digital_output()
    }
}

/// A GP pin in GPIO input mode.
#[derive(Debug)]
pub struct Input<'a, T: Transport>(GpPin<'a, T>);

impl<'a, T: Transport> Input<'a, T> {
    /// Get the input level of this pin.
    pub fn get_level(&self) -> Result<LogicLevel, Error> {
        self.0.checked_level(GpioDirection::Input)
    }

    /// Return the underlying pin object, so that it can be reconfigured.
    ///
    /// This method does not change any MCP2200 settings.
    pub fn destroy(self) -> GpPin<'a, T> {
        self.0
    }
}

impl embedded_hal::digital::Error for Error {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl<T: Transport> embedded_hal::digital::ErrorType for Input<'_, T> {
    type Error = Error;
}

impl<T: Transport> embedded_hal::digital::InputPin for Input<'_, T> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_low)
    }
}

/// A GP pin in GPIO output mode.
#[derive(Debug)]
pub struct Output<'a, T: Transport>(GpPin<'a, T>);

impl<'a, T: Transport> Output<'a, T> {
    /// Set the output level of this pin.
    pub fn set_level(&self, level: LogicLevel) -> Result<(), Error> {
        // Ensure the pin is still set as an output.
        self.0.checked_level(GpioDirection::Output)?;
        let mask = self.0.mask();
        match level {
            LogicLevel::High => self.0.driver.gpio_write(mask, 0),
            LogicLevel::Low => self.0.driver.gpio_write(0, mask),
        }
    }

    /// Get the currently driven output level of this pin.
    pub fn get_output_level(&self) -> Result<LogicLevel, Error> {
        self.0.checked_level(GpioDirection::Output)
    }

    /// Return the underlying pin object, so that it can be reconfigured.
    pub fn destroy(self) -> GpPin<'a, T> {
        self.0
    }
}

impl<T: Transport> embedded_hal::digital::ErrorType for Output<'_, T> {
    type Error = Error;
}

impl<T: Transport> embedded_hal::digital::OutputPin for Output<'_, T> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::High)
    }
}

impl<T: Transport> embedded_hal::digital::StatefulOutputPin for Output<'_, T> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.get_output_level().map(LogicLevel::is_high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.get_output_level().map(LogicLevel::is_low)
    }
}

/// The eight MCP2200 GP pins.
#[derive(Debug)]
pub struct Pins<'a, T: Transport> {
    /// Pin GP0
    pub gp0: GpPin<'a, T>,
    /// Pin GP1
    pub gp1: GpPin<'a, T>,
    /// Pin GP2
    pub gp2: GpPin<'a, T>,
    /// Pin GP3
    pub gp3: GpPin<'a, T>,
    /// Pin GP4
    pub gp4: GpPin<'a, T>,
    /// Pin GP5
    pub gp5: GpPin<'a, T>,
    /// Pin GP6
    pub gp6: GpPin<'a, T>,
    /// Pin GP7
    pub gp7: GpPin<'a, T>,
}

impl<'a, T: Transport> Pins<'a, T> {
    pub(crate) fn new(driver: &'a MCP2200<T>) -> Self {
        let pin = |number| GpPin { driver, number };
        Self {
            gp0: pin(0),
            gp1: pin(1),
            gp2: pin(2),
            gp3: pin(3),
            gp4: pin(4),
            gp5: pin(5),
            gp6: pin(6),
            gp7: pin(7),
        }
    }
}
