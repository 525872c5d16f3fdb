use bit_field::BitField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin level setting.
pub enum LogicLevel {
    /// Logic high.
    High,
    /// Logic low.
    Low,
}

impl LogicLevel {
    /// Returns true if the level is high.
    pub fn is_high(self) -> bool {
        self == Self::High
    }

    /// Returns true if the level is low.
    pub fn is_low(self) -> bool {
        self == Self::Low
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl From<LogicLevel> for bool {
    fn from(value: LogicLevel) -> Self {
        match value {
            LogicLevel::High => true,
            LogicLevel::Low => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin direction.
pub enum GpioDirection {
    /// Digital input.
    Input,
    /// Digital output.
    Output,
}

impl GpioDirection {
    /// Returns true if the pin is an output.
    pub fn is_output(self) -> bool {
        self == Self::Output
    }
}

/// A set bit in the I/O direction bitmap is an input.
impl From<bool> for GpioDirection {
    fn from(value: bool) -> Self {
        if value { Self::Input } else { Self::Output }
    }
}

impl From<GpioDirection> for bool {
    fn from(value: GpioDirection) -> Self {
        match value {
            GpioDirection::Input => true,
            GpioDirection::Output => false,
        }
    }
}

/// Directions and levels of all eight GP pins.
///
/// ## Datasheet
///
/// The directions are the I/O bitmap (byte 4) and the levels are byte 10 of the
/// READ_ALL response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioValues {
    /// Bit `n` is set if GP`n` is an input.
    pub directions: u8,
    /// Bit `n` is set if GP`n` is at a high level.
    pub levels: u8,
}

impl GpioValues {
    /// Direction of GP`pin`.
    pub fn direction(&self, pin: u8) -> GpioDirection {
        self.directions.get_bit(pin.into()).into()
    }

    /// Level of GP`pin`.
    pub fn level(&self, pin: u8) -> LogicLevel {
        self.levels.get_bit(pin.into()).into()
    }
}
