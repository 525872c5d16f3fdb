use super::bits::{self, Bitmap, mask};

/// UART and LED options (the `Alt_Opts` configuration byte).
///
/// | Position | Mask   | Field                                                  |
/// |----------|--------|--------------------------------------------------------|
/// | 0        | `0x80` | [`rx_toggle`](Self::rx_toggle)                          |
/// | 1        | `0x40` | [`tx_toggle`](Self::tx_toggle)                          |
/// | 2        | `0x20` | [`led_extended_duration`](Self::led_extended_duration)  |
/// | 3..=5    |        | reserved                                               |
/// | 6        | `0x02` | [`uart_invert`](Self::uart_invert)                      |
/// | 7        | `0x01` | [`hw_flow_control`](Self::hw_flow_control)              |
///
/// Reserved bits are dropped when decoding and written as 0 when encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AltOpts {
    /// The receive LED toggles on activity instead of blinking.
    pub rx_toggle: bool,
    /// The transmit LED toggles on activity instead of blinking.
    pub tx_toggle: bool,
    /// Blinking LEDs stay lit for 200 ms instead of 100 ms.
    pub led_extended_duration: bool,
    /// UART signal polarity is inverted.
    pub uart_invert: bool,
    /// RTS/CTS hardware flow control is enabled.
    pub hw_flow_control: bool,
}

impl AltOpts {
    /// Bit position of [`rx_toggle`](Self::rx_toggle).
    pub const RX_TOGGLE: u8 = 0;
    /// Bit position of [`tx_toggle`](Self::tx_toggle).
    pub const TX_TOGGLE: u8 = 1;
    /// Bit position of [`led_extended_duration`](Self::led_extended_duration).
    pub const LED_EXTENDED_DURATION: u8 = 2;
    /// Bit position of [`uart_invert`](Self::uart_invert).
    pub const UART_INVERT: u8 = 6;
    /// Bit position of [`hw_flow_control`](Self::hw_flow_control).
    pub const HW_FLOW_CONTROL: u8 = 7;
}

impl Bitmap for AltOpts {
    const DEFINED_BITS: u8 = mask(Self::RX_TOGGLE)
        | mask(Self::TX_TOGGLE)
        | mask(Self::LED_EXTENDED_DURATION)
        | mask(Self::UART_INVERT)
        | mask(Self::HW_FLOW_CONTROL);

    fn unpack(byte: u8) -> Self {
        Self {
            rx_toggle: bits::read(byte, Self::RX_TOGGLE),
            tx_toggle: bits::read(byte, Self::TX_TOGGLE),
            led_extended_duration: bits::read(byte, Self::LED_EXTENDED_DURATION),
            uart_invert: bits::read(byte, Self::UART_INVERT),
            hw_flow_control: bits::read(byte, Self::HW_FLOW_CONTROL),
        }
    }

    fn pack(&self) -> u8 {
        let mut byte = 0u8;
        bits::write(&mut byte, Self::RX_TOGGLE, self.rx_toggle);
        bits::write(&mut byte, Self::TX_TOGGLE, self.tx_toggle);
        bits::write(&mut byte, Self::LED_EXTENDED_DURATION, self.led_extended_duration);
        bits::write(&mut byte, Self::UART_INVERT, self.uart_invert);
        bits::write(&mut byte, Self::HW_FLOW_CONTROL, self.hw_flow_control);
        byte
    }
}

#[doc(hidden)]
impl From<u8> for AltOpts {
    fn from(value: u8) -> Self {
        Self::unpack(value)
    }
}

#[doc(hidden)]
impl From<AltOpts> for u8 {
    fn from(value: AltOpts) -> Self {
        value.pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_control_and_invert_are_low_bits() {
        let opts = AltOpts::unpack(0b0000_0011);
        assert_eq!(
            opts,
            AltOpts {
                rx_toggle: false,
                tx_toggle: false,
                led_extended_duration: false,
                uart_invert: true,
                hw_flow_control: true,
            }
        );
    }

    #[test]
    fn rx_toggle_is_high_bit() {
        let opts = AltOpts::unpack(0b1000_0000);
        assert!(opts.rx_toggle);
        assert!(!opts.tx_toggle);
        assert!(!opts.led_extended_duration);
    }

    #[test]
    fn reserved_gap_is_dropped() {
        assert_eq!(AltOpts::DEFINED_BITS, 0b1110_0011);
        assert_eq!(AltOpts::unpack(0b0001_1100).pack(), 0);
    }

    #[test]
    fn every_byte_keeps_its_defined_bits() {
        for byte in 0..=u8::MAX {
            let packed = AltOpts::unpack(byte).pack();
            assert_eq!(packed & AltOpts::DEFINED_BITS, byte & AltOpts::DEFINED_BITS);
            assert_eq!(packed & !AltOpts::DEFINED_BITS, 0);
        }
    }
}
