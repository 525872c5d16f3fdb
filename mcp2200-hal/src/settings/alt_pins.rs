use super::bits::{self, Bitmap, mask};

/// Alternate functions of the GP pins (the `Alt_Pins` configuration byte).
///
/// Each field, when true, hands the corresponding GP pin over to a dedicated
/// function instead of general-purpose I/O.
///
/// | Position | Mask   | Field                             |
/// |----------|--------|-----------------------------------|
/// | 0        | `0x80` | [`suspend_pin`](Self::suspend_pin) |
/// | 1        | `0x40` | [`usbcfg_pin`](Self::usbcfg_pin)   |
/// | 2, 3     |        | reserved                          |
/// | 4        | `0x08` | [`rx_led`](Self::rx_led)           |
/// | 5        | `0x04` | [`tx_led`](Self::tx_led)           |
/// | 6, 7     |        | reserved                          |
///
/// Reserved bits are dropped when decoding and written as 0 when encoding, so
/// anything the device stored there is not preserved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AltPins {
    /// GP0 indicates the USB suspend state (SSPND).
    pub suspend_pin: bool,
    /// GP1 indicates that the device has been configured by the host (USBCFG).
    pub usbcfg_pin: bool,
    /// GP6 drives an LED on UART receive activity.
    pub rx_led: bool,
    /// GP7 drives an LED on UART transmit activity.
    pub tx_led: bool,
}

impl AltPins {
    /// Bit position of [`suspend_pin`](Self::suspend_pin).
    pub const SUSPEND_PIN: u8 = 0;
    /// Bit position of [`usbcfg_pin`](Self::usbcfg_pin).
    pub const USBCFG_PIN: u8 = 1;
    /// Bit position of [`rx_led`](Self::rx_led).
    pub const RX_LED: u8 = 4;
    /// Bit position of [`tx_led`](Self::tx_led).
    pub const TX_LED: u8 = 5;
}

impl Bitmap for AltPins {
    const DEFINED_BITS: u8 =
        mask(Self::SUSPEND_PIN) | mask(Self::USBCFG_PIN) | mask(Self::RX_LED) | mask(Self::TX_LED);

    fn unpack(byte: u8) -> Self {
        Self {
            suspend_pin: bits::read(byte, Self::SUSPEND_PIN),
            usbcfg_pin: bits::read(byte, Self::USBCFG_PIN),
            rx_led: bits::read(byte, Self::RX_LED),
            tx_led: bits::read(byte, Self::TX_LED),
        }
    }

    fn pack(&self) -> u8 {
        let mut byte = 0u8;
        bits::write(&mut byte, Self::SUSPEND_PIN, self.suspend_pin);
        bits::write(&mut byte, Self::USBCFG_PIN, self.usbcfg_pin);
        bits::write(&mut byte, Self::RX_LED, self.rx_led);
        bits::write(&mut byte, Self::TX_LED, self.tx_led);
        byte
    }
}

#[doc(hidden)]
impl From<u8> for AltPins {
    fn from(value: u8) -> Self {
        Self::unpack(value)
    }
}

#[doc(hidden)]
impl From<AltPins> for u8 {
    fn from(value: AltPins) -> Self {
        value.pack()
    }
}
