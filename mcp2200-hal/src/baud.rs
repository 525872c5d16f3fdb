//! Conversion between UART baud rates and the MCP2200 clock divisor.
//!
//! The MCP2200 derives its UART clock from a 12 MHz source divided by
//! `divisor + 1`, and stores the divisor as two bytes of its configuration.
//!
//! Most of the standard rates above 19200 baud do not divide 12 MHz evenly, so
//! the rate actually generated differs slightly from the nominal one (38400 baud
//! is really 38461 baud). [`from_divisor`] reports the nominal rate for the
//! divisors of the standard rates, so that every rate in [`BAUD_RATES`] survives
//! a round trip. Use [`actual_rate`] for the generated rate.

use crate::Error;
use crate::constants::UART_CLOCK_HZ;

/// The standard baud rates offered for the MCP2200, slowest first.
pub const BAUD_RATES: [u32; 12] = [
    300, 1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400, 460800, 921600,
];

/// Compute the clock divisor for a baud rate.
///
/// # Errors
///
/// [`Error::BaudRateOutOfRange`] if the rate is zero, faster than the 12 MHz clock,
/// or so slow that the divisor does not fit in 16 bits.
pub fn to_divisor(rate: u32) -> Result<u16, Error> {
    if rate == 0 || rate > UART_CLOCK_HZ {
        return Err(Error::BaudRateOutOfRange(rate));
    }
    // rate <= clock, so the quotient is at least 1.
    let divisor = UART_CLOCK_HZ / rate - 1;
    u16::try_from(divisor).map_err(|_| Error::BaudRateOutOfRange(rate))
}

/// Baud rate selected by a clock divisor.
///
/// If the divisor is the one [`to_divisor`] computes for a standard rate, that
/// rate is returned. Otherwise this is the same as [`actual_rate`].
pub fn from_divisor(divisor: u16) -> u32 {
    BAUD_RATES
        .into_iter()
        .find(|&rate| to_divisor(rate).is_ok_and(|d| d == divisor))
        .unwrap_or_else(|| actual_rate(divisor))
}

/// Baud rate generated by a clock divisor, truncated to a whole number.
///
/// This is the same calculation the MCP2200 firmware performs.
pub fn actual_rate(divisor: u16) -> u32 {
    UART_CLOCK_HZ / (u32::from(divisor) + 1)
}

/// Split a divisor into its `(high, low)` bytes.
///
/// The high byte holds bits 15..=8 and is sent at frame offset 8; the low byte
/// holds bits 7..=0 and is sent at offset 9.
pub fn split_divisor(divisor: u16) -> (u8, u8) {
    let [high, low] = divisor.to_be_bytes();
    (high, low)
}

/// Join the `(high, low)` divisor bytes read from frame offsets 8 and 9.
pub fn join_divisor(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Position of a baud rate in [`BAUD_RATES`].
///
/// # Errors
///
/// [`Error::BaudRateNotSupported`] if the rate is not one of the standard rates.
pub fn index_of(rate: u32) -> Result<usize, Error> {
    BAUD_RATES
        .iter()
        .position(|&r| r == rate)
        .ok_or(Error::BaudRateNotSupported(rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rates_round_trip() {
        for rate in BAUD_RATES {
            let divisor = to_divisor(rate).unwrap();
            assert_eq!(from_divisor(divisor), rate, "rate {rate}");
        }
    }

    #[test]
    fn divisor_for_9600() {
        let divisor = to_divisor(9600).unwrap();
        assert_eq!(divisor, 1249);
        let (high, low) = split_divisor(divisor);
        assert_eq!((high, low), (0x04, 0xE1));
        assert_eq!(join_divisor(high, low), 1249);
    }

    #[test]
    fn split_and_join_are_inverse() {
        for divisor in [0, 1, 0x00FF, 0x0100, 0x1234, 39_999, u16::MAX] {
            let (high, low) = split_divisor(divisor);
            assert_eq!(join_divisor(high, low), divisor);
        }
    }

    #[test]
    fn slowest_and_fastest_rates() {
        assert_eq!(to_divisor(300).unwrap(), 39_999);
        assert_eq!(to_divisor(12_000_000).unwrap(), 0);
        // 12_000_000 / 184 - 1 = 65_216
        assert_eq!(to_divisor(184).unwrap(), 65_216);
        assert!(matches!(to_divisor(183), Err(Error::BaudRateOutOfRange(183))));
    }

    #[test]
    fn unrepresentable_rates() {
        assert!(matches!(to_divisor(0), Err(Error::BaudRateOutOfRange(0))));
        assert!(matches!(
            to_divisor(12_000_001),
            Err(Error::BaudRateOutOfRange(12_000_001))
        ));
        assert!(matches!(to_divisor(1), Err(Error::BaudRateOutOfRange(1))));
    }

    #[test]
    fn standard_rates_above_19200_are_approximate() {
        assert_eq!(to_divisor(38_400).unwrap(), 311);
        assert_eq!(actual_rate(311), 38_461);
        assert_eq!(from_divisor(311), 38_400);
        assert_eq!(actual_rate(to_divisor(921_600).unwrap()), 923_076);
    }

    #[test]
    fn non_standard_rates_truncate() {
        assert_eq!(to_divisor(10_000).unwrap(), 1199);
        assert_eq!(from_divisor(1199), 10_000);
        // 12_000_000 / 7000 = 1714.28
        assert_eq!(to_divisor(7_000).unwrap(), 1713);
        assert_eq!(from_divisor(1713), 7_001);
        assert_eq!(to_divisor(700_000).unwrap(), 16);
        assert_eq!(from_divisor(16), 705_882);
    }

    #[test]
    fn index_of_standard_rates() {
        assert_eq!(index_of(300).unwrap(), 0);
        assert_eq!(index_of(9600).unwrap(), 4);
        assert_eq!(index_of(921_600).unwrap(), 11);
    }

    #[test]
    fn index_of_unknown_rate_is_an_error() {
        assert!(matches!(
            index_of(999_999),
            Err(Error::BaudRateNotSupported(999_999))
        ));
    }
}
