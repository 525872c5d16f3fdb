//! Bit positions as numbered in the MCP2200 datasheet.
//!
//! The configuration bitmaps are documented most-significant bit first, so
//! position 0 is tested against mask `0x80` and position 7 against mask `0x01`.
//! The layout types in this module's siblings declare their fields with these
//! positions, and both packing and unpacking go through the helpers here.

use bit_field::BitField;

/// A byte whose bits independently encode unrelated boolean settings.
pub trait Bitmap: Sized {
    /// Mask of the bits with a defined meaning. All other bits are reserved.
    const DEFINED_BITS: u8;

    /// Decode the named fields from a raw byte. Reserved bits are ignored.
    fn unpack(byte: u8) -> Self;

    /// Encode the named fields into a byte. Reserved bits are always 0.
    fn pack(&self) -> u8;
}

/// Mask of the bit at the given MSB-first position.
pub(crate) const fn mask(position: u8) -> u8 {
    0x80 >> position
}

/// Read the bit at the given MSB-first position.
pub(crate) fn read(byte: u8, position: u8) -> bool {
    byte.get_bit(lsb_index(position))
}

/// Set or clear the bit at the given MSB-first position.
pub(crate) fn write(byte: &mut u8, position: u8, value: bool) {
    byte.set_bit(lsb_index(position), value);
}

fn lsb_index(position: u8) -> usize {
    debug_assert!(position <= 7, "Bit position {position} out of range.");
    usize::from(7 - position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_zero_is_most_significant() {
        assert_eq!(mask(0), 0x80);
        assert_eq!(mask(7), 0x01);
        assert!(read(0x80, 0));
        assert!(!read(0x80, 7));
        assert!(read(0x01, 7));
    }

    #[test]
    fn read_matches_shift_and_mask() {
        for byte in 0..=u8::MAX {
            for position in 0..8 {
                let expected = (byte >> (7 - position)) & 1 == 1;
                assert_eq!(read(byte, position), expected);
            }
        }
    }

    #[test]
    fn write_touches_only_its_position() {
        let mut byte = 0u8;
        write(&mut byte, 2, true);
        assert_eq!(byte, 0b0010_0000);
        write(&mut byte, 7, true);
        assert_eq!(byte, 0b0010_0001);
        write(&mut byte, 2, false);
        assert_eq!(byte, 0b0000_0001);
    }
}
