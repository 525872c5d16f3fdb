pub(crate) fn u16_from_hex(value: &str) -> Result<u16, std::num::ParseIntError> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    u16::from_str_radix(s, 16)
}

/// Parse a byte given in decimal, or in hexadecimal with a `0x` prefix.
pub(crate) fn u8_from_str(value: &str) -> Result<u8, std::num::ParseIntError> {
    if value.to_ascii_lowercase().starts_with("0x") {
        u8::from_str_radix(&value[2..], 16)
    } else {
        value.parse()
    }
}

/// Parse a GPIO bitmap argument in any of the forms shown by the CLI.
pub(crate) fn bitmap(value: &str) -> Result<u8, String> {
    mcp2200_hal::state::parse_bitmap("bitmap", value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_ids() {
        assert_eq!(u16_from_hex("0x04D8"), Ok(0x04D8));
        assert_eq!(u16_from_hex("0XDF"), Ok(0xDF));
        assert_eq!(u16_from_hex("dd"), Ok(0xDD));
        assert!(u16_from_hex("0xG").is_err());
    }

    #[test]
    fn bytes() {
        assert_eq!(u8_from_str("0xFF"), Ok(255));
        assert_eq!(u8_from_str("17"), Ok(17));
        assert!(u8_from_str("256").is_err());
    }
}
