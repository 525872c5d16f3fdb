//! Formatting of configuration values for display.

/// Render a bitmap as eight binary digits, most significant bit first.
///
/// This is the form accepted back by [`parse_bitmap`](crate::state::parse_bitmap).
///
/// ```rust
/// # use mcp2200_hal::common::format_bitmap;
/// assert_eq!(format_bitmap(0x3C), "00111100");
/// ```
pub fn format_bitmap(bitmap: u8) -> String {
    format!("{bitmap:08b}")
}

/// Render a USB vendor or product ID as four upper-case hex digits.
///
/// ```rust
/// # use mcp2200_hal::common::format_usb_id;
/// assert_eq!(format_usb_id(0x4D8), "0x04D8");
/// ```
pub fn format_usb_id(id: u16) -> String {
    format!("0x{id:04X}")
}
