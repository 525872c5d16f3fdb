//! Helpers shared by the unit tests.

use std::rc::Rc;

use mcp2200_hal::FRAME_LEN;
use mcp2200_hal::frame::parse_response;
use mcp2200_hal::mock::FakeMcp2200;
use mcp2200_hal::settings::ConfigurationSnapshot;

/// Configuration bytes 4 to 9 of a new device: GP0-3 inputs, both LEDs,
/// toggling, 9600 baud.
pub(crate) const FACTORY: [u8; 6] = [0x0F, 0x0C, 0x00, 0xC0, 0x04, 0xE1];

/// A simulated device shared between a test and the drivers it opens.
pub(crate) type FakeDevice = Rc<FakeMcp2200>;

pub(crate) fn fake_device() -> FakeDevice {
    Rc::new(FakeMcp2200::new(FACTORY))
}

pub(crate) fn snapshot(bytes: [u8; 6]) -> ConfigurationSnapshot {
    let mut response = [0u8; FRAME_LEN];
    response[0] = 0x80;
    response[4..10].copy_from_slice(&bytes);
    parse_response(&response).unwrap()
}
