//! An in-memory stand-in for the MCP2200, speaking its HID report protocol.
//!
//! Used by the tests of this crate and of the CLI. Not part of the public API.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::{CommandFrame, Error, FRAME_LEN, Transport};

/// Simulated device state. Every field can be inspected or changed by a test.
#[derive(Debug)]
pub struct FakeMcp2200 {
    /// Bytes 4..=9 of the READ_ALL response.
    pub configuration: Cell<[u8; 6]>,
    /// Byte 10 of the READ_ALL response.
    pub port_values: Cell<u8>,
    /// User EEPROM, erased to 0xFF.
    pub eeprom: RefCell<[u8; 256]>,
    /// Every frame accepted, oldest first.
    pub sent: RefCell<Vec<[u8; FRAME_LEN]>>,
    /// While false, every send fails with a transport error.
    pub connected: Cell<bool>,
    /// When set, READ_ALL responses echo this opcode instead of 0x80.
    pub bad_echo: Cell<Option<u8>>,
    responses: RefCell<VecDeque<[u8; FRAME_LEN]>>,
}

impl FakeMcp2200 {
    /// A connected device holding the given configuration bytes.
    pub fn new(configuration: [u8; 6]) -> Self {
        Self {
            configuration: Cell::new(configuration),
            port_values: Cell::new(0),
            eeprom: RefCell::new([0xFF; 256]),
            sent: RefCell::new(Vec::new()),
            connected: Cell::new(true),
            bad_echo: Cell::new(None),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    /// The most recently accepted frame.
    pub fn last_sent(&self) -> Option<[u8; FRAME_LEN]> {
        self.sent.borrow().last().copied()
    }

    /// Number of CONFIGURE frames accepted.
    pub fn configure_count(&self) -> usize {
        self.sent.borrow().iter().filter(|frame| frame[0] == 0x10).count()
    }

    fn respond(&self, response: [u8; FRAME_LEN]) {
        self.responses.borrow_mut().push_back(response);
    }
}

impl Transport for FakeMcp2200 {
    fn send(&self, frame: &CommandFrame) -> Result<(), Error> {
        if !self.connected.get() {
            return Err(Error::IncompleteTransfer {
                expected: FRAME_LEN + 1,
                actual: 0,
            });
        }
        let bytes = *frame.as_bytes();
        self.sent.borrow_mut().push(bytes);
        match bytes[0] {
            0x10 => {
                let mut configuration = [0u8; 6];
                configuration.copy_from_slice(&bytes[4..10]);
                self.configuration.set(configuration);
            }
            0x08 => {
                let outputs = !self.configuration.get()[0];
                let port = self.port_values.get();
                let port = (port | (bytes[11] & outputs)) & !(bytes[12] & outputs);
                self.port_values.set(port);
            }
            0x20 => {
                let mut response = [0u8; FRAME_LEN];
                response[0] = 0x20;
                response[1] = bytes[1];
                response[3] = self.eeprom.borrow()[usize::from(bytes[1])];
                self.respond(response);
            }
            0x40 => self.eeprom.borrow_mut()[usize::from(bytes[1])] = bytes[3],
            0x80 => {
                let mut response = [0u8; FRAME_LEN];
                response[0] = self.bad_echo.get().unwrap_or(0x80);
                response[4..10].copy_from_slice(&self.configuration.get());
                response[10] = self.port_values.get();
                self.respond(response);
            }
            _ => {}
        }
        Ok(())
    }

    fn receive(&self) -> Result<[u8; FRAME_LEN], Error> {
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or(Error::IncompleteTransfer {
                expected: FRAME_LEN,
                actual: 0,
            })
    }
}
