//! Exchange of raw reports with the MCP2200.

use std::rc::Rc;

use hidapi::HidDevice;
use log::trace;

use crate::Error;
use crate::constants::FRAME_LEN;
use crate::frame::CommandFrame;

/// A channel that carries 16-byte reports to and from an MCP2200.
///
/// [`MCP2200`](crate::MCP2200) is generic over this trait so that the protocol
/// can be driven without a physical device. The implementation for
/// [`hidapi::HidDevice`] is the one used with real hardware.
///
/// Both methods block until the transfer completes. There is no timeout.
pub trait Transport {
    /// Write one command report.
    fn send(&self, frame: &CommandFrame) -> Result<(), Error>;

    /// Read one response report.
    fn receive(&self) -> Result<[u8; FRAME_LEN], Error>;
}

impl Transport for HidDevice {
    fn send(&self, frame: &CommandFrame) -> Result<(), Error> {
        let report = frame.report_bytes();
        trace!("Writing report: {report:02X?}");
        let written = self.write(&report)?;
        if written < report.len() {
            return Err(Error::IncompleteTransfer {
                expected: report.len(),
                actual: written,
            });
        }
        Ok(())
    }

    fn receive(&self) -> Result<[u8; FRAME_LEN], Error> {
        let mut buf = [0u8; FRAME_LEN];
        let read = self.read(&mut buf)?;
        if read != FRAME_LEN {
            return Err(Error::IncompleteTransfer {
                expected: FRAME_LEN,
                actual: read,
            });
        }
        Ok(buf)
    }
}

/// A transport shared with other owners, such as a test that inspects it.
impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn send(&self, frame: &CommandFrame) -> Result<(), Error> {
        (**self).send(frame)
    }

    fn receive(&self) -> Result<[u8; FRAME_LEN], Error> {
        (**self).receive()
    }
}
