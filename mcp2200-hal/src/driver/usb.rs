use hidapi::{HidApi, HidDevice};
use log::debug;

use super::MCP2200;
use crate::Error;
use crate::constants::{MCP2200_PID, MICROCHIP_VID};

/// # USB device functionality
impl MCP2200<HidDevice> {
    /// Connect to the first USB device found with the default vendor and product ID.
    ///
    /// The default VID is 0x04D8 and PID 0x00DF.
    ///
    /// # Errors
    ///
    /// An error will be returned if the USB device cannot be opened.
    pub fn connect() -> Result<Self, Error> {
        MCP2200::connect_with_vid_and_pid(MICROCHIP_VID, MCP2200_PID)
    }

    /// Connect to the first USB device found with the given vendor and product ID.
    ///
    /// Use this constructor if you have changed the USB VID or PID of your MCP2200.
    ///
    /// # Errors
    ///
    /// An error will be returned if the USB device cannot be opened.
    pub fn connect_with_vid_and_pid(vendor_id: u16, product_id: u16) -> Result<Self, Error> {
        debug!("Opening USB HID device {vendor_id:#06X}:{product_id:#06X}");
        let hidapi = HidApi::new()?;
        let device = hidapi.open(vendor_id, product_id)?;
        Ok(Self::with_transport(device))
    }

    /// Get the USB HID device information from the host's USB interface.
    ///
    /// This is a thin wrapper around [`HidDevice::get_device_info`].
    ///
    /// # Errors
    ///
    /// An error will be returned if the device information cannot be returned
    /// from the underlying USB interface.
    pub fn usb_device_info(&self) -> Result<hidapi::DeviceInfo, Error> {
        let info = self.inner.get_device_info()?;
        Ok(info)
    }

    /// USB manufacturer string descriptor.
    pub fn manufacturer(&self) -> Result<Option<String>, Error> {
        Ok(self.inner.get_manufacturer_string()?)
    }

    /// USB product string descriptor.
    pub fn product(&self) -> Result<Option<String>, Error> {
        Ok(self.inner.get_product_string()?)
    }

    /// USB serial number string descriptor.
    pub fn serial_number(&self) -> Result<Option<String>, Error> {
        Ok(self.inner.get_serial_number_string()?)
    }
}
