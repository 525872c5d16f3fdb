use hidapi::HidDevice;
use mcp2200_hal::MCP2200;
use mcp2200_hal::common::format_usb_id;

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct UsbInfo {
    pub(crate) manufacturer: Option<String>,
    pub(crate) product: Option<String>,
    pub(crate) serial_number: Option<String>,
    pub(crate) vendor_id: String,
    pub(crate) product_id: String,
    pub(crate) release: String,
    pub(crate) path: String,
}

impl UsbInfo {
    pub(crate) fn read(device: &MCP2200<HidDevice>) -> Result<Self, mcp2200_hal::Error> {
        let info = device.usb_device_info()?;
        Ok(Self {
            manufacturer: device.manufacturer()?,
            product: device.product()?,
            serial_number: device.serial_number()?,
            vendor_id: format_usb_id(info.vendor_id()),
            product_id: format_usb_id(info.product_id()),
            release: format!("{:x}.{:02x}", info.release_number() >> 8, info.release_number() & 0xFF),
            path: info.path().to_string_lossy().to_string(),
        })
    }
}

pub(crate) fn print_info(device: &MCP2200<HidDevice>) -> Result<(), mcp2200_hal::Error> {
    println!("{:#?}", UsbInfo::read(device)?);
    Ok(())
}
