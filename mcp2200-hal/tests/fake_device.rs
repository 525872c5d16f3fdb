//! Drive the MCP2200 driver against an in-memory device.
use mcp2200_hal::gpio::{GpioDirection, LogicLevel};
use mcp2200_hal::mock::FakeMcp2200;
use mcp2200_hal::state::{BlinkDuration, ConfigurationState, Edit, LedFunction};
use mcp2200_hal::{Error, MCP2200};

use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};

/// GP0-3 inputs, UART LEDs on, LEDs toggling, 9600 baud.
const FACTORY: [u8; 6] = [0x0F, 0x0C, 0x00, 0xC0, 0x04, 0xE1];

fn device() -> MCP2200<FakeMcp2200> {
    MCP2200::with_transport(FakeMcp2200::new(FACTORY))
}

#[test]
fn read_configuration_decodes_all_fields() -> Result<(), Error> {
    let device = device();
    let snapshot = device.read_configuration()?;
    assert_eq!(snapshot.io_bitmap, 0x0F);
    assert!(snapshot.alt_pins.rx_led);
    assert!(snapshot.alt_pins.tx_led);
    assert!(!snapshot.alt_pins.suspend_pin);
    assert_eq!(snapshot.io_default, 0x00);
    assert!(snapshot.alt_opts.rx_toggle && snapshot.alt_opts.tx_toggle);
    assert_eq!(snapshot.baud_rate(), 9600);

    let request = device.transport().last_sent().unwrap();
    assert_eq!(request, {
        let mut expected = [0u8; 16];
        expected[0] = 0x80;
        expected
    });
    Ok(())
}

#[test]
fn edited_configuration_is_written_whole() -> Result<(), Error> {
    let device = device();
    let mut state = ConfigurationState::new(device.read_configuration()?);
    assert_eq!(state.led_function(), LedFunction::Toggle);

    state.apply_edits([
        Edit::BaudRate("57600"),
        Edit::LedFunction(LedFunction::Blink(BlinkDuration::Ms200)),
        Edit::HardwareFlowControl(true),
        Edit::IoDefault("0b1010_0000"),
    ])?;
    device.configure(state.snapshot())?;
    state.mark_applied();

    let sent = device.transport().last_sent().unwrap();
    // 12_000_000 / 57600 - 1 = 207
    assert_eq!(sent, [0x10, 0, 0, 0, 0x0F, 0x0C, 0xA0, 0x21, 0x00, 0xCF, 0, 0, 0, 0, 0, 0]);

    let reread = ConfigurationState::new(device.read_configuration()?);
    assert_eq!(reread.snapshot(), state.snapshot());
    assert_eq!(reread.snapshot().baud_rate(), 57_600);
    assert_eq!(reread.led_function(), LedFunction::Blink(BlinkDuration::Ms200));
    Ok(())
}

#[test]
fn mismatched_echo_is_reported() {
    let device = device();
    device.transport().bad_echo.set(Some(0x20));
    let result = device.read_all();
    assert!(matches!(
        result,
        Err(Error::MismatchedCommandCodeEcho {
            sent: 0x80,
            received: 0x20
        })
    ));
}

#[test]
fn disconnected_device_is_a_transport_error() {
    let device = device();
    device.transport().connected.set(false);
    let error = device.read_configuration().unwrap_err();
    assert!(error.is_transport());
    assert!(device.transport().sent.borrow().is_empty());
}

#[test]
fn eeprom_read_and_write() -> Result<(), Error> {
    let device = device();
    assert_eq!(device.eeprom_read(0x10)?, 0xFF);
    device.eeprom_write(0x10, 0x42)?;
    assert_eq!(device.transport().last_sent().unwrap()[..4], [0x40, 0x10, 0x00, 0x42]);
    assert_eq!(device.eeprom_read(0x10)?, 0x42);
    assert_eq!(device.eeprom_read(0x11)?, 0xFF);
    Ok(())
}

#[test]
fn gpio_write_sets_and_clears_outputs() -> Result<(), Error> {
    let device = device();
    device.gpio_write(0b1111_0001, 0)?;
    let values = device.gpio_read()?;
    // GP0 is an input, so only GP4-7 go high.
    assert_eq!(values.levels, 0b1111_0000);
    assert_eq!(values.direction(0), GpioDirection::Input);
    assert_eq!(values.direction(7), GpioDirection::Output);
    assert!(values.direction(7).is_output());
    assert!(!values.direction(0).is_output());

    device.gpio_write(0, 0b0101_0000)?;
    assert_eq!(device.gpio_read()?.levels, 0b1010_0000);
    assert_eq!(device.gpio_read()?.level(7), LogicLevel::High);
    Ok(())
}

#[test]
fn pins_can_only_be_taken_once() {
    let device = device();
    assert!(device.take_pins().is_some());
    assert!(device.take_pins().is_none());
}

#[test]
fn embedded_hal_pins() -> Result<(), Error> {
    let device = device();
    let pins = device.take_pins().expect("pins available");
    assert_eq!(pins.gp0.number(), 0);
    assert_eq!(pins.gp5.number(), 5);

    let mut output = pins.gp0.configure_as_digital_output()?;
    assert_eq!(device.read_configuration()?.io_bitmap, 0x0E);
    output.set_high()?;
    assert!(output.is_set_high()?);
    output.set_low()?;
    assert!(output.is_set_low()?);

    let mut input = pins.gp5.configure_as_digital_input()?;
    assert_eq!(device.read_configuration()?.io_bitmap, 0x2E);
    device.transport().port_values.set(0b0010_0000);
    assert!(input.is_high()?);

    // Changing the direction behind the pin's back is detected.
    device.gpio_set_direction(5, GpioDirection::Output)?;
    assert!(matches!(input.get_level(), Err(Error::PinDirectionChanged(5))));
    Ok(())
}

#[test]
fn unchanged_direction_writes_nothing() -> Result<(), Error> {
    let device = device();
    device.gpio_set_direction(0, GpioDirection::Input)?;
    let sent = device.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][0], 0x80);
    Ok(())
}

#[test]
fn out_of_range_pin_is_rejected() {
    let device = device();
    let result = device.gpio_set_direction(8, GpioDirection::Output);
    assert!(matches!(
        result,
        Err(Error::InvalidInput { field: "GP pin number", ref input }) if input == "8"
    ));
    assert!(device.transport().sent.borrow().is_empty());
}
