//! Human-readable rendering of a configuration.

use mcp2200_hal::baud;
use mcp2200_hal::common::format_bitmap;
use mcp2200_hal::settings::AltPins;
use mcp2200_hal::state::{ConfigurationState, LedFunction};

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn leds(pins: &AltPins) -> &'static str {
    match (pins.rx_led, pins.tx_led) {
        (true, true) => "on",
        (false, false) => "off",
        (true, false) => "rx only",
        (false, true) => "tx only",
    }
}

/// Render the working configuration, one field per line.
///
/// A trailing note is added when there are edits that have not been written.
pub(crate) fn render(state: &ConfigurationState) -> String {
    let snapshot = state.snapshot();
    let rate = snapshot.baud_rate();
    let baud = if baud::index_of(rate).is_ok() {
        rate.to_string()
    } else {
        format!("{rate} (non-standard, divisor {})", snapshot.baud_divisor)
    };

    let mut lines = vec![
        format!("Baud rate:       {baud}"),
        format!("I/O config:      {}", format_bitmap(snapshot.io_bitmap)),
        format!("Output default:  {}", format_bitmap(snapshot.io_default)),
        format!("UART LEDs:       {}", leds(&snapshot.alt_pins)),
        format!("Flow control:    {}", on_off(snapshot.alt_opts.hw_flow_control)),
        format!("USBCFG pin:      {}", on_off(snapshot.alt_pins.usbcfg_pin)),
        format!("Suspend pin:     {}", on_off(snapshot.alt_pins.suspend_pin)),
        format!("Invert UART:     {}", on_off(snapshot.alt_opts.uart_invert)),
    ];
    match state.led_function() {
        LedFunction::Blink(duration) => {
            lines.push("LED function:    blink".to_owned());
            lines.push(format!("Blink duration:  {duration}"));
        }
        LedFunction::Toggle => lines.push("LED function:    toggle".to_owned()),
    }
    if state.is_modified() {
        lines.push("(modified, not yet written to the device)".to_owned());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::testing::{FACTORY, snapshot};

    use mcp2200_hal::state::Edit;

    fn factory() -> ConfigurationState {
        ConfigurationState::new(snapshot(FACTORY))
    }

    #[test]
    fn factory_configuration() {
        let text = render(&factory());
        assert!(text.starts_with("Baud rate:       9600\n"));
        assert!(text.contains("I/O config:      00001111\n"));
        assert!(text.contains("UART LEDs:       on\n"));
        assert!(text.contains("LED function:    toggle\n"));
        assert!(!text.contains("Blink duration"));
        assert!(!text.contains("modified"));
    }

    #[test]
    fn blinking_and_modified() {
        let mut state = factory();
        state
            .apply_edits([Edit::BlinkDuration("200"), Edit::UartLeds(false)])
            .unwrap();
        let text = render(&state);
        assert!(text.contains("LED function:    blink\nBlink duration:  200 ms\n"));
        assert!(text.contains("UART LEDs:       off\n"));
        assert!(text.ends_with("(modified, not yet written to the device)\n"));
    }

    #[test]
    fn non_standard_divisor() {
        let state = ConfigurationState::new(snapshot([0x0F, 0x0C, 0x00, 0x00, 0x00, 0x00]));
        let text = render(&state);
        assert!(text.starts_with("Baud rate:       12000000 (non-standard, divisor 0)\n"));
    }
}
