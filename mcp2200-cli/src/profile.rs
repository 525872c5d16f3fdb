//! Configuration profiles: a device configuration saved as JSON.

use std::fs;
use std::path::Path;

use anyhow::Context;
use mcp2200_hal::common::format_bitmap;
use mcp2200_hal::state::{BlinkDuration, ConfigurationState, Edit, LedFunction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ProfileLedFunction {
    Blink,
    Toggle,
}

/// Every user-editable field of the configuration.
///
/// Bitmaps are stored as they are displayed, eight binary digits with GP7
/// first, and are validated again on import. The divisor is stored next to the
/// baud rate so that rates outside the standard table come back exactly; a
/// hand-written profile may give the rate alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct Profile {
    pub(crate) baud_rate: u32,
    /// Takes precedence over `baud_rate` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) baud_divisor: Option<u16>,
    pub(crate) io_config: String,
    pub(crate) output_default: String,
    /// Both UART activity LEDs.
    pub(crate) uart_leds: bool,
    pub(crate) flow_control: bool,
    pub(crate) usbcfg_pin: bool,
    pub(crate) suspend_pin: bool,
    pub(crate) invert_uart: bool,
    pub(crate) led_function: ProfileLedFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) blink_duration_ms: Option<u16>,
}

impl Profile {
    /// Capture the working configuration.
    pub(crate) fn from_state(state: &ConfigurationState) -> Self {
        let snapshot = state.snapshot();
        let (led_function, blink_duration_ms) = match state.led_function() {
            LedFunction::Blink(duration) => (ProfileLedFunction::Blink, Some(duration.millis())),
            LedFunction::Toggle => (ProfileLedFunction::Toggle, None),
        };
        Self {
            baud_rate: snapshot.baud_rate(),
            baud_divisor: Some(snapshot.baud_divisor),
            io_config: format_bitmap(snapshot.io_bitmap),
            output_default: format_bitmap(snapshot.io_default),
            uart_leds: snapshot.alt_pins.rx_led && snapshot.alt_pins.tx_led,
            flow_control: snapshot.alt_opts.hw_flow_control,
            usbcfg_pin: snapshot.alt_pins.usbcfg_pin,
            suspend_pin: snapshot.alt_pins.suspend_pin,
            invert_uart: snapshot.alt_opts.uart_invert,
            led_function,
            blink_duration_ms,
        }
    }

    /// Apply the profile to the working configuration, all or nothing.
    ///
    /// Nothing is written to the device.
    pub(crate) fn apply(&self, state: &mut ConfigurationState) -> Result<(), mcp2200_hal::Error> {
        let baud = self.baud_rate.to_string();
        let led_function = match (self.led_function, self.blink_duration_ms) {
            (ProfileLedFunction::Toggle, _) => LedFunction::Toggle,
            (ProfileLedFunction::Blink, None) => LedFunction::Blink(BlinkDuration::default()),
            (ProfileLedFunction::Blink, Some(ms)) => {
                LedFunction::Blink(ms.to_string().parse::<BlinkDuration>()?)
            }
        };
        let baud_edit = match self.baud_divisor {
            Some(divisor) => Edit::BaudDivisor(divisor),
            None => Edit::BaudRate(&baud),
        };
        state.apply_edits([
            baud_edit,
            Edit::IoBitmap(&self.io_config),
            Edit::IoDefault(&self.output_default),
            Edit::UartLeds(self.uart_leds),
            Edit::HardwareFlowControl(self.flow_control),
            Edit::UsbConfiguredPin(self.usbcfg_pin),
            Edit::SuspendPin(self.suspend_pin),
            Edit::InvertUart(self.invert_uart),
            Edit::LedFunction(led_function),
        ])?;
        Ok(())
    }

    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("{} is not a valid profile", path.display()))
    }

    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text).with_context(|| format!("could not write {}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::testing::{FACTORY, snapshot};

    #[test]
    fn factory_profile_json() {
        let profile = Profile::from_state(&ConfigurationState::new(snapshot(FACTORY)));
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "baud-rate": 9600,
                "baud-divisor": 1249,
                "io-config": "00001111",
                "output-default": "00000000",
                "uart-leds": true,
                "flow-control": false,
                "usbcfg-pin": false,
                "suspend-pin": false,
                "invert-uart": false,
                "led-function": "toggle",
            })
        );
    }

    #[test]
    fn applying_a_saved_profile_restores_it() {
        let mut source = ConfigurationState::new(snapshot(FACTORY));
        source
            .apply_edits([
                Edit::BaudRate("115200"),
                Edit::IoBitmap("0b1010"),
                Edit::BlinkDuration("200"),
                Edit::SuspendPin(true),
            ])
            .unwrap();
        let json = serde_json::to_string(&Profile::from_state(&source)).unwrap();

        let mut target = ConfigurationState::new(snapshot(FACTORY));
        let profile: Profile = serde_json::from_str(&json).unwrap();
        profile.apply(&mut target).unwrap();
        assert_eq!(target.snapshot(), source.snapshot());
        assert!(target.is_modified());
    }

    #[test]
    fn non_standard_divisors_survive_export_and_import() {
        for divisor in [3516u16, 0xFFFF] {
            let [high, low] = divisor.to_be_bytes();
            let source = ConfigurationState::new(snapshot([0x0F, 0x0C, 0x00, 0xC0, high, low]));
            let json = serde_json::to_string(&Profile::from_state(&source)).unwrap();

            let mut target = ConfigurationState::new(snapshot(FACTORY));
            let profile: Profile = serde_json::from_str(&json).unwrap();
            profile.apply(&mut target).unwrap();
            assert_eq!(target.snapshot().baud_divisor, divisor);
            assert_eq!(target.snapshot(), source.snapshot());
        }
    }

    #[test]
    fn rate_without_divisor() {
        let mut state = ConfigurationState::new(snapshot(FACTORY));
        let mut profile = Profile::from_state(&state);
        profile.baud_rate = 57600;
        profile.baud_divisor = None;
        profile.apply(&mut state).unwrap();
        assert_eq!(state.snapshot().baud_divisor, 207);
    }

    #[test]
    fn invalid_profile_changes_nothing() {
        let mut state = ConfigurationState::new(snapshot(FACTORY));
        let mut profile = Profile::from_state(&state);
        profile.baud_divisor = Some(207);
        profile.led_function = ProfileLedFunction::Blink;
        profile.blink_duration_ms = Some(150);
        assert!(profile.apply(&mut state).is_err());

        profile.blink_duration_ms = None;
        profile.output_default = "2".into();
        assert!(profile.apply(&mut state).is_err());
        assert!(!state.is_modified());
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("mcp2200-profile-{}.json", std::process::id()));
        let profile = Profile::from_state(&ConfigurationState::new(snapshot(FACTORY)));
        profile.save(&path).unwrap();
        assert_eq!(Profile::load(&path).unwrap(), profile);
        fs::remove_file(&path).unwrap();

        assert!(Profile::load(&path).is_err());
    }
}
