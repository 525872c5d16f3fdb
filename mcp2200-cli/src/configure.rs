use clap::{Args, ValueEnum};
use log::info;
use mcp2200_hal::state::{BlinkDuration, ConfigurationState, Edit, LedFunction};
use mcp2200_hal::{MCP2200, Transport};

use crate::display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Switch {
    #[value(alias = "true")]
    On,
    #[value(alias = "false")]
    Off,
}

impl From<Switch> for bool {
    fn from(value: Switch) -> Self {
        matches!(value, Switch::On)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LedMode {
    Blink,
    Toggle,
}

/// Changes to the stored configuration.
///
/// Options not given are left as they are on the device.
#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub(crate) struct ConfigureArgs {
    /// UART baud rate.
    #[arg(short, long)]
    baud: Option<String>,
    /// GPIO directions, GP7 first (1 is an input).
    #[arg(long, value_name = "BITMAP")]
    io_config: Option<String>,
    /// Power-on level of the GPIO outputs, GP7 first.
    #[arg(long, value_name = "BITMAP")]
    output_default: Option<String>,
    /// UART activity LEDs on GP6 and GP7.
    #[arg(long)]
    leds: Option<Switch>,
    /// RTS/CTS hardware flow control.
    #[arg(long)]
    flow_control: Option<Switch>,
    /// USB configured indicator on GP1.
    #[arg(long)]
    usbcfg: Option<Switch>,
    /// USB suspend indicator on GP0.
    #[arg(long)]
    suspend: Option<Switch>,
    /// Invert the UART polarity.
    #[arg(long)]
    invert: Option<Switch>,
    /// Whether the activity LEDs blink or toggle.
    #[arg(long, conflicts_with = "blink_duration")]
    led_function: Option<LedMode>,
    /// Blink duration in milliseconds (100 or 200). Implies blinking LEDs.
    #[arg(long, value_name = "MS")]
    blink_duration: Option<String>,
}

impl ConfigureArgs {
    /// The edits requested, in the order they are applied.
    ///
    /// `--led-function blink` keeps the duration bit already set in `state`.
    pub(crate) fn edits(&self, state: &ConfigurationState) -> Vec<Edit<'_>> {
        let mut edits = Vec::new();
        if let Some(baud) = &self.baud {
            edits.push(Edit::BaudRate(baud));
        }
        if let Some(bitmap) = &self.io_config {
            edits.push(Edit::IoBitmap(bitmap));
        }
        if let Some(bitmap) = &self.output_default {
            edits.push(Edit::IoDefault(bitmap));
        }
        let switches: [(Option<Switch>, fn(bool) -> Edit<'static>); 5] = [
            (self.leds, Edit::UartLeds),
            (self.flow_control, Edit::HardwareFlowControl),
            (self.usbcfg, Edit::UsbConfiguredPin),
            (self.suspend, Edit::SuspendPin),
            (self.invert, Edit::InvertUart),
        ];
        for (switch, edit) in switches {
            if let Some(switch) = switch {
                edits.push(edit(switch.into()));
            }
        }
        match self.led_function {
            Some(LedMode::Blink) => edits.push(Edit::LedFunction(LedFunction::Blink(
                BlinkDuration::from_alt_opts(&state.snapshot().alt_opts),
            ))),
            Some(LedMode::Toggle) => edits.push(Edit::LedFunction(LedFunction::Toggle)),
            None => {}
        }
        if let Some(duration) = &self.blink_duration {
            edits.push(Edit::BlinkDuration(duration));
        }
        edits
    }
}

/// Read the configuration, apply the requested edits and write it back.
pub(crate) fn action<T: Transport>(device: &MCP2200<T>, args: &ConfigureArgs) -> anyhow::Result<()> {
    let mut state = ConfigurationState::new(device.read_configuration()?);
    state.apply_edits(args.edits(&state))?;
    if state.is_modified() {
        device.configure(state.snapshot())?;
        state.mark_applied();
        info!("Configuration written");
    } else {
        println!("Configuration unchanged.");
    }
    print!("{}", display::render(&state));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::cli::{Cli, Commands};
    use crate::testing::{FACTORY, fake_device, snapshot};

    use clap::Parser;

    fn parse(args: &[&str]) -> ConfigureArgs {
        let cli = Cli::try_parse_from(["mcp2200", "configure"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::Configure(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn flags_become_edits() {
        let state = ConfigurationState::new(snapshot(FACTORY));
        let args = parse(&["--baud", "57600", "--leds", "off", "--flow-control", "true"]);
        assert_eq!(
            args.edits(&state),
            [
                Edit::BaudRate("57600"),
                Edit::UartLeds(false),
                Edit::HardwareFlowControl(true)
            ]
        );
    }

    #[test]
    fn blink_keeps_the_stored_duration() {
        // Both toggles set and the extended duration bit set.
        let state = ConfigurationState::new(snapshot([0x0F, 0x0C, 0x00, 0xE0, 0x04, 0xE1]));
        let args = parse(&["--led-function", "blink"]);
        assert_eq!(
            args.edits(&state),
            [Edit::LedFunction(LedFunction::Blink(BlinkDuration::Ms200))]
        );
    }

    #[test]
    fn rejected_flag_combinations() {
        assert!(Cli::try_parse_from(["mcp2200", "configure"]).is_err());
        assert!(
            Cli::try_parse_from([
                "mcp2200",
                "configure",
                "--led-function",
                "toggle",
                "--blink-duration",
                "200"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["mcp2200", "configure", "--leds", "maybe"]).is_err());
    }

    #[test]
    fn writes_only_when_changed() {
        let fake = fake_device();
        let device = MCP2200::with_transport(fake.clone());

        action(&device, &parse(&["--baud", "9600"])).unwrap();
        assert_eq!(fake.configure_count(), 0);

        action(&device, &parse(&["--io-config", "0xFF", "--invert", "on"])).unwrap();
        assert_eq!(fake.configure_count(), 1);
        assert_eq!(fake.configuration.get(), [0xFF, 0x0C, 0x00, 0xC2, 0x04, 0xE1]);
    }

    #[test]
    fn invalid_edit_writes_nothing() {
        let fake = fake_device();
        let device = MCP2200::with_transport(fake.clone());
        let error = action(&device, &parse(&["--baud", "9600", "--io-config", "0x1FF"])).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<mcp2200_hal::Error>(),
            Some(mcp2200_hal::Error::InvalidInput { .. })
        ));
        assert_eq!(fake.configure_count(), 0);
    }
}
