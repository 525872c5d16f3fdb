use clap::{Parser, ValueEnum};
use mcp2200_hal::gpio::{GpioDirection, LogicLevel};
use mcp2200_hal::{MCP2200, Transport};

use crate::util;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Direction {
    #[value(aliases = ["out"])]
    Output,
    #[value(aliases = ["in"])]
    Input,
}

impl From<Direction> for GpioDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Output => GpioDirection::Output,
            Direction::Input => GpioDirection::Input,
        }
    }
}

#[derive(Debug, Parser)]
#[command(flatten_help = true)]
pub(crate) enum GpioCommand {
    /// Show the direction and level of each GP pin.
    Read,
    /// Drive output pins high or low.
    ///
    /// Pins configured as inputs are ignored.
    #[command(arg_required_else_help = true)]
    Write {
        /// Pins to drive high.
        #[arg(long, value_name = "BITMAP", default_value = "0", value_parser = util::bitmap)]
        set: u8,
        /// Pins to drive low.
        #[arg(long, value_name = "BITMAP", default_value = "0", value_parser = util::bitmap)]
        clear: u8,
    },
    /// Change the direction of one pin in the stored configuration.
    Direction {
        /// Pin number.
        #[arg(value_parser = clap::value_parser!(u8).range(0..8))]
        pin: u8,
        direction: Direction,
    },
}

fn level(level: LogicLevel) -> &'static str {
    if level.is_high() { "high" } else { "low" }
}

pub(crate) fn action<T: Transport>(
    device: &MCP2200<T>,
    command: GpioCommand,
) -> Result<(), mcp2200_hal::Error> {
    match command {
        GpioCommand::Read => {
            let values = device.gpio_read()?;
            println!("pin  direction  level");
            for pin in 0..8 {
                let direction = if values.direction(pin).is_output() {
                    "output"
                } else {
                    "input"
                };
                println!("GP{pin}  {direction:<9}  {}", level(values.level(pin)));
            }
        }
        GpioCommand::Write { set, clear } => device.gpio_write(set, clear)?,
        GpioCommand::Direction { pin, direction } => {
            device.gpio_set_direction(pin, direction.into())?
        }
    }
    Ok(())
}
