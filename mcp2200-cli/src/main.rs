use anyhow::Context;
use clap::Parser;
use mcp2200_hal::MCP2200;
use mcp2200_hal::common::format_usb_id;
use mcp2200_hal::state::ConfigurationState;

use cli::Commands;
use profile::Profile;

mod cli;
mod configure;
mod display;
mod eeprom;
mod gpio;
mod profile;
mod session;
#[cfg(test)]
mod testing;
mod usb;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    let (vid, pid) = (cli.vendor_id(), cli.product_id());
    let connect = move || MCP2200::connect_with_vid_and_pid(vid, pid);

    if let Commands::Shell = cli.command {
        let mut session = session::Session::new(Box::new(connect));
        return session::run(&mut session, std::io::stdin().lock(), std::io::stdout());
    }

    let device = connect().with_context(|| {
        format!(
            "could not open the MCP2200 at {}:{}",
            format_usb_id(vid),
            format_usb_id(pid)
        )
    })?;
    match cli.command {
        Commands::Read => {
            let state = ConfigurationState::new(device.read_configuration()?);
            print!("{}", display::render(&state));
        }
        Commands::Configure(args) => configure::action(&device, &args)?,
        Commands::Gpio(command) => gpio::action(&device, command)?,
        Commands::Eeprom(command) => eeprom::action(&device, command)?,
        Commands::Info => usb::print_info(&device)?,
        Commands::Export { path } => {
            let state = ConfigurationState::new(device.read_configuration()?);
            Profile::from_state(&state).save(&path)?;
        }
        Commands::Import { path } => {
            let profile = Profile::load(&path)?;
            let mut state = ConfigurationState::new(device.read_configuration()?);
            profile.apply(&mut state)?;
            device.configure(state.snapshot())?;
            state.mark_applied();
            print!("{}", display::render(&state));
        }
        Commands::Shell => unreachable!("handled above"),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli::Cli;

    use clap::CommandFactory;

    #[test]
    fn check_cli_debug_asserts() {
        Cli::command().debug_assert();
    }
}
