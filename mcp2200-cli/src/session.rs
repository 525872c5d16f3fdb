//! The interactive configuration session.
//!
//! A session holds at most one open device and the configuration being
//! edited. Edits stay local until the `configure` action writes them. A
//! transport failure drops the device and leaves the session disconnected
//! until `reload` reconnects.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use log::{info, warn};
use mcp2200_hal::state::{BlinkDuration, ConfigurationState, Edit, LedFunction};
use mcp2200_hal::{MCP2200, Transport};

use crate::display;
use crate::profile::Profile;

/// Opens the device for a session, on start-up and for every reload.
pub(crate) type Connector<T> = Box<dyn Fn() -> Result<MCP2200<T>, mcp2200_hal::Error>>;

pub(crate) enum Connection<T: Transport> {
    Connected {
        device: MCP2200<T>,
        state: ConfigurationState,
    },
    Disconnected,
}

pub(crate) struct Session<T: Transport> {
    connect: Connector<T>,
    connection: Connection<T>,
}

/// Operations on the session as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Write the working configuration to the device.
    Configure,
    /// Discard local edits.
    Reset,
    /// Reopen the device and read its configuration again.
    Reload,
    Quit,
    /// Load a profile into the working configuration.
    Import(PathBuf),
    /// Save the working configuration as a profile.
    Export(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

const NOT_CONNECTED: &str = "no device connected, use `reload` to reconnect";

impl<T: Transport> Session<T> {
    /// Create a disconnected session. Dispatch [`Action::Reload`] to connect.
    pub(crate) fn new(connect: Connector<T>) -> Self {
        Self {
            connect,
            connection: Connection::Disconnected,
        }
    }

    pub(crate) fn is_connected(&self) -> bool {
        matches!(self.connection, Connection::Connected { .. })
    }

    pub(crate) fn state(&self) -> Option<&ConfigurationState> {
        match &self.connection {
            Connection::Connected { state, .. } => Some(state),
            Connection::Disconnected => None,
        }
    }

    fn state_mut(&mut self) -> anyhow::Result<&mut ConfigurationState> {
        match &mut self.connection {
            Connection::Connected { state, .. } => Ok(state),
            Connection::Disconnected => bail!(NOT_CONNECTED),
        }
    }

    /// Apply one edit to the working configuration.
    pub(crate) fn edit(&mut self, edit: Edit<'_>) -> anyhow::Result<()> {
        self.state_mut()?.apply_edit(edit)?;
        Ok(())
    }

    /// Drop the device after a transport error.
    fn fail(&mut self, error: mcp2200_hal::Error) -> anyhow::Error {
        if error.is_transport() {
            warn!("Lost the device: {error}");
            self.connection = Connection::Disconnected;
            anyhow::Error::new(error).context("device disconnected, use `reload` to reconnect")
        } else {
            error.into()
        }
    }
}

/// Carry out an action.
pub(crate) fn dispatch<T: Transport>(session: &mut Session<T>, action: &Action) -> anyhow::Result<Flow> {
    match action {
        Action::Configure => configure(session)?,
        Action::Reset => session.state_mut()?.revert(),
        Action::Reload => reload(session)?,
        Action::Quit => return Ok(Flow::Quit),
        Action::Import(path) => import(session, path)?,
        Action::Export(path) => export(session, path)?,
    }
    Ok(Flow::Continue)
}

fn configure<T: Transport>(session: &mut Session<T>) -> anyhow::Result<()> {
    let Connection::Connected { device, state } = &mut session.connection else {
        bail!(NOT_CONNECTED);
    };
    match device.configure(state.snapshot()) {
        Ok(()) => {
            state.mark_applied();
            info!("Configuration written");
            Ok(())
        }
        Err(error) => Err(session.fail(error)),
    }
}

fn reload<T: Transport>(session: &mut Session<T>) -> anyhow::Result<()> {
    // Release the old handle before opening a new one.
    session.connection = Connection::Disconnected;
    let device = (session.connect)().context("could not open the MCP2200")?;
    let snapshot = match device.read_configuration() {
        Ok(snapshot) => snapshot,
        Err(error) => return Err(session.fail(error)),
    };
    session.connection = Connection::Connected {
        device,
        state: ConfigurationState::new(snapshot),
    };
    info!("Configuration read from the device");
    Ok(())
}

fn import<T: Transport>(session: &mut Session<T>, path: &Path) -> anyhow::Result<()> {
    let state = session.state_mut()?;
    Profile::load(path)?.apply(state)?;
    Ok(())
}

fn export<T: Transport>(session: &mut Session<T>, path: &Path) -> anyhow::Result<()> {
    let state = session.state_mut()?;
    Profile::from_state(state).save(path)
}

const HELP: &str = "\
Commands:
  show                     show the working configuration
  set <field> <value>      change a field locally
  configure                write the working configuration to the device
  reset                    discard local changes
  reload                   reconnect and read the device configuration
  import <file>            load a JSON profile
  export <file>            save the working configuration as a JSON profile
  help                     show this text
  quit                     leave the session

Fields:
  baud <rate>              io-config <bitmap>       output-default <bitmap>
  leds on|off              flow-control on|off      usbcfg on|off
  suspend on|off           invert on|off            led-function blink|toggle
  blink-duration 100|200
";

/// One line of input to the shell.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Empty,
    Help,
    Show,
    Set(Edit<'a>),
    /// Blinking LEDs, keeping the configured duration.
    Blink,
    Action(Action),
}

fn switch(field: &'static str, value: &str) -> Result<bool, mcp2200_hal::Error> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(mcp2200_hal::Error::InvalidInput {
            field,
            input: value.to_owned(),
        }),
    }
}

fn parse_set<'a>(field: &str, value: &'a str) -> anyhow::Result<Line<'a>> {
    let edit = match field {
        "baud" => Edit::BaudRate(value),
        "io-config" => Edit::IoBitmap(value),
        "output-default" => Edit::IoDefault(value),
        "leds" => Edit::UartLeds(switch("UART LEDs", value)?),
        "flow-control" => Edit::HardwareFlowControl(switch("flow control", value)?),
        "usbcfg" => Edit::UsbConfiguredPin(switch("USBCFG pin", value)?),
        "suspend" => Edit::SuspendPin(switch("suspend pin", value)?),
        "invert" => Edit::InvertUart(switch("UART polarity", value)?),
        "led-function" => match value {
            "blink" => return Ok(Line::Blink),
            "toggle" => Edit::LedFunction(LedFunction::Toggle),
            _ => bail!("LED function must be `blink` or `toggle`, not {value:?}"),
        },
        "blink-duration" => Edit::BlinkDuration(value),
        _ => bail!("unknown field {field:?}, type `help` for a list"),
    };
    Ok(Line::Set(edit))
}

pub(crate) fn parse_line(line: &str) -> anyhow::Result<Line<'_>> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));
    let parsed = match (command, rest) {
        ("", _) => Line::Empty,
        ("help" | "?", "") => Line::Help,
        ("show", "") => Line::Show,
        ("configure", "") => Line::Action(Action::Configure),
        ("reset", "") => Line::Action(Action::Reset),
        ("reload", "") => Line::Action(Action::Reload),
        ("quit" | "exit", "") => Line::Action(Action::Quit),
        ("import" | "export", "") => bail!("`{command}` needs a file name"),
        ("import", path) => Line::Action(Action::Import(path.into())),
        ("export", path) => Line::Action(Action::Export(path.into())),
        ("set", args) => match args.split_once(char::is_whitespace) {
            Some((field, value)) => return parse_set(field, value.trim()),
            None => bail!("usage: set <field> <value>"),
        },
        _ => bail!("unknown command {line:?}, type `help` for a list"),
    };
    Ok(parsed)
}

/// Handle one line of shell input, writing any output to `out`.
pub(crate) fn run_line<T: Transport>(
    session: &mut Session<T>,
    line: &str,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    match parse_line(line)? {
        Line::Empty => {}
        Line::Help => out.write_all(HELP.as_bytes())?,
        Line::Show => match session.state() {
            Some(state) => out.write_all(display::render(state).as_bytes())?,
            None => bail!(NOT_CONNECTED),
        },
        Line::Set(edit) => session.edit(edit)?,
        Line::Blink => {
            let state = session.state_mut()?;
            let duration = BlinkDuration::from_alt_opts(&state.snapshot().alt_opts);
            state.apply_edit(Edit::LedFunction(LedFunction::Blink(duration)))?;
        }
        Line::Action(action) => return dispatch(session, &action),
    }
    Ok(Flow::Continue)
}

/// Run the shell on `input` until it ends or the user quits.
pub(crate) fn run<T: Transport>(
    session: &mut Session<T>,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    if let Err(error) = dispatch(session, &Action::Reload) {
        writeln!(out, "error: {error:#}")?;
    }
    writeln!(out, "Type `help` for a list of commands.")?;
    let mut lines = input.lines();
    loop {
        let prompt = if session.is_connected() {
            "mcp2200> "
        } else {
            "mcp2200 (disconnected)> "
        };
        write!(out, "{prompt}")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        match run_line(session, &line?, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(error) => writeln!(out, "error: {error:#}")?,
        }
    }
    if session.state().is_some_and(ConfigurationState::is_modified) {
        writeln!(out, "Unwritten changes discarded.")?;
    }
    Ok(())
}
