//! Editing a configuration snapshot from user input.

use crate::Error;
use crate::settings::{AltOpts, ConfigurationSnapshot};

/// How long a blinking activity LED stays lit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BlinkDuration {
    /// 100 ms (factory default).
    #[default]
    Ms100,
    /// 200 ms.
    Ms200,
}

impl BlinkDuration {
    /// Duration in milliseconds.
    pub fn millis(&self) -> u16 {
        match self {
            BlinkDuration::Ms100 => 100,
            BlinkDuration::Ms200 => 200,
        }
    }

    /// Duration selected by the LED extended-duration option bit.
    pub fn from_alt_opts(opts: &AltOpts) -> Self {
        if opts.led_extended_duration {
            Self::Ms200
        } else {
            Self::Ms100
        }
    }
}

impl std::str::FromStr for BlinkDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches("ms").trim_end() {
            "100" => Ok(Self::Ms100),
            "200" => Ok(Self::Ms200),
            _ => Err(Error::InvalidInput {
                field: "blink duration",
                input: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for BlinkDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ms", self.millis())
    }
}

/// Behaviour of the UART activity LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedFunction {
    /// The LEDs blink for the given duration on each burst of activity.
    Blink(BlinkDuration),
    /// The LEDs toggle on each burst of activity.
    Toggle,
}

impl LedFunction {
    /// Derive the LED function from the option bits.
    ///
    /// The LEDs are reported as blinking unless *both* toggle bits are set. A
    /// device with only one toggle bit set therefore reads as blinking.
    pub fn from_alt_opts(opts: &AltOpts) -> Self {
        if !opts.rx_toggle || !opts.tx_toggle {
            Self::Blink(BlinkDuration::from_alt_opts(opts))
        } else {
            Self::Toggle
        }
    }

    fn apply_to(self, opts: &mut AltOpts) {
        match self {
            LedFunction::Blink(duration) => {
                opts.rx_toggle = false;
                opts.tx_toggle = false;
                opts.led_extended_duration = duration == BlinkDuration::Ms200;
            }
            LedFunction::Toggle => {
                opts.rx_toggle = true;
                opts.tx_toggle = true;
            }
        }
    }
}

impl std::fmt::Display for LedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedFunction::Blink(duration) => write!(f, "blink ({duration})"),
            LedFunction::Toggle => write!(f, "toggle"),
        }
    }
}

/// A single change to the configuration, as supplied by a user.
///
/// Text variants carry the input exactly as typed; it is validated when the edit
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'a> {
    /// Decimal baud rate.
    BaudRate(&'a str),
    /// Raw UART clock divisor, for rates outside the standard table.
    BaudDivisor(u16),
    /// GPIO direction bitmap. See [`parse_bitmap`] for the accepted forms.
    IoBitmap(&'a str),
    /// Power-on GPIO output bitmap. See [`parse_bitmap`] for the accepted forms.
    IoDefault(&'a str),
    /// Enable or disable both UART activity LED pins.
    UartLeds(bool),
    /// Enable or disable RTS/CTS hardware flow control.
    HardwareFlowControl(bool),
    /// Enable or disable the USBCFG indicator pin.
    UsbConfiguredPin(bool),
    /// Enable or disable the USB suspend indicator pin.
    SuspendPin(bool),
    /// Invert the UART polarity.
    InvertUart(bool),
    /// Choose between blinking and toggling LEDs.
    LedFunction(LedFunction),
    /// Blink duration in milliseconds, `"100"` or `"200"`. Selects blinking LEDs.
    BlinkDuration(&'a str),
}

/// Parse a GPIO bitmap typed by a user.
///
/// Accepted forms are hexadecimal with a `0x` prefix (`0x3C`), binary with a `0b`
/// prefix (`0b111100`), and up to eight bare binary digits (`00111100`), which is
/// how bitmaps are displayed. Underscores between digits are ignored.
///
/// # Errors
///
/// [`Error::InvalidInput`] naming `field` for anything else, including values that
/// do not fit in a byte.
pub fn parse_bitmap(field: &'static str, input: &str) -> Result<u8, Error> {
    let invalid = || Error::InvalidInput {
        field,
        input: input.to_owned(),
    };
    let trimmed = input.trim();
    let (digits, radix, max_len) = if let Some(hex) = strip_prefix_ci(trimmed, "0x") {
        (hex, 16, 2)
    } else if let Some(bin) = strip_prefix_ci(trimmed, "0b") {
        (bin, 2, 8)
    } else {
        (trimmed, 2, 8)
    };
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    let signed = digits.starts_with(|c: char| c == '+' || c == '-');
    if digits.is_empty() || digits.len() > max_len || signed {
        return Err(invalid());
    }
    u8::from_str_radix(&digits, radix).map_err(|_| invalid())
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &s[prefix.len()..])
}

/// Parse a decimal baud rate typed by a user.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the text is not a decimal number.
pub fn parse_baud_rate(input: &str) -> Result<u32, Error> {
    let trimmed = input.trim();
    if trimmed.starts_with('+') {
        return Err(Error::InvalidInput {
            field: "baud rate",
            input: input.to_owned(),
        });
    }
    trimmed.parse().map_err(|_| Error::InvalidInput {
        field: "baud rate",
        input: input.to_owned(),
    })
}

/// The configuration of one device session.
///
/// Holds the snapshot last read from or written to the device alongside the
/// working copy that edits are applied to.
#[derive(Debug, Clone)]
pub struct ConfigurationState {
    device: ConfigurationSnapshot,
    current: ConfigurationSnapshot,
}

impl ConfigurationState {
    /// Start a session from a snapshot read from the device.
    pub fn new(snapshot: ConfigurationSnapshot) -> Self {
        Self {
            device: snapshot,
            current: snapshot,
        }
    }

    /// The working configuration, including any edits.
    pub fn snapshot(&self) -> &ConfigurationSnapshot {
        &self.current
    }

    /// The configuration as last read from or written to the device.
    pub fn device_snapshot(&self) -> &ConfigurationSnapshot {
        &self.device
    }

    /// Returns true if there are edits not yet written to the device.
    pub fn is_modified(&self) -> bool {
        self.current != self.device
    }

    /// LED function derived from the working configuration.
    pub fn led_function(&self) -> LedFunction {
        LedFunction::from_alt_opts(&self.current.alt_opts)
    }

    /// Blink duration, if the LEDs are blinking.
    pub fn blink_duration(&self) -> Option<BlinkDuration> {
        match self.led_function() {
            LedFunction::Blink(duration) => Some(duration),
            LedFunction::Toggle => None,
        }
    }

    /// Apply one edit to the working configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for malformed text and [`Error::BaudRateOutOfRange`]
    /// for a baud rate with no divisor. A rejected edit changes nothing.
    pub fn apply_edit(&mut self, edit: Edit<'_>) -> Result<&ConfigurationSnapshot, Error> {
        self.apply_edits([edit])
    }

    /// Apply several edits, all or nothing.
    ///
    /// # Errors
    ///
    /// The first error from any edit, in which case none of them are applied.
    pub fn apply_edits<'a>(
        &mut self,
        edits: impl IntoIterator<Item = Edit<'a>>,
    ) -> Result<&ConfigurationSnapshot, Error> {
        let mut next = self.current;
        for edit in edits {
            merge(&mut next, edit)?;
        }
        self.current = next;
        Ok(&self.current)
    }

    /// Discard all edits, returning to the device's configuration.
    pub fn revert(&mut self) {
        self.current = self.device;
    }

    /// Record that the working configuration has been written to the device.
    pub fn mark_applied(&mut self) {
        self.device = self.current;
    }
}

fn merge(snapshot: &mut ConfigurationSnapshot, edit: Edit<'_>) -> Result<(), Error> {
    match edit {
        Edit::BaudRate(input) => {
            snapshot.set_baud_rate(parse_baud_rate(input)?)?;
        }
        Edit::BaudDivisor(divisor) => snapshot.baud_divisor = divisor,
        Edit::IoBitmap(input) => snapshot.io_bitmap = parse_bitmap("I/O configuration", input)?,
        Edit::IoDefault(input) => snapshot.io_default = parse_bitmap("output default", input)?,
        Edit::UartLeds(enabled) => {
            snapshot.alt_pins.rx_led = enabled;
            snapshot.alt_pins.tx_led = enabled;
        }
        Edit::HardwareFlowControl(enabled) => snapshot.alt_opts.hw_flow_control = enabled,
        Edit::UsbConfiguredPin(enabled) => snapshot.alt_pins.usbcfg_pin = enabled,
        Edit::SuspendPin(enabled) => snapshot.alt_pins.suspend_pin = enabled,
        Edit::InvertUart(enabled) => snapshot.alt_opts.uart_invert = enabled,
        Edit::LedFunction(function) => function.apply_to(&mut snapshot.alt_opts),
        Edit::BlinkDuration(input) => {
            LedFunction::Blink(input.parse()?).apply_to(&mut snapshot.alt_opts);
        }
    }
    Ok(())
}
