//! Command definitions for the MultiGauge protocol.
//!
//! This module defines the [`Command`] enum: the closed set of operation
//! codes the controller understands. Every frame carries exactly one
//! command, encoded as two ASCII characters (zero-padded decimal).
//!
//! Whether a command reads or writes is decided by the payload: the query
//! marker `?` requests the current value, anything else is written. Which
//! commands accept writes, and on which channels, is controller-defined and
//! captured by the attribute tables in [`device`](crate::device).
//!
//! # Example
//!
//! ```
//! use multigauge::Command;
//!
//! // Canonical codes are zero-padded to two characters
//! assert_eq!(Command::Pressure.code(), "02");
//! assert_eq!(Command::HighVoltage.code(), "30");
//!
//! // Normalization accepts an integer, a string or a byte-string
//! assert_eq!(Command::try_from(2).unwrap(), Command::Pressure);
//! assert_eq!("02".parse::<Command>().unwrap(), Command::Pressure);
//! assert_eq!(Command::try_from(&b"02"[..]).unwrap(), Command::Pressure);
//! ```

use std::str::FromStr;

use crate::error::{MultiGaugeError, Result};

/// Operation code identifying which controller property a frame addresses.
///
/// The wire representation is exactly two ASCII characters. Integer inputs
/// are zero-padded to width 2 before lookup, so `2`, `"02"` and `b"02"` all
/// normalize to [`Command::Pressure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Installed device model on a channel.
    DeviceNumber,
    /// Pressure reading (HV and gauge channels).
    Pressure,
    /// Pressure unit in use by the controller.
    Unit,
    /// DSP firmware version string.
    DspFirmwareVersion,
    /// Microcontroller firmware version string.
    MicroControllerFirmwareVersion,
    /// Reset of the serial interface.
    SerialReset,
    /// Output voltage reading of a high-voltage channel.
    Voltage,
    /// Output current reading of a high-voltage channel.
    Current,
    /// Local/remote/serial operating mode.
    Remote,
    /// Device type identification on a channel.
    DeviceType,
    /// Last remote protocol error.
    RemoteError,
    /// Interlock status bit-flags.
    InterlockStatus,
    /// Error status of the controller or a channel.
    ErrorStatus,
    /// High-voltage output state of an HV channel.
    HighVoltage,
    /// Fixed/step operating mode of an HV channel.
    FixedStep,
    /// Start/protect operating mode of an HV channel.
    StartProtect,
    /// Output polarity of an HV channel.
    Polarity,
    /// Maximum voltage limit of an HV channel.
    VoltageMax,
    /// Maximum current limit of an HV channel.
    CurrentMax,
    /// Maximum power limit of an HV channel.
    PowerMax,
    /// Protect-mode current threshold of an HV channel.
    CurrentProtect,
    /// Step 1 voltage of an HV channel.
    VoltageStep1,
    /// Step 1 current of an HV channel.
    CurrentStep1,
    /// Step 2 voltage of an HV channel.
    VoltageStep2,
    /// Step 2 current of an HV channel.
    CurrentStep2,
    /// Pressure set-point 1 of an HV channel.
    SetPoint1,
    /// Pressure set-point 2 of an HV channel.
    SetPoint2,
    /// Remote I/O output bit-flags of an HV channel.
    RemoteOutput,
    /// Remote I/O input bit-flags of an HV channel.
    RemoteInput,
    /// Serial configuration mode flag.
    SerialConfig,
}

impl Command {
    /// Returns the canonical two-character wire code for this command.
    pub const fn code(self) -> &'static str {
        match self {
            Command::DeviceNumber => "01",
            Command::Pressure => "02",
            Command::Unit => "03",
            Command::DspFirmwareVersion => "04",
            Command::MicroControllerFirmwareVersion => "05",
            Command::SerialReset => "06",
            Command::Voltage => "07",
            Command::Current => "08",
            Command::Remote => "10",
            Command::DeviceType => "11",
            Command::RemoteError => "12",
            Command::InterlockStatus => "13",
            Command::ErrorStatus => "19",
            Command::HighVoltage => "30",
            Command::FixedStep => "60",
            Command::StartProtect => "61",
            Command::Polarity => "62",
            Command::VoltageMax => "63",
            Command::CurrentMax => "64",
            Command::PowerMax => "65",
            Command::CurrentProtect => "66",
            Command::VoltageStep1 => "67",
            Command::CurrentStep1 => "68",
            Command::VoltageStep2 => "69",
            Command::CurrentStep2 => "70",
            Command::SetPoint1 => "71",
            Command::SetPoint2 => "72",
            Command::RemoteOutput => "73",
            Command::RemoteInput => "74",
            Command::SerialConfig => "80",
        }
    }

    /// Looks a command up by its two-character wire code.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` if the code does not match
    /// any command.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "01" => Ok(Command::DeviceNumber),
            "02" => Ok(Command::Pressure),
            "03" => Ok(Command::Unit),
            "04" => Ok(Command::DspFirmwareVersion),
            "05" => Ok(Command::MicroControllerFirmwareVersion),
            "06" => Ok(Command::SerialReset),
            "07" => Ok(Command::Voltage),
            "08" => Ok(Command::Current),
            "10" => Ok(Command::Remote),
            "11" => Ok(Command::DeviceType),
            "12" => Ok(Command::RemoteError),
            "13" => Ok(Command::InterlockStatus),
            "19" => Ok(Command::ErrorStatus),
            "30" => Ok(Command::HighVoltage),
            "60" => Ok(Command::FixedStep),
            "61" => Ok(Command::StartProtect),
            "62" => Ok(Command::Polarity),
            "63" => Ok(Command::VoltageMax),
            "64" => Ok(Command::CurrentMax),
            "65" => Ok(Command::PowerMax),
            "66" => Ok(Command::CurrentProtect),
            "67" => Ok(Command::VoltageStep1),
            "68" => Ok(Command::CurrentStep1),
            "69" => Ok(Command::VoltageStep2),
            "70" => Ok(Command::CurrentStep2),
            "71" => Ok(Command::SetPoint1),
            "72" => Ok(Command::SetPoint2),
            "73" => Ok(Command::RemoteOutput),
            "74" => Ok(Command::RemoteInput),
            "80" => Ok(Command::SerialConfig),
            other => Err(MultiGaugeError::unknown_field("command", other)),
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = MultiGaugeError;

    /// Normalizes an integer command number, zero-padded to two digits.
    fn try_from(value: u8) -> Result<Self> {
        Self::from_code(&format!("{value:02}"))
    }
}

impl FromStr for Command {
    type Err = MultiGaugeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl TryFrom<&[u8]> for Command {
    type Error = MultiGaugeError;

    /// Normalizes a two-byte ASCII byte-string to its enum member.
    fn try_from(value: &[u8]) -> Result<Self> {
        let code = std::str::from_utf8(value)
            .map_err(|_| MultiGaugeError::unknown_field("command", format!("{value:?}")))?;
        Self::from_code(code)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
