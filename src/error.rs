//! Error types for the MultiGauge protocol.

use std::io;
use thiserror::Error;

use crate::channel::Channel;
use crate::command::Command;

/// Result type alias for MultiGauge operations.
pub type Result<T> = std::result::Result<T, MultiGaugeError>;

/// Errors that can occur during MultiGauge communication.
#[derive(Debug, Error)]
pub enum MultiGaugeError {
    /// Malformed frame: missing terminator, truncated buffer, bad header
    /// byte or non-ASCII payload.
    #[error("malformed frame: {reason}")]
    Frame {
        /// Description of the framing error.
        reason: String,
    },

    /// A channel, command or value code does not match any enumerated value.
    #[error("unknown {field}: {value:?}")]
    UnknownField {
        /// Name of the field that failed to normalize.
        field: &'static str,
        /// The offending input, as text.
        value: String,
    },

    /// A write was attempted on an attribute that has no encode function.
    ///
    /// Raised before any I/O takes place.
    #[error("command {command:?} is read-only on channel {channel:?}")]
    ReadOnly {
        /// The command the attribute is bound to.
        command: Command,
        /// The channel the write addressed.
        channel: Channel,
    },

    /// The controller did not acknowledge a write.
    #[error("write of {command:?} on channel {channel:?} not acknowledged, reply: {reply:?}")]
    WriteFailed {
        /// The command that was written.
        command: Command,
        /// The channel the write addressed.
        channel: Channel,
        /// The raw reply line, lossily decoded for diagnosis.
        reply: String,
    },

    /// A reply frame does not match the request that elicited it.
    #[error(
        "reply does not match request: expected {expected_channel:?}/{expected_command:?}, \
         received {received_channel:?}/{received_command:?}"
    )]
    ProtocolMismatch {
        /// Channel the request addressed.
        expected_channel: Channel,
        /// Command the request carried.
        expected_command: Command,
        /// Channel the reply carried.
        received_channel: Channel,
        /// Command the reply carried.
        received_command: Command,
    },

    /// A reply payload could not be converted to the attribute's type.
    #[error("invalid payload: {reason}")]
    InvalidPayload {
        /// Description of the conversion failure.
        reason: String,
    },

    /// Communication timeout.
    #[error("communication timeout")]
    Timeout,

    /// I/O error during communication.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MultiGaugeError {
    /// Creates a new `Frame` error.
    ///
    /// # Example
    ///
    /// ```
    /// use multigauge::MultiGaugeError;
    ///
    /// let err = MultiGaugeError::frame("missing terminator");
    /// ```
    pub fn frame(reason: impl Into<String>) -> Self {
        Self::Frame {
            reason: reason.into(),
        }
    }

    /// Creates a new `UnknownField` error.
    pub fn unknown_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownField {
            field,
            value: value.into(),
        }
    }

    /// Creates a new `ReadOnly` error.
    pub fn read_only(command: Command, channel: Channel) -> Self {
        Self::ReadOnly { command, channel }
    }

    /// Creates a new `WriteFailed` error from the raw reply line.
    pub fn write_failed(command: Command, channel: Channel, reply: &[u8]) -> Self {
        Self::WriteFailed {
            command,
            channel,
            reply: String::from_utf8_lossy(reply).into_owned(),
        }
    }

    /// Creates a new `ProtocolMismatch` error.
    pub fn protocol_mismatch(
        expected: (Channel, Command),
        received: (Channel, Command),
    ) -> Self {
        Self::ProtocolMismatch {
            expected_channel: expected.0,
            expected_command: expected.1,
            received_channel: received.0,
            received_command: received.1,
        }
    }

    /// Creates a new `InvalidPayload` error.
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }
}

/// Returns the description of a protocol error code.
///
/// When the controller receives a well-framed request with an incorrect data
/// format it replies with an error code through the `!` (0x21) command. This
/// looks up the meaning of that code.
///
/// # Example
///
/// ```
/// use multigauge::protocol_error_description;
///
/// assert_eq!(
///     protocol_error_description("2"),
///     Some("Non existent command code"),
/// );
/// assert_eq!(protocol_error_description("0"), None);
/// ```
pub fn protocol_error_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "1" => "Reserved (checksum error)",
        "2" => "Non existent command code",
        "3" => "Channel not valid for the selected command",
        "4" => "Write mode not allowed for the selected command",
        "5" => "Unvalid or non-congruent data transmitted",
        "6" => "Write value exceeding the allowed limits or step not allowed",
        "7" => "Data format not recognized on the protocols implemented",
        "8" => "Write not allowed to channel ON",
        "9" => "Write not allowed to channel OFF",
        ":" => "Write allowed in Serial Configuration Mode only",
        _ => return None,
    })
}

/// Returns the description of a high-voltage error-status code.
///
/// These are the `HV` codes reported through the error-status command on the
/// high-voltage channels.
pub fn hv_error_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "1" => "High Voltage off due to front panel interlock activation",
        "2" => "High Voltage off due to Remote I/O interlock activation",
        "3" => "High Voltage off due to Cable HV interlock activation",
        "4" => "Dual fault, HV not found",
        "5" => "High Voltage off due to a general DSP determined fault",
        "6" => "High Voltage off due to an HV module overtemperature determined by the DSP",
        "7" => "Remote I/O card not present or faulty",
        "8" => "Remote I/O card present, but faulty",
        "9" => "High Voltage off due to the protect function activation",
        "10" => "High Voltage off due to shortcircuit protection activation",
        "11" => "High Voltage off due to an HV module overvoltage or overcurrent",
        "12" => "High Voltage off due to the zero measurement protection activation",
        _ => return None,
    })
}

/// Returns the description of a gauge error-status code.
///
/// These are the `MG` codes reported through the error-status command on the
/// gauge channels.
pub fn gauge_error_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "1" => "MiniGauge off due to front panel interlock activation",
        "2" => "The selected MiniGauge was not recognized",
        "3" => "The MiniGauge is signaling a fault condition",
        "4" => "The selected MiniGauge was disconnected",
        _ => return None,
    })
}

/// Returns the description of a system error-status code.
///
/// These are the `SW` codes reported through the error-status command on the
/// global channel.
pub fn system_error_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "1" => "RAM failure: RAM diagnostics error",
        "2" => "Incorrect value in the uC 68HC11 configuration register",
        "3" => "Invalid uC 68HC11 operating mode",
        "4" => "Violation of the signature in the ROM or the ROM was corrupted",
        "5" => "EEPROM checksum or non-volatile memory write error, factory defaults loaded",
        "6" => "Incompatible uC and DSP versions",
        "7" => "The DSP does not respond during the uC initialization phase",
        "8" => "The DSP does not respond during normal operation",
        "9" => "Option card not configured correctly",
        "10" => "Generic execution error",
        _ => return None,
    })
}
