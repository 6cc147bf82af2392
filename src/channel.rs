//! Channel definitions for the MultiGauge protocol.
//!
//! This module defines the [`Channel`] enum which identifies the logical
//! sub-unit of the controller a command addresses. Every frame carries
//! exactly one channel code.
//!
//! # Channels Overview
//!
//! | Channel | Code | Description |
//! |---------|:----:|-------------|
//! | NoChannel | `0` | Global controller scope (no sub-unit) |
//! | HighVoltage1 | `1` | First high-voltage output |
//! | HighVoltage2 | `2` | Second high-voltage output |
//! | Gauge1 | `3` | First gauge input |
//! | Gauge2 | `4` | Second gauge input |
//! | Serial | `5` | Serial port configuration unit |
//!
//! # Example
//!
//! ```
//! use multigauge::Channel;
//!
//! // The canonical wire code is a single ASCII character
//! assert_eq!(Channel::HighVoltage2.code(), "2");
//!
//! // Normalization accepts an integer, a string or a byte-string
//! assert_eq!(Channel::try_from(2).unwrap(), Channel::HighVoltage2);
//! assert_eq!("2".parse::<Channel>().unwrap(), Channel::HighVoltage2);
//! assert_eq!(Channel::try_from(&b"2"[..]).unwrap(), Channel::HighVoltage2);
//! ```

use std::str::FromStr;

use crate::error::{MultiGaugeError, Result};

/// Logical device channel addressed by a frame.
///
/// The wire representation is a single ASCII digit `'0'`–`'5'`. Values
/// outside the closed set fail to decode with
/// [`MultiGaugeError::UnknownField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Global controller scope; commands that address no sub-unit.
    NoChannel,
    /// First high-voltage output.
    HighVoltage1,
    /// Second high-voltage output.
    HighVoltage2,
    /// First gauge input.
    Gauge1,
    /// Second gauge input.
    Gauge2,
    /// Serial port configuration unit.
    Serial,
}

impl Channel {
    /// All channels, in wire-code order.
    pub const ALL: [Channel; 6] = [
        Channel::NoChannel,
        Channel::HighVoltage1,
        Channel::HighVoltage2,
        Channel::Gauge1,
        Channel::Gauge2,
        Channel::Serial,
    ];

    /// Returns the canonical one-character wire code for this channel.
    pub const fn code(self) -> &'static str {
        match self {
            Channel::NoChannel => "0",
            Channel::HighVoltage1 => "1",
            Channel::HighVoltage2 => "2",
            Channel::Gauge1 => "3",
            Channel::Gauge2 => "4",
            Channel::Serial => "5",
        }
    }

    /// Looks a channel up by its wire code.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` if the code does not match
    /// any channel.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "0" => Ok(Channel::NoChannel),
            "1" => Ok(Channel::HighVoltage1),
            "2" => Ok(Channel::HighVoltage2),
            "3" => Ok(Channel::Gauge1),
            "4" => Ok(Channel::Gauge2),
            "5" => Ok(Channel::Serial),
            other => Err(MultiGaugeError::unknown_field("channel", other)),
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = MultiGaugeError;

    /// Normalizes an integer channel number (0–5) to its enum member.
    fn try_from(value: u8) -> Result<Self> {
        Self::from_code(&format!("{value:01}"))
    }
}

impl FromStr for Channel {
    type Err = MultiGaugeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl TryFrom<&[u8]> for Channel {
    type Error = MultiGaugeError;

    /// Normalizes a one-byte ASCII byte-string to its enum member.
    fn try_from(value: &[u8]) -> Result<Self> {
        let code = std::str::from_utf8(value)
            .map_err(|_| MultiGaugeError::unknown_field("channel", format!("{value:?}")))?;
        Self::from_code(code)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Channel::NoChannel.code(), "0");
        assert_eq!(Channel::HighVoltage1.code(), "1");
        assert_eq!(Channel::HighVoltage2.code(), "2");
        assert_eq!(Channel::Gauge1.code(), "3");
        assert_eq!(Channel::Gauge2.code(), "4");
        assert_eq!(Channel::Serial.code(), "5");
    }

    #[test]
    fn test_normalization_forms_agree() {
        for (n, channel) in Channel::ALL.into_iter().enumerate() {
            let n = n as u8;
            assert_eq!(Channel::try_from(n).unwrap(), channel);
            assert_eq!(channel.code().parse::<Channel>().unwrap(), channel);
            assert_eq!(Channel::try_from(channel.code().as_bytes()).unwrap(), channel);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(Channel::from_code("9").is_err());
        assert!(Channel::from_code("").is_err());
        assert!(Channel::from_code("10").is_err());
        assert!(Channel::try_from(6).is_err());
        assert!(Channel::try_from(&b"\xff"[..]).is_err());
    }

    #[test]
    fn test_unknown_code_error_kind() {
        match Channel::from_code("7") {
            Err(MultiGaugeError::UnknownField { field, value }) => {
                assert_eq!(field, "channel");
                assert_eq!(value, "7");
            }
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Channel::Gauge1.to_string(), "3");
    }
}
