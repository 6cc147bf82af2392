//! Remote attribute bindings.
//!
//! An [`Attribute`] ties one protocol command to a typed value: reading
//! queries the controller and decodes the reply payload, writing encodes
//! the value and requires an ACK. The channel is supplied by the caller —
//! the device facade passes the global channel, channel proxies pass their
//! own — so one binding definition serves every channel it applies to.
//!
//! Every access performs exactly one exchange on the transport; nothing is
//! cached between calls. An attribute constructed without an encode
//! function is read-only: writes fail before any I/O takes place.
//!
//! # Example
//!
//! ```
//! use multigauge::{Attribute, Command};
//! use multigauge::utils::{format_int, parse_int};
//!
//! // A read/write integer attribute
//! const VOLTAGE_MAX: Attribute<i32> =
//!     Attribute::new(Command::VoltageMax, parse_int, format_int);
//!
//! // A read-only one
//! const VOLTAGE: Attribute<i32> = Attribute::read_only(Command::Voltage, parse_int);
//! ```

use tracing::trace;

use crate::channel::Channel;
use crate::command::Command;
use crate::error::{MultiGaugeError, Result};
use crate::frame::{is_ack, Frame, QUERY};
use crate::transport::Transport;

/// Conversion applied to a reply payload on read.
pub type DecodeFn<T> = fn(&str) -> Result<T>;

/// Conversion producing a write payload from a value.
pub type EncodeFn<T> = fn(&T) -> String;

/// A typed binding of one protocol command.
///
/// `Attribute` is generic over plain function pointers so bindings are
/// `const`-constructible and carry no state beyond the command they
/// address. The same mechanism serves integers, floats, booleans, strings
/// and enumerated values.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<T> {
    command: Command,
    decode: DecodeFn<T>,
    encode: Option<EncodeFn<T>>,
}

impl<T> Attribute<T> {
    /// Creates a read/write attribute.
    pub const fn new(command: Command, decode: DecodeFn<T>, encode: EncodeFn<T>) -> Self {
        Self {
            command,
            decode,
            encode: Some(encode),
        }
    }

    /// Creates a read-only attribute.
    ///
    /// Writing through it returns [`MultiGaugeError::ReadOnly`] without
    /// touching the transport.
    pub const fn read_only(command: Command, decode: DecodeFn<T>) -> Self {
        Self {
            command,
            decode,
            encode: None,
        }
    }

    /// Returns the command this attribute is bound to.
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Returns whether this attribute accepts writes.
    pub const fn is_writable(&self) -> bool {
        self.encode.is_some()
    }

    /// Queries the current value on the given channel.
    ///
    /// Sends a query request, decodes the reply frame, verifies it answers
    /// this request, and converts the payload.
    ///
    /// # Errors
    ///
    /// Transport failures, frame decode errors,
    /// [`MultiGaugeError::ProtocolMismatch`] if the reply addresses a
    /// different channel or command, and
    /// [`MultiGaugeError::InvalidPayload`] if the payload does not convert.
    pub fn read(&self, transport: &mut dyn Transport, channel: Channel) -> Result<T> {
        trace!(command = ?self.command, %channel, "read");
        let request = Frame::request(channel, self.command, QUERY);
        let reply_bytes = transport.exchange(&request.to_bytes())?;
        let reply = Frame::decode_reply(&reply_bytes)?;
        if reply.channel != channel || reply.command != self.command {
            return Err(MultiGaugeError::protocol_mismatch(
                (channel, self.command),
                (reply.channel, reply.command),
            ));
        }
        (self.decode)(&reply.data)
    }

    /// Writes a value to the given channel.
    ///
    /// Encodes the value, sends it, and requires the controller's ACK
    /// reply.
    ///
    /// # Errors
    ///
    /// [`MultiGaugeError::ReadOnly`] (before any I/O) if the attribute has
    /// no encode function, transport failures, and
    /// [`MultiGaugeError::WriteFailed`] if the reply is not an ACK.
    pub fn write(&self, transport: &mut dyn Transport, channel: Channel, value: &T) -> Result<()> {
        let encode = self
            .encode
            .ok_or_else(|| MultiGaugeError::read_only(self.command, channel))?;
        trace!(command = ?self.command, %channel, "write");
        let request = Frame::request(channel, self.command, encode(value));
        let reply = transport.exchange(&request.to_bytes())?;
        if !is_ack(&reply) {
            return Err(MultiGaugeError::write_failed(self.command, channel, &reply));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{ACK, TERMINATOR};
    use crate::utils::{format_int, parse_int, parse_text};

    /// Transport double that replays scripted reply lines and records every
    /// request it is handed.
    struct SpyTransport {
        requests: Vec<Vec<u8>>,
        replies: Vec<Vec<u8>>,
    }

    impl SpyTransport {
        fn new(replies: &[&[u8]]) -> Self {
            Self {
                requests: Vec::new(),
                replies: replies.iter().rev().map(|r| r.to_vec()).collect(),
            }
        }
    }

    impl Transport for SpyTransport {
        fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
            self.requests.push(request.to_vec());
            Ok(self.replies.pop().expect("unscripted exchange"))
        }
    }

    const VOLTAGE: Attribute<i32> = Attribute::read_only(Command::Voltage, parse_int);
    const VOLTAGE_MAX: Attribute<i32> = Attribute::new(Command::VoltageMax, parse_int, format_int);

    #[test]
    fn test_read_decodes_reply_payload() {
        let mut spy = SpyTransport::new(&[b">10700014\r"]);
        let value = VOLTAGE.read(&mut spy, Channel::HighVoltage1).unwrap();
        assert_eq!(value, 14);
        assert_eq!(spy.requests, vec![b"#107?\r".to_vec()]);
    }

    #[test]
    fn test_write_sends_encoded_value_and_accepts_ack() {
        let mut spy = SpyTransport::new(&[&[ACK, TERMINATOR]]);
        VOLTAGE_MAX
            .write(&mut spy, Channel::HighVoltage2, &7000)
            .unwrap();
        assert_eq!(spy.requests, vec![b"#2637000\r".to_vec()]);
    }

    #[test]
    fn test_write_accepts_framed_ack() {
        let mut spy = SpyTransport::new(&[b">263\x06\r"]);
        assert!(VOLTAGE_MAX.write(&mut spy, Channel::HighVoltage2, &7000).is_ok());
    }

    #[test]
    fn test_read_only_write_raises_before_io() {
        let mut spy = SpyTransport::new(&[]);
        let err = VOLTAGE
            .write(&mut spy, Channel::HighVoltage1, &55)
            .unwrap_err();
        assert!(matches!(err, MultiGaugeError::ReadOnly { .. }));
        assert!(spy.requests.is_empty());
    }

    #[test]
    fn test_read_only_firmware_version_attribute() {
        const FIRMWARE: Attribute<String> =
            Attribute::read_only(Command::MicroControllerFirmwareVersion, parse_text);

        let mut spy = SpyTransport::new(&[]);
        let err = FIRMWARE
            .write(&mut spy, Channel::NoChannel, &"boom".to_owned())
            .unwrap_err();
        match err {
            MultiGaugeError::ReadOnly { command, channel } => {
                assert_eq!(command, Command::MicroControllerFirmwareVersion);
                assert_eq!(channel, Channel::NoChannel);
            }
            other => panic!("expected ReadOnly, got {other:?}"),
        }
        assert!(spy.requests.is_empty());
        assert!(!FIRMWARE.is_writable());
    }

    #[test]
    fn test_write_rejects_non_ack_reply() {
        let mut spy = SpyTransport::new(&[b">2637000\r"]);
        let err = VOLTAGE_MAX
            .write(&mut spy, Channel::HighVoltage2, &7000)
            .unwrap_err();
        assert!(matches!(err, MultiGaugeError::WriteFailed { .. }));
    }

    #[test]
    fn test_read_rejects_mismatched_reply_channel() {
        let mut spy = SpyTransport::new(&[b">20700015\r"]);
        let err = VOLTAGE.read(&mut spy, Channel::HighVoltage1).unwrap_err();
        assert!(matches!(err, MultiGaugeError::ProtocolMismatch { .. }));
    }

    #[test]
    fn test_read_rejects_mismatched_reply_command() {
        let mut spy = SpyTransport::new(&[b">10800015\r"]);
        let err = VOLTAGE.read(&mut spy, Channel::HighVoltage1).unwrap_err();
        assert!(matches!(err, MultiGaugeError::ProtocolMismatch { .. }));
    }

    #[test]
    fn test_read_rejects_request_headed_reply() {
        let mut spy = SpyTransport::new(&[b"#10700014\r"]);
        let err = VOLTAGE.read(&mut spy, Channel::HighVoltage1).unwrap_err();
        assert!(matches!(err, MultiGaugeError::Frame { .. }));
    }

    #[test]
    fn test_read_surfaces_payload_errors() {
        let mut spy = SpyTransport::new(&[b">107volts\r"]);
        let err = VOLTAGE.read(&mut spy, Channel::HighVoltage1).unwrap_err();
        assert!(matches!(err, MultiGaugeError::InvalidPayload { .. }));
    }

    #[test]
    fn test_command_accessor() {
        assert_eq!(VOLTAGE.command(), Command::Voltage);
        assert!(VOLTAGE_MAX.is_writable());
    }
}
