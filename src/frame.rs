//! Frame encoding and decoding for the MultiGauge protocol.
//!
//! A MultiGauge frame is a short ASCII line exchanged with the controller
//! over the serial link:
//!
//! | Byte | Field | Description |
//! |------|-------|-------------|
//! | 0 | header | `'#'` host-to-controller, `'>'` controller-to-host |
//! | 1 | channel | single-digit channel code |
//! | 2–3 | command | two-character command code |
//! | 4..n−1 | data | variable-length ASCII payload, may be empty |
//! | n−1 | terminator | `'\r'` |
//!
//! The payload `?` queries the current value of the addressed property; any
//! other payload is interpreted by the controller as a value to write. A
//! successful write is answered with an ACK line whose last payload byte is
//! 0x06 (see [`is_ack`]).
//!
//! The layout is fixed-width except for the trailing payload, so decoding is
//! a positional slice followed by enum lookups. The cheap validation
//! (terminator + enum membership) catches partial reads and foreign devices
//! echoing on the line.
//!
//! # Example
//!
//! ```
//! use multigauge::{Channel, Command, Frame, Header};
//!
//! let request = Frame::request(Channel::HighVoltage2, Command::HighVoltage, "?");
//! assert_eq!(request.to_bytes(), b"#230?\r");
//!
//! let reply = Frame::decode_reply(b">230?\r").unwrap();
//! assert_eq!(reply.header, Header::Reply);
//! assert_eq!(reply.channel, Channel::HighVoltage2);
//! assert_eq!(reply.command, Command::HighVoltage);
//! assert_eq!(reply.data, "?");
//! ```

use crate::channel::Channel;
use crate::command::Command;
use crate::error::{MultiGaugeError, Result};

/// Header byte of a host-to-controller request.
pub const HEADER_REQUEST: u8 = b'#';

/// Header byte of a controller-to-host reply.
pub const HEADER_REPLY: u8 = b'>';

/// Terminator byte ending every frame.
pub const TERMINATOR: u8 = b'\r';

/// Acknowledgement byte returned by the controller on a successful write.
pub const ACK: u8 = 0x06;

/// Query payload requesting the current value of the addressed property.
pub const QUERY: &str = "?";

/// Minimum frame size: header (1) + channel (1) + command (2) + terminator (1).
pub const MIN_FRAME_SIZE: usize = 5;

/// Direction marker of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Host-to-controller request (`'#'`).
    Request,
    /// Controller-to-host reply (`'>'`).
    Reply,
}

impl Header {
    /// Returns the wire byte for this header kind.
    pub const fn byte(self) -> u8 {
        match self {
            Header::Request => HEADER_REQUEST,
            Header::Reply => HEADER_REPLY,
        }
    }

    /// Looks a header kind up by its wire byte.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::Frame` for any byte other than `'#'`/`'>'`.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            HEADER_REQUEST => Ok(Header::Request),
            HEADER_REPLY => Ok(Header::Reply),
            other => Err(MultiGaugeError::frame(format!(
                "unknown header byte 0x{other:02X}"
            ))),
        }
    }
}

/// One complete MultiGauge wire message.
///
/// Frames are immutable and constructed per exchange. `data` holds the
/// payload without the terminator; it may be empty or the query marker
/// [`QUERY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Direction marker.
    pub header: Header,
    /// Addressed channel.
    pub channel: Channel,
    /// Operation code.
    pub command: Command,
    /// Payload, terminator excluded.
    pub data: String,
}

impl Frame {
    /// Creates a new frame.
    pub fn new(
        header: Header,
        channel: Channel,
        command: Command,
        data: impl Into<String>,
    ) -> Self {
        Self {
            header,
            channel,
            command,
            data: data.into(),
        }
    }

    /// Creates a host-to-controller request frame.
    ///
    /// # Example
    ///
    /// ```
    /// use multigauge::{Channel, Command, Frame};
    ///
    /// let frame = Frame::request(Channel::NoChannel, Command::Remote, "1");
    /// assert_eq!(frame.to_bytes(), b"#0101\r");
    /// ```
    pub fn request(channel: Channel, command: Command, data: impl Into<String>) -> Self {
        Self::new(Header::Request, channel, command, data)
    }

    /// Creates a controller-to-host reply frame.
    pub fn reply(channel: Channel, command: Command, data: impl Into<String>) -> Self {
        Self::new(Header::Reply, channel, command, data)
    }

    /// Serializes the frame to terminated ASCII bytes.
    ///
    /// No length limit is imposed on the payload beyond what the transport
    /// can carry.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(MIN_FRAME_SIZE + self.data.len());
        bytes.push(self.header.byte());
        bytes.extend_from_slice(self.channel.code().as_bytes());
        bytes.extend_from_slice(self.command.code().as_bytes());
        bytes.extend_from_slice(self.data.as_bytes());
        bytes.push(TERMINATOR);
        bytes
    }

    /// Parses a frame from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::Frame` if the buffer is shorter than
    /// [`MIN_FRAME_SIZE`], does not end with the terminator, carries an
    /// unknown header byte or a non-UTF-8 payload; and
    /// `MultiGaugeError::UnknownField` if the channel or command slice does
    /// not match any enumerated value.
    ///
    /// # Example
    ///
    /// ```
    /// use multigauge::{Channel, Frame};
    ///
    /// let frame = Frame::from_bytes(b">319\r").unwrap();
    /// assert_eq!(frame.channel, Channel::Gauge1);
    /// assert!(frame.data.is_empty());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_FRAME_SIZE {
            return Err(MultiGaugeError::frame(format!(
                "frame too short: expected at least {MIN_FRAME_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[bytes.len() - 1] != TERMINATOR {
            return Err(MultiGaugeError::frame(format!(
                "missing terminator, frame ends with 0x{:02X}",
                bytes[bytes.len() - 1]
            )));
        }

        let header = Header::from_byte(bytes[0])?;
        let channel = Channel::try_from(&bytes[1..2])?;
        let command = Command::try_from(&bytes[2..4])?;
        let data = std::str::from_utf8(&bytes[4..bytes.len() - 1])
            .map_err(|_| MultiGaugeError::frame("payload is not valid UTF-8"))?
            .to_owned();

        Ok(Self {
            header,
            channel,
            command,
            data,
        })
    }

    /// Parses a frame and asserts it is a request.
    ///
    /// # Errors
    ///
    /// Everything [`Frame::from_bytes`] returns, plus a frame error when the
    /// header is a reply marker.
    pub fn decode_request(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)?.expect_header(Header::Request)
    }

    /// Parses a frame and asserts it is a reply.
    ///
    /// # Errors
    ///
    /// Everything [`Frame::from_bytes`] returns, plus a frame error when the
    /// header is a request marker.
    pub fn decode_reply(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)?.expect_header(Header::Reply)
    }

    /// Asserts the frame carries the expected header kind.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::Frame` on a header mismatch.
    pub fn expect_header(self, expected: Header) -> Result<Self> {
        if self.header == expected {
            Ok(self)
        } else {
            Err(MultiGaugeError::frame(format!(
                "expected {expected:?} header, got {:?}",
                self.header
            )))
        }
    }

    /// Returns whether the payload is the query marker.
    pub fn is_query(&self) -> bool {
        self.data == QUERY
    }
}

/// Returns whether a raw reply line acknowledges a write.
///
/// The exact framing of the ACK reply is controller-defined: some firmware
/// revisions answer with a bare `\x06\r` line, others echo the channel and
/// command around the ACK byte. Both shapes end with the ACK byte directly
/// before the terminator, which is what is checked here.
///
/// # Example
///
/// ```
/// use multigauge::is_ack;
///
/// assert!(is_ack(b"\x06\r"));
/// assert!(is_ack(b">010\x06\r"));
/// assert!(!is_ack(b">0101\r"));
/// assert!(!is_ack(b"\x06"));
/// ```
pub fn is_ack(line: &[u8]) -> bool {
    line.len() >= 2 && line[line.len() - 1] == TERMINATOR && line[line.len() - 2] == ACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_request() {
        let frame = Frame::request(
            Channel::try_from(2).unwrap(),
            Command::try_from(30).unwrap(),
            QUERY,
        );
        assert_eq!(frame.to_bytes(), b"#230?\r");
    }

    #[test]
    fn test_encode_empty_payload() {
        let frame = Frame::reply(Channel::NoChannel, Command::DeviceNumber, "");
        assert_eq!(frame.to_bytes(), b">001\r");
    }

    #[test]
    fn test_decode_reply() {
        let frame = Frame::from_bytes(b">230?\r").unwrap();
        assert_eq!(frame.header, Header::Reply);
        assert_eq!(frame.channel, Channel::HighVoltage2);
        assert_eq!(frame.command, Command::HighVoltage);
        assert_eq!(frame.data, "?");
    }

    #[test]
    fn test_decode_missing_terminator() {
        let result = Frame::from_bytes(b"#230?");
        assert!(matches!(result, Err(MultiGaugeError::Frame { .. })));
    }

    #[test]
    fn test_decode_too_short() {
        assert!(matches!(
            Frame::from_bytes(b"#2\r"),
            Err(MultiGaugeError::Frame { .. })
        ));
        assert!(matches!(
            Frame::from_bytes(b""),
            Err(MultiGaugeError::Frame { .. })
        ));
    }

    #[test]
    fn test_decode_unknown_header() {
        let result = Frame::from_bytes(b"!230?\r");
        assert!(matches!(result, Err(MultiGaugeError::Frame { .. })));
    }

    #[test]
    fn test_decode_unknown_channel() {
        let result = Frame::from_bytes(b"#930?\r");
        assert!(matches!(
            result,
            Err(MultiGaugeError::UnknownField { field: "channel", .. })
        ));
    }

    #[test]
    fn test_decode_unknown_command() {
        let result = Frame::from_bytes(b"#299?\r");
        assert!(matches!(
            result,
            Err(MultiGaugeError::UnknownField { field: "command", .. })
        ));
    }

    #[test]
    fn test_roundtrip() {
        let cases = [
            (Header::Request, Channel::NoChannel, Command::Remote, ""),
            (Header::Request, Channel::HighVoltage1, Command::Voltage, "?"),
            (Header::Reply, Channel::Gauge2, Command::Pressure, "2.3E-7"),
            (
                Header::Reply,
                Channel::NoChannel,
                Command::MicroControllerFirmwareVersion,
                "VPo 1 0 24/04/98",
            ),
        ];
        for (header, channel, command, data) in cases {
            let frame = Frame::new(header, channel, command, data);
            let decoded = Frame::from_bytes(&frame.to_bytes()).unwrap();
            assert_eq!(decoded, frame);
        }
    }

    #[test]
    fn test_decode_reply_rejects_request_header() {
        assert!(Frame::decode_reply(b"#230?\r").is_err());
        assert!(Frame::decode_reply(b">230?\r").is_ok());
    }

    #[test]
    fn test_decode_request_rejects_reply_header() {
        assert!(Frame::decode_request(b">230?\r").is_err());
        assert!(Frame::decode_request(b"#230?\r").is_ok());
    }

    #[test]
    fn test_is_query() {
        assert!(Frame::request(Channel::NoChannel, Command::Unit, "?").is_query());
        assert!(!Frame::request(Channel::NoChannel, Command::Unit, "1").is_query());
    }

    #[test]
    fn test_is_ack() {
        assert!(is_ack(b"\x06\r"));
        assert!(is_ack(b">010\x06\r"));
        assert!(!is_ack(b""));
        assert!(!is_ack(b"\x06"));
        assert!(!is_ack(b"\r"));
        assert!(!is_ack(b">0101\r"));
    }

    #[test]
    fn test_header_bytes() {
        assert_eq!(Header::Request.byte(), b'#');
        assert_eq!(Header::Reply.byte(), b'>');
        assert_eq!(Header::from_byte(b'#').unwrap(), Header::Request);
        assert_eq!(Header::from_byte(b'>').unwrap(), Header::Reply);
        assert!(Header::from_byte(b'@').is_err());
    }
}
