//! # MultiGauge Protocol Library
//!
//! A Rust library for controlling Varian/Agilent Dual vacuum-gauge /
//! high-voltage controllers over the MultiGauge ASCII serial protocol.
//!
//! This is a **protocol-only** library—no polling loops, schedulers, or
//! application-level features. Each attribute access produces exactly 1
//! request and 1 reply. No automatic retries, caching, or reconnection.
//!
//! ## Features
//!
//! - **Protocol-only** — codec plus a typed device model, nothing else
//! - **Deterministic** — each access is exactly one blocking exchange
//! - **Type-safe** — channels, commands and device states as enums
//! - **No panics** — all errors returned as `Result<T, MultiGaugeError>`
//! - **Transport-agnostic** — one single-method trait; a TCP terminal-server
//!   transport is bundled
//!
//! ## Wire Format
//!
//! Every exchange is one short ASCII line each way:
//!
//! ```text
//! Request: '#' <channel:1> <command:2> <data:*> '\r'
//! Reply:   '>' <channel:1> <command:2> <data:*> '\r'
//! ```
//!
//! A `?` payload queries the addressed property; any other payload writes
//! it. Successful writes are acknowledged with an ACK (0x06) line.
//!
//! ## Quick Start
//!
//! ```no_run
//! use multigauge::{RemoteMode, TcpTransport, VarianDual};
//!
//! fn main() -> multigauge::Result<()> {
//!     // The controller's RS232 port behind a serial-to-Ethernet bridge
//!     let transport = TcpTransport::with_default_timeout(
//!         "192.168.1.50:10001".parse().unwrap(),
//!     )?;
//!     let device = VarianDual::new(transport);
//!
//!     // Take serial control and inspect the controller
//!     device.set_remote(RemoteMode::Serial)?;
//!     println!("firmware: {}", device.ctrl_firmware_version()?);
//!     println!("unit: {:?}", device.unit()?);
//!
//!     // Channel proxies are created on first access and cached
//!     let hv1 = device.hv1();
//!     println!("hv1: {:?} at {} V", hv1.high_voltage()?, hv1.voltage()?);
//!     println!("gauge1: {:e}", device.gauge1().pressure()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Channels
//!
//! The controller multiplexes six logical channels over one serial line:
//!
//! | Channel | Code | Proxy |
//! |---------|:----:|-------|
//! | [`Channel::NoChannel`] | `0` | global attributes on [`VarianDual`] |
//! | [`Channel::HighVoltage1`] | `1` | [`VarianDual::hv1`] |
//! | [`Channel::HighVoltage2`] | `2` | [`VarianDual::hv2`] |
//! | [`Channel::Gauge1`] | `3` | [`VarianDual::gauge1`] |
//! | [`Channel::Gauge2`] | `4` | [`VarianDual::gauge2`] |
//! | [`Channel::Serial`] | `5` | [`VarianDual::serial`] |
//!
//! ## Working With Frames Directly
//!
//! The codec is usable on its own, e.g. to build simulators or sniffers:
//!
//! ```
//! use multigauge::{Channel, Command, Frame, Header};
//!
//! let request = Frame::request(Channel::HighVoltage2, Command::HighVoltage, "?");
//! assert_eq!(request.to_bytes(), b"#230?\r");
//!
//! let reply = Frame::decode_reply(b">2301\r").unwrap();
//! assert_eq!(reply.header, Header::Reply);
//! assert_eq!(reply.channel, Channel::HighVoltage2);
//! assert_eq!(reply.data, "1");
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, MultiGaugeError>`]. The library never
//! panics in public code.
//!
//! ```no_run
//! use multigauge::{MultiGaugeError, TcpTransport, VarianDual};
//!
//! # let device = VarianDual::new(TcpTransport::with_default_timeout(
//! #     "192.168.1.50:10001".parse().unwrap()).unwrap());
//! match device.hv1().high_voltage() {
//!     Ok(status) => println!("hv1: {status:?}"),
//!     Err(MultiGaugeError::Timeout) => println!("controller not answering"),
//!     Err(MultiGaugeError::ProtocolMismatch { .. }) => {
//!         println!("reply answers a different request; line is out of sync");
//!     }
//!     Err(e) => println!("error: {e}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! The model is single-threaded by construction: the serial line is one
//! ordered resource with a single outstanding request/reply pair, and the
//! device facade shares its connection with the channel proxies through
//! `Rc`. Wrap the whole facade behind your own lock if multiple threads
//! must reach one controller.
//!
//! ## Design Philosophy
//!
//! 1. Each operation does exactly what it says
//! 2. No magic or implicit behavior — reads and writes are explicit method
//!    calls, even though the underlying protocol treats them as one command
//! 3. The application has full control over retry and reconnection
//! 4. Errors are always explicit and descriptive

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod attribute;
mod channel;
mod command;
mod device;
mod error;
mod frame;
mod status;
mod transport;
pub mod utils;

// Public re-exports
pub use attribute::{Attribute, DecodeFn, EncodeFn};
pub use channel::Channel;
pub use command::Command;
pub use device::{GaugeChannel, HvChannel, SerialChannel, VarianDual};
pub use error::{
    gauge_error_description, hv_error_description, protocol_error_description,
    system_error_description, MultiGaugeError, Result,
};
pub use frame::{
    is_ack, Frame, Header, ACK, HEADER_REPLY, HEADER_REQUEST, MIN_FRAME_SIZE, QUERY, TERMINATOR,
};
pub use status::{
    FixedStep, GaugeDeviceNumber, HighVoltageStatus, HvDeviceNumber, InterlockStatus, Polarity,
    PressureUnit, RemoteInput, RemoteMode, RemoteOutput, SerialDeviceNumber, StartProtect,
};
pub use transport::{TcpTransport, Transport, DEFAULT_PORT, DEFAULT_TIMEOUT};
