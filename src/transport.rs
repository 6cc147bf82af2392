//! Transport layer for MultiGauge communication.
//!
//! The core depends on a single capability: a synchronous, blocking
//! exchange that writes one request and returns one complete
//! carriage-return-terminated reply line. That capability is the
//! [`Transport`] trait; anything that can move bytes to the controller can
//! implement it (a serial port wrapper, a terminal-server socket, a test
//! double).
//!
//! [`TcpTransport`] is the bundled reference implementation for the common
//! lab deployment where the controller's RS232 port sits behind a
//! serial-to-Ethernet bridge (MOXA, ser2net) exposing a raw TCP port.
//!
//! # Design
//!
//! - **Protocol agnostic** - the transport moves terminated lines, it knows
//!   nothing about frames
//! - **Synchronous** - blocking send/receive with configurable timeout
//! - **Simple** - one socket, one remote address, one outstanding exchange
//!
//! # Example
//!
//! ```no_run
//! use multigauge::{TcpTransport, Transport};
//! use std::time::Duration;
//!
//! let mut transport = TcpTransport::connect(
//!     "192.168.1.50:10001".parse().unwrap(),
//!     Duration::from_secs(2),
//! ).unwrap();
//!
//! let reply = transport.exchange(b"#010?\r");
//! ```

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use tracing::trace;

use crate::error::{MultiGaugeError, Result};
use crate::frame::TERMINATOR;

/// Conventional raw-socket port of serial terminal servers.
pub const DEFAULT_PORT: u16 = 10001;

/// Default timeout for transport operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Synchronous exchange capability the protocol core depends on.
///
/// One call per logical exchange: write `request` in full, then return one
/// complete reply line including its trailing carriage return. Retry,
/// reconnection and cancellation policies all live behind this seam; the
/// core never retries.
pub trait Transport {
    /// Writes a request and returns one complete terminated reply line.
    ///
    /// # Errors
    ///
    /// Implementations surface their own I/O failures; the bundled
    /// [`TcpTransport`] maps socket timeouts to
    /// [`MultiGaugeError::Timeout`].
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>>;
}

/// Blocking TCP transport for serial terminal servers.
///
/// Connects to the bridge's raw port, applies the timeout to connect, read
/// and write, and reads replies up to the carriage-return terminator.
pub struct TcpTransport {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    remote_addr: SocketAddr,
}

impl TcpTransport {
    /// Connects to the given terminal-server address.
    ///
    /// # Arguments
    ///
    /// * `remote_addr` - Socket address of the bridge (IP:port)
    /// * `timeout` - Connect/read/write timeout duration
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the connection cannot be established or
    /// configured.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use multigauge::TcpTransport;
    /// use std::time::Duration;
    ///
    /// let transport = TcpTransport::connect(
    ///     "192.168.1.50:10001".parse().unwrap(),
    ///     Duration::from_secs(2),
    /// ).unwrap();
    /// ```
    pub fn connect(remote_addr: SocketAddr, timeout: Duration) -> Result<Self> {
        let stream = TcpStream::connect_timeout(&remote_addr, timeout)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        let reader = BufReader::new(stream.try_clone()?);

        Ok(Self {
            stream,
            reader,
            remote_addr,
        })
    }

    /// Connects with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the connection cannot be established or
    /// configured.
    pub fn with_default_timeout(remote_addr: SocketAddr) -> Result<Self> {
        Self::connect(remote_addr, DEFAULT_TIMEOUT)
    }

    /// Returns the remote bridge address.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }
}

impl Transport for TcpTransport {
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        trace!(request = ?String::from_utf8_lossy(request), "exchange");
        self.stream.write_all(request)?;

        let mut line = Vec::new();
        match self.reader.read_until(TERMINATOR, &mut line) {
            Ok(0) => Err(MultiGaugeError::frame(
                "connection closed before reply terminator",
            )),
            Ok(_) if line.last() != Some(&TERMINATOR) => Err(MultiGaugeError::frame(
                "connection closed mid-reply, no terminator",
            )),
            Ok(_) => {
                trace!(reply = ?String::from_utf8_lossy(&line), "exchange done");
                Ok(line)
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Err(MultiGaugeError::Timeout),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(MultiGaugeError::Timeout),
            Err(e) => Err(MultiGaugeError::Io(e)),
        }
    }
}

impl std::fmt::Debug for TcpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpTransport")
            .field("remote_addr", &self.remote_addr)
            .field("local_addr", &self.stream.local_addr().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_PORT, 10001);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(2));
    }

    #[test]
    fn test_transport_connect() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let _ = listener.accept().unwrap();
        });

        let transport = TcpTransport::connect(addr, Duration::from_millis(500)).unwrap();
        assert_eq!(transport.remote_addr(), addr);
        server.join().unwrap();
    }

    #[test]
    fn test_transport_exchange() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut byte = [0u8; 1];
            loop {
                socket.read_exact(&mut byte).unwrap();
                request.push(byte[0]);
                if byte[0] == TERMINATOR {
                    break;
                }
            }
            assert_eq!(request, b"#010?\r");
            socket.write_all(b">0100\r").unwrap();
        });

        let mut transport = TcpTransport::connect(addr, Duration::from_millis(500)).unwrap();
        let reply = transport.exchange(b"#010?\r").unwrap();
        assert_eq!(reply, b">0100\r");
        server.join().unwrap();
    }

    #[test]
    fn test_transport_eof_is_frame_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (socket, _) = listener.accept().unwrap();
            drop(socket);
        });

        let mut transport = TcpTransport::connect(addr, Duration::from_millis(500)).unwrap();
        server.join().unwrap();
        // A closed peer surfaces either as EOF (frame error) or, depending
        // on RST timing, as a plain I/O error. Never as a decodable reply.
        let result = transport.exchange(b"#010?\r");
        assert!(matches!(
            result,
            Err(MultiGaugeError::Frame { .. }) | Err(MultiGaugeError::Io(_))
        ));
    }

    #[test]
    fn test_transport_debug() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let _ = listener.accept().unwrap();
        });

        let transport = TcpTransport::connect(addr, Duration::from_millis(500)).unwrap();
        let debug_str = format!("{transport:?}");
        assert!(debug_str.contains("TcpTransport"));
        assert!(debug_str.contains("127.0.0.1"));
        server.join().unwrap();
    }
}
