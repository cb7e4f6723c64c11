//! TCP transport to the sensor daemon

use super::{connect_with_retry, Transport};
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use std::io::Read;
use std::net::TcpStream;
use std::sync::atomic::AtomicBool;

/// TCP stream transport
///
/// The stream carries bare UTF-8 JSON objects with no length prefix or
/// delimiter, so reads return whatever slice of the stream the kernel has
/// buffered.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Dial the sensor daemon, retrying per the connection config
    ///
    /// Blocks until connected, the retry policy is exhausted, or `running`
    /// clears. The configured read timeout is applied to the stream so one
    /// `receive` cannot stall a render frame when the daemon goes quiet.
    pub fn connect(config: &ConnectionConfig, running: &AtomicBool) -> Result<Self> {
        let addr = config.address();
        let policy = config.retry_policy();

        log::info!("Connecting to sensor daemon at {}", addr);
        let stream = connect_with_retry(&policy, running, || TcpStream::connect(&addr))?;
        stream
            .set_read_timeout(Some(config.read_timeout()))
            .map_err(Error::Transport)?;

        match stream.local_addr() {
            Ok(local) => log::info!("Connected to {} (local {})", addr, local),
            Err(_) => log::info!("Connected to {}", addr),
        }

        Ok(Self { stream })
    }
}

impl Transport for TcpTransport {
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.stream.read(buf) {
            // A zero-length read on TCP means the daemon closed the stream.
            Ok(0) => Err(Error::Transport(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed by sensor daemon",
            ))),
            Ok(n) => Ok(n),
            // Read timeout surfaces as WouldBlock on Unix, TimedOut on
            // Windows; both just mean no data this frame.
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(0),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(0),
            Err(e) => Err(Error::Transport(e)),
        }
    }
}
