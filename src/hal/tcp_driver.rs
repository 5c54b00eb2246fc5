// src/hal/tcp_driver.rs
//! TCP frame source for the ActiView server
//!
//! ActiView pushes a continuous stream of fixed-size frames to whoever
//! connects to its TCP port; there is no handshake and no request/response
//! protocol. The driver's only responsibilities are connecting with a
//! bounded wait, reading exact frame lengths and shutting the socket down
//! cleanly.

use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::constants::net;
use crate::config::ClientConfig;
use crate::hal::traits::FrameSource;

/// TCP connection parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TcpConfig {
    /// Host where ActiView is running
    pub host: String,
    /// Port the ActiView TCP server listens on
    pub port: u16,
    /// Blocking-receive timeout; also applied while connecting
    pub read_timeout_ms: u64,
    /// Connect timeout
    pub connect_timeout_ms: u64,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: net::DEFAULT_HOST.to_string(),
            port: net::DEFAULT_PORT,
            read_timeout_ms: net::DEFAULT_SOCKET_TIMEOUT_MS,
            connect_timeout_ms: net::DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl From<&ClientConfig> for TcpConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            read_timeout_ms: config.socket_timeout_ms,
            ..Self::default()
        }
    }
}

/// Receive counters, advisory only
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Complete frames delivered to the reader
    pub frames_received: u64,
    /// Raw bytes delivered to the reader
    pub bytes_received: u64,
}

/// Blocking TCP frame source
#[derive(Debug)]
pub struct TcpFrameSource {
    stream: TcpStream,
    stats: ConnectionStats,
}

impl TcpFrameSource {
    /// Connect to the ActiView server.
    ///
    /// The read timeout is installed before any data is requested; without
    /// it a hung server would block the reading thread forever.
    pub fn connect(config: &TcpConfig) -> io::Result<Self> {
        let addr = (config.host.as_str(), config.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address for {}:{}", config.host, config.port),
                )
            })?;

        let stream =
            TcpStream::connect_timeout(&addr, Duration::from_millis(config.connect_timeout_ms))?;
        stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        stream.set_nodelay(true)?;

        debug!(host = %config.host, port = config.port, timeout_ms = config.read_timeout_ms, "connected to ActiView");
        Ok(Self {
            stream,
            stats: ConnectionStats::default(),
        })
    }

    /// Receive counters accumulated since the connection was opened
    pub fn stats(&self) -> ConnectionStats {
        self.stats
    }

    /// Shut the connection down in both directions.
    ///
    /// ActiView keeps streaming until the peer goes away; an orderly
    /// shutdown stops it from writing into a dead socket.
    pub fn disconnect(&mut self) -> io::Result<()> {
        debug!(
            frames = self.stats.frames_received,
            bytes = self.stats.bytes_received,
            "disconnecting from ActiView"
        );
        self.stream.shutdown(Shutdown::Both)
    }
}

impl FrameSource for TcpFrameSource {
    type Error = io::Error;

    fn receive_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.stream.read_exact(buf)?;
        self.stats.frames_received += 1;
        self.stats.bytes_received += buf.len() as u64;
        trace!(bytes = buf.len(), "frame received");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_default_config() {
        let config = TcpConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8888);
        assert_eq!(config.read_timeout_ms, 250);
    }

    #[test]
    fn test_config_from_client_config() {
        let client = ClientConfig {
            host: "10.0.0.2".to_string(),
            port: 9999,
            socket_timeout_ms: 100,
            ..ClientConfig::default()
        };
        let tcp = TcpConfig::from(&client);
        assert_eq!(tcp.host, "10.0.0.2");
        assert_eq!(tcp.port, 9999);
        assert_eq!(tcp.read_timeout_ms, 100);
    }

    #[test]
    fn test_receive_exact_and_stats() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            use std::io::Write;
            let (mut socket, _) = listener.accept().unwrap();
            socket.write_all(&[7u8; 24]).unwrap();
        });

        let config = TcpConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
            ..TcpConfig::default()
        };
        let mut source = TcpFrameSource::connect(&config).unwrap();

        let mut buf = [0u8; 12];
        source.receive_exact(&mut buf).unwrap();
        source.receive_exact(&mut buf).unwrap();
        assert_eq!(buf, [7u8; 12]);

        let stats = source.stats();
        assert_eq!(stats.frames_received, 2);
        assert_eq!(stats.bytes_received, 24);

        // server has hung up; further reads must fail, not block forever
        let mut more = [0u8; 12];
        assert!(source.receive_exact(&mut more).is_err());

        server.join().unwrap();
    }
}
