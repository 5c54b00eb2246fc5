// src/config/mod.rs
//! Client configuration
//!
//! One explicit, immutable configuration struct absorbs everything the
//! client needs to know at construction time: which channel groups the
//! ActiView server was told to stream, the requested sampling rate and the
//! TCP endpoint. Channel layout and frame geometry are derived from it once
//! and never recomputed per read.

pub mod constants;

pub use constants::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ClientResult;

/// Complete client configuration.
///
/// Field defaults mirror a stock ActiView setup: 32 EEG channels at 512 Hz
/// on localhost, all optional groups disabled. The inclusion flags must
/// match the channel selection configured in ActiView, otherwise the byte
/// stream is demultiplexed against the wrong layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Host where the ActiView acquisition software is running
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Port the ActiView TCP server listens on
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Number of EEG channels included in the stream (0 = none)
    #[serde(default = "defaults::eeg_channels")]
    pub eeg_channels: usize,

    /// Whether the 8 external-electrode channels are streamed
    #[serde(default)]
    pub ex_included: bool,

    /// Whether the 7 peripheral sensor channels are streamed
    #[serde(default)]
    pub sensors_included: bool,

    /// Whether the 9 JAZZ motion channels are streamed
    #[serde(default)]
    pub jazz_included: bool,

    /// Whether the 32 auxiliary input box channels are streamed
    #[serde(default)]
    pub aib_included: bool,

    /// Whether the status/trigger channel is streamed
    #[serde(default)]
    pub trigger_included: bool,

    /// Requested sampling rate in Hz; must divide the device's native
    /// 16384 Hz by an integer factor of at most 64
    #[serde(default = "defaults::sampling_rate_hz")]
    pub sampling_rate_hz: u32,

    /// Blocking-receive timeout on the TCP socket
    #[serde(default = "defaults::socket_timeout_ms")]
    pub socket_timeout_ms: u64,
}

/// Default value providers using constants
mod defaults {
    use super::constants::{net, signal};

    pub fn host() -> String {
        net::DEFAULT_HOST.to_string()
    }
    pub fn port() -> u16 {
        net::DEFAULT_PORT
    }
    pub fn eeg_channels() -> usize {
        signal::DEFAULT_EEG_CHANNELS
    }
    pub fn sampling_rate_hz() -> u32 {
        signal::DEFAULT_SAMPLING_RATE_HZ
    }
    pub fn socket_timeout_ms() -> u64 {
        net::DEFAULT_SOCKET_TIMEOUT_MS
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            eeg_channels: defaults::eeg_channels(),
            ex_included: false,
            sensors_included: false,
            jazz_included: false,
            aib_included: false,
            trigger_included: false,
            sampling_rate_hz: defaults::sampling_rate_hz(),
            socket_timeout_ms: defaults::socket_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> ClientResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8888);
        assert_eq!(config.eeg_channels, 32);
        assert_eq!(config.sampling_rate_hz, 512);
        assert_eq!(config.socket_timeout_ms, 250);
        assert!(!config.trigger_included);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            eeg_channels = 8
            trigger_included = true
            sampling_rate_hz = 2048
            "#,
        )
        .unwrap();
        assert_eq!(config.eeg_channels, 8);
        assert!(config.trigger_included);
        assert_eq!(config.sampling_rate_hz, 2048);
        // untouched fields fall back to defaults
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8888);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ClientConfig::default();
        config.sensors_included = true;
        config.sampling_rate_hz = 4096;

        let text = toml::to_string(&config).unwrap();
        let parsed = ClientConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(ClientConfig::from_toml_str("eeg_channels = \"many\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "eeg_channels = 16\nex_included = true").unwrap();

        let config = ClientConfig::from_toml_path(file.path()).unwrap();
        assert_eq!(config.eeg_channels, 16);
        assert!(config.ex_included);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ClientConfig::from_toml_path("/nonexistent/activetwo.toml");
        assert!(matches!(result, Err(crate::error::ClientError::Io(_))));
    }
}
