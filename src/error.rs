// src/error.rs
//! Unified error handling for the ActiveTwo client core
//!
//! Configuration problems are surfaced before any I/O happens; failures of
//! the byte source during an in-progress read are deliberately NOT errors
//! (see [`crate::acquisition::Completion`]). The remaining variants cover
//! caller-contract violations on the pure protocol decoders and the
//! connect/config-loading paths.

use thiserror::Error;

/// Unified error type for the ActiveTwo client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Requested sampling rate cannot be realized by the device.
    ///
    /// The rate must lie in `[max_hz / 64, max_hz]` and divide `max_hz`
    /// exactly; raised at construction time, before any I/O occurs.
    #[error("invalid sampling rate {requested_hz} Hz: must be an integer divisor of {max_hz} Hz within [{min_hz}, {max_hz}] Hz")]
    InvalidRate {
        /// Rate the caller asked for
        requested_hz: u32,
        /// Lowest realizable rate (`max_hz / 64`)
        min_hz: u32,
        /// Device native rate
        max_hz: u32,
    },

    /// Raw frame buffer does not match the configured frame geometry
    #[error("frame buffer length mismatch: expected {expected} bytes, got {actual}")]
    FrameLength {
        /// `n_channels * frame_samples * 3`
        expected: usize,
        /// Length of the buffer handed to the decoder
        actual: usize,
    },

    /// Trigger word uses more than the 24 significant bits the wire carries
    #[error("trigger word {value:#x} exceeds 24 bits")]
    TriggerRange {
        /// Offending value
        value: u32,
    },

    /// Connection establishment or teardown failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::InvalidRate {
            requested_hz: 300,
            min_hz: 256,
            max_hz: 16384,
        };
        let display = format!("{}", err);
        assert!(display.contains("300"));
        assert!(display.contains("16384"));

        let err = ClientError::FrameLength {
            expected: 96,
            actual: 48,
        };
        let display = format!("{}", err);
        assert!(display.contains("96"));
        assert!(display.contains("48"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "recv timed out");
        let err: ClientError = io_err.into();
        assert!(matches!(err, ClientError::Io(_)));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientError>();
    }
}
