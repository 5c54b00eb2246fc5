// src/protocol/rate.rs
//! Sampling rate validation and frame sizing
//!
//! ActiView serves lower rates by integer decimation of the amplifier's
//! native 16384 Hz stream, and shrinks the 128-sample network frame by the
//! same factor. Both divisions must be exact; anything else means the
//! requested rate cannot be realized on the wire.

use crate::config::constants::device;
use crate::error::{ClientError, ClientResult};

/// Fixed transfer frame dimensions derived from a validated sampling rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Samples per channel in one network frame
    pub frame_samples: usize,
    /// Total bytes in one network frame (`n_channels * frame_samples * 3`)
    pub frame_bytes: usize,
}

impl FrameGeometry {
    /// Validate `fs_hz` against the device's native rate and derive the
    /// frame dimensions for a stream of `n_channels` channels.
    ///
    /// Accepts exactly the rates in `[fs_max_hz / 64, fs_max_hz]` whose
    /// decimation factor divides both the native rate and the base frame
    /// sample count without remainder.
    pub fn resolve(fs_hz: u32, fs_max_hz: u32, n_channels: usize) -> ClientResult<Self> {
        let min_hz = fs_max_hz / device::MAX_DECIMATION;
        let invalid = || ClientError::InvalidRate {
            requested_hz: fs_hz,
            min_hz,
            max_hz: fs_max_hz,
        };

        if fs_hz == 0 || fs_hz < min_hz || fs_hz > fs_max_hz {
            return Err(invalid());
        }
        if fs_max_hz % fs_hz != 0 {
            return Err(invalid());
        }
        let decimation = (fs_max_hz / fs_hz) as usize;
        if device::BASE_FRAME_SAMPLES % decimation != 0 {
            return Err(invalid());
        }

        let frame_samples = device::BASE_FRAME_SAMPLES / decimation;
        Ok(Self {
            frame_samples,
            frame_bytes: n_channels * frame_samples * device::BYTES_PER_SAMPLE,
        })
    }

    /// Resolve against the ActiveTwo's native rate
    pub fn for_device(fs_hz: u32, n_channels: usize) -> ClientResult<Self> {
        Self::resolve(fs_hz, device::MAX_SAMPLING_RATE_HZ, n_channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_rates_and_frame_samples() {
        // every integer divisor of 16384 within [256, 16384]
        let expected = [
            (256, 2),
            (512, 4),
            (1024, 8),
            (2048, 16),
            (4096, 32),
            (8192, 64),
            (16384, 128),
        ];
        for (fs, frame_samples) in expected {
            let geometry = FrameGeometry::for_device(fs, 40).unwrap();
            assert_eq!(geometry.frame_samples, frame_samples, "fs = {}", fs);
            assert_eq!(geometry.frame_bytes, 40 * frame_samples * 3);
        }
    }

    #[test]
    fn test_rejected_rates() {
        for fs in [0, 1, 100, 128, 255, 300, 384, 1000, 3000, 16383, 16385, 32768] {
            let result = FrameGeometry::for_device(fs, 40);
            assert!(
                matches!(result, Err(ClientError::InvalidRate { requested_hz, .. }) if requested_hz == fs),
                "fs = {} must be rejected",
                fs
            );
        }
    }

    #[test]
    fn test_frame_bytes_matches_row_arithmetic() {
        let n_channels = 89;
        let geometry = FrameGeometry::for_device(2048, n_channels).unwrap();
        let bytes_per_row = n_channels * 3;
        assert_eq!(bytes_per_row * geometry.frame_samples, geometry.frame_bytes);
    }

    #[test]
    fn test_zero_channels_gives_zero_byte_frames() {
        let geometry = FrameGeometry::for_device(512, 0).unwrap();
        assert_eq!(geometry.frame_samples, 4);
        assert_eq!(geometry.frame_bytes, 0);
    }

    #[test]
    fn test_other_reference_rates() {
        // the resolver itself is generic over the native rate
        let geometry = FrameGeometry::resolve(1024, 2048, 8).unwrap();
        assert_eq!(geometry.frame_samples, 64);
        assert!(FrameGeometry::resolve(24, 2048, 8).is_err());
    }
}
