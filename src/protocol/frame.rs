// src/protocol/frame.rs
//! Network frame decoding
//!
//! One network frame carries `frame_samples` time steps, each time step
//! holding one 3-byte sample per channel (sample-major, channel-minor on
//! the wire). The decoder transposes this into the channel-major matrix
//! consumers slice by group.

use ndarray::Array2;

use crate::config::constants::device;
use crate::error::{ClientError, ClientResult};
use crate::protocol::layout::ChannelLayout;
use crate::protocol::rate::FrameGeometry;

/// Decoder for one fixed-size network frame.
///
/// Pure transform: raw bytes in, `n_channels x frame_samples` matrix of
/// unsigned 24-bit values out. The 24-bit values are widened to `u32`
/// without sign extension; interpreting them is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDecoder {
    n_channels: usize,
    frame_samples: usize,
    frame_bytes: usize,
}

impl FrameDecoder {
    /// Build a decoder for the given layout and frame geometry
    pub fn new(layout: &ChannelLayout, geometry: &FrameGeometry) -> Self {
        Self {
            n_channels: layout.n_channels(),
            frame_samples: geometry.frame_samples,
            frame_bytes: geometry.frame_bytes,
        }
    }

    /// Expected raw buffer length in bytes
    pub fn frame_bytes(&self) -> usize {
        self.frame_bytes
    }

    /// Decode one raw frame into a channel-major matrix.
    ///
    /// The buffer length must equal the frame size exactly; a partial or
    /// oversized buffer is a caller error, not a tolerated condition.
    pub fn decode(&self, buffer: &[u8]) -> ClientResult<Array2<u32>> {
        if buffer.len() != self.frame_bytes {
            return Err(ClientError::FrameLength {
                expected: self.frame_bytes,
                actual: buffer.len(),
            });
        }

        let mut matrix = Array2::zeros((self.n_channels, self.frame_samples));
        for m in 0..self.frame_samples {
            let row = m * device::BYTES_PER_SAMPLE * self.n_channels;
            for channel in 0..self.n_channels {
                let offset = row + channel * device::BYTES_PER_SAMPLE;
                // the 3 bytes of each sample arrive least-significant first
                let sample = u32::from(buffer[offset])
                    | u32::from(buffer[offset + 1]) << 8
                    | u32::from(buffer[offset + 2]) << 16;
                matrix[[channel, m]] = sample;
            }
        }
        Ok(matrix)
    }
}
