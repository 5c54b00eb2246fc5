// src/hal/traits.rs
//! Byte-source boundary for frame acquisition

use std::error::Error;

/// An opaque source of raw network frames.
///
/// One blocking operation: fill the buffer completely, or fail. The source
/// is expected to enforce a bounded wait so a stalled device cannot block
/// the calling thread indefinitely; timeout expiry is indistinguishable
/// from any other failure at this boundary.
///
/// Exactly one logical reader may use a source at a time; the acquisition
/// core holds no internal synchronization.
pub trait FrameSource {
    /// Source-specific failure type
    type Error: Error + Send + Sync + 'static;

    /// Receive exactly `buf.len()` bytes into `buf`.
    ///
    /// A timeout, disconnect or short read is an error; the buffer contents
    /// are unspecified afterwards.
    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}
