// src/config/constants.rs
//! Device and network constants
//!
//! All protocol geometry lives here so that serde defaults, validation and
//! the protocol modules agree on a single set of numbers.

/// ActiveTwo amplifier constants
pub mod device {
    /// Fastest native sampling rate of the amplifier (speed mode 3/7)
    pub const MAX_SAMPLING_RATE_HZ: u32 = 16384;

    /// Samples per channel in one network frame at the native rate.
    ///
    /// ActiView decimates by an integer factor for lower rates, shrinking
    /// the per-frame sample count by the same factor.
    pub const BASE_FRAME_SAMPLES: usize = 128;

    /// Largest decimation factor the device supports
    pub const MAX_DECIMATION: u32 = 64;

    /// Every sample travels as a 3-byte little-endian unsigned integer
    pub const BYTES_PER_SAMPLE: usize = 3;

    /// Width of the external-electrode (EX) group
    pub const EX_CHANNELS: usize = 8;

    /// Width of the peripheral sensors group
    pub const SENSOR_CHANNELS: usize = 7;

    /// Width of the JAZZ motion group
    pub const JAZZ_CHANNELS: usize = 9;

    /// Width of the auxiliary input box group
    pub const AIB_CHANNELS: usize = 32;

    /// Width of the status/trigger group
    pub const TRIGGER_CHANNELS: usize = 1;

    /// Sampling rate per speed mode 0-7, indexed by mode.
    ///
    /// Modes 0-3 and 4-7 intentionally repeat: the device encodes the same
    /// four rates once for AIB-off and once for AIB-on operation. Modes
    /// 8-15 carry no defined rate.
    pub const SPEED_MODE_RATES_HZ: [u32; 8] =
        [2048, 4096, 8192, 16384, 2048, 4096, 8192, 16384];
}

/// Network defaults for the ActiView TCP server
pub mod net {
    /// ActiView runs on the acquisition machine itself by default
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default ActiView TCP server port
    pub const DEFAULT_PORT: u16 = 8888;

    /// Default blocking-receive timeout.
    ///
    /// A stalled ActiView server must not hang the reading thread; expiry
    /// is handled as early read termination, not as a hard failure.
    pub const DEFAULT_SOCKET_TIMEOUT_MS: u64 = 250;

    /// Default TCP connect timeout
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;
}

/// Acquisition defaults
pub mod signal {
    /// Default EEG channel count (standard 32-electrode cap)
    pub const DEFAULT_EEG_CHANNELS: usize = 32;

    /// Default requested sampling rate
    pub const DEFAULT_SAMPLING_RATE_HZ: u32 = 512;
}
