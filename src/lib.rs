//! activetwo-core: streaming acquisition client for the BioSemi ActiveTwo
//!
//! This library turns the raw TCP byte stream served by the ActiView
//! acquisition software into structured, per-channel sample arrays. It
//! features:
//!
//! - Declarative channel-group configuration with derived stream layout
//! - Validated sampling rates and fixed-size transfer frame geometry
//! - 24-bit packed sample decoding into channel×time matrices
//! - Status/trigger word decoding into discrete device status fields
//! - Duration-bounded blocking reads that tolerate early I/O termination
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use activetwo_core::{ActiveTwoClient, ClientConfig, decode_trigger};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         eeg_channels: 32,
//!         trigger_included: true,
//!         sampling_rate_hz: 512,
//!         ..ClientConfig::default()
//!     };
//!
//!     let mut client = ActiveTwoClient::connect(&config)?;
//!
//!     // one second of signal; partial on timeout, never an error
//!     let bundle = client.read(1.0);
//!     if let Some(eeg) = &bundle.eeg {
//!         println!("eeg: {} channels x {} samples", eeg.nrows(), eeg.ncols());
//!     }
//!     if let Some(trigger) = &bundle.trigger {
//!         if bundle.n_samples > 0 {
//!             println!("{:?}", decode_trigger(trigger[[0, 0]])?);
//!         }
//!     }
//!
//!     client.disconnect()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod acquisition;
pub mod config;
pub mod error;
pub mod hal;
pub mod protocol;

// Re-export commonly used types for convenience
pub use acquisition::{ActiveTwoClient, Completion, SignalBundle};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use hal::{FrameSource, SimulatorConfig, SimulatorSource, TcpConfig, TcpFrameSource};
pub use protocol::{
    decode_trigger, ChannelGroup, ChannelLayout, FrameDecoder, FrameGeometry, GroupKind,
    TriggerStatus,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
