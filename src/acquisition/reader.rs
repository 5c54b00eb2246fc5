// src/acquisition/reader.rs
//! Bounded streaming reads
//!
//! The client owns a frame source and the immutable layout/geometry derived
//! at construction. `read` keeps requesting frames until a duration's worth
//! of samples has accumulated, then demultiplexes the assembled matrix into
//! per-group arrays.
//!
//! Failure policy: any byte-source failure mid-read ends the loop and the
//! partial result is returned, down to an empty matrix. Real-time consumers
//! call `read` again shortly; partial data beats a failed call.

use ndarray::{s, Array2};
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::hal::{FrameSource, TcpConfig, TcpFrameSource};
use crate::protocol::{ChannelLayout, FrameDecoder, FrameGeometry, GroupKind};

/// How a [`read`](ActiveTwoClient::read) call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The requested duration's worth of samples was delivered
    Complete,
    /// The byte source failed mid-read; the bundle holds whatever had
    /// accumulated, possibly nothing
    Truncated,
}

/// Result of one read: per-group channel×time arrays.
///
/// The shape is fixed by configuration: a group's field is `Some` exactly
/// when that group was enabled, independent of how much data arrived. The
/// trigger array is always sliced from the final matrix row.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBundle {
    /// Scalp EEG channels
    pub eeg: Option<Array2<u32>>,
    /// External electrodes
    pub ex: Option<Array2<u32>>,
    /// Peripheral sensors
    pub sensors: Option<Array2<u32>>,
    /// JAZZ motion channels
    pub jazz: Option<Array2<u32>>,
    /// Auxiliary input box
    pub aib: Option<Array2<u32>>,
    /// Status/trigger words
    pub trigger: Option<Array2<u32>>,
    /// Samples per channel actually delivered
    pub n_samples: usize,
    /// Whether the read ended cleanly or on a source failure
    pub completion: Completion,
}

/// Client for a BioSemi ActiveTwo served by ActiView.
///
/// Holds no mutable state beyond the frame source itself; layout and frame
/// geometry are computed once at construction. One logical reader per
/// source: concurrent `read` calls on the same connection must be
/// serialized by the caller.
#[derive(Debug)]
pub struct ActiveTwoClient<S: FrameSource> {
    layout: ChannelLayout,
    geometry: FrameGeometry,
    decoder: FrameDecoder,
    sampling_rate_hz: u32,
    source: S,
}

impl<S: FrameSource> ActiveTwoClient<S> {
    /// Build a client around an already-connected frame source.
    ///
    /// Validates the sampling rate and derives the channel layout and frame
    /// geometry; fails before any I/O if the rate cannot be realized.
    pub fn with_source(config: &ClientConfig, source: S) -> ClientResult<Self> {
        let layout = ChannelLayout::from_config(config);
        let geometry = FrameGeometry::for_device(config.sampling_rate_hz, layout.n_channels())?;
        let decoder = FrameDecoder::new(&layout, &geometry);

        debug!(
            n_channels = layout.n_channels(),
            frame_samples = geometry.frame_samples,
            frame_bytes = geometry.frame_bytes,
            sampling_rate_hz = config.sampling_rate_hz,
            "client configured"
        );

        Ok(Self {
            layout,
            geometry,
            decoder,
            sampling_rate_hz: config.sampling_rate_hz,
            source,
        })
    }

    /// The derived channel layout
    pub fn layout(&self) -> &ChannelLayout {
        &self.layout
    }

    /// The derived frame geometry
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Requested sampling rate in Hz
    pub fn sampling_rate_hz(&self) -> u32 {
        self.sampling_rate_hz
    }

    /// Give the frame source back, consuming the client
    pub fn into_source(self) -> S {
        self.source
    }

    /// Read `duration_secs` worth of signal.
    ///
    /// Blocks until either `round(duration_secs * fs)` samples have
    /// accumulated (frames are whole, so the count overshoots to the next
    /// frame boundary) or the source fails. Source failures are not errors:
    /// the bundle is marked [`Completion::Truncated`] and carries whatever
    /// arrived, possibly zero samples.
    pub fn read(&mut self, duration_secs: f64) -> SignalBundle {
        let total_samples = (duration_secs * f64::from(self.sampling_rate_hz)).round() as usize;

        let mut frames: Vec<Array2<u32>> = Vec::new();
        let mut collected = 0usize;
        let mut completion = Completion::Complete;
        let mut buffer = vec![0u8; self.geometry.frame_bytes];

        while collected < total_samples {
            match self.source.receive_exact(&mut buffer) {
                Ok(()) => match self.decoder.decode(&buffer) {
                    Ok(frame) => {
                        trace!(collected, total_samples, "frame decoded");
                        frames.push(frame);
                        collected += self.geometry.frame_samples;
                    }
                    Err(err) => {
                        // buffer length is fixed by construction; a
                        // mismatch here is a decoder bug
                        warn!(error = %err, "frame decode failed, truncating read");
                        completion = Completion::Truncated;
                        break;
                    }
                },
                Err(err) => {
                    warn!(
                        error = %err,
                        collected,
                        requested = total_samples,
                        "byte source failed, returning partial data"
                    );
                    completion = Completion::Truncated;
                    break;
                }
            }
        }

        self.assemble(&frames, completion)
    }

    /// Concatenate decoded frames along the time axis and slice the result
    /// into per-group arrays.
    fn assemble(&self, frames: &[Array2<u32>], completion: Completion) -> SignalBundle {
        let n_channels = self.layout.n_channels();
        let n_samples = frames.len() * self.geometry.frame_samples;

        let mut data = Array2::zeros((n_channels, n_samples));
        for (index, frame) in frames.iter().enumerate() {
            let start = index * self.geometry.frame_samples;
            data.slice_mut(s![.., start..start + self.geometry.frame_samples])
                .assign(frame);
        }

        let mut bundle = SignalBundle {
            eeg: None,
            ex: None,
            sensors: None,
            jazz: None,
            aib: None,
            trigger: None,
            n_samples,
            completion,
        };

        for group in self.layout.groups() {
            let slice = if group.kind == GroupKind::Trigger {
                // the trigger is always the final row, by construction of
                // the fixed group order
                data.slice(s![n_channels - 1.., ..]).to_owned()
            } else {
                data.slice(s![group.start..group.start + group.len, ..]).to_owned()
            };
            match group.kind {
                GroupKind::Eeg => bundle.eeg = Some(slice),
                GroupKind::Ex => bundle.ex = Some(slice),
                GroupKind::Sensors => bundle.sensors = Some(slice),
                GroupKind::Jazz => bundle.jazz = Some(slice),
                GroupKind::Aib => bundle.aib = Some(slice),
                GroupKind::Trigger => bundle.trigger = Some(slice),
            }
        }

        bundle
    }
}

impl ActiveTwoClient<TcpFrameSource> {
    /// Connect to an ActiView server and build a client over the
    /// connection.
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let source = TcpFrameSource::connect(&TcpConfig::from(config))?;
        Self::with_source(config, source)
    }

    /// Shut the TCP connection down
    pub fn disconnect(&mut self) -> ClientResult<()> {
        self.source.disconnect()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::hal::{SimulatorConfig, SimulatorSource};

    fn config() -> ClientConfig {
        ClientConfig {
            eeg_channels: 8,
            trigger_included: true,
            sampling_rate_hz: 2048,
            ..ClientConfig::default()
        }
    }

    fn client(config: &ClientConfig) -> ActiveTwoClient<SimulatorSource> {
        let layout = ChannelLayout::from_config(config);
        let source = SimulatorSource::new(&layout, SimulatorConfig::default());
        ActiveTwoClient::with_source(config, source).unwrap()
    }

    #[test]
    fn test_construction_rejects_bad_rate_before_io() {
        let bad = ClientConfig {
            sampling_rate_hz: 300,
            ..config()
        };
        let layout = ChannelLayout::from_config(&bad);
        let source = SimulatorSource::new(&layout, SimulatorConfig::default());
        let result = ActiveTwoClient::with_source(&bad, source);
        assert!(matches!(
            result,
            Err(ClientError::InvalidRate { requested_hz: 300, .. })
        ));
    }

    #[test]
    fn test_read_delivers_whole_frames() {
        let config = config();
        let mut client = client(&config);

        // 2048 Hz -> 16-sample frames; 100 ms -> 204.8 samples -> 205
        // rounded, 13 frames -> 208 samples
        let bundle = client.read(0.1);
        assert_eq!(bundle.completion, Completion::Complete);
        assert_eq!(bundle.n_samples, 208);

        let eeg = bundle.eeg.unwrap();
        assert_eq!(eeg.nrows(), 8);
        assert_eq!(eeg.ncols(), 208);
    }

    #[test]
    fn test_zero_duration_reads_nothing() {
        let config = config();
        let mut client = client(&config);
        let bundle = client.read(0.0);
        assert_eq!(bundle.n_samples, 0);
        assert_eq!(bundle.completion, Completion::Complete);
        // shape is still fixed by configuration
        assert_eq!(bundle.eeg.unwrap().dim(), (8, 0));
        assert_eq!(bundle.trigger.unwrap().dim(), (1, 0));
        assert!(bundle.sensors.is_none());
    }

    #[test]
    fn test_disabled_groups_are_absent() {
        let config = config();
        let mut client = client(&config);
        let bundle = client.read(0.01);
        assert!(bundle.eeg.is_some());
        assert!(bundle.trigger.is_some());
        assert!(bundle.ex.is_none());
        assert!(bundle.sensors.is_none());
        assert!(bundle.jazz.is_none());
        assert!(bundle.aib.is_none());
    }

    #[test]
    fn test_accessors() {
        let config = config();
        let client = client(&config);
        assert_eq!(client.sampling_rate_hz(), 2048);
        assert_eq!(client.geometry().frame_samples, 16);
        assert_eq!(client.layout().n_channels(), 9);
    }
}
