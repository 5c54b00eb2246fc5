// src/protocol/layout.rs
//! Channel layout derivation
//!
//! The ActiView byte stream interleaves whichever channel groups were
//! enabled on the acquisition side, in a fixed order. This module turns the
//! declarative [`ClientConfig`] group selection into the contiguous channel
//! index ranges used to size frames and demultiplex decoded matrices.

use serde::{Deserialize, Serialize};

use crate::config::constants::device;
use crate::config::ClientConfig;

/// The channel groups the amplifier can stream, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Scalp EEG electrodes; width chosen by the caller
    Eeg,
    /// External electrodes (8 channels)
    Ex,
    /// Peripheral sensors (7 channels)
    Sensors,
    /// JAZZ motion channels (9 channels)
    Jazz,
    /// Auxiliary input box (32 channels)
    Aib,
    /// Status/trigger word (1 channel, always last)
    Trigger,
}

impl GroupKind {
    /// Stable lowercase name, matching the ActiView channel selection labels
    pub fn name(&self) -> &'static str {
        match self {
            GroupKind::Eeg => "eeg",
            GroupKind::Ex => "ex",
            GroupKind::Sensors => "sensors",
            GroupKind::Jazz => "jazz",
            GroupKind::Aib => "aib",
            GroupKind::Trigger => "trigger",
        }
    }
}

/// A named, contiguous range of channels within the sample matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroup {
    /// Which group this range carries
    pub kind: GroupKind,
    /// First channel index of the range
    pub start: usize,
    /// Number of channels in the range
    pub len: usize,
}

/// Ordered channel group list plus the derived channel count.
///
/// Built once at client construction and never mutated. Group ranges are
/// contiguous and non-overlapping over `[0, n_channels)`; EEG, when
/// enabled, is always first (so its range starts at 0) and the trigger,
/// when enabled, always occupies exactly the last channel index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    groups: Vec<ChannelGroup>,
    n_channels: usize,
}

impl ChannelLayout {
    /// Derive the layout from a configuration.
    ///
    /// Groups are appended in the device's fixed wire order: EEG, EX,
    /// sensors, JAZZ, AIB, trigger. An all-disabled configuration yields an
    /// empty layout with zero channels, a degenerate but valid zero-width
    /// stream.
    pub fn from_config(config: &ClientConfig) -> Self {
        let selected = [
            (GroupKind::Eeg, config.eeg_channels),
            (GroupKind::Ex, if config.ex_included { device::EX_CHANNELS } else { 0 }),
            (GroupKind::Sensors, if config.sensors_included { device::SENSOR_CHANNELS } else { 0 }),
            (GroupKind::Jazz, if config.jazz_included { device::JAZZ_CHANNELS } else { 0 }),
            (GroupKind::Aib, if config.aib_included { device::AIB_CHANNELS } else { 0 }),
            (GroupKind::Trigger, if config.trigger_included { device::TRIGGER_CHANNELS } else { 0 }),
        ];

        let mut groups = Vec::new();
        let mut n_channels = 0usize;
        for (kind, len) in selected {
            if len == 0 {
                continue;
            }
            groups.push(ChannelGroup {
                kind,
                start: n_channels,
                len,
            });
            n_channels += len;
        }

        Self { groups, n_channels }
    }

    /// Total number of channels in the stream
    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Bytes occupied by one time step across all channels
    pub fn bytes_per_sample_row(&self) -> usize {
        self.n_channels * device::BYTES_PER_SAMPLE
    }

    /// The ordered group list
    pub fn groups(&self) -> &[ChannelGroup] {
        &self.groups
    }

    /// Look up a group's range, if that group is enabled
    pub fn group(&self, kind: GroupKind) -> Option<&ChannelGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Whether the trigger channel is part of the stream
    pub fn has_trigger(&self) -> bool {
        self.group(GroupKind::Trigger).is_some()
    }
}
