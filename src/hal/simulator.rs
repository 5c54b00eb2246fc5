// src/hal/simulator.rs
//! Simulated frame source
//!
//! Produces wire-identical frames without an ActiView server so the full
//! acquisition path can run in tests and offline demos: every channel
//! carries a midscale signal with uniform noise, and the last channel, when
//! a trigger is configured, carries a fixed status word.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::config::constants::device;
use crate::hal::traits::FrameSource;
use crate::protocol::layout::ChannelLayout;

/// Simulator parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulatorConfig {
    /// Center value of the simulated signal (24-bit domain)
    pub midscale: u32,
    /// Peak deviation from midscale
    pub noise_amplitude: u32,
    /// Status word emitted on the trigger channel
    pub trigger_word: u32,
    /// RNG seed, fixed so tests are reproducible
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            midscale: 0x80_0000,
            noise_amplitude: 0x1000,
            trigger_word: 1 << 20, // CMS in range, nothing else
            seed: 0x5EED,
        }
    }
}

/// Frame source backed by a pseudo-random signal generator
#[derive(Debug)]
pub struct SimulatorSource {
    config: SimulatorConfig,
    has_trigger: bool,
    n_channels: usize,
    rng: StdRng,
}

impl SimulatorSource {
    /// Build a simulator for the given channel layout
    pub fn new(layout: &ChannelLayout, config: SimulatorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            has_trigger: layout.has_trigger(),
            n_channels: layout.n_channels(),
            config,
        }
    }

    fn next_sample(&mut self) -> u32 {
        let amplitude = self.config.noise_amplitude as i64;
        let noise = self.rng.gen_range(-amplitude..=amplitude);
        (self.config.midscale as i64 + noise).clamp(0, 0xFF_FFFF) as u32
    }
}

impl FrameSource for SimulatorSource {
    type Error = Infallible;

    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), Infallible> {
        let bytes_per_row = self.n_channels * device::BYTES_PER_SAMPLE;
        // frames are whole sample rows; anything else is a sizing bug
        // upstream and would desynchronize a real stream too
        debug_assert!(bytes_per_row == 0 || buf.len() % bytes_per_row == 0);

        for (index, sample_bytes) in buf.chunks_exact_mut(device::BYTES_PER_SAMPLE).enumerate() {
            let channel = index % self.n_channels.max(1);
            let value = if self.has_trigger && channel == self.n_channels - 1 {
                self.config.trigger_word
            } else {
                self.next_sample()
            };
            sample_bytes.copy_from_slice(&value.to_le_bytes()[..device::BYTES_PER_SAMPLE]);
        }
        Ok(())
    }
}
