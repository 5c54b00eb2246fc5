// src/protocol/trigger.rs
//! Status/trigger word decoding
//!
//! The last channel of an ActiveTwo stream is not a signal: every sample is
//! a 24-bit status word packing the 16 trigger inputs and a handful of
//! device status bits.
//!
//! Bit map (bit 0 = LSB):
//!
//! | bits  | meaning                         |
//! |-------|---------------------------------|
//! | 0-15  | trigger inputs 1-16             |
//! | 16    | high while a new epoch starts   |
//! | 17    | speed bit 0                     |
//! | 18    | speed bit 1                     |
//! | 19    | speed bit 2                     |
//! | 20    | high while CMS is in range      |
//! | 21    | speed bit 3                     |
//! | 22    | high while battery is low       |
//! | 23    | high on an ActiveTwo MK2        |
//!
//! Note that bit 20 sits between speed bits 2 and 3 and is NOT part of the
//! speed mode.

use serde::{Deserialize, Serialize};

use crate::config::constants::device;
use crate::error::{ClientError, ClientResult};

/// Decoded fields of one status/trigger word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerStatus {
    /// State of trigger inputs 1-16
    pub trigger_bits: u16,
    /// High while the device starts a new epoch
    pub new_epoch: bool,
    /// 4-bit speed mode setting (0-15)
    pub speed_mode: u8,
    /// High while the CMS electrode is within range
    pub cms_in_range: bool,
    /// High while the battery is low
    pub low_battery: bool,
    /// High if the amplifier is an ActiveTwo MK2
    pub is_mk2: bool,
    /// Sampling rate announced by the speed mode; `None` for modes 8-15,
    /// which are outside the documented table
    pub sampling_rate_hz: Option<u32>,
}

fn is_set(value: u32, bit: u32) -> bool {
    value & (1 << bit) != 0
}

/// Decode one raw 24-bit status word.
///
/// Values needing more than 24 significant bits are a caller error; the
/// wire cannot produce them.
pub fn decode_trigger(value: u32) -> ClientResult<TriggerStatus> {
    if value > 0xFF_FFFF {
        return Err(ClientError::TriggerRange { value });
    }

    let speed_mode = (is_set(value, 17) as u8)
        | (is_set(value, 18) as u8) << 1
        | (is_set(value, 19) as u8) << 2
        | (is_set(value, 21) as u8) << 3;

    Ok(TriggerStatus {
        trigger_bits: (value & 0xFFFF) as u16,
        new_epoch: is_set(value, 16),
        speed_mode,
        cms_in_range: is_set(value, 20),
        low_battery: is_set(value, 22),
        is_mk2: is_set(value, 23),
        sampling_rate_hz: device::SPEED_MODE_RATES_HZ.get(speed_mode as usize).copied(),
    })
}
