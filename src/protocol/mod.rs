// src/protocol/mod.rs
//! Wire-protocol decoding for the ActiveTwo TCP stream

pub mod frame;
pub mod layout;
pub mod rate;
pub mod trigger;

pub use frame::FrameDecoder;
pub use layout::{ChannelGroup, ChannelLayout, GroupKind};
pub use rate::FrameGeometry;
pub use trigger::{decode_trigger, TriggerStatus};
