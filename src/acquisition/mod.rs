// src/acquisition/mod.rs
//! Streaming acquisition client

pub mod reader;

pub use reader::{ActiveTwoClient, Completion, SignalBundle};
