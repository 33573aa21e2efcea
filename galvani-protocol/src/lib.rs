//! I2C wire contract for the Galvani analog bridge
//!
//! This crate defines the byte-level contract between the bridge (an
//! RP2040 acting as an I2C responder) and the host computer that polls it.
//! The bridge samples a small set of analog sensor lines and serves the
//! most recent conversion on demand; the host drives every transaction.
//!
//! # Protocol Overview
//!
//! Two transaction types, both host-initiated, device fixed at address 12:
//!
//! ```text
//! Write:  host ──► [ selector ]              selects a sensor channel
//! Read:   host ◄── [ high ][ low ]           latest sample, 2 bytes
//! ```
//!
//! The selector persists on the device until overwritten, so the host may
//! write once and read many times. A read issued while the stored selector
//! is unset or unrecognized returns nothing; the host must treat any reply
//! shorter than [`SAMPLE_FRAME_LEN`] bytes as a protocol error.
//!
//! Samples are raw 10-bit converter codes (0-1023), split across two bytes
//! of 7 usable payload bits each. See [`wire`] for the exact bit layout.

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod wire;

pub use channel::SensorChannel;
pub use wire::{decode_sample, encode_sample, SAMPLE_FRAME_LEN, SAMPLE_MAX};

/// Fixed I2C address the bridge answers on.
pub const BRIDGE_ADDRESS: u8 = 12;
