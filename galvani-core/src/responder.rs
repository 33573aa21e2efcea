//! Bus-facing request/response protocol
//!
//! The responder owns the single piece of protocol state: the selector
//! byte most recently written by the host. `on_receive` and `on_request`
//! mirror the two events the bus peripheral raises. The transport
//! serializes transactions and the firmware drives both entry points from
//! one task, so the selector needs no lock; running this logic on a
//! transport without that serialization guarantee requires wrapping the
//! responder in a mutex.

use galvani_protocol::{encode_sample, SensorChannel, SAMPLE_FRAME_LEN, SAMPLE_MAX};

use crate::channel_map::ChannelMap;
use crate::traits::{AnalogInput, SampleSource};

/// Why a read request produced no reply
///
/// None of these are fatal: the device keeps serving later transactions.
/// The caller logs the error and replies with nothing, which the host
/// observes as a short read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// No selector has been written since boot
    NoSelector,
    /// The stored selector byte names no channel in the vocabulary
    UnknownSelector(u8),
    /// The channel is known but this board has no input wired for it
    UnmappedChannel(SensorChannel),
}

/// Bus responder: stores the host's channel selection and serves samples
///
/// One persistent state variable (the selector) with two transitions: a
/// write unconditionally overwrites it, a read is a pure function of it.
/// The selector is stored unvalidated and checked only at request time, so
/// a garbage write is harmless until the host actually asks for data.
pub struct Responder<S> {
    source: S,
    map: ChannelMap,
    /// Last selector byte received, `None` until the first write
    selector: Option<u8>,
}

impl<S: SampleSource> Responder<S> {
    /// Create a responder over `source` with the board's channel wiring
    pub fn new(source: S, map: ChannelMap) -> Self {
        Self {
            source,
            map,
            selector: None,
        }
    }

    /// Handle a write transaction from the host
    ///
    /// Drains the delivered bytes and keeps only the last one as the new
    /// selector. The host is expected to send exactly one byte per write;
    /// keeping the most recent tolerates a host that sends more. An empty
    /// write leaves the stored selector unchanged.
    pub fn on_receive(&mut self, bytes: &[u8]) {
        if let Some(&last) = bytes.last() {
            self.selector = Some(last);
        }
    }

    /// Handle a read request from the host
    ///
    /// Validates the stored selector, performs a fresh conversion, and
    /// returns the encoded two-byte reply. The selector is not consumed:
    /// the host may keep reading the same channel, and each read samples
    /// the hardware again.
    pub fn on_request(&mut self) -> Result<[u8; SAMPLE_FRAME_LEN], RequestError> {
        let input = self.lookup_selected()?;
        let sample = self.source.sample(input);
        debug_assert!(sample <= SAMPLE_MAX);
        Ok(encode_sample(sample))
    }

    /// The raw selector byte currently stored, if any
    pub fn selector(&self) -> Option<u8> {
        self.selector
    }

    /// Resolve the stored selector to a physical input
    fn lookup_selected(&self) -> Result<AnalogInput, RequestError> {
        let byte = self.selector.ok_or(RequestError::NoSelector)?;
        let channel = SensorChannel::from_byte(byte).ok_or(RequestError::UnknownSelector(byte))?;
        self.map
            .lookup(channel)
            .ok_or(RequestError::UnmappedChannel(channel))
    }
}
