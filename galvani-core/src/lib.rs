//! Board-agnostic logic for the Galvani analog bridge
//!
//! This crate contains everything the bridge does that is not tied to a
//! specific chip:
//!
//! - The analog sampling seam ([`traits::SampleSource`])
//! - The channel map wiring selectors to physical inputs
//! - The bus responder state machine (`on_receive` / `on_request`)
//!
//! The firmware crate supplies a converter implementation and pumps bus
//! transactions into the responder; everything here is testable on the
//! host with a scripted sample source.

#![no_std]
#![deny(unsafe_code)]

pub mod channel_map;
pub mod responder;
pub mod traits;

// Re-export key types at crate root for convenience
pub use channel_map::ChannelMap;
pub use responder::{RequestError, Responder};
pub use traits::{AnalogInput, SampleSource};
