//! Hardware abstraction traits
//!
//! These traits define the interface between the responder logic
//! and hardware-specific implementations.

pub mod adc;

pub use adc::{AnalogInput, SampleSource};
