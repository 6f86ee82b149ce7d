//! Parking sensor tone logic
//!
//! Hardware-independent part of the parking-tone firmware. Turns raw ADC codes
//! from an analog ultrasonic rangefinder into a tone whose pitch rises as an
//! object gets closer.
//!
//! # Pipeline
//! ```text
//! ADC code -> SampleWindow (100) -> mapper (average, inverse transform, clamp)
//!          -> Hysteresis (3 equal) -> ToneCommand -> ToneGenerator -> speaker pin
//! ```
//!
//! Pin and delay access goes through the `embedded-hal` 1.0 traits so the whole
//! pipeline runs on the host in tests.

#![cfg_attr(not(test), no_std)]

pub mod constants;
pub mod hysteresis;
pub mod mapper;
pub mod pipeline;
pub mod sampler;
pub mod tone;
pub mod trigger;

pub use pipeline::{RangeTone, ToneCommand};
