//! Low-level fixed-point primitives used by the voice core.
//!
//! These components are allocation-free and realtime-safe. Apart from the
//! built-in oscillator and the one-off table builders, everything here is
//! integer arithmetic with exact truncation behaviour.

/// One-pole gain smoothing.
pub mod amplify;
/// Sample-rate decimation and bit-depth reduction.
pub mod crush;
/// Envelope time and response tables.
pub mod curve;
/// Signature waveshaper and its blend law.
pub mod distortion;
/// Attack/decay phase-accumulator envelope.
pub mod envelope;
/// 16-bit mixing and table interpolation helpers.
pub mod fixed;
/// VCO drift and jitter source.
pub mod jitter;
/// Envelope combination operators and destination scaling.
pub mod modulate;
/// Oscillator contract and the built-in virtual analog oscillator.
pub mod oscillator;

pub use envelope::{Curve, CurvePolicy, Envelope, Segment};
pub use modulate::ModSource;
