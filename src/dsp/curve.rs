//! Lookup tables for envelope timing and response.

/*
Envelope Curve Tables
=====================

The envelopes never do floating point while running. Two tables, computed
once when the voice is built, carry all the curve math:

  increments    128 phase increments, one per position of a 0..127 time
                knob. An envelope segment lasts ceil(2^32 / increment)
                ticks, so larger increments mean shorter segments.

  expo          257 points of 1 - e^(-4x), normalised to 0..65535. Used as
                the blend weight for the exponential curve, indexed with an
                8.24 phase through interpolate824.


Time Knob Response
------------------

Knob position is mapped onto time with a gamma law, so most of the knob's
travel sits in the musically useful short-to-medium range:

    rate(i)      = lerp(max_inc^-γ, min_inc^-γ, i / 127)
    increment(i) = rate(i)^(-1/γ)          γ = 0.25

The envelopes tick once per oscillator block (24 samples at 48kHz, so
2000 ticks per second). The fastest setting completes a segment in exactly
two ticks, the slowest in about ten seconds.
*/

use crate::{ENVELOPE_TICK_RATE, OSC_BLOCK_SIZE, SAMPLE_RATE};

/// Number of positions on a time knob.
pub const TIME_STEPS: usize = 128;

/// Points in the exponential response table.
pub const EXPO_TABLE_SIZE: usize = 257;

/// Fastest increment: a segment completes on its second tick.
pub const MAX_INCREMENT: u32 = 1 << 31;

const MAX_TIME_SECONDS: f64 = 10.0;
const GAMMA: f64 = 0.25;
const PHASE_EXCURSION: f64 = 4_294_967_296.0;

/// Precomputed time and response tables for the envelopes.
#[derive(Debug, Clone)]
pub struct CurveTable {
    increments: [u32; TIME_STEPS],
    expo: [u16; EXPO_TABLE_SIZE],
}

impl CurveTable {
    pub fn new() -> Self {
        debug_assert_eq!(SAMPLE_RATE as usize / OSC_BLOCK_SIZE, ENVELOPE_TICK_RATE as usize);

        let tick_rate = ENVELOPE_TICK_RATE as f64;
        let min_increment = PHASE_EXCURSION / (MAX_TIME_SECONDS * tick_rate);
        let max_increment = MAX_INCREMENT as f64;

        let from = max_increment.powf(-GAMMA);
        let to = min_increment.powf(-GAMMA);

        let mut increments = [0u32; TIME_STEPS];
        for (i, slot) in increments.iter_mut().enumerate() {
            let t = i as f64 / (TIME_STEPS - 1) as f64;
            let rate = from + (to - from) * t;
            let value = rate.powf(-1.0 / GAMMA).round();
            *slot = value.clamp(1.0, max_increment) as u32;
        }
        // pin the endpoint so the fastest setting is exact
        increments[0] = MAX_INCREMENT;

        let mut expo = [0u16; EXPO_TABLE_SIZE];
        let peak = 1.0 - (-4.0 * 255.0 / 256.0f64).exp();
        for (i, slot) in expo.iter_mut().enumerate() {
            // last point repeats the one before it
            let x = i.min(EXPO_TABLE_SIZE - 2) as f64 / 256.0;
            let y = (1.0 - (-4.0 * x).exp()) / peak;
            *slot = (y * 65535.0).round().clamp(0.0, 65535.0) as u16;
        }

        Self { increments, expo }
    }

    /// Phase increment for a 0..127 time value. Out of range values are
    /// saturated onto the table.
    #[inline]
    pub fn increment(&self, time: i32) -> u32 {
        self.increments[time.clamp(0, TIME_STEPS as i32 - 1) as usize]
    }

    #[inline]
    pub fn expo(&self) -> &[u16; EXPO_TABLE_SIZE] {
        &self.expo
    }
}

impl Default for CurveTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_fall_with_knob_position() {
        let table = CurveTable::new();
        for i in 1..TIME_STEPS as i32 {
            assert!(
                table.increment(i) < table.increment(i - 1),
                "increment at {} should be smaller than at {}",
                i,
                i - 1
            );
        }
    }

    #[test]
    fn fastest_setting_takes_two_ticks() {
        let table = CurveTable::new();
        let inc = table.increment(0) as u64;
        let ticks = (1u64 << 32).div_ceil(inc);
        assert_eq!(ticks, 2);
    }

    #[test]
    fn slowest_setting_is_about_ten_seconds() {
        let table = CurveTable::new();
        let ticks = (1u64 << 32) / table.increment(127) as u64;
        let seconds = ticks as f64 / ENVELOPE_TICK_RATE as f64;
        assert!((seconds - MAX_TIME_SECONDS).abs() < 0.1, "got {seconds}");
    }

    #[test]
    fn expo_table_spans_full_range() {
        let table = CurveTable::new();
        let expo = table.expo();
        assert_eq!(expo[0], 0);
        assert_eq!(expo[255], 65535);
        assert_eq!(expo[256], expo[255]);
        assert!(expo.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn out_of_range_time_saturates() {
        let table = CurveTable::new();
        assert_eq!(table.increment(-5), table.increment(0));
        assert_eq!(table.increment(500), table.increment(127));
    }
}
