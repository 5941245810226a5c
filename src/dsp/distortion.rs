//! Signature waveshaping.
//!
//! Every analog unit distorts a little differently. The signature waveshaper
//! models that with a soft-saturating transfer curve plus small per-unit
//! wrinkles derived from a seed (a device identifier), so two instruments
//! with different seeds colour the same signal differently while a given
//! instrument always sounds the same.
//!
//! # Transfer Function
//!
//! The curve is a cubic soft clip:
//!
//!   f(x) = 1.5x - 0.5x³     for x in [-1, 1]
//!
//! which has a slope of 1.5 around zero and flattens out to exactly ±1 at
//! the rails. A random walk seeded from the device id is added
//! on top, at roughly ±1.5% of full scale, and the result is stored as a
//! 257-point table interpolated in 8.8 fixed point.
//!
//! # Blending
//!
//! The voice never uses the shaped signal alone. It crossfades between the
//! clean and shaped sample with the "signature" intensity:
//!
//!   knob   0     1      2       3       4
//!   blend  0     4095   16380   36855   65520
//!
//! i.e. knob² · 4095, so the first steps are subtle.

use crate::dsp::fixed::interpolate88;

/// Seed used for the waveshaper when no device identifier is available.
pub const DEFAULT_DEVICE_ID: u32 = 0x4263_6877;

const TABLE_SIZE: usize = 257;
const DEVIATION_DEPTH: f32 = 0.015;

/// A pure 16-bit to 16-bit nonlinear transform.
pub trait Waveshaper: Send {
    fn transform(&self, sample: i16) -> i16;
}

#[derive(Debug, Clone)]
pub struct SignatureWaveshaper {
    transfer: [i16; TABLE_SIZE],
}

impl SignatureWaveshaper {
    /// Build the transfer table for a device identifier.
    pub fn new(seed: u32) -> Self {
        let mut state = seed;
        let mut walk = 0.0f32;
        let mut transfer = [0i16; TABLE_SIZE];

        for (i, slot) in transfer.iter_mut().enumerate() {
            // Numerical Recipes LCG; the top 16 bits are a signed step
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let step = ((state >> 16) as u16 as i16) as f32 / 32768.0;
            walk = 0.9 * walk + 0.1 * step;

            let x = (i as f32 - 128.0) / 128.0;
            let shaped = 1.5 * x - 0.5 * x * x * x;
            // pin the rails so full scale maps onto full scale
            let wrinkle = if i == 0 || i == TABLE_SIZE - 1 {
                0.0
            } else {
                walk * DEVIATION_DEPTH
            };
            let y = (shaped + wrinkle).clamp(-1.0, 1.0);
            *slot = (y * 32767.0).round() as i16;
        }

        Self { transfer }
    }
}

impl Default for SignatureWaveshaper {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ID)
    }
}

impl Waveshaper for SignatureWaveshaper {
    #[inline]
    fn transform(&self, sample: i16) -> i16 {
        let index = (sample as i32 + 32768) as u16;
        interpolate88(&self.transfer, index)
    }
}

/// Blend weight for a 0..4 signature intensity knob.
#[inline]
pub fn signature_blend(intensity: i32) -> u16 {
    let intensity = intensity.clamp(0, 4);
    (intensity * intensity * 4095) as u16
}
