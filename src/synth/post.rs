//! Per-sample output chain between the oscillator and the host buffer.
//!
//! raw i16 → sample-and-hold with bit mask → smoothed gain → waveshaper
//! blend → velocity amplitude → interleaved stereo f32.

use crate::dsp::amplify::GainSmoother;
use crate::dsp::crush::{factor_for, mask_for, Decimator};
use crate::dsp::distortion::{signature_blend, Waveshaper};
use crate::dsp::fixed::mix_i16;
use crate::OUTPUT_CHANNELS;

/// Settings that hold for a whole render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostSettings {
    pub factor: u32,
    pub mask: u16,
    pub signature: u16,
    pub amplitude: f32,
}

impl PostSettings {
    /// Look up the tables for raw parameter values.
    pub fn from_params(rate: i32, resolution: i32, signature: i32, amplitude: f32) -> Self {
        Self {
            factor: factor_for(rate),
            mask: mask_for(resolution),
            signature: signature_blend(signature),
            amplitude,
        }
    }
}

pub struct AudioPostProcessor<W: Waveshaper> {
    decimator: Decimator,
    gain: GainSmoother,
    shaper: W,
}

impl<W: Waveshaper> AudioPostProcessor<W> {
    pub fn new(shaper: W) -> Self {
        Self {
            decimator: Decimator::new(),
            gain: GainSmoother::new(),
            shaper,
        }
    }

    /// Convert one oscillator block. `out` holds two channels per raw sample.
    #[inline]
    pub fn process(&mut self, raw: &[i16], gain_target: i32, settings: &PostSettings, out: &mut [f32]) {
        for (&input, frame) in raw.iter().zip(out.chunks_exact_mut(OUTPUT_CHANNELS as usize)) {
            let held = self.decimator.process(input, settings.factor, settings.mask);
            let sample = self.gain.process(held, gain_target);
            let warped = self.shaper.transform(sample);
            let blended = mix_i16(sample, warped, settings.signature);
            let value = settings.amplitude * blended as f32 / 32768.0;
            frame.fill(value);
        }
    }

    /// End of render call: keep the decimation counter bounded.
    #[inline]
    pub fn finish(&mut self) {
        self.decimator.wrap();
    }

    pub fn gain_level(&self) -> u16 {
        self.gain.level()
    }

    pub fn counter(&self) -> u32 {
        self.decimator.counter()
    }
}
