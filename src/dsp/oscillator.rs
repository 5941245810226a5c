#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SAMPLE_RATE;

/// Number of selectable oscillator shapes.
pub const SHAPE_COUNT: i32 = 47;

/// Contract for the raw waveform generator driven by the voice.
///
/// Pitch is a code of 128 units per semitone (MIDI note << 7); timbre and
/// color are 0..32767. `render` fills `out` with 16-bit samples; a nonzero
/// entry in `sync` resets the waveform at that sample.
pub trait Oscillator: Send {
    fn set_shape(&mut self, shape: i32);
    fn set_parameters(&mut self, timbre: i32, color: i32);
    fn set_pitch(&mut self, pitch: i32);
    fn strike(&mut self);
    fn render(&mut self, sync: &[u8], out: &mut [i16]);
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Saw,
    Square,
    Triangle,
    Sine,
}

impl OscillatorWaveform {
    /// Shapes cycle through the four waveform families.
    pub fn for_shape(shape: i32) -> Self {
        match shape.rem_euclid(4) {
            0 => OscillatorWaveform::Saw,
            1 => OscillatorWaveform::Square,
            2 => OscillatorWaveform::Triangle,
            _ => OscillatorWaveform::Sine,
        }
    }
}

/// Convert a pitch code to frequency in Hz.
#[inline]
pub fn pitch_to_freq(pitch: i32) -> f32 {
    let note = pitch as f32 / 128.0;
    440.0 * 2.0_f32.powf((note - 69.0) / 12.0)
}

/// Simple phase-distortion oscillator with a sub-octave blend.
///
/// Timbre bends the phase so the first half of the cycle is traversed
/// faster (brighter as it rises), color blends in a square one octave down.
#[derive(Debug, Clone)]
pub struct VirtualAnalog {
    waveform: OscillatorWaveform,
    phase: u32,
    increment: u32,
    sub_high: bool,
    knee: f32,
    sub_mix: f32,
}

impl VirtualAnalog {
    pub fn new() -> Self {
        let mut osc = Self {
            waveform: OscillatorWaveform::Saw,
            phase: 0,
            increment: 0,
            sub_high: false,
            knee: 0.5,
            sub_mix: 0.0,
        };
        osc.set_pitch(60 << 7);
        osc
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    #[inline]
    fn warp(&self, x: f32) -> f32 {
        if x < self.knee {
            0.5 * x / self.knee
        } else {
            0.5 + 0.5 * (x - self.knee) / (1.0 - self.knee)
        }
    }
}

impl Default for VirtualAnalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Oscillator for VirtualAnalog {
    fn set_shape(&mut self, shape: i32) {
        self.waveform = OscillatorWaveform::for_shape(shape.clamp(0, SHAPE_COUNT - 1));
    }

    fn set_parameters(&mut self, timbre: i32, color: i32) {
        let timbre = timbre.clamp(0, 32767) as f32 / 32767.0;
        let color = color.clamp(0, 32767) as f32 / 32767.0;
        self.knee = 0.5 - 0.45 * timbre;
        self.sub_mix = 0.5 * color;
    }

    fn set_pitch(&mut self, pitch: i32) {
        let freq = pitch_to_freq(pitch.clamp(0, 16383));
        let ratio = (freq / SAMPLE_RATE as f32).min(0.5);
        self.increment = (ratio as f64 * 4_294_967_296.0) as u32;
    }

    fn strike(&mut self) {
        self.phase = 0;
        self.sub_high = false;
    }

    fn render(&mut self, sync: &[u8], out: &mut [i16]) {
        for (i, sample) in out.iter_mut().enumerate() {
            if sync.get(i).copied().unwrap_or(0) != 0 {
                self.phase = 0;
            }
            let previous = self.phase;
            self.phase = self.phase.wrapping_add(self.increment);
            if self.phase < previous {
                self.sub_high = !self.sub_high;
            }

            let x = self.warp(self.phase as f32 / 4_294_967_296.0);
            let wave = match self.waveform {
                OscillatorWaveform::Saw => 2.0 * x - 1.0,
                OscillatorWaveform::Square => {
                    if x < 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }
                OscillatorWaveform::Triangle => 4.0 * (x - 0.5).abs() - 1.0,
                OscillatorWaveform::Sine => (std::f32::consts::TAU * x).sin(),
            };
            let sub = if self.sub_high { 1.0 } else { -1.0 };
            let mixed = wave * (1.0 - self.sub_mix) + sub * self.sub_mix;
            *sample = (mixed * 0.8 * 32767.0) as i16;
        }
    }
}
