//! Smoothed fixed-point gain stage.

/*
One-Pole Gain Smoothing
=======================

The amplitude target only changes once per oscillator block, which would
leave audible steps ("zipper noise") if it were applied directly. A one-pole
low-pass filter tracks the target instead:

    smoothed += (target - smoothed) >> 4

Each sample closes 1/16 of the remaining distance, so the gain settles to
within 1% of a new target in about 70 samples (~1.5ms at 48kHz).

The multiply uses the gain *before* the update, so a sample is always scaled
by the value the previous sample left behind:

    out      = sample · smoothed >> 16
    smoothed = smoothed + ((target - smoothed) >> 4)

The shift is arithmetic, so a falling gain moves down by at least one step
per sample and reaches its target exactly.
*/

/// Shift of the one-pole smoother: each sample moves 1/16 of the way.
pub const SMOOTHING_SHIFT: u32 = 4;

#[derive(Debug, Clone, Default)]
pub struct GainSmoother {
    level: u16,
}

impl GainSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale `sample` by the current level, then step towards `target`.
    #[inline]
    pub fn process(&mut self, sample: i16, target: i32) -> i16 {
        let out = (sample as i32 * self.level as i32) >> 16;
        let level = self.level as i32;
        self.level = (level + ((target - level) >> SMOOTHING_SHIFT)) as u16;
        out as i16
    }

    pub fn level(&self) -> u16 {
        self.level
    }
}
