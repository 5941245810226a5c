//! Sample-rate and bit-depth reduction.

/*
Decimation and Bit Reduction
============================

Two lo-fi stages that share a single sample-and-hold.

Vocabulary
----------

  decimation    Reading only every Nth input sample and repeating it for the
                N-1 samples in between. At 48kHz, N = 12 gives an effective
                4kHz sample rate with all the aliasing that implies.

  hold          The last sample that was read. Output between reads is the
                held sample, bit for bit.

  bit mask      Bitwise AND with a mask that keeps only the top bits of the
                16-bit sample. 0xf000 keeps 4 bits, 0xffff keeps all 16.

  counter       A free-running sample counter. It is not reset by notes,
                so the decimation grid stays continuous across render calls.
                It wraps modulo 24, which every supported factor divides.


Tables
------

    Resolution knob   0      1      2      3      4      5      6
    mask              c000   e000   f000   f800   ff00   fff0   ffff
    bits              2      3      4      5      8      12     16

    Rate knob         0     1     2     3     4     5
    factor            12    8     6     3     2     1
    rate              4K    6K    8K    16K   24K   48K

Masking an already masked sample changes nothing, and the all-ones mask is
the identity, so the stage is transparent at full resolution.
*/

/// Bit masks selected by the resolution parameter.
pub const BIT_REDUCTION_MASKS: [u16; 7] = [0xc000, 0xe000, 0xf000, 0xf800, 0xff00, 0xfff0, 0xffff];

/// Hold lengths selected by the sample-rate parameter.
pub const DECIMATION_FACTORS: [u32; 6] = [12, 8, 6, 3, 2, 1];

/// The hold counter wraps at this period; every factor divides it.
pub const COUNTER_PERIOD: u32 = 24;

/// Keep only the bits set in `mask`.
#[inline]
pub fn reduce_bits(sample: i16, mask: u16) -> i16 {
    ((sample as u16) & mask) as i16
}

/// Mask for a resolution parameter value. Out of range values saturate.
#[inline]
pub fn mask_for(resolution: i32) -> u16 {
    BIT_REDUCTION_MASKS[resolution.clamp(0, BIT_REDUCTION_MASKS.len() as i32 - 1) as usize]
}

/// Hold length for a sample-rate parameter value. Out of range values
/// saturate.
#[inline]
pub fn factor_for(rate: i32) -> u32 {
    DECIMATION_FACTORS[rate.clamp(0, DECIMATION_FACTORS.len() as i32 - 1) as usize]
}

/// Sample-and-hold decimator with bit reduction on the read.
#[derive(Debug, Clone, Default)]
pub struct Decimator {
    counter: u32,
    held: i16,
}

impl Decimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample; returns the held, bit-reduced sample.
    #[inline]
    pub fn process(&mut self, raw: i16, factor: u32, mask: u16) -> i16 {
        if self.counter % factor == 0 {
            self.held = reduce_bits(raw, mask);
        }
        self.counter += 1;
        self.held
    }

    /// Fold the counter back into its period. Called at the end of a render
    /// call so it never overflows.
    #[inline]
    pub fn wrap(&mut self) {
        self.counter %= COUNTER_PERIOD;
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_idempotent() {
        for &mask in &BIT_REDUCTION_MASKS {
            for x in (i16::MIN..=i16::MAX).step_by(251) {
                let once = reduce_bits(x, mask);
                assert_eq!(reduce_bits(once, mask), once);
            }
        }
    }

    #[test]
    fn full_mask_is_identity() {
        for x in (i16::MIN..=i16::MAX).step_by(13) {
            assert_eq!(reduce_bits(x, 0xffff), x);
        }
    }

    #[test]
    fn held_runs_are_bit_identical() {
        for &factor in &DECIMATION_FACTORS {
            let mut dec = Decimator::new();
            let output: Vec<i16> = (0..96).map(|i| dec.process(i as i16 * 300 - 14_000, factor, 0xffff)).collect();
            for run in output.chunks(factor as usize) {
                assert!(run.iter().all(|&s| s == run[0]), "factor {factor}: {run:?}");
            }
            // consecutive runs read fresh samples
            if factor > 1 {
                assert_ne!(output[0], output[factor as usize]);
            }
        }
    }

    #[test]
    fn counter_wrap_keeps_phase() {
        for &factor in &DECIMATION_FACTORS {
            let mut wrapped = Decimator::new();
            let mut free = Decimator::new();
            for block in 0..10 {
                for i in 0..37 {
                    let raw = ((block * 37 + i) * 97 % 4000) as i16;
                    assert_eq!(wrapped.process(raw, factor, 0xfff0), free.process(raw, factor, 0xfff0));
                }
                wrapped.wrap();
            }
            assert!(wrapped.counter() < COUNTER_PERIOD);
        }
    }

    #[test]
    fn parameter_lookups_saturate() {
        assert_eq!(mask_for(0), 0xc000);
        assert_eq!(mask_for(6), 0xffff);
        assert_eq!(mask_for(42), 0xffff);
        assert_eq!(factor_for(-3), 12);
        assert_eq!(factor_for(5), 1);
    }
}
