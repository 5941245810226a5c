//! Envelope modulation matrix.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Modulation Matrix
=================

Two envelopes, A and B, each produce a 16-bit value per tick. The matrix
combines them with one of ten operators and routes the result, scaled by a
per-destination depth, into a parameter.

Vocabulary
----------

  source      The operator combining A and B. Treating A and B as values in
              0..1 (scaled to 0..65535), the operators are simple algebra:

                  EG A      a
                  EG B      b
                  A + B     (a + b) / 2
                  A * B     a·b
                  A - B     a - b
                  B - A     b - a
                  A - A*B   a - a·b         (A ducked by B)
                  B - A*B   b - a·b         (B ducked by A)
                  A+B-A*B   a + b - a·b     (probabilistic OR)
                  A+B-2AB   a + b - 2·a·b   (XOR-like: high when they differ)

              Products are normalised by shifting right 16 bits, so a·b
              stays in 0..65535. Everything is clamped to 0..65535 after.

  depth       A 0..31 integer. The combined value is multiplied by the depth
              and shifted down, so the shift amount sets the destination's
              full-scale range.

  base        The destination's un-modulated value (a knob position).


Destination Scaling
-------------------

    timbre, color   base + (m · depth >> 6)        clamp 0..32767
    pitch (FM)      m · depth >> 7                 added to pitch code
    shape           base + (m · depth >> 16)       clamp 0..46
    amplitude       (m · depth >> 5) + ((31 - depth) << 10 while gate held)

The amplitude path crossfades between "envelope controls the level" at depth
31 and "gate controls the level" at depth 0.
*/

/// Maximum modulation depth.
pub const MAX_DEPTH: i32 = 31;

/// Operator combining envelope A and B into one modulation signal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModSource {
    EgA,
    EgB,
    Sum,
    Mul,
    AMinusB,
    BMinusA,
    AMinusAb,
    BMinusAb,
    APlusBMinusAb,
    APlusBMinus2Ab,
}

impl ModSource {
    pub const COUNT: usize = 10;

    pub const ALL: [ModSource; Self::COUNT] = [
        ModSource::EgA,
        ModSource::EgB,
        ModSource::Sum,
        ModSource::Mul,
        ModSource::AMinusB,
        ModSource::BMinusA,
        ModSource::AMinusAb,
        ModSource::BMinusAb,
        ModSource::APlusBMinusAb,
        ModSource::APlusBMinus2Ab,
    ];

    /// Source for a parameter value. Out of range values saturate.
    pub fn from_index(value: i32) -> Self {
        Self::ALL[value.clamp(0, Self::COUNT as i32 - 1) as usize]
    }

    /// Combine envelope values `a` and `b`.
    #[inline]
    pub fn combine(self, a: u16, b: u16) -> u16 {
        let a = a as i64;
        let b = b as i64;
        let combined = match self {
            ModSource::EgA => a,
            ModSource::EgB => b,
            ModSource::Sum => (a + b) / 2,
            ModSource::Mul => (a * b) >> 16,
            ModSource::AMinusB => a - b,
            ModSource::BMinusA => b - a,
            ModSource::AMinusAb => a - ((a * b) >> 16),
            ModSource::BMinusAb => b - ((a * b) >> 16),
            ModSource::APlusBMinusAb => a + b - ((a * b) >> 16),
            ModSource::APlusBMinus2Ab => a + b - ((a * b) >> 15),
        };
        combined.clamp(0, 0xffff) as u16
    }
}

/// Clamp a depth parameter into 0..=31.
#[inline]
pub fn depth(value: i32) -> i32 {
    value.clamp(0, MAX_DEPTH)
}

/// Modulated timbre or color: base plus scaled modulation, 0..32767.
#[inline]
pub fn timbre_color(base: i32, modulation: u16, depth: i32) -> i32 {
    (base + (modulation as i32 * depth >> 6)).clamp(0, 32767)
}

/// Pitch offset contributed by FM modulation.
#[inline]
pub fn fm_offset(modulation: u16, depth: i32) -> i32 {
    modulation as i32 * depth >> 7
}

/// Modulated oscillator shape index.
#[inline]
pub fn shape(base: i32, modulation: u16, depth: i32, max_shape: i32) -> i32 {
    (base + (modulation as i32 * depth >> 16)).clamp(0, max_shape)
}

/// Target gain for the amplitude smoother.
///
/// At full depth the envelope alone sets the level; as depth falls, a fixed
/// level while the gate is held makes up the difference.
#[inline]
pub fn vca_gain(modulation: u16, depth: i32, gate_held: bool) -> i32 {
    let mut gain = modulation as i32 * depth >> 5;
    if gate_held {
        gain += (MAX_DEPTH - depth) << 10;
    }
    gain
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBES: [u16; 7] = [0, 1, 255, 16384, 32768, 49151, 65535];

    #[test]
    fn single_envelope_sources_pass_through() {
        for &a in &PROBES {
            for &b in &PROBES {
                assert_eq!(ModSource::EgA.combine(a, b), a);
                assert_eq!(ModSource::EgB.combine(a, b), b);
            }
        }
    }

    #[test]
    fn operators_are_deterministic_and_symmetric_where_expected() {
        for &source in &ModSource::ALL {
            for &a in &PROBES {
                for &b in &PROBES {
                    assert_eq!(source.combine(a, b), source.combine(a, b));
                }
            }
        }
        for &a in &PROBES {
            for &b in &PROBES {
                assert_eq!(ModSource::Sum.combine(a, b), ModSource::Sum.combine(b, a));
                assert_eq!(ModSource::Mul.combine(a, b), ModSource::Mul.combine(b, a));
                assert_eq!(
                    ModSource::APlusBMinus2Ab.combine(a, b),
                    ModSource::APlusBMinus2Ab.combine(b, a)
                );
                // A - B and B - A are negations before the clamp, so at most
                // one of them is nonzero
                let ab = ModSource::AMinusB.combine(a, b);
                let ba = ModSource::BMinusA.combine(a, b);
                assert!(ab == 0 || ba == 0);
                assert_eq!(ab as i32 - ba as i32, a as i32 - b as i32);
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(ModSource::Sum.combine(65535, 65535), 65535);
        assert_eq!(ModSource::Mul.combine(65535, 65535), 65534);
        assert_eq!(ModSource::Mul.combine(32768, 32768), 16384);
        assert_eq!(ModSource::AMinusAb.combine(65535, 32768), 65535 - 32767);
        assert_eq!(ModSource::APlusBMinusAb.combine(65535, 65535), 65535);
        // the normalised product truncates, leaving a small residue at full scale
        assert_eq!(ModSource::APlusBMinus2Ab.combine(65535, 65535), 2);
        assert_eq!(ModSource::APlusBMinus2Ab.combine(65535, 0), 65535);
    }

    #[test]
    fn from_index_saturates() {
        assert_eq!(ModSource::from_index(-1), ModSource::EgA);
        assert_eq!(ModSource::from_index(3), ModSource::Mul);
        assert_eq!(ModSource::from_index(99), ModSource::APlusBMinus2Ab);
    }

    #[test]
    fn destination_scaling() {
        assert_eq!(timbre_color(0, 65535, 0), 0);
        assert_eq!(timbre_color(0, 65535, 31), 31743);
        assert_eq!(timbre_color(32704, 65535, 31), 32767);
        assert_eq!(fm_offset(65535, 31), 15871);
        assert_eq!(shape(10, 65535, 31, 46), 40);
        assert_eq!(shape(40, 65535, 31, 46), 46);
        assert_eq!(vca_gain(0, 15, true), 16 << 10);
        assert_eq!(vca_gain(0, 15, false), 0);
        assert_eq!(vca_gain(65535, 31, false), 63487);
    }
}
