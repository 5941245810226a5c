//! Oscillator pitch computation.
//!
//! Pitch codes carry 128 units per semitone, so MIDI note 60 is 7680 and an
//! octave is 1536. The final code is saturated into the oscillator's valid
//! range rather than wrapped.

/// Highest pitch code the oscillator accepts.
pub const MAX_PITCH: i32 = 16383;

/// Pitch code units per semitone.
pub const SEMITONE: i32 = 128;

/// Pitch code units per octave.
pub const OCTAVE: i32 = 12 * SEMITONE;

/// Above this code the flatten option starts pulling pitch down.
const FLATTEN_KNEE: i32 = 60 * SEMITONE;

/// Inputs to one pitch evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PitchInputs {
    /// Note-derived base code (note << 7).
    pub base: i32,
    /// Fine pitch parameter, -127..127 code units.
    pub fine: i32,
    /// Octave parameter, -2..2.
    pub octave: i32,
    /// Offset from the jitter source.
    pub jitter: i32,
    /// Offset from the FM modulation destination.
    pub fm: i32,
    /// Emulate a VCO going flat in the upper register.
    pub flatten: bool,
}

/// Combine all pitch contributions into one saturated code.
#[inline]
pub fn compute(inputs: &PitchInputs) -> i32 {
    let mut pitch = inputs.base;
    pitch += inputs.jitter;
    pitch += inputs.fine + inputs.octave * OCTAVE;
    pitch += inputs.fm;
    if inputs.flatten {
        pitch = flatten(pitch);
    }
    pitch.clamp(0, MAX_PITCH)
}

/// Pull codes above middle C flat, quadratically with distance.
///
/// At the top of the range this is about four and a half semitones.
#[inline]
pub fn flatten(pitch: i32) -> i32 {
    let over = (pitch - FLATTEN_KNEE).clamp(0, MAX_PITCH);
    pitch - (over * over >> 17)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_contributions() {
        let inputs = PitchInputs {
            base: 60 << 7,
            fine: 12,
            octave: -1,
            jitter: 3,
            fm: 100,
            flatten: false,
        };
        assert_eq!(compute(&inputs), 7680 + 12 - 1536 + 3 + 100);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let high = PitchInputs {
            base: 127 << 7,
            octave: 2,
            fm: 15871,
            ..Default::default()
        };
        assert_eq!(compute(&high), MAX_PITCH);

        let low = PitchInputs {
            base: 0,
            octave: -2,
            fine: -127,
            ..Default::default()
        };
        assert_eq!(compute(&low), 0);
    }

    #[test]
    fn flatten_leaves_low_register_alone() {
        for pitch in (0..=FLATTEN_KNEE).step_by(64) {
            assert_eq!(flatten(pitch), pitch);
        }
    }

    #[test]
    fn flatten_is_monotonic_and_flat() {
        let mut previous = flatten(FLATTEN_KNEE);
        for pitch in FLATTEN_KNEE + 1..=MAX_PITCH {
            let flat = flatten(pitch);
            assert!(flat <= pitch);
            assert!(flat >= previous);
            previous = flat;
        }
        let drop = MAX_PITCH - flatten(MAX_PITCH);
        assert!(drop > 4 * SEMITONE && drop < 5 * SEMITONE, "drop {drop}");
    }
}
