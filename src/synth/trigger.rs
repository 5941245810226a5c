//! Per-block trigger levels for the two envelopes.
//!
//! Each envelope picks a trigger source. The evaluator turns that choice into
//! an integer level once per render call; the envelope's own edge detector
//! fires on a rising level. Sources that watch an envelope read a snapshot
//! of both segments taken before either envelope moves, so A and B see the
//! same world regardless of which one renders first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::envelope::Segment;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Gate count: fires whenever another note goes down.
    GateOn,
    /// Negated gate count: fires whenever a note is released.
    GateOff,
    /// Envelope A has finished its decay.
    AEnd,
    /// Envelope A has finished its attack.
    AAttackEnd,
    /// Envelope B has finished its decay.
    BEnd,
    /// Envelope B has finished its attack.
    BAttackEnd,
    /// A is decaying while B is done.
    ADecayBEnd,
    /// B is decaying while A is done.
    BDecayAEnd,
}

impl TriggerSource {
    pub const COUNT: usize = 8;

    pub const ALL: [TriggerSource; Self::COUNT] = [
        TriggerSource::GateOn,
        TriggerSource::GateOff,
        TriggerSource::AEnd,
        TriggerSource::AAttackEnd,
        TriggerSource::BEnd,
        TriggerSource::BAttackEnd,
        TriggerSource::ADecayBEnd,
        TriggerSource::BDecayAEnd,
    ];

    /// Source for a parameter value. Out of range values saturate.
    pub fn from_index(value: i32) -> Self {
        Self::ALL[value.clamp(0, Self::COUNT as i32 - 1) as usize]
    }
}

/// Segments of both envelopes at the start of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSnapshot {
    pub a: Segment,
    pub b: Segment,
}

/// Trigger level for `source` given the gate count and envelope snapshot.
pub fn evaluate(source: TriggerSource, gate: i32, snapshot: SegmentSnapshot) -> i32 {
    let is = |segment: Segment, expected: Segment| (segment == expected) as i32;
    match source {
        TriggerSource::GateOn => gate,
        TriggerSource::GateOff => -gate,
        TriggerSource::AEnd => is(snapshot.a, Segment::Dead),
        TriggerSource::AAttackEnd => is(snapshot.a, Segment::Decay),
        TriggerSource::BEnd => is(snapshot.b, Segment::Dead),
        TriggerSource::BAttackEnd => is(snapshot.b, Segment::Decay),
        TriggerSource::ADecayBEnd => is(snapshot.a, Segment::Decay) * is(snapshot.b, Segment::Dead),
        TriggerSource::BDecayAEnd => is(snapshot.b, Segment::Decay) * is(snapshot.a, Segment::Dead),
    }
}
