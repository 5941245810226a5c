use crate::dsp::curve::CurveTable;
use crate::dsp::fixed::{interpolate824, mix_u16};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Attack/Decay Envelope
=====================

A two-segment envelope that lives as a phase accumulator rather than a level
that creeps towards a target. The phase position alone decides how far
through a segment we are; the output is a blend between the segment's start
and end values.

Vocabulary
----------

  segment     Attack, Decay or Dead. Attack heads to 65535, Decay to 0,
              Dead sits still (its increment is always 0).

  phase       Unsigned 32-bit position inside the current segment. Starts
              at 0 and walks up by `increment` every tick.

  increment   Per-tick phase step, taken from the CurveTable for the
              segment's 0..127 time knob.

  trigger     An integer level handed in on every tick. A rising edge
              (level went up since the last tick) restarts Attack.

  curve       Linear: the top 16 bits of phase are the blend weight.
              Exponential: phase goes through the 1 - e^(-4x) table first,
              which front-loads the movement.

  loop        With looping enabled, reaching Dead immediately restarts
              Attack, turning the envelope into a free-running LFO.


Segment Completion
------------------

There is no comparison against a target level. A segment is complete on the
tick where adding the increment wraps the phase:

    phase = phase + increment   (mod 2^32)
    done  = phase < increment

That happens after exactly ceil(2^32 / increment) ticks, with no rounding
drift. On that tick the value snaps to the segment's end value and the next
segment starts at phase 0.


The State Machine
-----------------

    ┌────────┐ wrap  ┌───────┐ wrap  ┌──────┐
    │ Attack │ ────→ │ Decay │ ────→ │ Dead │ ──┐
    └────────┘       └───────┘       └──────┘   │ loop
        ↑                                       │
        └───────────────────────────────────────┘
        ↑
        └── rising trigger edge, from any segment

Retriggering starts the new Attack from the current value, not from 0, so a
retrigger mid-decay glides back up without a click.
*/

/// Current phase of the envelope state machine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Attack,
    Decay,
    Dead,
}

impl Segment {
    const COUNT: usize = 3;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Segment that follows this one. Dead is terminal.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Segment::Attack => Segment::Decay,
            Segment::Decay | Segment::Dead => Segment::Dead,
        }
    }
}

/// Interpolation law used inside a segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Exponential,
    Linear,
}

/// Curve and loop behaviour selected by a curve knob.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePolicy {
    pub curve: Curve,
    pub looping: bool,
}

/// Knob zones of 32 values each, in knob order.
const CURVE_POLICIES: [CurvePolicy; 4] = [
    CurvePolicy { curve: Curve::Exponential, looping: false },
    CurvePolicy { curve: Curve::Exponential, looping: true },
    CurvePolicy { curve: Curve::Linear, looping: true },
    CurvePolicy { curve: Curve::Linear, looping: false },
];

impl CurvePolicy {
    /// Map a 0..127 curve knob onto a policy.
    pub fn from_knob(value: i32) -> Self {
        CURVE_POLICIES[(value.clamp(0, 127) >> 5) as usize]
    }
}

pub struct Envelope {
    // Per-segment configuration
    increment: [u32; Segment::COUNT],
    target: [u16; Segment::COUNT],

    // Runtime state
    segment: Segment,
    phase: u32,
    start: u16, // value at segment entry
    end: u16,   // value the segment heads for
    value: u16,

    prev_trigger: i32,

    curve: Curve,
    looping: bool,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            increment: [0; Segment::COUNT],
            target: [65535, 0, 0],
            segment: Segment::Dead,
            phase: 0,
            start: 0,
            end: 0,
            value: 0,
            prev_trigger: 0,
            curve: Curve::Exponential,
            looping: false,
        }
    }

    /// Recompute Attack and Decay increments from their time knobs.
    ///
    /// Always rewrites both, so applying it twice or out of order with the
    /// knob writes leaves the same result.
    pub fn update(&mut self, attack: i32, decay: i32, table: &CurveTable) {
        self.set_increments(table.increment(attack), table.increment(decay));
    }

    /// Set raw Attack and Decay phase increments.
    pub fn set_increments(&mut self, attack: u32, decay: u32) {
        self.increment[Segment::Attack.index()] = attack;
        self.increment[Segment::Decay.index()] = decay;
    }

    pub fn set_policy(&mut self, policy: CurvePolicy) {
        self.curve = policy.curve;
        self.looping = policy.looping;
    }

    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Jump to `segment`, starting from the current value.
    pub fn trigger(&mut self, segment: Segment) {
        if segment == Segment::Dead {
            self.value = 0;
        }
        self.start = self.value;
        self.end = self.target[segment.index()];
        self.segment = segment;
        self.phase = 0;
    }

    /// Advance one tick. `trigger` is a level; a rising edge restarts Attack.
    pub fn render(&mut self, trigger: i32, table: &CurveTable) -> u16 {
        let increment = self.increment[self.segment.index()];
        self.phase = self.phase.wrapping_add(increment);
        if self.phase < increment {
            self.value = self.end;
            self.trigger(self.segment.next());
        }

        if self.increment[self.segment.index()] != 0 {
            let weight = match self.curve {
                Curve::Linear => (self.phase >> 16) as u16,
                Curve::Exponential => interpolate824(table.expo(), self.phase),
            };
            self.value = mix_u16(self.start, self.end, weight);
        } else if self.looping {
            self.trigger(Segment::Attack);
        }

        if trigger - self.prev_trigger > 0 {
            self.trigger(Segment::Attack);
        }
        self.prev_trigger = trigger;

        self.value
    }

    /// Forget the last trigger level. Segment state is untouched.
    pub fn reset(&mut self) {
        self.prev_trigger = 0;
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
