//! Factory presets.
//!
//! A preset is a full parameter vector replayed through the normal write
//! path. The factory bank predates the shape, signature and VCO parameters,
//! so those slots hold their defaults.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::dsp::modulate::ModSource;
use crate::patch::params::PARAM_COUNT;
use crate::synth::trigger::TriggerSource;

/// Number of factory presets.
pub const PRESET_COUNT: usize = 9;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub values: [i32; PARAM_COUNT],
}

const EG_A: i32 = ModSource::EgA as i32;
const EG_B: i32 = ModSource::EgB as i32;
const SUM: i32 = ModSource::Sum as i32;
const MUL: i32 = ModSource::Mul as i32;
const A_MINUS_B: i32 = ModSource::AMinusB as i32;
const A_MINUS_AB: i32 = ModSource::AMinusAb as i32;
const A_PLUS_B_MINUS_AB: i32 = ModSource::APlusBMinusAb as i32;
const A_PLUS_B_MINUS_2AB: i32 = ModSource::APlusBMinus2Ab as i32;

const GATE_ON: i32 = TriggerSource::GateOn as i32;
const A_ATTACK_END: i32 = TriggerSource::AAttackEnd as i32;
const B_END: i32 = TriggerSource::BEnd as i32;
const A_DECAY_B_END: i32 = TriggerSource::ADecayBEnd as i32;

// shape source, shape depth, signature, flatten, drift
const VCO_DEFAULTS: [i32; 5] = [0, 0, 0, 0, 0];

const fn bank_entry(name: &'static str, head: [i32; 24]) -> Preset {
    let mut values = [0; PARAM_COUNT];
    let mut i = 0;
    while i < head.len() {
        values[i] = head[i];
        i += 1;
    }
    while i < PARAM_COUNT {
        values[i] = VCO_DEFAULTS[i - head.len()];
        i += 1;
    }
    Preset { name, values }
}

// Row layout:
//   note, shape, timbre, color,
//   A curve, A trigger, A attack, A decay,
//   VCA source, VCA depth, FM source, FM depth,
//   B curve, B trigger, B attack, B decay,
//   timbre source, timbre depth, color source, color depth,
//   octave, pitch, bits, rate
pub const PRESETS: [Preset; PRESET_COUNT] = [
    bank_entry(
        "Init",
        [
            60, 0, 0, 0, //
            127, GATE_ON, 0, 45, //
            EG_A, 31, EG_A, 0, //
            0, GATE_ON, 30, 45, //
            EG_B, 0, EG_B, 0, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "SpcVoice",
        [
            45, 21, -62, 22, //
            74, GATE_ON, 80, 117, //
            EG_A, 31, EG_A, 0, //
            0, B_END, 40, 40, //
            EG_A, 27, MUL, 15, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "BrokenAI",
        [
            60, 40, -40, -47, //
            20, GATE_ON, 22, 94, //
            EG_A, 17, EG_A, 0, //
            0, GATE_ON, 75, 80, //
            EG_B, 11, EG_B, 0, //
            -1, 0, 6, 5,
        ],
    ),
    bank_entry(
        "SuperSaw",
        [
            60, 14, -128, -163, //
            127, GATE_ON, 0, 85, //
            EG_A, 31, EG_A, 0, //
            0, GATE_ON, 0, 68, //
            A_MINUS_AB, 31, EG_B, 0, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "Shaku",
        [
            60, 29, 46, -100, //
            0, GATE_ON, 0, 93, //
            EG_A, 31, EG_B, 0, //
            0, B_END, 40, 40, //
            EG_B, 15, A_MINUS_AB, 7, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "PhazBass",
        [
            48, 17, -150, -160, //
            85, GATE_ON, 0, 50, //
            EG_A, 31, EG_A, 0, //
            0, B_END, 30, 30, //
            EG_B, 5, EG_A, 17, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "Maj7+3rd",
        [
            60, 9, 124, 170, //
            127, GATE_ON, 70, 113, //
            SUM, 31, EG_A, 0, //
            127, A_ATTACK_END, 65, 76, //
            EG_B, 0, EG_B, 0, //
            0, 0, 6, 5,
        ],
    ),
    bank_entry(
        "Robot",
        [
            60, 15, -52, 152, //
            37, GATE_ON, 85, 75, //
            SUM, 31, A_PLUS_B_MINUS_2AB, 7, //
            39, A_ATTACK_END, 30, 69, //
            A_MINUS_B, 13, A_PLUS_B_MINUS_AB, 5, //
            -1, 0, 6, 5,
        ],
    ),
    bank_entry(
        "Laughing",
        [
            60, 27, 9, 41, //
            77, GATE_ON, 57, 94, //
            A_MINUS_AB, 31, A_MINUS_AB, 7, //
            127, A_DECAY_B_END, 39, 38, //
            EG_A, 9, MUL, 7, //
            0, 0, 6, 5,
        ],
    ),
];

pub fn preset(index: usize) -> Option<&'static Preset> {
    PRESETS.get(index)
}

pub fn preset_name(index: usize) -> Option<&'static str> {
    preset(index).map(|p| p.name)
}
