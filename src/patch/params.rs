#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of parameter slots.
pub const PARAM_COUNT: usize = 29;

/// Every parameter of the voice, in slot order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Note,
    Shape,
    Timbre,
    Color,
    EgACurve,
    EgATrigger,
    AttackA,
    DecayA,
    ModSrcVca,
    ModIntVca,
    ModSrcFm,
    ModIntFm,
    EgBCurve,
    EgBTrigger,
    AttackB,
    DecayB,
    ModSrcTimbre,
    ModIntTimbre,
    ModSrcColor,
    ModIntColor,
    Octave,
    Pitch,
    Resolution,
    SampleRate,
    ModSrcShape,
    ModIntShape,
    Signature,
    Flatten,
    Drift,
}

/// Static metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

const fn info(name: &'static str, min: i32, max: i32, default: i32) -> ParamInfo {
    ParamInfo { name, min, max, default }
}

/// Metadata indexed by slot.
pub const PARAM_INFO: [ParamInfo; PARAM_COUNT] = [
    info("Note", 0, 127, 60),
    info("Shape", 0, 46, 0),
    info("Timbre", -256, 255, 0),
    info("Color", -256, 255, 0),
    info("A:Curve", 0, 127, 127),
    info("A:Trigger", 0, 7, 0),
    info("A:Attack", 0, 127, 0),
    info("A:Decay", 0, 127, 48),
    info("VCA Src", 0, 9, 0),
    info("VCA Int", 0, 31, 15),
    info("FM Src", 0, 9, 0),
    info("FM Int", 0, 31, 0),
    info("B:Curve", 0, 127, 0),
    info("B:Trigger", 0, 7, 0),
    info("B:Attack", 0, 127, 0),
    info("B:Decay", 0, 127, 48),
    info("Tmb Src", 0, 9, 0),
    info("Tmb Int", 0, 31, 0),
    info("Col Src", 0, 9, 0),
    info("Col Int", 0, 31, 0),
    info("Octave", -2, 2, 0),
    info("Pitch", -127, 127, 0),
    info("Bits", 0, 6, 6),
    info("Rate", 0, 5, 5),
    info("Shp Src", 0, 9, 0),
    info("Shp Int", 0, 31, 0),
    info("Signature", 0, 4, 0),
    info("Flatten", 0, 1, 0),
    info("Drift", 0, 4, 0),
];

impl Param {
    pub const ALL: [Param; PARAM_COUNT] = [
        Param::Note,
        Param::Shape,
        Param::Timbre,
        Param::Color,
        Param::EgACurve,
        Param::EgATrigger,
        Param::AttackA,
        Param::DecayA,
        Param::ModSrcVca,
        Param::ModIntVca,
        Param::ModSrcFm,
        Param::ModIntFm,
        Param::EgBCurve,
        Param::EgBTrigger,
        Param::AttackB,
        Param::DecayB,
        Param::ModSrcTimbre,
        Param::ModIntTimbre,
        Param::ModSrcColor,
        Param::ModIntColor,
        Param::Octave,
        Param::Pitch,
        Param::Resolution,
        Param::SampleRate,
        Param::ModSrcShape,
        Param::ModIntShape,
        Param::Signature,
        Param::Flatten,
        Param::Drift,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static ParamInfo {
        &PARAM_INFO[self.index()]
    }

    /// Saturate `value` into this parameter's declared range.
    #[inline]
    pub fn clamp(self, value: i32) -> i32 {
        let info = self.info();
        value.clamp(info.min, info.max)
    }
}

/// Default value of every slot, in slot order.
pub fn defaults() -> [i32; PARAM_COUNT] {
    let mut values = [0; PARAM_COUNT];
    for (slot, info) in values.iter_mut().zip(PARAM_INFO.iter()) {
        *slot = info.default;
    }
    values
}
