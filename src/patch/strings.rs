//! Display text for enumerated parameters.
//!
//! Only parameters whose values name something (shapes, sources, triggers,
//! rates) have strings; everything else is shown as a number by the host.

use crate::patch::params::Param;

pub const SHAPE_NAMES: [&str; 47] = [
    "CS SAW", "Morph", "Saw Sqr", "Fold", "Buzz", "Sqr Sub", "Saw Sub", "SqrSync", "SawSync", "Saw x 3",
    "Sqr x 3", "Tri x 3", "Sin x 3", "Ring", "SprSaws", "SawComb", "Toy*", "Phz LPF", "Phz PkF", "Phz BPF",
    "Phz HPF", "Vo sim", "Vowel", "Vwl FOF", "AddHarm", "FM  ", "FB FM", "Chaotic", "Plucked", "Bowed",
    "Blown", "Fluted", "Bell", "Drum", "Kick", "Cymbal", "Snare", "WaveTbl", "WaveMap", "WavLine",
    "WvTblx4", "FltNois", "Twin Q", "Clocked", "GrnlrCld", "PartclNz", "QPSK",
];

pub const BITS_NAMES: [&str; 7] = [" 2", " 3", " 4", " 6", " 8", "12", "16"];

pub const RATE_NAMES: [&str; 6] = [" 4K", " 6K", " 8K", "16K", "24K", "48K"];

pub const OFF_ON_NAMES: [&str; 2] = ["OFF ", "ON "];

pub const INTENSITY_NAMES: [&str; 5] = ["OFF ", "   1", "   2", "   3", "FULL"];

pub const MOD_SOURCE_NAMES: [&str; 10] = [
    " EG A", " EG B", " A + B", " A * B", " A - B", " B - A", "A - A*B", "B - A*B", "A+B-A*B", "A+B-2AB",
];

pub const TRIGGER_NAMES: [&str; 8] = [
    "G:ON", "G:OFF", "A:EODCY", "A:EOATK", "B:EODCY", "B:EOATK", "A:D&B:E", "B:D&A:E",
];

fn lookup(table: &'static [&'static str], value: i32) -> Option<&'static str> {
    usize::try_from(value).ok().and_then(|i| table.get(i).copied())
}

/// Display text for `value` of `param`, if the parameter has any.
pub fn parameter_display(param: Param, value: i32) -> Option<&'static str> {
    let table: &'static [&'static str] = match param {
        Param::Shape => &SHAPE_NAMES,
        Param::Resolution => &BITS_NAMES,
        Param::SampleRate => &RATE_NAMES,
        Param::Flatten => &OFF_ON_NAMES,
        Param::Signature | Param::Drift => &INTENSITY_NAMES,
        Param::ModSrcVca | Param::ModSrcFm | Param::ModSrcTimbre | Param::ModSrcColor | Param::ModSrcShape => {
            &MOD_SOURCE_NAMES
        }
        Param::EgATrigger | Param::EgBTrigger => &TRIGGER_NAMES,
        _ => return None,
    };
    lookup(table, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_declared_ranges() {
        for param in Param::ALL {
            let info = param.info();
            let first = parameter_display(param, info.min);
            for value in info.min..=info.max {
                assert_eq!(parameter_display(param, value).is_some(), first.is_some(), "{}", info.name);
            }
        }
    }

    #[test]
    fn out_of_range_values_have_no_text() {
        assert_eq!(parameter_display(Param::Shape, 47), None);
        assert_eq!(parameter_display(Param::Shape, -1), None);
        assert_eq!(parameter_display(Param::Flatten, 2), None);
        assert_eq!(parameter_display(Param::EgATrigger, 8), None);
    }

    #[test]
    fn known_strings() {
        assert_eq!(parameter_display(Param::Shape, 0), Some("CS SAW"));
        assert_eq!(parameter_display(Param::Shape, 46), Some("QPSK"));
        assert_eq!(parameter_display(Param::Resolution, 6), Some("16"));
        assert_eq!(parameter_display(Param::SampleRate, 0), Some(" 4K"));
        assert_eq!(parameter_display(Param::Drift, 4), Some("FULL"));
        assert_eq!(parameter_display(Param::ModSrcShape, 9), Some("A+B-2AB"));
        assert_eq!(parameter_display(Param::EgBTrigger, 6), Some("A:D&B:E"));
        assert_eq!(parameter_display(Param::Timbre, 0), None);
    }
}
