//! Patch state: the parameter table, the shared slots that carry it between
//! threads, factory presets and display strings.

pub mod params;
pub mod presets;
pub mod store;
pub mod strings;

pub use params::{Param, ParamInfo, PARAM_COUNT, PARAM_INFO};
pub use presets::{Preset, PRESETS, PRESET_COUNT};
pub use store::ParameterStore;
pub use strings::parameter_display;
