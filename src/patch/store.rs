//! Shared parameter slots.
//!
//! The slots mirror the latest write so either thread can read parameters
//! back. Every slot is its own atomic, so a reader can observe a mix of old
//! and new values across slots but never a torn value within one. The voice
//! does not run side effects from the slots: writes from another thread also
//! travel through the control queue, in order with note events.

use std::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use tracing::{debug, info, warn};

use crate::patch::params::{defaults, Param, PARAM_COUNT};
use crate::patch::presets::{self, Preset};

#[derive(Debug)]
pub struct ParameterStore {
    slots: [AtomicI32; PARAM_COUNT],
    preset: AtomicU8,
}

impl ParameterStore {
    /// Store holding every parameter's default.
    pub fn new() -> Self {
        let values = defaults();
        Self {
            slots: std::array::from_fn(|i| AtomicI32::new(values[i])),
            preset: AtomicU8::new(0),
        }
    }

    #[inline]
    pub fn load(&self, param: Param) -> i32 {
        self.slots[param.index()].load(Ordering::Relaxed)
    }

    /// Write a value as given. Range checks belong to the caller.
    #[inline]
    pub fn store(&self, param: Param, value: i32) {
        self.slots[param.index()].store(value, Ordering::Relaxed);
    }

    /// Copy every slot.
    #[inline]
    pub fn snapshot(&self) -> [i32; PARAM_COUNT] {
        std::array::from_fn(|i| self.slots[i].load(Ordering::Relaxed))
    }

    /// Validate a write from a control surface without storing it.
    ///
    /// Unknown indices are dropped, values are saturated into the
    /// parameter's range.
    pub fn check(&self, index: usize, value: i32) -> Option<(Param, i32)> {
        let Some(param) = Param::from_index(index) else {
            warn!(index, value, "ignoring write to unknown parameter");
            return None;
        };
        let clamped = param.clamp(value);
        if clamped != value {
            debug!(param = param.info().name, value, clamped, "parameter value clamped");
        }
        Some((param, clamped))
    }

    /// Checked write. Returns what was stored.
    pub fn write(&self, index: usize, value: i32) -> Option<(Param, i32)> {
        let (param, value) = self.check(index, value)?;
        self.store(param, value);
        Some((param, value))
    }

    /// Write every slot of a factory preset. Out of range indices do nothing.
    pub fn load_preset(&self, index: usize) -> Option<&'static Preset> {
        let preset = presets::preset(index)?;
        for (param, &value) in Param::ALL.iter().zip(preset.values.iter()) {
            self.store(*param, value);
        }
        self.preset.store(index as u8, Ordering::Relaxed);
        info!(index, name = preset.name, "loaded preset");
        Some(preset)
    }

    pub fn preset_index(&self) -> u8 {
        self.preset.load(Ordering::Relaxed)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
