//! Control-thread endpoint for a voice running on the audio thread.
//!
//! Every message travels through one wait-free ring buffer, so a program
//! change followed by a note is applied in that order. Parameter and preset
//! writes also land in the shared atomic slots once queued, for read-back.

use std::sync::Arc;

use rtrb::{Producer, RingBuffer};

use crate::dsp::distortion::Waveshaper;
use crate::dsp::jitter::JitterSource;
use crate::dsp::oscillator::Oscillator;
use crate::error::{ControlError, InitError};
use crate::patch::params::Param;
use crate::patch::presets;
use crate::patch::store::ParameterStore;
use crate::synth::message::SynthMessage;
use crate::synth::voice::{RuntimeDesc, Synth};

pub struct SynthHandle {
    params: Arc<ParameterStore>,
    tx: Producer<SynthMessage>,
}

impl SynthHandle {
    /// Queue a message for the voice.
    pub fn send(&mut self, message: SynthMessage) -> Result<(), ControlError> {
        match message {
            SynthMessage::SetParameter { index, value } => self.set_parameter(index, value),
            SynthMessage::LoadPreset { index } => self.load_preset(index),
            event => self.push(event),
        }
    }

    /// Clamp and queue a parameter write. Unknown indices are ignored.
    ///
    /// The slot is only updated once the write is queued, so read-back never
    /// shows a value the voice will not see.
    pub fn set_parameter(&mut self, index: usize, value: i32) -> Result<(), ControlError> {
        let Some((param, value)) = self.params.check(index, value) else {
            return Ok(());
        };
        self.push(SynthMessage::SetParameter { index, value })?;
        self.params.store(param, value);
        Ok(())
    }

    pub fn set(&mut self, param: Param, value: i32) -> Result<(), ControlError> {
        self.set_parameter(param.index(), value)
    }

    pub fn get_parameter(&self, index: usize) -> Option<i32> {
        Param::from_index(index).map(|param| self.params.load(param))
    }

    /// Queue a preset load. Out of range indices do nothing.
    pub fn load_preset(&mut self, index: usize) -> Result<(), ControlError> {
        if presets::preset(index).is_none() {
            return Ok(());
        }
        self.push(SynthMessage::LoadPreset { index })?;
        self.params.load_preset(index);
        Ok(())
    }

    pub fn preset_index(&self) -> u8 {
        self.params.preset_index()
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) -> Result<(), ControlError> {
        self.send(SynthMessage::NoteOn { note, velocity })
    }

    pub fn note_off(&mut self, note: u8) -> Result<(), ControlError> {
        self.send(SynthMessage::NoteOff { note })
    }

    pub fn gate_on(&mut self, velocity: u8) -> Result<(), ControlError> {
        self.send(SynthMessage::GateOn { velocity })
    }

    pub fn gate_off(&mut self) -> Result<(), ControlError> {
        self.send(SynthMessage::GateOff)
    }

    pub fn all_notes_off(&mut self) -> Result<(), ControlError> {
        self.send(SynthMessage::AllNotesOff)
    }

    fn push(&mut self, message: SynthMessage) -> Result<(), ControlError> {
        self.tx.push(message).map_err(|_| ControlError::QueueFull)
    }

    /// Free space in the event queue.
    pub fn slots(&self) -> usize {
        self.tx.slots()
    }
}

impl<O: Oscillator, W: Waveshaper, J: JitterSource> Synth<O, W, J> {
    /// Create the event queue and return the handle that feeds it.
    ///
    /// Replaces any queue installed before.
    pub fn control_handle(&mut self, capacity: usize) -> SynthHandle {
        let (tx, rx) = RingBuffer::<SynthMessage>::new(capacity);
        self.set_receiver(Box::new(rx));
        SynthHandle {
            params: Arc::clone(self.parameters()),
            tx,
        }
    }
}

impl Synth {
    /// Build a default voice together with its control handle.
    pub fn split(desc: &RuntimeDesc, capacity: usize) -> Result<(Synth, SynthHandle), InitError> {
        let mut synth = Synth::new(desc)?;
        let handle = synth.control_handle(capacity);
        Ok((synth, handle))
    }
}
