//! The voice core: two envelopes, a modulation matrix, the oscillator and
//! the output chain, driven by one render call per host buffer.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dsp::curve::CurveTable;
use crate::dsp::distortion::{SignatureWaveshaper, Waveshaper, DEFAULT_DEVICE_ID};
use crate::dsp::envelope::{CurvePolicy, Envelope};
use crate::dsp::jitter::{JitterSource, VcoJitter};
use crate::dsp::modulate::{self, ModSource};
use crate::dsp::oscillator::{Oscillator, VirtualAnalog, SHAPE_COUNT};
use crate::error::InitError;
use crate::patch::params::{Param, PARAM_COUNT};
use crate::patch::presets::{self, Preset};
use crate::patch::store::ParameterStore;
use crate::patch::strings;
use crate::synth::message::{MessageReceiver, SynthMessage};
use crate::synth::pitch::{self, PitchInputs};
use crate::synth::post::{AudioPostProcessor, PostSettings};
use crate::synth::trigger::{self, SegmentSnapshot, TriggerSource};
use crate::{OSC_BLOCK_SIZE, OUTPUT_CHANNELS, SAMPLE_RATE};

/*
Render Call
===========

One call fills a whole host buffer. The buffer is cut into oscillator
blocks of 24 frames (the last one may be shorter), and the envelopes tick
once per block:

    start of call
      drain queued control messages in arrival order
      snapshot both envelope segments → trigger level for A and B

    per block
      A, B    ← envelope ticks with this call's trigger levels
      m(dest) ← ModSource[dest](A, B)
      timbre, color, shape, pitch ← base + m(dest) · depth(dest)
      oscillator renders up to 24 raw samples
      VCA gain target ← m(vca) · depth + gate bias
      post-processor writes 2 · block frames of output

    end of call
      wrap the decimation counter

Trigger levels are evaluated once per call, so a condition that holds for
a whole call can fire an envelope at most once, on its first block.
*/

/// Host geometry handed over at init.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    pub sample_rate: u32,
    pub output_channels: u32,
}

impl RuntimeDesc {
    pub fn new(sample_rate: u32, output_channels: u32) -> Self {
        Self {
            sample_rate,
            output_channels,
        }
    }

    pub fn validate(&self) -> Result<(), InitError> {
        if self.sample_rate != SAMPLE_RATE {
            return Err(InitError::SampleRate {
                expected: SAMPLE_RATE,
                actual: self.sample_rate,
            });
        }
        if self.output_channels != OUTPUT_CHANNELS {
            return Err(InitError::Geometry {
                expected: OUTPUT_CHANNELS,
                actual: self.output_channels,
            });
        }
        Ok(())
    }
}

impl Default for RuntimeDesc {
    fn default() -> Self {
        Self::new(SAMPLE_RATE, OUTPUT_CHANNELS)
    }
}

pub struct Synth<O = VirtualAnalog, W = SignatureWaveshaper, J = VcoJitter>
where
    W: Waveshaper,
{
    params: Arc<ParameterStore>,
    // values whose side effects have been applied
    applied: [i32; PARAM_COUNT],
    events: Option<Box<dyn MessageReceiver + Send>>,

    table: CurveTable,
    env_a: Envelope,
    env_b: Envelope,
    osc: O,
    jitter: J,
    post: AudioPostProcessor<W>,

    pitch_base: i32,
    timbre_base: i32,
    color_base: i32,
    amplitude: f32,
    gate: i32,

    raw: [i16; OSC_BLOCK_SIZE],
    sync: [u8; OSC_BLOCK_SIZE],
}

impl Synth {
    /// Voice with the built-in oscillator, waveshaper and jitter source.
    pub fn new(desc: &RuntimeDesc) -> Result<Self, InitError> {
        Self::with_parts(
            desc,
            VirtualAnalog::new(),
            SignatureWaveshaper::new(DEFAULT_DEVICE_ID),
            VcoJitter::new(),
        )
    }
}

impl<O: Oscillator, W: Waveshaper, J: JitterSource> Synth<O, W, J> {
    /// Voice around caller-supplied collaborators.
    ///
    /// Fails without building anything if the host geometry is unsupported.
    pub fn with_parts(desc: &RuntimeDesc, osc: O, shaper: W, jitter: J) -> Result<Self, InitError> {
        desc.validate()?;

        let params = Arc::new(ParameterStore::new());
        let applied = params.snapshot();
        let mut synth = Self {
            params,
            applied,
            events: None,
            table: CurveTable::new(),
            env_a: Envelope::new(),
            env_b: Envelope::new(),
            osc,
            jitter,
            post: AudioPostProcessor::new(shaper),
            pitch_base: 0,
            timbre_base: 0,
            color_base: 0,
            amplitude: 0.0,
            gate: 0,
            raw: [0; OSC_BLOCK_SIZE],
            sync: [0; OSC_BLOCK_SIZE],
        };
        for param in Param::ALL {
            synth.apply(param, applied[param.index()]);
        }

        info!(sample_rate = desc.sample_rate, channels = desc.output_channels, "voice initialised");
        Ok(synth)
    }

    /// Install the queue note and gate events arrive on.
    pub fn set_receiver(&mut self, events: Box<dyn MessageReceiver + Send>) {
        self.events = Some(events);
    }

    /// Shared parameter slots, for building a control handle.
    pub fn parameters(&self) -> &Arc<ParameterStore> {
        &self.params
    }

    /// Fill `out` with interleaved stereo frames.
    ///
    /// A trailing half frame, if any, is zeroed.
    pub fn render(&mut self, out: &mut [f32]) {
        self.drain_events();

        let channels = OUTPUT_CHANNELS as usize;
        let frames = out.len() / channels;
        let (out, rest) = out.split_at_mut(frames * channels);
        rest.fill(0.0);

        let p = self.applied;
        let value = |param: Param| p[param.index()];

        let snapshot = SegmentSnapshot {
            a: self.env_a.segment(),
            b: self.env_b.segment(),
        };
        let trigger_a = trigger::evaluate(TriggerSource::from_index(value(Param::EgATrigger)), self.gate, snapshot);
        let trigger_b = trigger::evaluate(TriggerSource::from_index(value(Param::EgBTrigger)), self.gate, snapshot);

        let settings = PostSettings::from_params(
            value(Param::SampleRate),
            value(Param::Resolution),
            value(Param::Signature),
            self.amplitude,
        );

        for block in out.chunks_mut(OSC_BLOCK_SIZE * channels) {
            let size = block.len() / channels;

            let a = self.env_a.render(trigger_a, &self.table);
            let b = self.env_b.render(trigger_b, &self.table);
            let route = |source: Param, depth: Param| {
                let m = ModSource::from_index(value(source)).combine(a, b);
                (m, modulate::depth(value(depth)))
            };

            let (m, d) = route(Param::ModSrcTimbre, Param::ModIntTimbre);
            let timbre = modulate::timbre_color(self.timbre_base, m, d);
            let (m, d) = route(Param::ModSrcColor, Param::ModIntColor);
            let color = modulate::timbre_color(self.color_base, m, d);
            self.osc.set_parameters(timbre, color);

            let (m, d) = route(Param::ModSrcShape, Param::ModIntShape);
            self.osc
                .set_shape(modulate::shape(value(Param::Shape), m, d, SHAPE_COUNT - 1));

            let (m, d) = route(Param::ModSrcFm, Param::ModIntFm);
            let pitch = pitch::compute(&PitchInputs {
                base: self.pitch_base,
                fine: value(Param::Pitch),
                octave: value(Param::Octave),
                jitter: self.jitter.render(value(Param::Drift)),
                fm: modulate::fm_offset(m, d),
                flatten: value(Param::Flatten) != 0,
            });
            self.osc.set_pitch(pitch);

            self.osc.render(&self.sync[..size], &mut self.raw[..size]);

            let (m, d) = route(Param::ModSrcVca, Param::ModIntVca);
            let gain = modulate::vca_gain(m, d, self.gate > 0);
            self.post.process(&self.raw[..size], gain, &settings, block);
        }

        self.post.finish();
    }

    /// Write a parameter by slot index and apply its side effect.
    ///
    /// Unknown indices are ignored, values are saturated into range.
    pub fn set_parameter(&mut self, index: usize, value: i32) {
        if let Some((param, value)) = self.params.write(index, value) {
            self.apply(param, value);
        }
    }

    pub fn set(&mut self, param: Param, value: i32) {
        self.set_parameter(param.index(), value);
    }

    pub fn get_parameter(&self, index: usize) -> Option<i32> {
        Param::from_index(index).map(|param| self.params.load(param))
    }

    pub fn parameter_display(&self, index: usize, value: i32) -> Option<&'static str> {
        Param::from_index(index).and_then(|param| strings::parameter_display(param, value))
    }

    /// Replay a factory preset through the parameter write path.
    pub fn load_preset(&mut self, index: usize) {
        if let Some(preset) = self.params.load_preset(index) {
            self.apply_preset(preset);
        }
    }

    pub fn preset_index(&self) -> u8 {
        self.params.preset_index()
    }

    pub fn preset_name(index: usize) -> Option<&'static str> {
        presets::preset_name(index)
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.pitch_base = (note as i32) << 7;
        self.gate_on(velocity);
    }

    pub fn note_off(&mut self, _note: u8) {
        self.gate_off();
    }

    pub fn gate_on(&mut self, velocity: u8) {
        self.amplitude = velocity as f32 / 127.0;
        self.gate += 1;
        self.osc.strike();
    }

    pub fn gate_off(&mut self) {
        if self.gate > 0 {
            self.gate -= 1;
        }
    }

    /// Release every held gate.
    pub fn all_notes_off(&mut self) {
        self.gate = 0;
    }

    /// Forget held gates, as after a transport stop.
    pub fn reset(&mut self) {
        self.all_notes_off();
    }

    pub fn handle_message(&mut self, message: SynthMessage) {
        match message {
            SynthMessage::NoteOn { note, velocity } => self.note_on(note, velocity),
            SynthMessage::NoteOff { note } => self.note_off(note),
            SynthMessage::GateOn { velocity } => self.gate_on(velocity),
            SynthMessage::GateOff => self.gate_off(),
            SynthMessage::AllNotesOff => self.all_notes_off(),
            SynthMessage::SetParameter { index, value } => self.set_parameter(index, value),
            SynthMessage::LoadPreset { index } => self.load_preset(index),
        }
    }

    pub fn oscillator(&self) -> &O {
        &self.osc
    }

    pub fn envelope_a(&self) -> &Envelope {
        &self.env_a
    }

    pub fn envelope_b(&self) -> &Envelope {
        &self.env_b
    }

    /// Number of gates currently held.
    pub fn gate(&self) -> i32 {
        self.gate
    }

    /// Current smoothed VCA gain.
    pub fn gain_level(&self) -> u16 {
        self.post.gain_level()
    }

    fn drain_events(&mut self) {
        if let Some(mut events) = self.events.take() {
            while let Some(message) = events.pop() {
                self.apply_queued(message);
            }
            self.events = Some(events);
        }
    }

    /// Apply a message from the control handle, which has already written
    /// the shared slots.
    fn apply_queued(&mut self, message: SynthMessage) {
        match message {
            SynthMessage::SetParameter { index, value } => {
                if let Some(param) = Param::from_index(index) {
                    self.apply(param, param.clamp(value));
                }
            }
            SynthMessage::LoadPreset { index } => {
                if let Some(preset) = presets::preset(index) {
                    self.apply_preset(preset);
                }
            }
            event => self.handle_message(event),
        }
    }

    fn apply_preset(&mut self, preset: &Preset) {
        for (param, &value) in Param::ALL.iter().zip(preset.values.iter()) {
            self.apply(*param, value);
        }
    }

    /// Record `value` as applied and run the parameter's side effect.
    ///
    /// Multi-slot effects read every slot they depend on from `applied`, so
    /// they come out the same whichever slot of the pair was written last.
    fn apply(&mut self, param: Param, value: i32) {
        self.applied[param.index()] = value;
        let applied = self.applied;
        let slot = |param: Param| applied[param.index()];
        match param {
            Param::Note => self.pitch_base = value << 7,
            Param::Shape => self.osc.set_shape(value),
            Param::Timbre => self.timbre_base = (value + 256) << 6,
            Param::Color => self.color_base = (value + 256) << 6,
            Param::EgACurve => self.env_a.set_policy(CurvePolicy::from_knob(value)),
            Param::EgBCurve => self.env_b.set_policy(CurvePolicy::from_knob(value)),
            Param::EgATrigger => self.env_a.reset(),
            Param::EgBTrigger => self.env_b.reset(),
            Param::AttackA | Param::DecayA => {
                let (attack, decay) = (slot(Param::AttackA), slot(Param::DecayA));
                self.env_a.update(attack, decay, &self.table);
            }
            Param::AttackB | Param::DecayB => {
                let (attack, decay) = (slot(Param::AttackB), slot(Param::DecayB));
                self.env_b.update(attack, decay, &self.table);
            }
            _ => {}
        }
    }
}
