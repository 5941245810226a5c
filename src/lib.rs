pub mod dsp; // Fixed-point signal primitives
pub mod error;
pub mod io;
pub mod patch; // Parameter table, store, presets and display strings
pub mod synth; // Voice core and control path

pub use error::{ControlError, InitError};
pub use patch::params::{Param, PARAM_COUNT};
pub use synth::voice::{RuntimeDesc, Synth};

#[cfg(feature = "rtrb")]
pub use synth::handle::SynthHandle;

/// The only sample rate the voice core runs at.
pub const SAMPLE_RATE: u32 = 48_000;

/// Output is interleaved stereo.
pub const OUTPUT_CHANNELS: u32 = 2;

/// Frames rendered per oscillator block; envelopes tick once per block.
pub const OSC_BLOCK_SIZE: usize = 24;

/// Envelope ticks per second.
pub const ENVELOPE_TICK_RATE: u32 = SAMPLE_RATE / OSC_BLOCK_SIZE as u32;
