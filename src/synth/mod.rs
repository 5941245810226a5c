// Purpose: the single voice, its control path and per-block logic
// This layer sits above the dsp primitives and owns all voice state

#[cfg(feature = "rtrb")]
pub mod handle;
pub mod message;
pub mod pitch;
pub mod post;
pub mod trigger;
pub mod voice;

pub use message::{MessageReceiver, SynthMessage};
pub use voice::{RuntimeDesc, Synth};
