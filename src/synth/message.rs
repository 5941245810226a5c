#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Control events for the voice.
///
/// Messages reach the render thread through one queue, so parameter writes
/// and notes are applied in the order they were sent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
    GateOn { velocity: u8 },
    GateOff,
    AllNotesOff,
    SetParameter { index: usize, value: i32 },
    LoadPreset { index: usize },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}
