#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}

impl MidiEvent {
    /// Parse one channel voice message. Running status and system messages
    /// are not handled.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        let channel = status & 0x0F;
        let event = match (status & 0xF0, data) {
            (0x80, &[key, velocity, ..]) => MidiEvent::NoteOff { channel, key, velocity },
            (0x90, &[key, velocity, ..]) => MidiEvent::NoteOn { channel, key, velocity },
            (0xB0, &[controller, value, ..]) => MidiEvent::ControlChange {
                channel,
                controller,
                value,
            },
            (0xC0, &[program, ..]) => MidiEvent::ProgramChange { channel, program },
            (0xE0, &[lsb, msb, ..]) => {
                let value = (((msb as i16) << 7) | lsb as i16) - 8192;
                MidiEvent::PitchBend { channel, value }
            }
            _ => return None,
        };
        Some(event)
    }
}
