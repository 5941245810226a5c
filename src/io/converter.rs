use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// MIDI "all sound off" and "all notes off" controllers.
const ALL_SOUND_OFF: u8 = 120;
const ALL_NOTES_OFF: u8 = 123;

/// Translate a MIDI event on `channel_filter` into a voice message.
///
/// A note-on with velocity 0 is a note-off. Program changes select a
/// factory preset.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    match midi {
        MidiEvent::NoteOn {
            channel,
            key,
            velocity: 0,
        } if channel == channel_filter => Some(SynthMessage::NoteOff { note: key }),
        MidiEvent::NoteOn {
            channel,
            key,
            velocity,
        } if channel == channel_filter => Some(SynthMessage::NoteOn {
            note: key,
            velocity,
        }),
        MidiEvent::NoteOff { channel, key, .. } if channel == channel_filter => {
            Some(SynthMessage::NoteOff { note: key })
        }
        MidiEvent::ControlChange {
            channel,
            controller: ALL_SOUND_OFF | ALL_NOTES_OFF,
            ..
        } if channel == channel_filter => Some(SynthMessage::AllNotesOff),
        MidiEvent::ProgramChange { channel, program } if channel == channel_filter => {
            Some(SynthMessage::LoadPreset {
                index: program as usize,
            })
        }
        _ => None,
    }
}
