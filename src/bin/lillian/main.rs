//! lillian - play the voice core on the default output device
//!
//! Run with: cargo run -- [preset]

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{error, info, warn};

use lillian::io::{midi_to_synth, MidiEvent};
use lillian::patch::presets::{preset_name, PRESET_COUNT};
use lillian::synth::handle::SynthHandle;
use lillian::{RuntimeDesc, Synth, OUTPUT_CHANNELS, SAMPLE_RATE};

const CHANNEL: u8 = 0;
const QUEUE_CAPACITY: usize = 64;

// (note, length in ms)
const PHRASE: [(u8, u64); 8] = [
    (48, 400),
    (55, 200),
    (60, 200),
    (63, 400),
    (62, 200),
    (60, 200),
    (55, 400),
    (51, 800),
];

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let preset = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u8>()
            .wrap_err_with(|| format!("preset must be a number below {PRESET_COUNT}"))?,
        None => 0,
    };

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = cpal::StreamConfig {
        channels: OUTPUT_CHANNELS as u16,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };

    let desc = RuntimeDesc::new(config.sample_rate.0, config.channels as u32);
    let (mut synth, mut handle) = Synth::split(&desc, QUEUE_CAPACITY)?;

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _| synth.render(data),
            |err| error!("audio stream error: {err}"),
            None,
        )
        .wrap_err("failed to build a 48kHz stereo output stream")?;
    stream.play()?;

    send_midi(&mut handle, &[0xC0 | CHANNEL, preset]);
    info!(preset, name = preset_name(preset as usize).unwrap_or("-"), "playing");

    for (note, length) in PHRASE.iter().cycle().take(PHRASE.len() * 4) {
        send_midi(&mut handle, &[0x90 | CHANNEL, *note, 110]);
        thread::sleep(Duration::from_millis(length * 3 / 4));
        send_midi(&mut handle, &[0x80 | CHANNEL, *note, 0]);
        thread::sleep(Duration::from_millis(length / 4));
    }

    thread::sleep(Duration::from_millis(1500));
    Ok(())
}

fn send_midi(handle: &mut SynthHandle, bytes: &[u8]) {
    let Some(message) = MidiEvent::from_bytes(bytes).and_then(|event| midi_to_synth(event, CHANNEL)) else {
        return;
    };
    if let Err(err) = handle.send(message) {
        warn!(?message, "dropped control event: {err}");
    }
}
