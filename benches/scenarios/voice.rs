//! Benchmarks for complete voice renders.
//!
//! Each factory preset stresses a different part of the chain: cross
//! triggered envelopes, FM, shape modulation or the lo-fi settings.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::{Param, RuntimeDesc, Synth};

use crate::BLOCK_SIZES;

fn playing(preset: usize) -> Synth {
    let mut synth = Synth::new(&RuntimeDesc::default()).expect("48kHz stereo is supported");
    synth.load_preset(preset);
    synth.note_on(57, 110);
    synth
}

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * 2];

        // === INIT ===
        // Baseline: one envelope on the VCA, nothing else modulated
        let mut init = playing(0);
        group.bench_with_input(BenchmarkId::new("init", size), &size, |b, _| {
            b.iter(|| init.render(black_box(buffer.as_mut_slice())))
        });

        // === ROBOT ===
        // Every destination routed through combined operators
        let mut robot = playing(7);
        group.bench_with_input(BenchmarkId::new("robot", size), &size, |b, _| {
            b.iter(|| robot.render(black_box(buffer.as_mut_slice())))
        });

        // === LO-FI ===
        // Decimation, bit reduction, waveshaper blend and drift all active
        let mut lofi = playing(3);
        lofi.set(Param::SampleRate, 0);
        lofi.set(Param::Resolution, 2);
        lofi.set(Param::Signature, 4);
        lofi.set(Param::Drift, 4);
        lofi.set(Param::Flatten, 1);
        group.bench_with_input(BenchmarkId::new("lofi", size), &size, |b, _| {
            b.iter(|| lofi.render(black_box(buffer.as_mut_slice())))
        });
    }

    group.finish();
}
