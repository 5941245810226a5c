//! Benchmarks for the built-in oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::oscillator::{Oscillator, VirtualAnalog};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let sync = vec![0u8; size];
        let mut buffer = vec![0i16; size];

        // Saw: cheapest waveform
        let mut osc = VirtualAnalog::new();
        osc.set_shape(0);
        osc.set_pitch(57 << 7);
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(sync.as_slice()), black_box(buffer.as_mut_slice())))
        });

        // Sine with phase distortion and sub blend
        let mut osc = VirtualAnalog::new();
        osc.set_shape(3);
        osc.set_parameters(20_000, 12_000);
        osc.set_pitch(57 << 7);
        group.bench_with_input(BenchmarkId::new("sine_sub", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(sync.as_slice()), black_box(buffer.as_mut_slice())))
        });
    }

    group.finish();
}
