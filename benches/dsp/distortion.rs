//! Benchmarks for the signature waveshaper.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::distortion::{signature_blend, SignatureWaveshaper, Waveshaper};
use lillian::dsp::fixed::mix_i16;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");
    let shaper = SignatureWaveshaper::default();

    for &size in BLOCK_SIZES {
        let input: Vec<i16> = (0..size).map(|i| ((i as f32 * 0.1).sin() * 30_000.0) as i16).collect();
        let mut output = vec![0i16; size];

        group.bench_with_input(BenchmarkId::new("transform", size), &size, |b, _| {
            b.iter(|| {
                for (out, &s) in output.iter_mut().zip(&input) {
                    *out = shaper.transform(black_box(s));
                }
            })
        });

        // Transform plus crossfade, as the output chain runs it
        let blend = signature_blend(2);
        group.bench_with_input(BenchmarkId::new("blend", size), &size, |b, _| {
            b.iter(|| {
                for (out, &s) in output.iter_mut().zip(&input) {
                    *out = mix_i16(s, shaper.transform(black_box(s)), black_box(blend));
                }
            })
        });
    }

    group.finish();
}
