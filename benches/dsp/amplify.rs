//! Benchmarks for the smoothed gain stage.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::amplify::GainSmoother;

use crate::BLOCK_SIZES;

pub fn bench_amplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/amplify");

    for &size in BLOCK_SIZES {
        let signal: Vec<i16> = (0..size).map(|i| (i as i32 * 512 - 16_384) as i16).collect();
        let mut output = vec![0i16; size];

        // Settled gain: the common case once a note is sounding
        let mut gain = GainSmoother::new();
        for _ in 0..256 {
            gain.process(0, 40_000);
        }
        group.bench_with_input(BenchmarkId::new("settled", size), &size, |b, _| {
            b.iter(|| {
                for (out, &s) in output.iter_mut().zip(&signal) {
                    *out = gain.process(black_box(s), black_box(40_000));
                }
            })
        });

        // Alternating targets keep the smoother moving
        let mut gain = GainSmoother::new();
        let mut target = 0;
        group.bench_with_input(BenchmarkId::new("tracking", size), &size, |b, _| {
            b.iter(|| {
                target = 63_487 - target;
                for (out, &s) in output.iter_mut().zip(&signal) {
                    *out = gain.process(black_box(s), black_box(target));
                }
            })
        });
    }

    group.finish();
}
