//! Benchmarks for decimation and bit reduction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::crush::{factor_for, mask_for, Decimator};

use crate::BLOCK_SIZES;

pub fn bench_crush(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/crush");

    for &size in BLOCK_SIZES {
        let signal: Vec<i16> = (0..size).map(|i| ((i * 997) % 65_536) as u16 as i16).collect();
        let mut output = vec![0i16; size];

        // Full rate, full resolution: the transparent setting
        let mut dec = Decimator::new();
        group.bench_with_input(BenchmarkId::new("transparent", size), &size, |b, _| {
            b.iter(|| {
                for (out, &s) in output.iter_mut().zip(&signal) {
                    *out = dec.process(black_box(s), factor_for(5), mask_for(6));
                }
                dec.wrap();
            })
        });

        // 4kHz, 2 bits: the harshest setting
        let mut dec = Decimator::new();
        group.bench_with_input(BenchmarkId::new("crushed", size), &size, |b, _| {
            b.iter(|| {
                for (out, &s) in output.iter_mut().zip(&signal) {
                    *out = dec.process(black_box(s), factor_for(0), mask_for(0));
                }
                dec.wrap();
            })
        });
    }

    group.finish();
}
