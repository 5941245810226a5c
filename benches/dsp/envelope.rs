//! Benchmarks for the attack/decay envelope.
//!
//! The envelope ticks once per 24-frame oscillator block, so a buffer of
//! `size` frames costs `size / 24` ticks. The benches tick that many times.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::curve::CurveTable;
use lillian::dsp::envelope::{Curve, CurvePolicy, Envelope};
use lillian::OSC_BLOCK_SIZE;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let table = CurveTable::new();

    for &size in BLOCK_SIZES {
        let ticks = size.div_ceil(OSC_BLOCK_SIZE);

        // Exponential: goes through the response table every tick
        let mut env = Envelope::new();
        env.update(40, 90, &table);
        env.set_curve(Curve::Exponential);
        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..ticks {
                    black_box(env.render(black_box(1), &table));
                }
            })
        });

        // Linear
        let mut env = Envelope::new();
        env.update(40, 90, &table);
        env.set_curve(Curve::Linear);
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..ticks {
                    black_box(env.render(black_box(1), &table));
                }
            })
        });

        // Fast looping envelope: segment changes on most ticks
        let mut env = Envelope::new();
        env.update(0, 0, &table);
        env.set_policy(CurvePolicy::from_knob(64));
        group.bench_with_input(BenchmarkId::new("looping", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..ticks {
                    black_box(env.render(black_box(0), &table));
                }
            })
        });
    }

    group.finish();
}
