//! Benchmarks for the modulation operators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use lillian::dsp::modulate::ModSource;

pub fn bench_modulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/modulate");
    let pairs: Vec<(u16, u16)> = (0..256u32)
        .map(|i| ((i * 257) as u16, (65_535 - i * 131) as u16))
        .collect();

    for source in ModSource::ALL {
        group.bench_with_input(BenchmarkId::new("combine", format!("{source:?}")), &source, |b, &source| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(x, y) in &pairs {
                    acc += source.combine(black_box(x), black_box(y)) as u32;
                }
                acc
            })
        });
    }

    group.finish();
}
