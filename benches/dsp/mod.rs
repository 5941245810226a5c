//! Benchmarks for low-level DSP primitives.

mod amplify;
mod crush;
mod distortion;
mod envelope;
mod modulate;
mod oscillator;

pub use amplify::bench_amplify;
pub use crush::bench_crush;
pub use distortion::bench_distortion;
pub use envelope::bench_envelope;
pub use modulate::bench_modulate;
pub use oscillator::bench_oscillator;
