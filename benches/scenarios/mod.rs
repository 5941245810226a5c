//! Real-world scenario benchmarks.
//!
//! These render the complete voice the way a host would: one call per
//! buffer, interleaved stereo out.

mod voice;

pub use voice::bench_voice;
