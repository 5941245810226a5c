//! Fixed-point helpers shared by the envelope, modulation and output stages.
//!
//! Everything here works on 16-bit values with 16-bit blend weights. The
//! truncation behaviour is part of the instrument's sound, so these are
//! exact integer formulas rather than float approximations.

/// Crossfade between two unsigned 16-bit values.
///
/// Anchored on `a` rather than weighted like [`mix_i16`]: `balance` of 0
/// returns `a` exactly, so an envelope segment's first tick holds the
/// previous segment's target. The result always lies between `a` and `b`.
#[inline]
pub fn mix_u16(a: u16, b: u16, balance: u16) -> u16 {
    let a = a as i64;
    let b = b as i64;
    (a + ((b - a) * balance as i64 >> 16)) as u16
}

/// Crossfade between two signed 16-bit samples.
///
/// The weights sum to 65535, so a zero balance still loses up to one LSB.
#[inline]
pub fn mix_i16(a: i16, b: i16, balance: u16) -> i16 {
    let a = a as i64;
    let b = b as i64;
    let balance = balance as i64;
    ((a * (65535 - balance) + b * balance) >> 16) as i16
}

/// Look up a 257-entry table with an 8.24 fixed-point phase.
///
/// The top 8 bits select the segment, the next 16 bits interpolate
/// linearly within it.
#[inline]
pub fn interpolate824(table: &[u16; 257], phase: u32) -> u16 {
    let index = (phase >> 24) as usize;
    let a = table[index] as i32;
    let b = table[index + 1] as i32;
    let frac = ((phase >> 8) & 0xffff) as i32;
    (a + ((b - a) * frac >> 16)) as u16
}

/// Look up a 257-entry signed table with an 8.8 fixed-point index.
#[inline]
pub fn interpolate88(table: &[i16; 257], index: u16) -> i16 {
    let i = (index >> 8) as usize;
    let a = table[i] as i32;
    let b = table[i + 1] as i32;
    let frac = (index & 0xff) as i32;
    (a + ((b - a) * frac >> 8)) as i16
}

/// Saturate `x` into `[min, max]`.
#[inline]
pub fn clip(x: i32, min: i32, max: i32) -> i32 {
    x.clamp(min, max)
}
