//! Bitwise helper functions from FIPS 180-4 section 4.1.2.
//!
//! Every helper operates on a single 32-bit word and never overflows, so the
//! callers are free to combine the results with wrapping additions.

/// Circular right rotation of `x` by `n` bits.
#[inline(always)]
#[must_use]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// `Ch(x, y, z)`: for each bit, `x` selects between `y` (set) and `z` (clear).
#[inline(always)]
#[must_use]
pub const fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// `Maj(x, y, z)`: each output bit is the majority vote of the input bits.
#[inline(always)]
#[must_use]
pub const fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// `Σ0(x)`, applied to working variable `a` in every round.
#[inline(always)]
#[must_use]
pub const fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// `Σ1(x)`, applied to working variable `e` in every round.
#[inline(always)]
#[must_use]
pub const fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// `σ0(x)`, used by the message schedule on `W[t-15]`.
#[inline(always)]
#[must_use]
pub const fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// `σ1(x)`, used by the message schedule on `W[t-2]`.
#[inline(always)]
#[must_use]
pub const fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
