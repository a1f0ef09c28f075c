//! SHA-256 digest engine.
//!
//! The computation is split into the stages described by FIPS 180-4:
//!
//! - [`pad`] builds the padded buffer (message, `0x80`, zero fill, bit length).
//! - [`schedule`] expands one 64-byte block into 64 schedule words.
//! - [`compress`] runs the 64 rounds and returns the updated hash state.
//!
//! [`digest`] threads the state through every block of the padded buffer.
//! Blocks are processed strictly in order because each compression consumes
//! the state produced by the previous one.
//!
//! All word arithmetic wraps modulo 2^32. The constant tables are `const`
//! data, so any number of threads may hash concurrently without coordination.

mod compress;
mod constants;
mod engine;
mod hasher;
mod padding;
mod primitives;
mod schedule;

pub use compress::compress;
pub use constants::{BLOCK_LEN, DIGEST_LEN, H0, K};
pub use engine::{digest, hash};
pub use hasher::Sha256;
pub use padding::{block_count, pad, padded_len};
pub use primitives::{big_sigma0, big_sigma1, choose, majority, rotr, small_sigma0, small_sigma1};
pub use schedule::schedule;

pub(crate) use engine::state_to_bytes;
pub(crate) use padding::append_padding;
