//! Batch hashing of independent messages on the rayon thread pool.
//!
//! A single digest is inherently sequential, so parallelism only applies
//! across messages. Each worker runs the ordinary [`digest`](crate::digest)
//! on its own message; results come back in input order.
//!
//! # Examples
//!
//! ```
//! use checksums::parallel::hash_many;
//!
//! let hashes = hash_many(&[b"abc".as_slice(), b"".as_slice()]);
//! assert_eq!(hashes[0], checksums::hash(b"abc"));
//! assert_eq!(hashes[1], checksums::hash(b""));
//! ```

use rayon::prelude::*;

use crate::Sha256Digest;

/// Computes digests for every message in parallel, preserving input order.
#[must_use]
pub fn digest_many<M>(messages: &[M]) -> Vec<Sha256Digest>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|message| crate::digest(message.as_ref()))
        .collect()
}

/// Computes lowercase hex digests for every message in parallel.
#[must_use]
pub fn hash_many<M>(messages: &[M]) -> Vec<String>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|message| crate::hash(message.as_ref()))
        .collect()
}
