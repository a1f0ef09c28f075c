//! Monte Carlo chaining as used by the CAVP SHA-256 test.
//!
//! Each checkpoint starts from three copies of the seed and runs 1000
//! iterations of `MD[i] = SHA-256(MD[i-3] || MD[i-2] || MD[i-1])`. The last
//! digest is both the checkpoint output and the seed of the next checkpoint.

use checksums::{DIGEST_LEN, Sha256Digest};

/// Compression iterations per checkpoint.
pub const MONTE_ITERATIONS: usize = 1000;

/// Checkpoints in a standard Monte Carlo file.
pub const MONTE_CHECKPOINTS: usize = 100;

/// Runs one 1000-iteration checkpoint starting from `seed`.
#[must_use]
pub fn monte_checkpoint(seed: Sha256Digest) -> Sha256Digest {
    let mut window = [seed; 3];
    let mut message = [0u8; 3 * DIGEST_LEN];

    for _ in 0..MONTE_ITERATIONS {
        let (slots, _) = message.as_chunks_mut::<DIGEST_LEN>();
        for (slot, digest) in slots.iter_mut().zip(&window) {
            *slot = digest.into_bytes();
        }
        let next = checksums::digest(&message);
        window = [window[1], window[2], next];
    }

    window[2]
}

/// Runs the standard 100 checkpoints starting from `seed`.
///
/// Element `j` of the result corresponds to `COUNT = j` in a Monte `.rsp`
/// file.
#[must_use]
pub fn monte_carlo(seed: Sha256Digest) -> Vec<Sha256Digest> {
    MonteCarlo::new(seed).take(MONTE_CHECKPOINTS).collect()
}

/// Endless iterator over Monte Carlo checkpoints.
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    seed: Sha256Digest,
}

impl MonteCarlo {
    /// Starts a run from `seed`.
    #[must_use]
    pub const fn new(seed: Sha256Digest) -> Self {
        Self { seed }
    }
}

impl Iterator for MonteCarlo {
    type Item = Sha256Digest;

    fn next(&mut self) -> Option<Self::Item> {
        self.seed = monte_checkpoint(self.seed);
        Some(self.seed)
    }
}
