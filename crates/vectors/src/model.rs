//! In-memory representation of known-answer vectors.

use std::fmt;

use checksums::Sha256Digest;

/// Where a vector came from inside its file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Line of the `MD` field that closed an `.rsp` record (one-based).
    Line(usize),
    /// Position in a JSON array (zero-based).
    Entry(usize),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => write!(f, "line {line}"),
            Self::Entry(index) => write!(f, "entry {index}"),
        }
    }
}

/// A message paired with its expected digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVector {
    /// Location in the source file.
    pub origin: Origin,
    /// Message bytes.
    pub message: Vec<u8>,
    /// Expected SHA-256 digest.
    pub expected: Sha256Digest,
}

/// One checkpoint of a Monte Carlo run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteVector {
    /// Checkpoint index, starting at zero.
    pub count: u32,
    /// Expected digest after `count + 1` checkpoints.
    pub expected: Sha256Digest,
}

/// Seed and expected checkpoints from a Monte Carlo `.rsp` file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteSet {
    /// The initial seed.
    pub seed: Sha256Digest,
    /// Checkpoints in file order.
    pub checkpoints: Vec<MonteVector>,
}

/// Everything loaded from one vector file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VectorSet {
    /// Message/digest pairs.
    pub messages: Vec<MessageVector>,
    /// Monte Carlo seed and checkpoints, if the file has them.
    pub monte: Option<MonteSet>,
    /// Records skipped because their bit length is not a whole number of bytes.
    pub skipped: usize,
}

impl VectorSet {
    /// Number of checks [`verify`](crate::verify) will perform.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.monte.as_ref().map_or(0, |monte| monte.checkpoints.len())
    }

    /// Returns `true` when the set holds no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
