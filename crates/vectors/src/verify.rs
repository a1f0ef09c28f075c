//! Checking a [`VectorSet`] against the digest engine.

use std::fmt;

use checksums::Sha256Digest;

use crate::model::{Origin, VectorSet};
use crate::monte::{MONTE_CHECKPOINTS, MonteCarlo};

/// Identifies the vector behind a failed check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorId {
    /// A message vector.
    Message(Origin),
    /// A Monte Carlo checkpoint.
    Monte {
        /// The checkpoint's `COUNT`.
        count: u32,
    },
}

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(origin) => write!(f, "message at {origin}"),
            Self::Monte { count } => write!(f, "Monte checkpoint COUNT = {count}"),
        }
    }
}

/// A vector whose computed digest differs from the expected one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Which vector failed.
    pub id: VectorId,
    /// Digest recorded in the file.
    pub expected: Sha256Digest,
    /// Digest computed by the engine.
    pub actual: Sha256Digest,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, computed {}",
            self.id, self.expected, self.actual
        )
    }
}

/// Outcome of [`verify`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of vectors that matched.
    pub passed: usize,
    /// Vectors that did not match, in file order.
    pub failures: Vec<Failure>,
}

impl Report {
    /// Number of vectors checked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    /// Returns `true` when no vector failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, id: VectorId, expected: Sha256Digest, actual: Sha256Digest) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failures.push(Failure {
                id,
                expected,
                actual,
            });
        }
    }
}

/// Hashes every message in `set` and replays its Monte Carlo run.
///
/// With the `parallel` feature the messages are hashed on the rayon pool.
///
/// Monte checkpoints are computed in order up to the highest `COUNT`
/// present, so files listing a subset of checkpoints still verify. The run
/// never goes past [`MONTE_CHECKPOINTS`]; a checkpoint beyond it is counted
/// as a failure against the last computed digest.
#[must_use]
pub fn verify(set: &VectorSet) -> Report {
    let mut report = Report::default();

    for (vector, actual) in set.messages.iter().zip(message_digests(set)) {
        report.record(VectorId::Message(vector.origin), vector.expected, actual);
    }

    if let Some(monte) = &set.monte {
        let needed = monte
            .checkpoints
            .iter()
            .map(|checkpoint| (checkpoint.count as usize).saturating_add(1))
            .max()
            .unwrap_or(0)
            .min(MONTE_CHECKPOINTS);
        let computed: Vec<Sha256Digest> = MonteCarlo::new(monte.seed).take(needed).collect();
        for checkpoint in &monte.checkpoints {
            let index = checkpoint.count as usize;
            let Some(&actual) = computed.get(index).or_else(|| computed.last()) else {
                continue;
            };
            let id = VectorId::Monte {
                count: checkpoint.count,
            };
            if index < MONTE_CHECKPOINTS {
                report.record(id, checkpoint.expected, actual);
            } else {
                report.failures.push(Failure {
                    id,
                    expected: checkpoint.expected,
                    actual,
                });
            }
        }
    }

    logging::trace_vectors!(
        passed = report.passed,
        failed = report.failures.len(),
        "verification finished"
    );
    report
}

#[cfg(feature = "parallel")]
fn message_digests(set: &VectorSet) -> Vec<Sha256Digest> {
    let messages: Vec<&[u8]> = set
        .messages
        .iter()
        .map(|vector| vector.message.as_slice())
        .collect();
    checksums::parallel::digest_many(&messages)
}

#[cfg(not(feature = "parallel"))]
fn message_digests(set: &VectorSet) -> Vec<Sha256Digest> {
    set.messages
        .iter()
        .map(|vector| checksums::digest(&vector.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessageVector, MonteSet, MonteVector};
    use crate::monte::{monte_carlo, monte_checkpoint};

    fn message(text: &[u8], expected: Sha256Digest, line: usize) -> MessageVector {
        MessageVector {
            origin: Origin::Line(line),
            message: text.to_vec(),
            expected,
        }
    }

    #[test]
    fn counts_passes_and_failures() {
        let set = VectorSet {
            messages: vec![
                message(b"abc", checksums::digest(b"abc"), 3),
                message(b"abd", checksums::digest(b"abc"), 7),
            ],
            ..VectorSet::default()
        };
        let report = verify(&set);
        assert_eq!(report.passed, 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert_eq!(report.failures[0].id, VectorId::Message(Origin::Line(7)));
        assert_eq!(report.failures[0].actual, checksums::digest(b"abd"));
    }

    #[test]
    fn sparse_monte_checkpoints_verify() {
        let seed = checksums::digest(b"seed");
        let first = monte_checkpoint(seed);
        let third = monte_checkpoint(monte_checkpoint(first));
        let set = VectorSet {
            monte: Some(MonteSet {
                seed,
                checkpoints: vec![MonteVector {
                    count: 2,
                    expected: third,
                }],
            }),
            ..VectorSet::default()
        };
        let report = verify(&set);
        assert!(report.is_success());
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn monte_run_stops_at_last_checkpoint() {
        let seed = checksums::digest(b"seed");
        let last = monte_carlo(seed)[MONTE_CHECKPOINTS - 1];
        let set = VectorSet {
            monte: Some(MonteSet {
                seed,
                checkpoints: vec![MonteVector {
                    count: u32::MAX,
                    expected: last,
                }],
            }),
            ..VectorSet::default()
        };
        let report = verify(&set);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, VectorId::Monte { count: u32::MAX });
        assert_eq!(report.failures[0].actual, last);
    }

    #[test]
    fn failure_display_names_vector() {
        let failure = Failure {
            id: VectorId::Monte { count: 4 },
            expected: checksums::digest(b"a"),
            actual: checksums::digest(b"b"),
        };
        let text = failure.to_string();
        assert!(text.starts_with("Monte checkpoint COUNT = 4: expected ca978112"));
        assert!(text.contains("computed 3e23e816"));
    }

    #[test]
    fn empty_set_passes_trivially() {
        let report = verify(&VectorSet::default());
        assert_eq!(report.total(), 0);
        assert!(report.is_success());
    }
}
