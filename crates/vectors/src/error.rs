//! Error types for vector file loading.

use std::io;
use std::path::PathBuf;

use checksums::{DigestParseError, HexError};

/// Failure while reading or parsing a known-answer vector file.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line is not of the form `key = value`.
    #[error("line {line}: expected `key = value`, found {text:?}")]
    Syntax {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A numeric field could not be parsed.
    #[error("line {line}: invalid {field} value {value:?}")]
    Number {
        /// One-based line number.
        line: usize,
        /// Field name such as `Len` or `COUNT`.
        field: &'static str,
        /// The raw value.
        value: String,
    },

    /// A field appeared before the field it depends on.
    #[error("line {line}: {field} without a preceding {missing}")]
    Incomplete {
        /// One-based line number.
        line: usize,
        /// Field that was found.
        field: &'static str,
        /// Field that should have come first.
        missing: &'static str,
    },

    /// A `Len` or `COUNT` record was never closed by an `MD` line, either
    /// because another record started or because the file ended.
    #[error("line {line}: {field} record has no MD")]
    Unterminated {
        /// One-based line number where the open record started.
        line: usize,
        /// Field that opened the record.
        field: &'static str,
    },

    /// A second `Seed` line appeared in a Monte Carlo file.
    #[error("line {line}: duplicate Seed, first given on line {first}")]
    DuplicateSeed {
        /// One-based line number of the repeated `Seed`.
        line: usize,
        /// One-based line number of the first `Seed`.
        first: usize,
    },

    /// A Monte Carlo `COUNT` is past the last checkpoint or not increasing.
    #[error("line {line}: COUNT = {count} is out of sequence, counts must increase and stay below {limit}")]
    CountOutOfSequence {
        /// One-based line number.
        line: usize,
        /// The offending count.
        count: u32,
        /// Number of checkpoints in a Monte Carlo run.
        limit: usize,
    },

    /// A `Msg` value is not valid hexadecimal.
    #[error("line {line}: {source}")]
    Hex {
        /// One-based line number.
        line: usize,
        /// The decoding failure.
        #[source]
        source: HexError,
    },

    /// A `Seed` or `MD` value is not a SHA-256 digest.
    #[error("line {line}: {source}")]
    Digest {
        /// One-based line number.
        line: usize,
        /// The parsing failure.
        #[source]
        source: DigestParseError,
    },

    /// `Len` disagrees with the number of bytes in `Msg`.
    #[error("line {line}: Len = {bits} but the message holds {bytes} bytes")]
    LengthMismatch {
        /// One-based line number of the `MD` field closing the record.
        line: usize,
        /// Declared length in bits.
        bits: u64,
        /// Decoded message length in bytes.
        bytes: usize,
    },

    /// The JSON document does not have the expected shape.
    #[error("malformed JSON vectors: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON entry carries an invalid `hash`.
    #[error("JSON entry {index}: {source}")]
    JsonDigest {
        /// Zero-based entry index.
        index: usize,
        /// The parsing failure.
        #[source]
        source: DigestParseError,
    },

    /// The file parsed but holds no vectors.
    #[error("no vectors found in {path}")]
    Empty {
        /// The file that was loaded.
        path: PathBuf,
    },
}

impl VectorError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` when the failure came from the filesystem rather than
    /// from the file's contents.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let error = VectorError::io(
            "/vectors/missing.rsp",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(error.is_io());
        assert!(error.to_string().contains("/vectors/missing.rsp"));
    }

    #[test]
    fn hex_error_keeps_line_number() {
        let error = VectorError::Hex {
            line: 7,
            source: HexError::OddLength { len: 3 },
        };
        assert!(!error.is_io());
        assert!(error.to_string().starts_with("line 7: "));
    }

    #[test]
    fn count_error_names_limit() {
        let error = VectorError::CountOutOfSequence {
            line: 12,
            count: 100,
            limit: 100,
        };
        assert_eq!(
            error.to_string(),
            "line 12: COUNT = 100 is out of sequence, counts must increase and stay below 100"
        );
    }
}
