//! crates/cli/src/error.rs
//! Failures surfaced by [`run`](crate::run) and their exit statuses.

use std::io;
use std::path::PathBuf;

use vectors::VectorError;

/// Process exit statuses reported by `fips-sha256`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    /// The digest was printed or every vector matched.
    Success = 0,
    /// Invalid or conflicting command-line arguments.
    Syntax = 1,
    /// An input file, standard input or standard output failed.
    FileIo = 2,
    /// At least one vector did not match.
    Mismatch = 3,
    /// The vector file could not be parsed.
    Malformed = 4,
}

impl ExitStatus {
    /// Numeric code passed to the operating system.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error raised while executing a parsed invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Argument parsing failed.
    #[error("{message}")]
    Usage {
        /// First line of the `clap` diagnostic.
        message: String,
    },

    /// An input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file named on the command line.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// Standard output could not be written.
    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),

    /// Loading the vector file failed.
    #[error(transparent)]
    Vectors(#[from] VectorError),

    /// Some vectors did not match.
    #[error("{failed} of {total} vectors failed")]
    Mismatch {
        /// Number of failing vectors.
        failed: usize,
        /// Number of vectors checked.
        total: usize,
    },
}

impl CliError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a `clap` error, keeping its first line without the `error: `
    /// prefix.
    #[must_use]
    pub fn usage(error: &clap::Error) -> Self {
        let rendered = error.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::Usage {
            message: first.strip_prefix("error: ").unwrap_or(first).to_owned(),
        }
    }

    /// Exit status for this error.
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Usage { .. } => ExitStatus::Syntax,
            Self::Io { .. } | Self::Stdin(_) | Self::Output(_) => ExitStatus::FileIo,
            Self::Vectors(error) if error.is_io() => ExitStatus::FileIo,
            Self::Vectors(_) => ExitStatus::Malformed,
            Self::Mismatch { .. } => ExitStatus::Mismatch,
        }
    }
}
