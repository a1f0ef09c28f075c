//! crates/logging/src/tracing_macros.rs
//! Tracing macros with fixed targets for each part of the workspace.
//!
//! The macros expand to `::tracing` calls, so callers need `tracing` as a
//! dependency but not this crate's `tracing` feature.

/// Target names used by the macros in this module.
pub mod targets {
    /// Per-message digest events.
    pub const DIGEST: &str = "sha256::digest";
    /// Known-answer file parsing and verification.
    pub const VECTORS: &str = "sha256::vectors";
    /// Command-line front end.
    pub const CLI: &str = "sha256::cli";
}

/// Emit a trace-level event for a digest computation.
///
/// # Example
/// ```ignore
/// trace_digest!(len = message.len(), blocks = 2, "digest computed");
/// ```
#[macro_export]
macro_rules! trace_digest {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "sha256::digest", $($arg)*);
    };
}

/// Emit a debug-level event while loading or checking test vectors.
///
/// # Example
/// ```ignore
/// trace_vectors!(path = %path.display(), count = set.len(), "loaded vectors");
/// ```
#[macro_export]
macro_rules! trace_vectors {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "sha256::vectors", $($arg)*);
    };
}

/// Emit a debug-level event from the command-line front end.
///
/// # Example
/// ```ignore
/// trace_cli!(source = "stdin", "reading input");
/// ```
#[macro_export]
macro_rules! trace_cli {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "sha256::cli", $($arg)*);
    };
}
