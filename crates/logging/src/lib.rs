#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the diagnostic plumbing shared by the `fips-sha256`
//! workspace: a [`Verbosity`] scale derived from `-q` and repeated `-v`
//! flags, a [`LogConfig`] describing the subscriber to install, and the
//! `trace_digest!`, `trace_vectors!` and `trace_cli!` macros that tag events
//! with the fixed names in [`targets`].
//!
//! # Features
//!
//! - `tracing`: subscriber construction (`init_tracing`, `build_filter`,
//!   `build_subscriber`) and the in-memory `CapturedLogs` writer.
//! - `serde`: `Serialize`/`Deserialize` for [`Verbosity`] and [`LogConfig`].
//!
//! Library crates depend on `logging` without features and only use the
//! macros. The binary enables `tracing` and installs the subscriber once.
//!
//! # Invariants
//!
//! - Log output goes to standard error; standard output carries digests only.
//! - `RUST_LOG` overrides the verbosity-derived filter unless
//!   [`LogConfig::respect_env`] is cleared.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Verbosity};
//!
//! let config = LogConfig::from_flags(2, false);
//! assert_eq!(config.verbosity, Verbosity::Debug);
//! assert_eq!(config.verbosity.as_str(), "debug");
//! ```

mod config;
mod levels;
mod tracing_macros;

#[cfg(feature = "tracing")]
mod capture;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LOG_ENV_VAR, LogConfig};
pub use levels::Verbosity;
pub use tracing_macros::targets;

#[cfg(feature = "tracing")]
pub use capture::{CapturedLogs, CapturedWriter};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{build_filter, build_subscriber, init_tracing};
