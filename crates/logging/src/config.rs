//! crates/logging/src/config.rs
//! Logging configuration assembled from command-line flags.

use super::levels::Verbosity;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Settings for the process-wide tracing subscriber.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Verbosity selected on the command line.
    pub verbosity: Verbosity,
    /// Whether to colour output with ANSI escapes.
    pub ansi: bool,
    /// Whether [`LOG_ENV_VAR`] may override [`verbosity`](Self::verbosity).
    pub respect_env: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            ansi: false,
            respect_env: true,
        }
    }
}

impl LogConfig {
    /// Creates a configuration for `verbosity` with the remaining defaults.
    #[must_use]
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    /// Builds a configuration from the `-v` count and `--quiet` flag.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        Self::new(Verbosity::from_flags(verbose, quiet))
    }

    /// Enables or disables ANSI colouring.
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Controls whether [`LOG_ENV_VAR`] is consulted.
    #[must_use]
    pub fn with_respect_env(mut self, respect_env: bool) -> Self {
        self.respect_env = respect_env;
        self
    }
}
