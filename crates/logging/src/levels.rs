//! crates/logging/src/levels.rs
//! Verbosity levels derived from `-q` and repeated `-v` flags.

use std::fmt;

/// How much diagnostic output the user asked for.
///
/// Levels are ordered, so `Verbosity::Debug > Verbosity::Verbose`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Only errors (`--quiet`).
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Informational progress (`-v`).
    Verbose,
    /// Debug detail such as vector parsing (`-vv`).
    Debug,
    /// Per-digest trace events (`-vvv` and above).
    Trace,
}

impl Verbosity {
    /// Maps command-line flags to a verbosity level.
    ///
    /// `--quiet` wins over any number of `-v` flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
    /// assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
    /// assert_eq!(Verbosity::from_flags(5, false), Verbosity::Trace);
    /// assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    /// ```
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Lowercase name, also usable as a `tracing` filter directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// The most verbose `tracing` level this verbosity admits.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub const fn level_filter(self) -> tracing_subscriber::filter::LevelFilter {
        use tracing_subscriber::filter::LevelFilter;

        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Debug);
        assert!(Verbosity::Debug < Verbosity::Trace);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn display_matches_directive() {
        assert_eq!(Verbosity::Verbose.to_string(), "info");
        assert_eq!(Verbosity::Quiet.to_string(), "error");
    }
}
