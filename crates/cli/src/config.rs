//! crates/cli/src/config.rs
//! Validated configuration for a single invocation.

use std::ffi::OsString;
use std::path::PathBuf;

use logging::LogConfig;

use crate::command::ParsedArgs;

/// Where the bytes to hash come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// The argument of `--string`.
    Text(OsString),
    /// The contents of the file named by `--file`.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

/// How a digest is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// `SHA-256: <hex>`
    #[default]
    Labeled,
    /// `<hex>` only (`--bare`).
    Bare,
}

impl OutputStyle {
    /// Formats `digest` in this style, without a trailing newline.
    #[must_use]
    pub fn render(self, digest: &checksums::Sha256Digest) -> String {
        match self {
            Self::Labeled => format!("SHA-256: {digest}"),
            Self::Bare => digest.to_hex(),
        }
    }
}

/// What the invocation does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print `--help`.
    Help,
    /// Print `--version`.
    Version,
    /// Hash one input.
    Hash(InputSource),
    /// Check a vector file.
    Verify(PathBuf),
}

/// Everything `run` needs after argument parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashConfig {
    /// The selected action.
    pub action: Action,
    /// Digest output style.
    pub style: OutputStyle,
    /// Subscriber settings from `-v` and `-q`.
    pub log: LogConfig,
}

impl From<ParsedArgs> for HashConfig {
    fn from(parsed: ParsedArgs) -> Self {
        let action = if parsed.show_help {
            Action::Help
        } else if parsed.show_version {
            Action::Version
        } else if let Some(path) = parsed.verify {
            Action::Verify(path)
        } else if let Some(text) = parsed.string {
            Action::Hash(InputSource::Text(text))
        } else if let Some(path) = parsed.file {
            Action::Hash(InputSource::File(path))
        } else {
            Action::Hash(InputSource::Stdin)
        };

        Self {
            action,
            style: if parsed.bare {
                OutputStyle::Bare
            } else {
                OutputStyle::Labeled
            },
            log: LogConfig::from_flags(parsed.verbose, parsed.quiet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::Verbosity;

    #[test]
    fn defaults_hash_stdin_with_label() {
        let config = HashConfig::from(ParsedArgs::default());
        assert_eq!(config.action, Action::Hash(InputSource::Stdin));
        assert_eq!(config.style, OutputStyle::Labeled);
        assert_eq!(config.log.verbosity, Verbosity::Normal);
    }

    #[test]
    fn help_wins_over_sources() {
        let config = HashConfig::from(ParsedArgs {
            show_help: true,
            show_version: true,
            string: Some("abc".into()),
            ..ParsedArgs::default()
        });
        assert_eq!(config.action, Action::Help);
    }

    #[test]
    fn flags_map_to_style_and_verbosity() {
        let config = HashConfig::from(ParsedArgs {
            file: Some("data.bin".into()),
            bare: true,
            verbose: 3,
            ..ParsedArgs::default()
        });
        assert_eq!(config.action, Action::Hash(InputSource::File("data.bin".into())));
        assert_eq!(config.style, OutputStyle::Bare);
        assert_eq!(config.log.verbosity, Verbosity::Trace);
    }

    #[test]
    fn render_styles() {
        let digest = checksums::digest(b"abc");
        assert_eq!(
            OutputStyle::Labeled.render(&digest),
            "SHA-256: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(OutputStyle::Bare.render(&digest), digest.to_hex());
    }
}
