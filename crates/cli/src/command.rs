//! crates/cli/src/command.rs
//! `clap` command definition and the raw parsed-argument structure.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, PathBufValueParser};
use clap::{Arg, ArgAction, Command};

use crate::PROGRAM_NAME;

/// Builds the `clap` command used for parsing.
///
/// Help and version output are rendered by this crate rather than by `clap`
/// so the text stays stable across `clap` releases.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("string")
                .long("string")
                .short('s')
                .value_name("TEXT")
                .help("Hash the bytes of TEXT.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set)
                .conflicts_with_all(["file", "verify"]),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Hash the contents of FILE.")
                .value_parser(PathBufValueParser::new())
                .action(ArgAction::Set)
                .conflicts_with("verify"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .value_name("FILE")
                .help("Check every vector in a .rsp or .json file.")
                .value_parser(PathBufValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("bare")
                .long("bare")
                .help("Print only the hex digest.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors.")
                .action(ArgAction::SetTrue),
        )
}

/// Parsed command-line arguments before validation into a
/// [`HashConfig`](crate::HashConfig).
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `--help`, `-h`
    pub show_help: bool,
    /// `--version`, `-V`
    pub show_version: bool,
    /// `--string`, `-s`
    pub string: Option<OsString>,
    /// `--file`, `-f`
    pub file: Option<PathBuf>,
    /// `--verify`
    pub verify: Option<PathBuf>,
    /// `--bare`
    pub bare: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
    /// `--quiet`, `-q`
    pub quiet: bool,
}

/// Parses `arguments`, the first of which is the program name.
///
/// An empty iterator is treated as a bare invocation.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        string: matches.remove_one::<OsString>("string"),
        file: matches.remove_one::<PathBuf>("file"),
        verify: matches.remove_one::<PathBuf>("verify"),
        bare: matches.get_flag("bare"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
    })
}
