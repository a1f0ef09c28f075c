//! crates/cli/src/help.rs
//! Static help and version text.

use crate::PROGRAM_NAME;

const HELP_BODY: &str = "\
Compute SHA-256 digests (FIPS 180-4).

Usage:
  {prog} -s TEXT          hash the bytes of TEXT
  {prog} -f FILE          hash the contents of FILE
  {prog} --verify FILE    check a .rsp or .json vector file
  {prog}                  hash standard input

With no source, a terminal is prompted for one line; piped input is hashed
in full.

Options:
  -s, --string TEXT   Hash the bytes of TEXT.
  -f, --file FILE     Hash the contents of FILE.
      --verify FILE   Check every vector in a .rsp or .json file.
      --bare          Print only the hex digest.
  -v, --verbose       Increase diagnostic output; repeat for more.
  -q, --quiet         Only report errors.
  -h, --help          Show this help message and exit.
  -V, --version       Output version information and exit.

Exit status:
  0  success
  1  invalid arguments
  2  file or stream I/O failure
  3  vector mismatch
  4  malformed vector file

RUST_LOG overrides the log filter chosen by -v and -q.
";

/// Renders the help text describing the supported options.
pub(crate) fn render_help() -> String {
    HELP_BODY.replace("{prog}", PROGRAM_NAME)
}

/// Renders the one-line version banner.
pub(crate) fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
