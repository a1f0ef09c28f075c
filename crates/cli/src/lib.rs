#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front end of `fips-sha256`. It hashes a string
//! argument, a file or standard input with the [`checksums`] engine, or checks
//! a known-answer vector file through [`vectors`].
//!
//! # Design
//!
//! [`run`] accepts the argument list together with handles for standard input,
//! output and error, so tests drive it with in-memory buffers. A `clap`
//! builder command parses the arguments; the result is validated into a
//! [`HashConfig`] and executed. Digests go to standard output. Prompts and
//! diagnostics go to standard error, prefixed with the program name.
//!
//! # Errors
//!
//! Every failure is a [`CliError`] whose [`ExitStatus`] becomes the return
//! value of [`run`]: `1` for argument errors, `2` for I/O failures, `3` when
//! a vector does not match and `4` for malformed vector files.
//!
//! # Examples
//!
//! ```
//! use cli::{StdinMode, run};
//!
//! let mut stdin = std::io::empty();
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run(
//!     ["fips-sha256", "-s", "abc"],
//!     &mut stdin,
//!     StdinMode::Piped,
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "SHA-256: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
//! );
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::Path;

mod command;
mod config;
mod error;
mod help;
mod input;

pub use config::{Action, HashConfig, InputSource, OutputStyle};
pub use error::{CliError, ExitStatus};
pub use input::{PROMPT, StdinMode};

/// Name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "fips-sha256";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and I/O handles.
///
/// Returns the process exit status; `0` means success. `stdin_mode` says
/// whether standard input is a terminal, normally [`StdinMode::detect`].
pub fn run<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdin_mode: StdinMode,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let result = match command::parse_args(arguments) {
        Ok(parsed) => {
            let config = HashConfig::from(parsed);
            logging::init_tracing(&config.log);
            execute(&config, stdin, stdin_mode, stdout, stderr)
        }
        Err(error) => Err(CliError::usage(&error)),
    };

    match result {
        Ok(()) => ExitStatus::Success.code(),
        Err(error) => {
            let status = error.exit_status();
            tracing::debug!(target: "sha256::cli", ?status, "invocation failed");
            // The status code still reports the failure if stderr is gone.
            let _ = writeln!(stderr, "{PROGRAM_NAME} error: {error}");
            status.code()
        }
    }
}

fn execute<In, Out, Err>(
    config: &HashConfig,
    stdin: &mut In,
    stdin_mode: StdinMode,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<(), CliError>
where
    In: BufRead,
    Out: Write,
    Err: Write,
{
    match &config.action {
        Action::Help => stdout
            .write_all(help::render_help().as_bytes())
            .map_err(CliError::Output),
        Action::Version => stdout
            .write_all(help::render_version().as_bytes())
            .map_err(CliError::Output),
        Action::Hash(source) => {
            let digest = input::hash_source(source, stdin, stdin_mode, stderr)?;
            writeln!(stdout, "{}", config.style.render(&digest)).map_err(CliError::Output)
        }
        Action::Verify(path) => verify_file(path, stdout),
    }
}

fn verify_file<Out: Write>(path: &Path, stdout: &mut Out) -> Result<(), CliError> {
    let set = vectors::load_path(path)?;
    tracing::info!(
        target: "sha256::cli",
        path = %path.display(),
        vectors = set.len(),
        skipped = set.skipped,
        "verifying"
    );

    let report = vectors::verify(&set);
    write_report(&report, stdout).map_err(CliError::Output)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::Mismatch {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}

fn write_report<Out: Write>(report: &vectors::Report, stdout: &mut Out) -> io::Result<()> {
    for failure in &report.failures {
        writeln!(stdout, "FAILED {failure}")?;
    }
    writeln!(stdout, "{} vectors passed", report.passed)
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

/// Entry points exposed for integration tests.
#[doc(hidden)]
pub mod test_utils {
    use std::ffi::OsString;

    pub use crate::command::ParsedArgs;

    /// Parses `arguments` without executing them.
    ///
    /// # Errors
    ///
    /// Returns the `clap` error for invalid or conflicting arguments.
    pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        crate::command::parse_args(arguments)
    }
}
