use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use cli::StdinMode;

/// Runs the CLI against the process's terminal state and normalises the
/// returned status through the shared exit-code mapper.
#[must_use]
pub fn run_with<I, In, Out, Err>(
    args: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let status = cli::run(args, stdin, StdinMode::detect(), stdout, stderr);
    let _ = stdout.flush();
    cli::exit_code_from(status)
}
