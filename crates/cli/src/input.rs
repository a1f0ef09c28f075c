//! crates/cli/src/input.rs
//! Reading and hashing the selected input.

use std::fs::File;
use std::io::{self, BufRead, Write};

use checksums::{Sha256, Sha256Digest};
use is_terminal::IsTerminal;

use crate::config::InputSource;
use crate::error::CliError;

/// Prompt shown before reading a line from an interactive terminal.
pub const PROMPT: &str = "Enter string to hash: ";

/// How standard input is attached to the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StdinMode {
    /// A terminal: prompt, then hash one line without its terminator.
    Interactive,
    /// A pipe or file: hash everything until end of input.
    Piped,
}

impl StdinMode {
    /// Inspects the process's standard input.
    #[must_use]
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            Self::Interactive
        } else {
            Self::Piped
        }
    }
}

/// Hashes `source`, reading from `stdin` when it names standard input.
pub(crate) fn hash_source<In, Err>(
    source: &InputSource,
    stdin: &mut In,
    mode: StdinMode,
    stderr: &mut Err,
) -> Result<Sha256Digest, CliError>
where
    In: BufRead,
    Err: Write,
{
    match source {
        InputSource::Text(text) => {
            let bytes = text.as_encoded_bytes();
            logging::trace_cli!(len = bytes.len(), "hashing argument");
            Ok(checksums::digest(bytes))
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|error| CliError::io(path, error))?;
            let mut hasher = Sha256::new();
            let read = hasher
                .update_reader(file)
                .map_err(|error| CliError::io(path, error))?;
            logging::trace_cli!(path = %path.display(), bytes = read, "hashed file");
            Ok(hasher.finalize())
        }
        InputSource::Stdin => match mode {
            StdinMode::Interactive => {
                stderr
                    .write_all(PROMPT.as_bytes())
                    .and_then(|()| stderr.flush())
                    .map_err(CliError::Output)?;
                let line = read_line(stdin).map_err(CliError::Stdin)?;
                logging::trace_cli!(len = line.len(), "hashing terminal line");
                Ok(checksums::digest(&line))
            }
            StdinMode::Piped => {
                let mut hasher = Sha256::new();
                let read = hasher.update_reader(stdin).map_err(CliError::Stdin)?;
                logging::trace_cli!(bytes = read, "hashed standard input");
                Ok(hasher.finalize())
            }
        },
    }
}

/// Reads one line, dropping a trailing `\n` or `\r\n`.
fn read_line<In: BufRead>(stdin: &mut In) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    stdin.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}
