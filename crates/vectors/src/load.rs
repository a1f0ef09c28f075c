//! Reading vector files from disk.

use std::fs;
use std::path::Path;

use crate::error::VectorError;
use crate::json::load_json;
use crate::model::VectorSet;
use crate::rsp::parse_rsp;

/// On-disk vector file layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorFormat {
    /// CAVP response file.
    Rsp,
    /// JSON array of `input`/`hash` objects.
    Json,
}

impl VectorFormat {
    /// Picks a format from the file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("rsp") {
            Some(Self::Rsp)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// Guesses the format from file contents.
    ///
    /// A document whose first significant characters are `[` followed by `{`
    /// or `]` is JSON; anything else, including `[L = 32]` headers, is
    /// treated as a response file.
    #[must_use]
    pub fn sniff(text: &str) -> Self {
        let Some(rest) = text.trim_start().strip_prefix('[') else {
            return Self::Rsp;
        };
        match rest.trim_start().chars().next() {
            Some('{' | ']') => Self::Json,
            _ => Self::Rsp,
        }
    }

    /// Parses `text` in this format.
    ///
    /// # Errors
    ///
    /// Propagates the parser's [`VectorError`].
    pub fn parse(self, text: &str) -> Result<VectorSet, VectorError> {
        match self {
            Self::Rsp => parse_rsp(text),
            Self::Json => load_json(text),
        }
    }
}

/// Loads a vector file, choosing the parser by extension or by content.
///
/// # Errors
///
/// Returns [`VectorError::Io`] when the file cannot be read,
/// [`VectorError::Empty`] when it holds no vectors, and the parser's error
/// otherwise.
pub fn load_path(path: impl AsRef<Path>) -> Result<VectorSet, VectorError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| VectorError::io(path, error))?;
    let format = VectorFormat::from_path(path).unwrap_or_else(|| VectorFormat::sniff(&text));

    logging::trace_vectors!(path = %path.display(), ?format, "loading vector file");
    let set = format.parse(&text)?;
    if set.is_empty() {
        return Err(VectorError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(set)
}
