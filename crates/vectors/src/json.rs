//! JSON vector files: an array of `{ "input": ..., "hash": ... }` objects.

use checksums::Sha256Digest;
use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::model::{MessageVector, Origin, VectorSet};

/// One entry of a JSON vector file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonVector {
    /// Text whose UTF-8 bytes are hashed.
    pub input: String,
    /// Expected digest as lowercase or uppercase hex.
    pub hash: String,
}

/// Parses a JSON vector document.
///
/// # Errors
///
/// Returns [`VectorError::Json`] when the document is not an array of
/// `input`/`hash` objects and [`VectorError::JsonDigest`] when a `hash` is
/// not 64 hex digits.
///
/// # Examples
///
/// ```
/// let set = vectors::load_json(
///     r#"[{"input":"abc","hash":"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"}]"#,
/// )
/// .unwrap();
/// assert_eq!(set.messages[0].message, b"abc");
/// ```
pub fn load_json(text: &str) -> Result<VectorSet, VectorError> {
    let entries: Vec<JsonVector> = serde_json::from_str(text)?;

    let messages = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let expected = Sha256Digest::from_hex(&entry.hash)
                .map_err(|source| VectorError::JsonDigest { index, source })?;
            Ok(MessageVector {
                origin: Origin::Entry(index),
                message: entry.input.into_bytes(),
                expected,
            })
        })
        .collect::<Result<Vec<_>, VectorError>>()?;

    logging::trace_vectors!(messages = messages.len(), "parsed JSON vectors");
    Ok(VectorSet {
        messages,
        ..VectorSet::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_empty_set() {
        assert!(load_json("[]").unwrap().is_empty());
    }

    #[test]
    fn uppercase_hash_is_accepted() {
        let hash = checksums::hash(b"").to_uppercase();
        let text = serde_json::to_string(&[JsonVector {
            input: String::new(),
            hash,
        }])
        .unwrap();
        let set = load_json(&text).unwrap();
        assert_eq!(set.messages[0].expected, checksums::digest(b""));
    }

    #[test]
    fn missing_field_is_json_error() {
        let error = load_json(r#"[{"input":"abc"}]"#).unwrap_err();
        assert!(matches!(error, VectorError::Json(_)));
    }

    #[test]
    fn bad_hash_reports_entry() {
        let good = checksums::hash(b"a");
        let text = format!(r#"[{{"input":"a","hash":"{good}"}},{{"input":"b","hash":"xyz"}}]"#);
        let error = load_json(&text).unwrap_err();
        assert!(matches!(error, VectorError::JsonDigest { index: 1, .. }));
    }
}
