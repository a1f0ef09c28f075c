//! Parser for CAVP `.rsp` response files.
//!
//! Message files are sequences of `Len`/`Msg`/`MD` records; Monte Carlo files
//! carry a single `Seed` followed by `COUNT`/`MD` pairs. Blank lines, `#`
//! comments and bracketed headers such as `[L = 32]` are ignored, as are
//! keys this parser does not know.

use checksums::Sha256Digest;

use crate::error::VectorError;
use crate::model::{MessageVector, MonteSet, MonteVector, Origin, VectorSet};
use crate::monte::MONTE_CHECKPOINTS;

/// Decodes a hexadecimal field, trimming surrounding whitespace.
///
/// An empty string decodes to an empty vector.
///
/// # Errors
///
/// Returns [`checksums::HexError`] for odd-length input or non-hex digits.
///
/// # Examples
///
/// ```
/// assert_eq!(vectors::decode_hex(" 0aff ").unwrap(), vec![0x0a, 0xff]);
/// assert!(vectors::decode_hex("").unwrap().is_empty());
/// assert!(vectors::decode_hex("abc").is_err());
/// ```
pub fn decode_hex(text: &str) -> Result<Vec<u8>, checksums::HexError> {
    checksums::hex::decode(text)
}

#[derive(Debug)]
struct PendingMessage {
    line: usize,
    bits: u64,
    message: Option<Vec<u8>>,
}

#[derive(Clone, Copy, Debug)]
struct PendingCount {
    line: usize,
    count: u32,
}

/// Parses the contents of an `.rsp` file.
///
/// `Len = 0` always denotes the empty message, whatever placeholder `Msg`
/// carries. Records whose `Len` is not a multiple of eight are counted in
/// [`VectorSet::skipped`] and otherwise ignored.
///
/// Monte Carlo counts must increase and stay below [`MONTE_CHECKPOINTS`].
///
/// # Errors
///
/// Returns a [`VectorError`] naming the offending line when a field is
/// malformed or appears out of order, or when a record is left without its
/// `MD` line.
pub fn parse_rsp(text: &str) -> Result<VectorSet, VectorError> {
    let mut set = VectorSet::default();
    let mut pending: Option<PendingMessage> = None;
    let mut count: Option<PendingCount> = None;
    let mut seed_line: Option<usize> = None;
    let mut last_count: Option<u32> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(VectorError::Syntax {
                line,
                text: trimmed.to_owned(),
            });
        };
        let value = value.trim();

        match key.trim() {
            "Len" => {
                let bits = value.parse().map_err(|_| VectorError::Number {
                    line,
                    field: "Len",
                    value: value.to_owned(),
                })?;
                ensure_closed(pending.as_ref(), count)?;
                pending = Some(PendingMessage {
                    line,
                    bits,
                    message: None,
                });
            }
            "Msg" => {
                let Some(record) = pending.as_mut() else {
                    return Err(VectorError::Incomplete {
                        line,
                        field: "Msg",
                        missing: "Len",
                    });
                };
                let bytes = decode_hex(value).map_err(|source| VectorError::Hex { line, source })?;
                record.message = Some(bytes);
            }
            "Seed" => {
                if let Some(first) = seed_line {
                    return Err(VectorError::DuplicateSeed { line, first });
                }
                let seed = parse_digest(value, line)?;
                seed_line = Some(line);
                set.monte = Some(MonteSet {
                    seed,
                    checkpoints: Vec::new(),
                });
            }
            "COUNT" => {
                let parsed: u32 = value.parse().map_err(|_| VectorError::Number {
                    line,
                    field: "COUNT",
                    value: value.to_owned(),
                })?;
                ensure_closed(pending.as_ref(), count)?;
                let in_range = usize::try_from(parsed).is_ok_and(|n| n < MONTE_CHECKPOINTS);
                if !in_range || last_count.is_some_and(|last| parsed <= last) {
                    return Err(VectorError::CountOutOfSequence {
                        line,
                        count: parsed,
                        limit: MONTE_CHECKPOINTS,
                    });
                }
                last_count = Some(parsed);
                count = Some(PendingCount {
                    line,
                    count: parsed,
                });
            }
            "MD" => {
                let expected = parse_digest(value, line)?;
                if let Some(record) = pending.take() {
                    close_message(&mut set, record, expected, line)?;
                } else if let Some(PendingCount { count, .. }) = count.take() {
                    let Some(monte) = set.monte.as_mut() else {
                        return Err(VectorError::Incomplete {
                            line,
                            field: "COUNT",
                            missing: "Seed",
                        });
                    };
                    monte.checkpoints.push(MonteVector { count, expected });
                } else {
                    return Err(VectorError::Incomplete {
                        line,
                        field: "MD",
                        missing: "Len or COUNT",
                    });
                }
            }
            other => {
                logging::trace_vectors!(line, key = other, "ignoring unknown field");
            }
        }
    }
    ensure_closed(pending.as_ref(), count)?;

    logging::trace_vectors!(
        messages = set.messages.len(),
        checkpoints = set.monte.as_ref().map_or(0, |monte| monte.checkpoints.len()),
        skipped = set.skipped,
        "parsed response file"
    );
    Ok(set)
}

fn ensure_closed(
    pending: Option<&PendingMessage>,
    count: Option<PendingCount>,
) -> Result<(), VectorError> {
    if let Some(record) = pending {
        return Err(VectorError::Unterminated {
            line: record.line,
            field: "Len",
        });
    }
    if let Some(record) = count {
        return Err(VectorError::Unterminated {
            line: record.line,
            field: "COUNT",
        });
    }
    Ok(())
}

fn parse_digest(value: &str, line: usize) -> Result<Sha256Digest, VectorError> {
    Sha256Digest::from_hex(value).map_err(|source| VectorError::Digest { line, source })
}

fn close_message(
    set: &mut VectorSet,
    record: PendingMessage,
    expected: Sha256Digest,
    line: usize,
) -> Result<(), VectorError> {
    if record.bits % 8 != 0 {
        set.skipped += 1;
        return Ok(());
    }

    let message = if record.bits == 0 {
        Vec::new()
    } else {
        let Some(message) = record.message else {
            return Err(VectorError::Incomplete {
                line,
                field: "MD",
                missing: "Msg",
            });
        };
        if message.len() as u64 * 8 != record.bits {
            return Err(VectorError::LengthMismatch {
                line,
                bits: record.bits,
                bytes: message.len(),
            });
        }
        message
    };

    set.messages.push(MessageVector {
        origin: Origin::Line(line),
        message,
        expected,
    });
    Ok(())
}
