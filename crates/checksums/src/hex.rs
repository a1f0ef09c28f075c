//! Lowercase hexadecimal rendering and strict decoding.
//!
//! Digests are always rendered as lowercase hex. Decoding accepts either case,
//! trims surrounding whitespace, and rejects odd-length input or any
//! non-hex character instead of skipping it.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Errors produced while decoding a hexadecimal string.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HexError {
    /// The input holds an odd number of digits and cannot form whole bytes.
    #[error("hex string must have even length, found {len} digits")]
    OddLength {
        /// Number of digits after trimming whitespace.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]` appeared in the input.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character in the trimmed input.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// Renders `bytes` as lowercase hexadecimal.
///
/// # Examples
///
/// ```
/// assert_eq!(checksums::hex::encode([0x00_u8, 0xab, 0xff]), "00abff");
/// ```
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

/// Decodes a hexadecimal string into bytes.
///
/// Leading and trailing whitespace is ignored and an empty (or all
/// whitespace) input decodes to an empty vector.
///
/// # Examples
///
/// ```
/// use checksums::hex::{HexError, decode};
///
/// assert_eq!(decode(" 00AbfF\n")?, vec![0x00, 0xab, 0xff]);
/// assert_eq!(decode("abc"), Err(HexError::OddLength { len: 3 }));
/// # Ok::<(), HexError>(())
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = text.trim();
    let digits = trimmed.as_bytes();

    if let Some(position) = digits.iter().position(|byte| !byte.is_ascii_hexdigit()) {
        let found = trimmed[position..].chars().next().unwrap_or_default();
        return Err(HexError::InvalidDigit { position, found });
    }

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let (pairs, _) = digits.as_chunks::<2>();
    Ok(pairs
        .iter()
        .map(|&[high, low]| (nibble(high) << 4) | nibble(low))
        .collect())
}

const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
