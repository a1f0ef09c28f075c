use std::fmt;
use std::str::FromStr;

use crate::hex::{self, HexError};
use crate::sha256::DIGEST_LEN;

/// A 256-bit SHA-256 digest.
///
/// Displays as 64 lowercase hexadecimal characters and parses back from
/// hexadecimal text in either case.
///
/// # Examples
///
/// ```
/// use checksums::Sha256Digest;
///
/// let digest = checksums::digest(b"abc");
/// let parsed: Sha256Digest =
///     "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD".parse()?;
/// assert_eq!(digest, parsed);
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// # Ok::<(), checksums::DigestParseError>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Number of bytes in a digest.
    pub const LEN: usize = DIGEST_LEN;

    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from hexadecimal text.
    pub fn from_hex(text: &str) -> Result<Self, DigestParseError> {
        let bytes = hex::decode(text)?;
        let array: [u8; DIGEST_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestParseError::Length { len: bytes.len() })?;
        Ok(Self(array))
    }

    /// Number of bits that differ between two digests.
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(left, right)| (left ^ right).count_ones())
            .sum()
    }
}

impl From<[u8; DIGEST_LEN]> for Sha256Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Sha256Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sha256Digest").field(&self.to_hex()).finish()
    }
}

impl FromStr for Sha256Digest {
    type Err = DigestParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_hex(text)
    }
}

/// Error returned when hexadecimal text does not describe a SHA-256 digest.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DigestParseError {
    /// The text is not valid hexadecimal.
    #[error(transparent)]
    Hex(#[from] HexError),
    /// The text decodes to the wrong number of bytes.
    #[error("SHA-256 digest requires {} bytes, received {len}", DIGEST_LEN)]
    Length {
        /// Number of bytes the text decoded to.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn display_and_parse_agree() {
        let digest: Sha256Digest = ABC.parse().expect("valid digest");
        assert_eq!(digest.to_string(), ABC);
        assert_eq!(digest.as_bytes()[0], 0xba);
    }

    #[test]
    fn parse_rejects_short_input() {
        assert_eq!(
            "abcd".parse::<Sha256Digest>(),
            Err(DigestParseError::Length { len: 2 })
        );
    }

    #[test]
    fn parse_forwards_hex_errors() {
        let error = "zz".parse::<Sha256Digest>().expect_err("invalid digit");
        assert!(matches!(error, DigestParseError::Hex(HexError::InvalidDigit { .. })));
        assert_eq!(error.to_string(), "invalid hex digit 'z' at position 0");
    }

    #[test]
    fn length_error_message() {
        let error = DigestParseError::Length { len: 31 };
        assert_eq!(error.to_string(), "SHA-256 digest requires 32 bytes, received 31");
    }

    #[test]
    fn debug_shows_hex() {
        let digest = Sha256Digest::new([0; DIGEST_LEN]);
        assert_eq!(format!("{digest:?}"), format!("Sha256Digest({:?})", "0".repeat(64)));
    }

    #[test]
    fn hamming_distance_counts_bits() {
        let zero = Sha256Digest::new([0; DIGEST_LEN]);
        let mut bytes = [0; DIGEST_LEN];
        bytes[0] = 0b1011;
        bytes[31] = 0x80;
        assert_eq!(zero.hamming_distance(&Sha256Digest::from(bytes)), 4);
        assert_eq!(zero.hamming_distance(&zero), 0);
    }
}
