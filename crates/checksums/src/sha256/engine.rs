use super::compress::compress;
use super::constants::{BLOCK_LEN, DIGEST_LEN, H0};
use super::padding::pad;
use super::schedule::schedule;
use crate::digest::Sha256Digest;

/// Computes the SHA-256 digest of `message`.
///
/// The message is padded into a fresh buffer, then every 64-byte block is
/// scheduled and compressed in order, starting from [`H0`]. The function owns
/// all intermediate state, so concurrent calls never interfere.
///
/// # Examples
///
/// ```
/// use checksums::digest;
///
/// let digest = digest(b"");
/// assert_eq!(
///     digest.to_hex(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn digest(message: &[u8]) -> Sha256Digest {
    let padded = pad(message);
    let (blocks, remainder) = padded.as_chunks::<BLOCK_LEN>();
    debug_assert!(remainder.is_empty(), "padding must fill whole blocks");

    let state = blocks
        .iter()
        .fold(H0, |state, block| compress(state, &schedule(block)));

    logging::trace_digest!(len = message.len(), blocks = blocks.len(), "digest computed");
    Sha256Digest::from(state_to_bytes(&state))
}

/// Computes the SHA-256 digest of `message` as 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     checksums::hash(b"hello world"),
///     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
/// );
/// ```
#[must_use]
pub fn hash(message: &[u8]) -> String {
    digest(message).to_hex()
}

/// Serialises the final state, each word big-endian.
pub(crate) fn state_to_bytes(state: &[u32; 8]) -> [u8; DIGEST_LEN] {
    let mut out = [0_u8; DIGEST_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(state) {
        *chunk = word.to_be_bytes();
    }
    out
}
