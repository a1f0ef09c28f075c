use super::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Terminator byte carrying the mandatory `1` bit.
const TERMINATOR: u8 = 0x80;

/// Returns the length of the padded buffer for a message of `message_len` bytes.
///
/// The result is the smallest multiple of [`BLOCK_LEN`] that holds the
/// message, the terminator byte, and the 8-byte length field.
///
/// # Examples
///
/// ```
/// use checksums::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// ```
#[inline]
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Number of 64-byte blocks the compressor runs for a `message_len`-byte input.
#[inline]
#[must_use]
pub const fn block_count(message_len: usize) -> usize {
    padded_len(message_len) / BLOCK_LEN
}

/// Number of zero bytes between the terminator and the length field.
///
/// `message_len` may be the full message length or only the unprocessed tail;
/// the result depends on the length modulo [`BLOCK_LEN`] alone.
#[inline]
const fn zero_fill_len(message_len: u64) -> usize {
    let used = (message_len % BLOCK_LEN as u64) as usize;
    (2 * BLOCK_LEN - 1 - LENGTH_FIELD_LEN - used) % BLOCK_LEN
}

/// Pads `message` to a whole number of blocks (FIPS 180-4 section 5.1.1).
///
/// The returned buffer starts with `message`, continues with a single `0x80`
/// byte and the minimal zero fill, and ends with the message length in bits as
/// a 64-bit big-endian integer. An empty message still produces one full block.
///
/// # Examples
///
/// ```
/// use checksums::pad;
///
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(&padded[..4], b"abc\x80");
/// assert_eq!(&padded[56..], &24_u64.to_be_bytes());
/// ```
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    append_padding(&mut padded, message.len() as u64);
    padded
}

/// Appends the terminator, zero fill, and length field to `buffer`.
///
/// `buffer` holds either the whole message or its final partial block, and
/// `message_len` is the length of the whole message in bytes. Bit lengths
/// beyond 2^64 wrap, which matches the width of the length field.
pub(crate) fn append_padding(buffer: &mut Vec<u8>, message_len: u64) {
    let zeros = zero_fill_len(message_len);
    buffer.reserve(1 + zeros + LENGTH_FIELD_LEN);
    buffer.push(TERMINATOR);
    buffer.resize(buffer.len() + zeros, 0);
    buffer.extend_from_slice(&message_len.wrapping_mul(8).to_be_bytes());
}
