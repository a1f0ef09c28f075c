use std::io::{self, Read};

use super::compress::compress;
use super::constants::{BLOCK_LEN, H0};
use super::engine::state_to_bytes;
use super::padding::append_padding;
use super::schedule::schedule;
use crate::digest::Sha256Digest;

/// Streaming SHA-256 hasher.
///
/// Bytes may arrive in any number of [`update`](Self::update) calls; the
/// hasher buffers at most one partial block and compresses full blocks as soon
/// as they are available. [`finalize`](Self::finalize) applies the same padding
/// rule as [`pad`](crate::pad), so the result always equals
/// [`digest`](crate::digest) over the concatenated input.
///
/// # Examples
///
/// ```
/// use checksums::Sha256;
///
/// let mut hasher = Sha256::new();
/// hasher.update(b"a");
/// hasher.update(b"bc");
/// assert_eq!(hasher.finalize(), checksums::digest(b"abc"));
/// ```
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Default buffer length used by [`update_reader`](Self::update_reader).
    pub const DEFAULT_READER_BUFFER_LEN: usize = 32 * 1024;

    /// Creates a hasher holding the initial state and no input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: H0,
            buffer: [0; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Convenience helper that computes the digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Sha256Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Number of message bytes fed into the hasher so far.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been observed yet.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.buffered != 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            self.state = compress(self.state, &schedule(&self.buffer));
            self.buffered = 0;
        }

        let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
        for block in blocks {
            self.state = compress(self.state, &schedule(block));
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Reads `reader` to the end, feeding everything into the hasher.
    ///
    /// Returns the number of bytes consumed. Interrupted reads are retried;
    /// any other I/O error is returned and leaves the bytes read so far in the
    /// hasher.
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut chunk = vec![0_u8; Self::DEFAULT_READER_BUFFER_LEN];
        let mut total = 0_u64;

        loop {
            match reader.read(&mut chunk) {
                Ok(0) => return Ok(total),
                Ok(read) => {
                    self.update(&chunk[..read]);
                    total += read as u64;
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
    }

    /// Finalises the digest and returns the 256-bit output.
    #[must_use]
    pub fn finalize(self) -> Sha256Digest {
        let mut tail = Vec::with_capacity(2 * BLOCK_LEN);
        tail.extend_from_slice(&self.buffer[..self.buffered]);
        append_padding(&mut tail, self.len);

        let (blocks, remainder) = tail.as_chunks::<BLOCK_LEN>();
        debug_assert!(remainder.is_empty(), "padding must fill whole blocks");
        let state = blocks
            .iter()
            .fold(self.state, |state, block| compress(state, &schedule(block)));

        Sha256Digest::from(state_to_bytes(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest;

    #[test]
    fn streaming_matches_one_shot_for_every_split() {
        let message: Vec<u8> = (0..=200_u8).collect();
        let expected = digest(&message);

        for split in 0..=message.len() {
            let mut hasher = Sha256::new();
            hasher.update(&message[..split]);
            hasher.update(&message[split..]);
            assert_eq!(hasher.finalize(), expected, "split at {split}");
        }
    }

    #[test]
    fn byte_at_a_time_matches_one_shot() {
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let mut hasher = Sha256::new();
        for byte in message {
            hasher.update(std::slice::from_ref(byte));
        }
        assert_eq!(hasher.len(), 56);
        assert_eq!(
            hasher.finalize().to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn empty_hasher_matches_empty_digest() {
        let hasher = Sha256::default();
        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize(), digest(b""));
    }

    #[test]
    fn update_reader_consumes_everything() {
        let data = vec![0x5a_u8; Sha256::DEFAULT_READER_BUFFER_LEN * 2 + 17];
        let mut hasher = Sha256::new();
        let read = hasher
            .update_reader(io::Cursor::new(&data))
            .expect("cursor reads succeed");
        assert_eq!(read, data.len() as u64);
        assert_eq!(hasher.finalize(), digest(&data));
    }

    #[test]
    fn update_reader_retries_interrupted_reads() {
        struct Flaky<'a> {
            data: &'a [u8],
            interrupted: bool,
        }

        impl Read for Flaky<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::from(io::ErrorKind::Interrupted));
                }
                self.data.read(buf)
            }
        }

        let mut hasher = Sha256::new();
        let reader = Flaky {
            data: b"abc",
            interrupted: false,
        };
        assert_eq!(hasher.update_reader(reader).expect("retried"), 3);
        assert_eq!(hasher.finalize(), digest(b"abc"));
    }

    #[test]
    fn update_reader_surfaces_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device unplugged"))
            }
        }

        let mut hasher = Sha256::new();
        let error = hasher.update_reader(Broken).expect_err("error surfaces");
        assert_eq!(error.to_string(), "device unplugged");
    }
}
