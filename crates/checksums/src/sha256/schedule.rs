use super::constants::BLOCK_LEN;
use super::primitives::{small_sigma0, small_sigma1};

/// Expands one 64-byte block into the 64-word message schedule `W`.
///
/// Words 0 through 15 are the block read as big-endian `u32` values. Each
/// later word mixes four earlier ones:
///
/// ```text
/// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]   (mod 2^32)
/// ```
#[must_use]
pub fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0_u32; 64];

    let (words, _) = block.as_chunks::<4>();
    for (slot, word) in w.iter_mut().zip(words) {
        *slot = u32::from_be_bytes(*word);
    }

    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::super::pad;
    use super::*;

    fn first_block(message: &[u8]) -> [u8; BLOCK_LEN] {
        pad(message)[..BLOCK_LEN].try_into().expect("one block")
    }

    #[test]
    fn leading_words_are_big_endian_block_words() {
        let w = schedule(&first_block(b"abc"));
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&word| word == 0));
        assert_eq!(w[15], 0x0000_0018);
    }

    #[test]
    fn expanded_words_match_fips_example() {
        // FIPS 180-4 example computation for "abc".
        let w = schedule(&first_block(b"abc"));
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        assert_eq!(w[18], 0x7da8_6405);
        assert_eq!(w[63], 0x12b1_edeb);
    }

    #[test]
    fn zero_block_schedules_to_zero() {
        assert_eq!(schedule(&[0; BLOCK_LEN]), [0; 64]);
    }
}
