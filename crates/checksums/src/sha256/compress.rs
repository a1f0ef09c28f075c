use super::constants::K;
use super::primitives::{big_sigma0, big_sigma1, choose, majority};

/// Runs the 64-round compression function over one scheduled block.
///
/// Takes the hash state by value and returns the updated state, so a caller
/// chaining blocks threads the value from one call into the next. Every
/// addition wraps modulo 2^32.
///
/// # Examples
///
/// ```
/// use checksums::{H0, compress, pad, schedule};
///
/// let padded = pad(b"abc");
/// let block: &[u8; 64] = padded.as_slice().try_into().unwrap();
/// let state = compress(H0, &schedule(block));
/// assert_eq!(state[0], 0xba78_16bf);
/// ```
#[must_use]
pub fn compress(state: [u32; 8], w: &[u32; 64]) -> [u32; 8] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for (&k, &word) in K.iter().zip(w) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(k)
            .wrapping_add(word);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    let working = [a, b, c, d, e, f, g, h];
    let mut next = state;
    for (word, delta) in next.iter_mut().zip(working) {
        *word = word.wrapping_add(delta);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::super::{BLOCK_LEN, H0, pad, schedule};
    use super::*;

    #[test]
    fn single_block_abc_matches_fips_example() {
        let padded = pad(b"abc");
        let block: &[u8; BLOCK_LEN] = padded.as_slice().try_into().expect("one block");
        let state = compress(H0, &schedule(block));
        assert_eq!(
            state,
            [
                0xba78_16bf,
                0x8f01_cfea,
                0x4141_40de,
                0x5dae_2223,
                0xb003_61a3,
                0x9617_7a9c,
                0xb410_ff61,
                0xf200_15ad,
            ]
        );
    }

    #[test]
    fn input_state_is_not_mutated() {
        let state = H0;
        let _ = compress(state, &[0; 64]);
        assert_eq!(state, H0);
    }

    #[test]
    fn zero_state_and_schedule_still_mixes_constants() {
        let state = compress([0; 8], &[0; 64]);
        assert_ne!(state, [0; 8]);
        assert_eq!(compress([0; 8], &[0; 64]), state);
    }
}
