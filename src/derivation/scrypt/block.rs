//! BlockMix and ROMix for scrypt (RFC 7914 §4 and §5).
//!
//! A scrypt block is `2 * r` consecutive 64-byte Salsa20 blocks. BlockMix
//! chains Salsa20/8 across those sub-blocks; ROMix fills a table with `N`
//! successive BlockMix outputs and then reads it back at data-dependent
//! positions, which is what makes the function memory-hard.

use zeroize::Zeroize;

use crate::stream::salsa20::core::salsa20_8;

const SALSA_LEN: usize = 64;

#[inline(always)]
fn xor_words(words: &mut [u32; 16], bytes: &[u8]) {
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w ^= u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

#[inline(always)]
fn store_words(bytes: &mut [u8], words: &[u32; 16]) {
    for (chunk, w) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
}

/// BlockMix: writes `BlockMix(input)` into `output`.
///
/// Sub-block outputs with even index go to the first half of `output` and
/// odd ones to the second half.
pub(crate) fn block_mix(input: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(input.len() % (2 * SALSA_LEN), 0);

    let count = input.len() / SALSA_LEN;
    let half = count / 2;

    let mut x = [0u32; 16];
    xor_words(&mut x, &input[(count - 1) * SALSA_LEN..]);

    for (i, chunk) in input.chunks_exact(SALSA_LEN).enumerate() {
        xor_words(&mut x, chunk);
        salsa20_8(&mut x);

        let dest = (i / 2) + if i % 2 == 0 { 0 } else { half };
        store_words(&mut output[dest * SALSA_LEN..(dest + 1) * SALSA_LEN], &x);
    }

    x.zeroize();
}

/// Integerify: the first 8 bytes of the last 64-byte sub-block, read as a
/// little-endian integer and reduced modulo `n` (a power of two).
#[inline(always)]
fn integerify(block: &[u8], n: u64) -> usize {
    let last = &block[block.len() - SALSA_LEN..];
    let mut word = [0u8; 8];
    word.copy_from_slice(&last[..8]);

    (u64::from_le_bytes(word) & (n - 1)) as usize
}

/// ROMix: replaces `b` with `ROMix(b, n)`.
///
/// `x` and `y` are working blocks of the same length as `b`; `v` holds
/// `n` blocks.
pub(crate) fn ro_mix(b: &mut [u8], x: &mut [u8], y: &mut [u8], v: &mut [u8], n: u64) {
    let len = b.len();
    x.copy_from_slice(b);

    for entry in v.chunks_exact_mut(len) {
        entry.copy_from_slice(x);
        block_mix(x, y);
        x.copy_from_slice(y);
    }

    for _ in 0..n {
        let j = integerify(x, n);
        let entry = &v[j * len..(j + 1) * len];
        x.iter_mut().zip(entry).for_each(|(a, b)| *a ^= b);

        block_mix(x, y);
        x.copy_from_slice(y);
    }

    b.copy_from_slice(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_mix_matches_rfc7914_section9() {
        let input = hex::decode(
            "f7ce0b653d2d72a4108cf5abe912ffdd777616dbbb27a70e8204f3ae2d0f6fad\
             89f68f4811d1e87bcc3bd7400a9ffd29094f0184639574f39ae5a1315217bcd7\
             894991447213bb226c25b54da86370fbcd984380374666bb8ffcb5bf40c254b0\
             67d27c51ce4ad5fed829c90b505a571b7f4d1cad6a523cda770e67bceaaf7e89",
        )
        .unwrap();
        let expected = hex::decode(
            "a41f859c6608cc993b81cacb020cef05044b2181a2fd337dfd7b1c6396682f29\
             b4393168e3c9e6bcfe6bc5b7a06d96bae424cc102c91745c24ad673dc7618f81\
             20edc975323881a80540f64c162dcd3c21077cfe5f8d5fe2b1a4168f953678b7\
             7d3b3d803b60e4ab920996e59b4d53b65d2a225877d5edf5842cb9f14eefe425",
        )
        .unwrap();

        let mut output = vec![0u8; 128];
        block_mix(&input, &mut output);
        assert_eq!(output, expected);
    }

    #[test]
    fn ro_mix_matches_rfc7914_section10() {
        let mut b = hex::decode(
            "f7ce0b653d2d72a4108cf5abe912ffdd777616dbbb27a70e8204f3ae2d0f6fad\
             89f68f4811d1e87bcc3bd7400a9ffd29094f0184639574f39ae5a1315217bcd7\
             894991447213bb226c25b54da86370fbcd984380374666bb8ffcb5bf40c254b0\
             67d27c51ce4ad5fed829c90b505a571b7f4d1cad6a523cda770e67bceaaf7e89",
        )
        .unwrap();
        let expected = hex::decode(
            "79ccc193629debca047f0b70604bf6b62ce3dd4a9626e355fafc6198e6ea2b46\
             d58413673b99b029d665c357601fb426a0b2f4bba200ee9f0a43d19b571a9c71\
             ef1142e65d5a266fddca832ce59faa7cac0b9cf1be2bffca300d01ee387619c4\
             ae12fd4438f203a0e4e1c47ec314861f4e9087cb33396a6873e8f9d2539a4b8e",
        )
        .unwrap();

        let mut x = vec![0u8; 128];
        let mut y = vec![0u8; 128];
        let mut v = vec![0u8; 16 * 128];
        ro_mix(&mut b, &mut x, &mut y, &mut v, 16);
        assert_eq!(b, expected);
    }
}
