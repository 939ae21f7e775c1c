//! Salsa20 core function
//!
//! This module provides the Salsa20 block function and its HSalsa20
//! variant exactly as defined by Bernstein's reference code:
//!
//! - `salsa20_block` maps a 16-byte input, a 32-byte key and a 16-byte
//!   constant to a 64-byte keystream block
//! - `hsalsa20` runs the same permutation but emits eight selected words
//!   without the feed-forward, which makes it usable as a subkey
//!   derivation function for extended nonces
//!
//! Both functions are pure, allocation-free and run in constant time.
//! The round count is fixed at 20 for the stream cipher; the 8-round
//! variant used by scrypt's BlockMix lives here as well so that both share
//! one permutation.

use zeroize::Zeroize;

/// The Salsa20 constant, `"expand 32-byte k"`.
///
/// Split into four little-endian words which occupy the diagonal of the
/// state matrix.
pub const SIGMA: [u8; 16] = *b"expand 32-byte k";

/// Size of one keystream block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a Salsa20 key in bytes.
pub const KEY_LEN: usize = 32;

/// Size of a Salsa20 nonce in bytes.
pub const NONCE_LEN: usize = 8;

/// Size of the HSalsa20 output in bytes.
pub const HSALSA20_OUT_LEN: usize = 32;

/// Number of rounds used by the stream cipher.
const ROUNDS: usize = 20;

/// Number of rounds used by scrypt's BlockMix.
const SCRYPT_ROUNDS: usize = 8;

#[inline(always)]
fn load_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Performs one Salsa20 quarter round on the words `a`, `b`, `c`, `d`.
///
/// Each step adds two words, rotates the sum and XORs it into the third.
/// The rotation amounts are 7, 9, 13 and 18.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// Applies `rounds` Salsa20 rounds to `state`.
///
/// Rounds alternate between a column round and a row round, so `rounds`
/// must be even. No feed-forward is performed here.
pub(crate) fn permute(state: &mut [u32; 16], rounds: usize) {
    debug_assert!(rounds % 2 == 0);

    for _ in 0..rounds / 2 {
        // Column round
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 5, 9, 13, 1);
        quarter_round(state, 10, 14, 2, 6);
        quarter_round(state, 15, 3, 7, 11);

        // Row round
        quarter_round(state, 0, 1, 2, 3);
        quarter_round(state, 5, 6, 7, 4);
        quarter_round(state, 10, 11, 8, 9);
        quarter_round(state, 15, 12, 13, 14);
    }
}

/// Loads the initial state matrix.
///
/// Layout, in words:
///
/// ```text
/// c0 k0 k1 k2
/// k3 c1 i0 i1
/// i2 i3 c2 k4
/// k5 k6 k7 c3
/// ```
fn setup(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0] = load_le(&constant[0..4]);
    for (i, chunk) in key[..16].chunks_exact(4).enumerate() {
        state[1 + i] = load_le(chunk);
    }
    state[5] = load_le(&constant[4..8]);
    for (i, chunk) in input.chunks_exact(4).enumerate() {
        state[6 + i] = load_le(chunk);
    }
    state[10] = load_le(&constant[8..12]);
    for (i, chunk) in key[16..].chunks_exact(4).enumerate() {
        state[11 + i] = load_le(chunk);
    }
    state[15] = load_le(&constant[12..16]);

    state
}

/// Computes one Salsa20/20 keystream block.
///
/// # Parameters
/// - `input`: nonce and block counter (16 bytes)
/// - `key`: 256-bit key
/// - `constant`: 16-byte diagonal constant, normally [`SIGMA`]
///
/// # Returns
/// The 64-byte block `serialize(permute(state) + state)`.
pub fn salsa20_block(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 64] {
    let mut original = setup(input, key, constant);
    let mut state = original;

    permute(&mut state, ROUNDS);

    // Feed-forward
    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    original.zeroize();
    state.zeroize();
    out
}

/// Computes HSalsa20.
///
/// The state is set up and permuted exactly like [`salsa20_block`], but the
/// output consists of the permuted diagonal words (0, 5, 10, 15) followed by
/// the permuted input words (6, 7, 8, 9). Those positions hold public
/// values in the initial state, so no feed-forward is applied to them.
///
/// # Returns
/// A 32-byte value suitable as a Salsa20 key.
pub fn hsalsa20(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 32] {
    let mut state = setup(input, key, constant);

    permute(&mut state, ROUNDS);

    let mut out = [0u8; 32];
    for (chunk, &index) in out.chunks_exact_mut(4).zip(&[0usize, 5, 10, 15, 6, 7, 8, 9]) {
        chunk.copy_from_slice(&state[index].to_le_bytes());
    }

    state.zeroize();
    out
}

/// Salsa20/8 with feed-forward, applied in place to 16 words.
///
/// This is the core used by scrypt's BlockMix (RFC 7914 §3).
pub(crate) fn salsa20_8(block: &mut [u32; 16]) {
    let mut original = *block;
    permute(block, SCRYPT_ROUNDS);
    block.iter_mut().zip(&original).for_each(|(b, o)| {
        *b = b.wrapping_add(*o);
    });
    original.zeroize();
}
