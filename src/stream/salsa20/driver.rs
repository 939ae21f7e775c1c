//! Salsa20 stream cipher driver.
//!
//! Turns the block function into a stream cipher by running it in counter
//! mode: the 16-byte block input is `nonce || counter`, with a 64-bit
//! little-endian counter starting at zero and incremented once per block.
//!
//! Encryption and decryption are the same operation. Nothing here
//! authenticates data; callers pair this with a MAC.
//!
//! Buffers are borrowed for the duration of a call only. `output` and
//! `message` are distinct slices, so overlapping calls are ruled out by
//! the borrow checker; use [`stream_xor_in_place`] to transform a buffer in
//! place.

use zeroize::Zeroize;

use super::core::{BLOCK_LEN, SIGMA, salsa20_block};
use crate::error::{Error, Result};

/// Number of keystream bytes reserved for the one-time authenticator key.
pub const MAC_KEY_LEN: usize = 32;

/// Counter-mode keystream generator.
///
/// Holds the current block input and the key for the lifetime of one call.
/// Both are wiped on drop.
pub(crate) struct Keystream {
    input: [u8; 16],
    key: [u8; 32],
}

impl Keystream {
    pub(crate) fn new(nonce: &[u8; 8], key: &[u8; 32]) -> Self {
        let mut input = [0u8; 16];
        input[..8].copy_from_slice(nonce);

        Keystream { input, key: *key }
    }

    /// Returns the block at the current counter and advances the counter.
    ///
    /// The counter wraps after 2^64 blocks.
    pub(crate) fn next_block(&mut self) -> [u8; 64] {
        let block = salsa20_block(&self.input, &self.key, &SIGMA);

        let mut counter = [0u8; 8];
        counter.copy_from_slice(&self.input[8..]);
        let counter = u64::from_le_bytes(counter).wrapping_add(1);
        self.input[8..].copy_from_slice(&counter.to_le_bytes());

        block
    }

    /// XORs consecutive keystream blocks into `data`.
    pub(crate) fn apply(&mut self, data: &mut [u8]) {
        for chunk in data.chunks_mut(BLOCK_LEN) {
            let mut block = self.next_block();
            xor_in_place(chunk, &block);
            block.zeroize();
        }
    }

    /// XORs keystream starting at byte 32 of the stream into `data`.
    ///
    /// Consecutive blocks are kept as a rolling pair so that each 64-byte
    /// chunk of `data` is served from the upper half of the previous block
    /// and the lower half of the current one. The first block, whose lower
    /// half is the MAC key, is returned as-is.
    pub(crate) fn apply_skip32(&mut self, data: &mut [u8]) -> [u8; 64] {
        let first = self.next_block();
        let mut prev = first;
        let mut window = [0u8; 64];

        for chunk in data.chunks_mut(BLOCK_LEN) {
            window[..32].copy_from_slice(&prev[32..]);
            if chunk.len() > 32 {
                let cur = self.next_block();
                window[32..].copy_from_slice(&cur[..32]);
                prev = cur;
            }
            xor_in_place(chunk, &window);
        }

        prev.zeroize();
        window.zeroize();
        first
    }
}

impl Drop for Keystream {
    fn drop(&mut self) {
        self.input.zeroize();
        self.key.zeroize();
    }
}

#[inline(always)]
fn xor_in_place(data: &mut [u8], keystream: &[u8]) {
    data.iter_mut().zip(keystream).for_each(|(d, k)| *d ^= k);
}

/// Fills `output` with raw Salsa20 keystream.
///
/// The length of `output` is the number of keystream bytes produced. An
/// empty buffer leaves the block function untouched.
pub fn stream(output: &mut [u8], nonce: &[u8; 8], key: &[u8; 32]) {
    if output.is_empty() {
        return;
    }

    output.fill(0);
    Keystream::new(nonce, key).apply(output);
}

/// Encrypts or decrypts `message` into `output`.
///
/// Only the first `message.len()` bytes of `output` are written.
///
/// # Errors
/// `InvalidLength` if `output` is shorter than `message`. The check runs
/// before any keystream is generated.
pub fn stream_xor(
    output: &mut [u8],
    message: &[u8],
    nonce: &[u8; 8],
    key: &[u8; 32],
) -> Result<()> {
    Error::check_len(message.len(), output.len())?;

    if message.is_empty() {
        return Ok(());
    }

    let output = &mut output[..message.len()];
    output.copy_from_slice(message);
    Keystream::new(nonce, key).apply(output);
    Ok(())
}

/// Encrypts or decrypts `buffer` in place.
pub fn stream_xor_in_place(buffer: &mut [u8], nonce: &[u8; 8], key: &[u8; 32]) {
    if buffer.is_empty() {
        return;
    }

    Keystream::new(nonce, key).apply(buffer);
}

/// Encrypts or decrypts `message` with keystream offset by 32 bytes.
///
/// Output byte `i` is `message[i] ^ keystream[32 + i]`. The skipped prefix
/// `keystream[0..32]` is conventionally the one-time authenticator key for
/// this `(nonce, key)` pair; when `mac_key` is `Some`, it receives those 32
/// bytes, computed from the same first block that serves the message.
///
/// The MAC key is produced even for an empty message. With an empty
/// message and no MAC key requested, the block function is never invoked.
///
/// Nothing binds the exposed MAC key to the message beyond its position in
/// the stream; the surrounding protocol decides how it is used.
///
/// # Errors
/// `InvalidLength` if `output` is shorter than `message`.
pub fn stream_xor_skip32(
    mac_key: Option<&mut [u8; MAC_KEY_LEN]>,
    output: &mut [u8],
    message: &[u8],
    nonce: &[u8; 8],
    key: &[u8; 32],
) -> Result<()> {
    Error::check_len(message.len(), output.len())?;

    if message.is_empty() && mac_key.is_none() {
        return Ok(());
    }

    let output = &mut output[..message.len()];
    output.copy_from_slice(message);

    let mut first = Keystream::new(nonce, key).apply_skip32(output);
    if let Some(mac_key) = mac_key {
        mac_key.copy_from_slice(&first[..MAC_KEY_LEN]);
    }
    first.zeroize();

    Ok(())
}
