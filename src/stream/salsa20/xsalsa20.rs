//! XSalsa20: Salsa20 with a 192-bit nonce.
//!
//! The first 16 nonce bytes and the key go through HSalsa20 to produce a
//! subkey; the remaining 8 nonce bytes are the Salsa20 nonce used with that
//! subkey. Random 24-byte nonces are therefore safe to use.

use zeroize::Zeroize;

use super::core::{SIGMA, hsalsa20};
use super::driver::{self, MAC_KEY_LEN};
use crate::error::{Error, Result};

/// Size of an XSalsa20 nonce in bytes.
pub const XNONCE_LEN: usize = 24;

/// Derives the Salsa20 subkey and nonce for an extended nonce.
fn subkey(nonce: &[u8; XNONCE_LEN], key: &[u8; 32]) -> ([u8; 32], [u8; 8]) {
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&nonce[..16]);
    let mut suffix = [0u8; 8];
    suffix.copy_from_slice(&nonce[16..]);

    (hsalsa20(&prefix, key, &SIGMA), suffix)
}

/// Fills `output` with raw XSalsa20 keystream.
pub fn xsalsa20_stream(output: &mut [u8], nonce: &[u8; XNONCE_LEN], key: &[u8; 32]) {
    let (mut k, n) = subkey(nonce, key);
    driver::stream(output, &n, &k);
    k.zeroize();
}

/// Encrypts or decrypts `message` into `output` with XSalsa20.
///
/// # Errors
/// `InvalidLength` if `output` is shorter than `message`, reported before
/// the subkey is derived.
pub fn xsalsa20_stream_xor(
    output: &mut [u8],
    message: &[u8],
    nonce: &[u8; XNONCE_LEN],
    key: &[u8; 32],
) -> Result<()> {
    Error::check_len(message.len(), output.len())?;
    let (mut k, n) = subkey(nonce, key);
    let result = driver::stream_xor(output, message, &n, &k);
    k.zeroize();
    result
}

/// XSalsa20 counterpart of `stream_xor_skip32`: the first 32 keystream
/// bytes under the derived subkey become the optional MAC key.
///
/// # Errors
/// `InvalidLength` if `output` is shorter than `message`, reported before
/// the subkey is derived.
pub fn xsalsa20_stream_xor_skip32(
    mac_key: Option<&mut [u8; MAC_KEY_LEN]>,
    output: &mut [u8],
    message: &[u8],
    nonce: &[u8; XNONCE_LEN],
    key: &[u8; 32],
) -> Result<()> {
    Error::check_len(message.len(), output.len())?;
    let (mut k, n) = subkey(nonce, key);
    let result = driver::stream_xor_skip32(mac_key, output, message, &n, &k);
    k.zeroize();
    result
}
