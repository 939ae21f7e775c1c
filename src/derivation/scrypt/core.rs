use log::{debug, trace};
use zeroize::Zeroizing;

use super::block::ro_mix;
use super::memory::Scratch;
use super::params::ScryptParams;
use super::pbkdf2::pbkdf2_hmac_sha256;
use crate::error::{Error, Result};

/// Derives a key from `password` and `salt` with scrypt.
///
/// # Arguments
///
/// * `password` - The password bytes
/// * `salt` - The salt bytes
/// * `params` - Cost parameters and output length
///
/// # Returns
///
/// The derived key, exactly `params.dk_len` bytes long.
///
/// # Errors
///
/// - `InvalidParameter` if `params` violate RFC 7914; nothing is allocated
/// - `AllocationFailure` if the scratch region or the output buffer cannot
///   be obtained
///
/// All scratch memory is wiped and freed before this function returns,
/// whichever way it returns.
///
/// # Example
///
/// ```rust
/// use nacl_primitives::derivation::{ScryptParams, scrypt};
///
/// let params = ScryptParams::new(16, 1, 1, 64).unwrap();
/// let key = scrypt(b"", b"", &params).unwrap();
/// assert_eq!(key.len(), 64);
/// ```
pub fn scrypt(password: &[u8], salt: &[u8], params: &ScryptParams) -> Result<Vec<u8>> {
    trace!(
        "scrypt: n={} r={} p={} dk_len={}",
        params.n, params.r, params.p, params.dk_len
    );

    if let Err(err) = params.validate() {
        debug!("scrypt: rejected parameters: {err}");
        return Err(err);
    }

    let mut output = Vec::new();
    if output.try_reserve_exact(params.dk_len).is_err() {
        debug!("scrypt: could not reserve {} output bytes", params.dk_len);
        return Err(Error::AllocationFailure {
            bytes: params.dk_len,
        });
    }
    output.resize(params.dk_len, 0);
    let mut output = Zeroizing::new(output);

    let mut scratch = Scratch::acquire(params)?;
    let regions = scratch.regions();

    pbkdf2_hmac_sha256(password, salt, 1, regions.b)?;

    let block_len = regions.x.len();
    for block in regions.b.chunks_exact_mut(block_len) {
        ro_mix(block, regions.x, regions.y, regions.v, params.n);
    }

    pbkdf2_hmac_sha256(password, regions.b, 1, &mut output)?;

    Ok(std::mem::take(&mut *output))
}

/// Derives `dk_len` bytes from `password` and `salt` with cost `n`, `r`, `p`.
///
/// Convenience wrapper around [`scrypt`].
///
/// # Errors
///
/// `InvalidParameter` when `n` is not a power of two greater than 1 (or
/// another parameter is out of range), `AllocationFailure` when the
/// `128 * N * r` byte table plus `128 * r * p` byte buffer cannot be
/// allocated.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
    dk_len: usize,
) -> Result<Vec<u8>> {
    let params = ScryptParams { n, r, p, dk_len };
    scrypt(password, salt, &params)
}
