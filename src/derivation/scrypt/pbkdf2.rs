//! PBKDF2-HMAC-SHA256 (RFC 8018).
//!
//! scrypt uses PBKDF2 with a single iteration twice: once to expand the
//! password and salt into the initial blocks, and once to compress the
//! mixed blocks into the derived key.

use hmac::Hmac;
use sha2::Sha256;

use super::params::MAX_DK_LEN;
use crate::error::{Error, Result};

/// Fills `out` with PBKDF2-HMAC-SHA256(`password`, `salt`, `rounds`).
///
/// # Errors
/// `InvalidParameter` if `rounds` is zero or `out` is longer than
/// `(2^32 - 1) * 32` bytes.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<()> {
    if rounds == 0 {
        return Err(Error::InvalidParameter("PBKDF2 needs at least one round"));
    }
    if out.len() as u64 > MAX_DK_LEN {
        return Err(Error::InvalidParameter(
            "PBKDF2 output must be at most (2^32 - 1) * 32 bytes",
        ));
    }

    ::pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, out)
        .map_err(|_| Error::InvalidParameter("HMAC-SHA256 rejected the password"))
}
