//! Parameter definitions and validation for scrypt.
//!
//! This module defines the cost parameters of scrypt and checks them
//! against the limits of RFC 7914 before any memory is touched.

use crate::error::{Error, Result};

/// Configuration parameters for scrypt.
///
/// # Recommended Values
///
/// The defaults (`n = 65536`, `r = 8`, `p = 1`, 64-byte output) take about
/// 64 MiB of scratch memory and are suited to deriving a long-term master
/// key from a user password. Lower `n` for tests only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    /// CPU/memory cost; a power of two greater than 1.
    pub n: u64,
    /// Block size factor; one block is `128 * r` bytes.
    pub r: u32,
    /// Parallelization factor.
    pub p: u32,
    /// Length of the derived key in bytes.
    pub dk_len: usize,
}

/// Largest output PBKDF2-HMAC-SHA256 can produce: `(2^32 - 1) * 32` bytes.
pub(crate) const MAX_DK_LEN: u64 = (u32::MAX as u64) * 32;

impl ScryptParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    /// `InvalidParameter` if any value is outside its domain.
    pub fn new(n: u64, r: u32, p: u32, dk_len: usize) -> Result<Self> {
        let params = ScryptParams { n, r, p, dk_len };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameters against RFC 7914 §2 and §6.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.n < 2 || !self.n.is_power_of_two() {
            return Err(Error::InvalidParameter(
                "N must be a power of two greater than 1",
            ));
        }

        if self.r == 0 {
            return Err(Error::InvalidParameter("r must be at least 1"));
        }

        if self.p == 0 {
            return Err(Error::InvalidParameter("p must be at least 1"));
        }

        if (self.r as u64) * (self.p as u64) >= 1 << 30 {
            return Err(Error::InvalidParameter("r * p must be less than 2^30"));
        }

        // N < 2^(128 * r / 8)
        let bits = 16 * self.r as u64;
        if bits < 64 && self.n >= 1 << bits {
            return Err(Error::InvalidParameter("N must be less than 2^(16 * r)"));
        }

        if self.dk_len == 0 {
            return Err(Error::InvalidParameter("derived key length must be positive"));
        }

        if self.dk_len as u64 > MAX_DK_LEN {
            return Err(Error::InvalidParameter(
                "derived key length must be at most (2^32 - 1) * 32",
            ));
        }

        Ok(())
    }

    /// Size in bytes of one scrypt block, `128 * r`.
    pub(crate) fn block_len(&self) -> Result<usize> {
        (self.r as usize)
            .checked_mul(128)
            .ok_or(Error::AllocationFailure { bytes: usize::MAX })
    }

    /// Total scratch memory a derivation needs, in bytes.
    ///
    /// This is `128 * r * p` for the PBKDF2 output, `128 * r * N` for the
    /// ROMix table and `256 * r` for the two BlockMix working blocks.
    ///
    /// # Errors
    /// `AllocationFailure` if the size does not fit in `usize`.
    pub fn scratch_len(&self) -> Result<usize> {
        let overflow = Error::AllocationFailure { bytes: usize::MAX };
        let block = self.block_len()?;
        let n = usize::try_from(self.n).map_err(|_| overflow)?;

        let b = block.checked_mul(self.p as usize).ok_or(overflow)?;
        let v = block.checked_mul(n).ok_or(overflow)?;
        let xy = block.checked_mul(2).ok_or(overflow)?;

        b.checked_add(v)
            .and_then(|len| len.checked_add(xy))
            .ok_or(overflow)
    }
}

impl Default for ScryptParams {
    /// Default parameters: N = 2^16, r = 8, p = 1, 64-byte output.
    fn default() -> Self {
        Self {
            n: 1 << 16,
            r: 8,
            p: 1,
            dk_len: 64,
        }
    }
}
