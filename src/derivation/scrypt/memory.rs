//! Scratch memory for scrypt.
//!
//! A derivation needs three working areas, all sized from the parameters:
//!
//! - `b`: the PBKDF2 output, `p` blocks of `128 * r` bytes
//! - `v`: the ROMix lookup table, `N` blocks
//! - `xy`: two blocks used by BlockMix
//!
//! They are carved out of one allocation owned by [`Scratch`]. The region
//! is wiped and released when the guard goes out of scope, on every return
//! path, including early returns through `?`.

use log::debug;
use zeroize::Zeroizing;

use super::params::ScryptParams;
use crate::error::{Error, Result};

/// Owner of the scratch region for one derivation.
pub(crate) struct Scratch {
    region: Zeroizing<Vec<u8>>,
    b_len: usize,
    block_len: usize,
}

/// Mutable views into the scratch region.
pub(crate) struct Regions<'a> {
    pub(crate) b: &'a mut [u8],
    pub(crate) x: &'a mut [u8],
    pub(crate) y: &'a mut [u8],
    pub(crate) v: &'a mut [u8],
}

impl Scratch {
    /// Allocates and zero-fills the region for `params`.
    ///
    /// # Errors
    /// `AllocationFailure` if the size overflows or the allocator refuses
    /// the request. Nothing is left allocated in that case.
    pub(crate) fn acquire(params: &ScryptParams) -> Result<Self> {
        let len = params.scratch_len()?;
        let block_len = params.block_len()?;

        let mut region = Vec::new();
        if region.try_reserve_exact(len).is_err() {
            debug!("scrypt: could not reserve {len} bytes of scratch memory");
            return Err(Error::AllocationFailure { bytes: len });
        }
        region.resize(len, 0);

        Ok(Scratch {
            region: Zeroizing::new(region),
            b_len: block_len * params.p as usize,
            block_len,
        })
    }

    /// Splits the region into its working areas.
    pub(crate) fn regions(&mut self) -> Regions<'_> {
        let (b, rest) = self.region.split_at_mut(self.b_len);
        let (x, rest) = rest.split_at_mut(self.block_len);
        let (y, v) = rest.split_at_mut(self.block_len);

        Regions { b, x, y, v }
    }
}
