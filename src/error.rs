//! Error type shared by every primitive in the crate.
//!
//! The stream cipher and the authenticator are total over well-formed
//! inputs; the only way they fail is a caller buffer that is shorter than
//! the data it is supposed to hold. Key derivation can additionally reject
//! its cost parameters or fail to obtain its scratch memory.
//!
//! A failed tag verification is *not* an error: it is reported as `false`
//! by [`crate::auth::verify_tag`].

use thiserror::Error;

/// Errors returned by the primitives in this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A supplied buffer is shorter than the length the caller claims.
    ///
    /// Detected before any keystream or MAC computation starts.
    #[error("buffer too short: {needed} bytes required, {available} available")]
    InvalidLength { needed: usize, available: usize },

    /// Scratch memory could not be obtained.
    ///
    /// Also returned when the requested size does not fit in the address
    /// space at all.
    #[error("failed to allocate {bytes} bytes of scratch memory")]
    AllocationFailure { bytes: usize },

    /// A cost or length parameter is outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

impl Error {
    /// Status code used by native adapter layers.
    ///
    /// `0` means success and is never returned here.
    pub fn status_code(&self) -> i32 {
        match self {
            Error::InvalidLength { .. } => 1,
            Error::InvalidParameter(_) => 2,
            Error::AllocationFailure { .. } => 4,
        }
    }

    /// Returns `InvalidLength` unless `available >= needed`.
    pub(crate) fn check_len(needed: usize, available: usize) -> Result<()> {
        if available < needed {
            return Err(Error::InvalidLength { needed, available });
        }
        Ok(())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
