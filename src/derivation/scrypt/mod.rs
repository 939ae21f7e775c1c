//! scrypt password-based key derivation function (RFC 7914).
//!
//! scrypt is a memory-hard key derivation function: each derivation fills
//! a table of `N` blocks of `128 * r` bytes and then reads it back in a
//! data-dependent order, so that an attacker has to pay for memory as well
//! as computation.
//!
//! # Algorithm Overview
//!
//! 1. **Expansion**: `B = PBKDF2-HMAC-SHA256(P, S, 1, p * 128 * r)`
//! 2. **Mixing**: each of the `p` blocks of `B` is replaced by
//!    `ROMix(B_i, N)`, where ROMix chains BlockMix (Salsa20/8) over a
//!    table of `N` entries.
//! 3. **Compression**: `DK = PBKDF2-HMAC-SHA256(P, B, 1, dkLen)`
//!
//! # Memory Organization
//!
//! All working memory (`B`, the ROMix table and two BlockMix buffers) is
//! one allocation, acquired after the parameters are validated and wiped
//! when the derivation ends.

pub(crate) mod block;
pub mod core;
pub(crate) mod memory;
pub(crate) mod params;
pub(crate) mod pbkdf2;
