//! Salsa20 stream cipher (Salsa20/20, 64-bit nonce, 64-bit counter).
//!
//! The module is split into:
//!
//! - `core`: the Salsa20 and HSalsa20 block functions
//! - `driver`: counter-mode keystream generation and XOR, including the
//!   variant that skips the first 32 keystream bytes
//! - `xsalsa20`: the extended-nonce construction (feature `xsalsa20`)

/// Salsa20 and HSalsa20 block functions.
pub mod core;

mod driver;

#[cfg(feature = "xsalsa20")]
mod xsalsa20;

pub use driver::{MAC_KEY_LEN, stream, stream_xor, stream_xor_in_place, stream_xor_skip32};

#[cfg(feature = "xsalsa20")]
pub use xsalsa20::{XNONCE_LEN, xsalsa20_stream, xsalsa20_stream_xor, xsalsa20_stream_xor_skip32};
