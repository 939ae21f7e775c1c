//! Poly1305 one-time authenticator.
//!
//! The implementation is split into two layers:
//!
//! - `field`: the accumulator and its arithmetic modulo 2^130 - 5
//! - `mac`: key handling, chunking and the incremental MAC interface
//!
//! A Poly1305 key authenticates exactly one message. In the NaCl
//! constructions it is taken from the first 32 bytes of the stream cipher
//! keystream for the message's nonce.

/// Arithmetic modulo 2^130 - 5.
///
/// Cryptographically sensitive; internal only.
pub(crate) mod field;

/// Incremental MAC interface.
pub(crate) mod mac;

pub use mac::{KEY_LEN, Poly1305, TAG_LEN};
