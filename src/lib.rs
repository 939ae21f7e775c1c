//! NaCl symmetric primitives
//!
//! This crate provides the symmetric building blocks of the NaCl family
//! together with the password-based key derivation used next to them:
//!
//! - `stream`
//!   The Salsa20 stream cipher and its HSalsa20 core. Besides plain
//!   keystream generation and XOR, the driver offers a variant that skips
//!   the first 32 keystream bytes and optionally hands them out as the
//!   one-time authenticator key, and (feature `xsalsa20`) the
//!   extended-nonce XSalsa20 construction.
//!
//! - `auth`
//!   The Poly1305 one-time authenticator, computed with portable
//!   arithmetic modulo 2^130 - 5, and constant-time tag verification.
//!
//! - `derivation`
//!   The scrypt memory-hard key derivation function (RFC 7914) and the
//!   PBKDF2-HMAC-SHA256 function it uses.
//!
//! - `error`
//!   The error type shared by all of the above.
//!
//! # Design goals
//!
//! - Byte-for-byte compatibility with the reference algorithms
//! - Borrowed input buffers, caller-sized output buffers, no retained state
//! - No heap allocations outside key derivation
//! - Secret intermediates wiped after use
//!
//! Every function is reentrant; concurrent calls on independent buffers
//! need no synchronization. Higher-level constructions (secretbox, box,
//! key exchange) are intentionally out of scope.
//!
//! # Example
//!
//! ```rust
//! use nacl_primitives::{auth, stream};
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 8];
//! let message = b"attack at dawn";
//!
//! let mut mac_key = [0u8; 32];
//! let mut ciphertext = [0u8; 14];
//! stream::stream_xor_skip32(Some(&mut mac_key), &mut ciphertext, message, &nonce, &key).unwrap();
//!
//! let tag = auth::compute_tag(&ciphertext, &mac_key);
//! assert!(auth::verify_tag(&tag, &ciphertext, &mac_key));
//! ```

pub mod auth;
pub mod derivation;
pub mod error;
pub mod stream;

pub use error::{Error, Result};
