//! Password-based key derivation.
//!
//! Currently provides scrypt together with the PBKDF2-HMAC-SHA256 function
//! it is built on.

pub mod scrypt;

pub use scrypt::core::{derive_key, scrypt};
pub use scrypt::params::ScryptParams;
pub use scrypt::pbkdf2::pbkdf2_hmac_sha256;
