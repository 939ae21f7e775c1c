//! One-time message authentication.
//!
//! This module exposes Poly1305 as two single-shot operations,
//! [`compute_tag`] and [`verify_tag`], plus the incremental [`Poly1305`]
//! state for callers that stream their input.
//!
//! Verification recomputes the tag and compares it in constant time; a
//! mismatch is an ordinary `false`, not an error.

mod ct;
pub mod poly1305;

pub use ct::{ConstantTimeEq, ct_eq};
pub use poly1305::{KEY_LEN, Poly1305, TAG_LEN};

use zeroize::Zeroize;

/// Computes the Poly1305 tag of `message` under a one-time `key`.
///
/// # Notes
/// - `key[0..16]` is clamped before use; `key[16..32]` is added at the end
/// - the same `(message, key)` always yields the same tag
/// - an empty message yields `key[16..32]`
pub fn compute_tag(message: &[u8], key: &[u8; KEY_LEN]) -> [u8; TAG_LEN] {
    let mut mac = Poly1305::new(key);
    mac.update(message);
    mac.finalize()
}

/// Checks `tag` against the tag of `message` under `key`.
///
/// The expected tag is recomputed and compared without early exit, so the
/// time taken does not reveal how many leading bytes of `tag` are correct.
pub fn verify_tag(tag: &[u8; TAG_LEN], message: &[u8], key: &[u8; KEY_LEN]) -> bool {
    let mut expected = compute_tag(message, key);
    let ok = expected.ct_eq(tag);
    expected.zeroize();
    ok
}
