//! Arithmetic modulo 2^130 - 5.
//!
//! Numbers are held in radix 2^8: 17 limbs, each a `u32` that is normally
//! below 256, least significant first. Bits 128..130 (and any transient
//! carry) live in the last limb. This is the portable reference layout; it
//! trades speed for code that is easy to check line by line.
//!
//! Limb values are never inspected through branches, so every operation
//! runs in time independent of the numbers involved.

use zeroize::Zeroize;

/// Number of limbs.
pub(crate) const LIMBS: usize = 17;

/// `2^136 - (2^130 - 5)`, i.e. `-p` modulo `2^136`.
const MINUS_P: [u32; LIMBS] = [5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 252];

/// An unsigned accumulator for Poly1305, reduced lazily modulo 2^130 - 5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Accumulator(pub(crate) [u32; LIMBS]);

impl Accumulator {
    pub(crate) const ZERO: Self = Accumulator([0; LIMBS]);

    /// Reads up to 16 little-endian bytes, appends the `1` padding byte
    /// directly after them and zero-fills the rest.
    ///
    /// A full 16-byte chunk therefore gets its padding in limb 16, while a
    /// short chunk gets it at `chunk.len()`.
    pub(crate) fn from_chunk(chunk: &[u8]) -> Self {
        debug_assert!(chunk.len() <= 16);

        let mut limbs = [0u32; LIMBS];
        for (l, &b) in limbs.iter_mut().zip(chunk) {
            *l = b as u32;
        }
        limbs[chunk.len()] = 1;

        Accumulator(limbs)
    }

    /// Reads 16 bytes as a number below 2^128 (no padding byte).
    pub(crate) fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut limbs = [0u32; LIMBS];
        for (l, &b) in limbs.iter_mut().zip(bytes) {
            *l = b as u32;
        }
        Accumulator(limbs)
    }

    /// Reads the clamped polynomial key `r` from the first half of a
    /// one-time key.
    ///
    /// Clamping clears the top four bits of bytes 3, 7, 11 and 15 and the
    /// bottom two bits of bytes 4, 8 and 12.
    pub(crate) fn clamped(r: &[u8; 16]) -> Self {
        let mut limbs = Self::from_bytes(r).0;
        for i in [3, 7, 11, 15] {
            limbs[i] &= 15;
        }
        for i in [4, 8, 12] {
            limbs[i] &= 252;
        }
        Accumulator(limbs)
    }

    /// `self += other`, with full carry propagation through all 17 limbs.
    ///
    /// The top limb keeps whatever carry remains above bit 136 out of
    /// range; callers rely on it being truncated to 8 bits.
    pub(crate) fn add(&mut self, other: &Self) {
        let mut u = 0u32;
        for (h, c) in self.0.iter_mut().zip(&other.0) {
            u += *h + *c;
            *h = u & 255;
            u >>= 8;
        }
    }

    /// Normalizes limbs back to 8 bits, folding bits at and above 2^130
    /// into the bottom using `2^130 = 5 (mod p)`.
    ///
    /// The result is congruent to the input but not necessarily below `p`.
    pub(crate) fn squeeze(&mut self) {
        let mut u = 0u32;
        for h in self.0[..16].iter_mut() {
            u += *h;
            *h = u & 255;
            u >>= 8;
        }
        u += self.0[16];
        self.0[16] = u & 3;

        u = 5 * (u >> 2);
        for h in self.0[..16].iter_mut() {
            u += *h;
            *h = u & 255;
            u >>= 8;
        }
        u += self.0[16];
        self.0[16] = u;
    }

    /// `self = self * r mod p`, followed by [`squeeze`](Self::squeeze).
    ///
    /// Schoolbook multiplication; a partial product landing at limb
    /// `i + 17` wraps to limb `i` scaled by 320, since
    /// `2^136 = 2^6 * 2^130 = 64 * 5 (mod p)`.
    pub(crate) fn mul_mod(&mut self, r: &Self) {
        let h = &self.0;
        let r = &r.0;
        let mut hr = [0u32; LIMBS];

        for (i, out) in hr.iter_mut().enumerate() {
            let mut u = 0u32;
            for j in 0..=i {
                u += h[j] * r[i - j];
            }
            for j in i + 1..LIMBS {
                u += 320 * h[j] * r[i + LIMBS - j];
            }
            *out = u;
        }

        self.0 = hr;
        hr.zeroize();
        self.squeeze();
    }

    /// Fully reduces a squeezed value into `[0, p)`.
    ///
    /// Computes `g = h - p` and keeps `h` when the subtraction borrowed,
    /// detected from bit 7 of the top limb. The choice is made with a mask,
    /// not a branch.
    pub(crate) fn freeze(&mut self) {
        let original = *self;
        self.add(&Accumulator(MINUS_P));

        let negative = (self.0[16] >> 7).wrapping_neg();
        for (h, o) in self.0.iter_mut().zip(&original.0) {
            *h ^= negative & (*o ^ *h);
        }
    }

    /// Serializes the low 128 bits.
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (o, &h) in out.iter_mut().zip(&self.0[..16]) {
            *o = h as u8;
        }
        out
    }
}

impl Zeroize for Accumulator {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
