/// Constant-time comparison utilities.
///
/// Implementations must not let execution time or control flow depend on
/// the contents being compared: every byte is visited, differences are
/// accumulated with XOR/OR, and the final decision is derived arithmetically
/// from the accumulator.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Maps an OR-accumulated difference byte to `1` if it is zero and `0`
/// otherwise, without branching.
///
/// `diff - 1` underflows into bit 8 only when `diff == 0`.
#[inline(always)]
fn is_zero(diff: u8) -> u8 {
    (1 & ((diff as u32).wrapping_sub(1) >> 8)) as u8
}

impl<const N: usize> ConstantTimeEq for [u8; N] {
    /// Constant-time equality test for fixed-size byte arrays.
    ///
    /// All byte pairs are XORed and OR-ed into one accumulator before the
    /// single comparison at the end, so there is no early exit on the first
    /// differing byte.
    #[inline]
    fn ct_eq(&self, other: &Self) -> bool {
        let diff = self
            .iter()
            .zip(other)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        is_zero(core::hint::black_box(diff)) == 1
    }
}

/// Compares two byte slices in constant time with respect to their
/// contents.
///
/// Slices of different lengths compare unequal; lengths are public, so
/// that check may short-circuit.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    is_zero(core::hint::black_box(diff)) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_arrays_compare_equal() {
        let a = [0x42u8; 16];
        let b = a;
        assert!(a.ct_eq(&b));
        assert!([0u8; 0].ct_eq(&[]));
    }

    #[test]
    fn any_single_bit_difference_is_detected() {
        let a = [0x5au8; 16];
        for byte in 0..16 {
            for bit in 0..8 {
                let mut b = a;
                b[byte] ^= 1 << bit;
                assert!(!a.ct_eq(&b), "byte {byte} bit {bit}");
                assert!(!ct_eq(&a, &b));
            }
        }
    }

    #[test]
    fn slices_of_different_length_differ() {
        assert!(!ct_eq(&[1, 2, 3], &[1, 2]));
        assert!(ct_eq(&[1, 2, 3], &[1, 2, 3]));
    }

    #[test]
    fn is_zero_is_exact() {
        assert_eq!(is_zero(0), 1);
        for d in 1..=255u8 {
            assert_eq!(is_zero(d), 0);
        }
    }
}
