//! `BigInt<N>`: a fixed-width, stack-allocated multi-precision integer of `N`
//! 64-bit limbs, little-endian limb order.
//!
//! This is the raw-integer layer under the field types: canonical (reduced)
//! values, scalar recoding, and byte marshalling. All comparisons and
//! conditional operations on potentially-secret values are constant-time.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::limb::{adc, sbb};

/// Little-endian fixed-size multi-precision integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BigInt<const N: usize>(pub [u64; N]);

impl<const N: usize> Default for BigInt<N> {
    fn default() -> Self {
        Self([0u64; N])
    }
}

impl<const N: usize> BigInt<N> {
    pub const ZERO: Self = Self([0u64; N]);

    pub const fn new(limbs: [u64; N]) -> Self {
        Self(limbs)
    }

    pub const fn one() -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = 1;
        Self(limbs)
    }

    pub const fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = v;
        Self(limbs)
    }

    /// `self + rhs`, returning the sum and the carry-out word (0 or 1).
    #[inline]
    pub fn add_carry(&self, rhs: &Self) -> (Self, u64) {
        let mut out = [0u64; N];
        let mut carry = 0;
        for i in 0..N {
            let (lo, c) = adc(self.0[i], rhs.0[i], carry);
            out[i] = lo;
            carry = c;
        }
        (Self(out), carry)
    }

    /// `self - rhs`, returning the difference and the borrow-out word (0 or 1).
    #[inline]
    pub fn sub_borrow(&self, rhs: &Self) -> (Self, u64) {
        let mut out = [0u64; N];
        let mut borrow = 0;
        for i in 0..N {
            let (lo, b) = sbb(self.0[i], rhs.0[i], borrow);
            out[i] = lo;
            borrow = b;
        }
        (Self(out), borrow)
    }

    /// Conditionally add `rhs` when `ctl` is set.
    #[inline]
    pub fn cadd(&mut self, rhs: &Self, ctl: Choice) {
        let (sum, _) = self.add_carry(rhs);
        *self = Self::conditional_select(self, &sum, ctl);
    }

    /// Conditionally subtract `rhs` when `ctl` is set.
    #[inline]
    pub fn csub(&mut self, rhs: &Self, ctl: Choice) {
        let (diff, _) = self.sub_borrow(rhs);
        *self = Self::conditional_select(self, &diff, ctl);
    }

    /// Constant-time `self < rhs`.
    #[inline]
    pub fn ct_lt(&self, rhs: &Self) -> Choice {
        let (_, borrow) = self.sub_borrow(rhs);
        Choice::from(borrow as u8)
    }

    #[inline]
    pub fn is_zero(&self) -> Choice {
        let mut acc = 0u64;
        for limb in self.0 {
            acc |= limb;
        }
        acc.ct_eq(&0)
    }

    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Bit `i` (little-endian); `i` must be public.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        if i >= N * 64 {
            return false;
        }
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Logical right shift by one bit.
    #[inline]
    pub fn shr1(&self) -> Self {
        let mut out = [0u64; N];
        for i in 0..N {
            out[i] = self.0[i] >> 1;
            if i + 1 < N {
                out[i] |= self.0[i + 1] << 63;
            }
        }
        Self(out)
    }

    /// Left shift by one bit, dropping the carry-out.
    #[inline]
    pub fn shl1(&self) -> Self {
        let mut out = [0u64; N];
        for i in (0..N).rev() {
            out[i] = self.0[i] << 1;
            if i > 0 {
                out[i] |= self.0[i - 1] >> 63;
            }
        }
        Self(out)
    }

    /// Position of the highest set bit + 1; 0 for zero. Variable-time — only
    /// for public values (window sizing, loop bounds).
    pub fn num_bits_vartime(&self) -> u32 {
        for i in (0..N).rev() {
            if self.0[i] != 0 {
                return (i as u32) * 64 + (64 - self.0[i].leading_zeros());
            }
        }
        0
    }

    /// Big-endian byte decoding; the slice must be exactly `8 * N` bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != N * 8 {
            return None;
        }
        let mut limbs = [0u64; N];
        for (i, chunk) in bytes.rchunks(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(word);
        }
        Some(Self(limbs))
    }

    /// Little-endian byte decoding; the slice must be exactly `8 * N` bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != N * 8 {
            return None;
        }
        let mut limbs = [0u64; N];
        for (i, chunk) in bytes.chunks(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_le_bytes(word);
        }
        Some(Self(limbs))
    }

    pub fn to_be_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), N * 8);
        for (i, chunk) in out.rchunks_mut(8).enumerate() {
            chunk.copy_from_slice(&self.0[i].to_be_bytes());
        }
    }

    pub fn to_le_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), N * 8);
        for (i, chunk) in out.chunks_mut(8).enumerate() {
            chunk.copy_from_slice(&self.0[i].to_le_bytes());
        }
    }

    /// Interpret a big-endian byte string shorter than or equal to the limb
    /// capacity, zero-extended. Returns `None` if it does not fit.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N * 8 {
            return None;
        }
        let mut limbs = [0u64; N];
        for (i, chunk) in bytes.rchunks(8).enumerate() {
            let mut padded = [0u8; 8];
            padded[8 - chunk.len()..].copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(padded);
        }
        Some(Self(limbs))
    }

    /// Checked decode of a canonical (strictly `< modulus`) big-endian value.
    pub fn from_be_bytes_mod_checked(bytes: &[u8], modulus: &Self) -> CtOption<Self> {
        match Self::from_be_bytes(bytes) {
            Some(v) => {
                let ok = v.ct_lt(modulus);
                CtOption::new(v, ok)
            }
            None => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    /// Constant-time swap of two values under `ctl`.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: Choice) {
        for i in 0..N {
            let t = u64::conditional_select(&0, &(a.0[i] ^ b.0[i]), ctl);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }

    /// Variable-time comparison for public values.
    pub fn cmp_vartime(&self, rhs: &Self) -> core::cmp::Ordering {
        for i in (0..N).rev() {
            match self.0[i].cmp(&rhs.0[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl<const N: usize> ConstantTimeEq for BigInt<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u64;
        for i in 0..N {
            acc |= self.0[i] ^ other.0[i];
        }
        acc.ct_eq(&0)
    }
}

impl<const N: usize> ConditionallySelectable for BigInt<N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; N];
        for i in 0..N {
            out[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(out)
    }
}

impl<const N: usize> Zeroize for BigInt<N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_round_trip() {
        let a = BigInt::<4>::new([u64::MAX, 1, 2, 3]);
        let b = BigInt::<4>::new([5, 6, 7, 8]);
        let (sum, carry) = a.add_carry(&b);
        assert_eq!(carry, 0);
        let (diff, borrow) = sum.sub_borrow(&b);
        assert_eq!(borrow, 0);
        assert_eq!(diff, a);
    }

    #[test]
    fn byte_round_trip() {
        let a = BigInt::<4>::new([0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 7, 0]);
        let mut be = [0u8; 32];
        a.to_be_bytes(&mut be);
        assert_eq!(BigInt::<4>::from_be_bytes(&be), Some(a));
        let mut le = [0u8; 32];
        a.to_le_bytes(&mut le);
        assert_eq!(BigInt::<4>::from_le_bytes(&le), Some(a));
        let mut rev = le;
        rev.reverse();
        assert_eq!(rev, be);
    }

    #[test]
    fn ct_lt_agrees_with_cmp() {
        let a = BigInt::<4>::new([9, 0, 0, 1]);
        let b = BigInt::<4>::new([3, 0, 0, 2]);
        assert_eq!(bool::from(a.ct_lt(&b)), true);
        assert_eq!(bool::from(b.ct_lt(&a)), false);
        assert_eq!(bool::from(a.ct_lt(&a)), false);
    }

    #[test]
    fn shifts() {
        let a = BigInt::<2>::new([0x8000_0000_0000_0001, 0x1]);
        assert_eq!(a.shr1(), BigInt::new([0xc000_0000_0000_0000, 0x0]));
        assert_eq!(a.shl1(), BigInt::new([0x2, 0x3]));
    }

    #[test]
    fn from_be_slice_zero_extends() {
        let v = BigInt::<4>::from_be_slice(&[0x12, 0x34]).unwrap();
        assert_eq!(v, BigInt::from_u64(0x1234));
        assert!(BigInt::<1>::from_be_slice(&[0u8; 9]).is_none());
    }
}
