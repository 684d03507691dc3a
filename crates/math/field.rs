//! The field-element interface generic curve code is written against, and
//! shared helpers (Montgomery batched inversion).
//!
//! `Fp` and `Fp2` implement this; the elliptic-curve group law, hash-to-curve
//! and the commitment schemes never name a concrete field.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Constant-time field arithmetic over an unnamed field.
pub trait FieldArith:
    'static
    + Copy
    + Clone
    + Debug
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + ConditionallySelectable
    + ConstantTimeEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    const ZERO: Self;
    const ONE: Self;

    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }
    fn square(&self) -> Self;
    fn double(&self) -> Self;
    fn invert(&self) -> CtOption<Self>;
    fn sqrt(&self) -> CtOption<Self>;
    /// RFC 9380 sign of a field element.
    fn sgn0(&self) -> Choice;
    fn random(rng: impl RngCore) -> Self;
    /// Multiply by a small public integer.
    fn mul_by_u64(&self, k: u64) -> Self;
}

/// Invert every non-zero element of `xs` in place with a single field
/// inversion (Montgomery's trick): `3(n-1)` multiplications + 1 inversion.
/// Zeros are left untouched, matching `invert(0) = 0`.
pub fn batch_invert<F: FieldArith>(xs: &mut [F]) {
    let n = xs.len();
    if n == 0 {
        return;
    }
    // Prefix products, skipping zeros via constant-time selection.
    let mut prefix = vec![F::ONE; n];
    let mut acc = F::ONE;
    for (p, x) in prefix.iter_mut().zip(xs.iter()) {
        *p = acc;
        let with = acc * *x;
        acc = F::conditional_select(&with, &acc, x.is_zero());
    }
    let mut inv = acc.invert().unwrap_or(F::ZERO);
    // Unwind: inv holds the inverse of the product of all non-zero entries.
    for (p, x) in prefix.iter().zip(xs.iter_mut()).rev() {
        let xi = inv * *p;
        let skip = x.is_zero();
        let next_inv = inv * *x;
        inv = F::conditional_select(&next_inv, &inv, skip);
        *x = F::conditional_select(&xi, x, skip);
    }
}

#[cfg(test)]
mod tests {
    // Exercised with concrete fields in pairex-curves.
}
