//! Cubic extension Fp6 = Fp2[v]/(v³ − ξ).

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::{Fp2, TowerParams};
use crate::field::FieldArith;

/// `c0 + c1·v + c2·v²` with `v³ = ξ`.
pub struct Fp6<P, const N: usize> {
    pub c0: Fp2<P, N>,
    pub c1: Fp2<P, N>,
    pub c2: Fp2<P, N>,
    _params: PhantomData<P>,
}

impl<P, const N: usize> Clone for Fp6<P, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, const N: usize> Copy for Fp6<P, N> {}

impl<P: TowerParams<N>, const N: usize> fmt::Debug for Fp6<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?}*v + {:?}*v^2)", self.c0, self.c1, self.c2)
    }
}

impl<P: TowerParams<N>, const N: usize> Default for Fp6<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: TowerParams<N>, const N: usize> Fp6<P, N> {
    pub const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
    pub const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    pub const fn new(c0: Fp2<P, N>, c1: Fp2<P, N>, c2: Fp2<P, N>) -> Self {
        Self {
            c0,
            c1,
            c2,
            _params: PhantomData,
        }
    }

    pub fn from_fp2(c0: Fp2<P, N>) -> Self {
        Self::new(c0, Fp2::ZERO, Fp2::ZERO)
    }

    /// Multiply by `v`: `(c0, c1, c2) ↦ (ξ·c2, c0, c1)`.
    pub fn mul_by_v(&self) -> Self {
        Self::new(P::mul_by_xi(&self.c2), self.c0, self.c1)
    }

    pub fn mul_by_fp2(&self, k: &Fp2<P, N>) -> Self {
        Self::new(self.c0 * *k, self.c1 * *k, self.c2 * *k)
    }

    /// Multiply by a sparse element `b1·v + b2·v²`.
    pub fn mul_by_12(&self, b1: &Fp2<P, N>, b2: &Fp2<P, N>) -> Self {
        // (x0 + x1 v + x2 v²)(b1 v + b2 v²)
        //   = ξ(x1 b2 + x2 b1) + (x0 b1 + ξ x2 b2) v + (x0 b2 + x1 b1) v²
        let x0 = self.c0;
        let x1 = self.c1;
        let x2 = self.c2;
        Self::new(
            P::mul_by_xi(&(x1 * *b2 + x2 * *b1)),
            x0 * *b1 + P::mul_by_xi(&(x2 * *b2)),
            x0 * *b2 + x1 * *b1,
        )
    }

    /// Multiply by a sparse element `b0 + b1·v`.
    pub fn mul_by_01(&self, b0: &Fp2<P, N>, b1: &Fp2<P, N>) -> Self {
        let x0 = self.c0;
        let x1 = self.c1;
        let x2 = self.c2;
        Self::new(
            x0 * *b0 + P::mul_by_xi(&(x2 * *b1)),
            x0 * *b1 + x1 * *b0,
            x1 * *b1 + x2 * *b0,
        )
    }

    /// Frobenius endomorphism `a ↦ a^(p^power)` for `power` in 1..=3.
    pub fn frobenius(&self, power: usize) -> Self {
        let table = match power {
            1 => &P::FROBENIUS_C1,
            2 => &P::FROBENIUS_C2,
            3 => &P::FROBENIUS_C3,
            _ => unreachable!("frobenius power must be 1..=3"),
        };
        Self::new(
            self.c0.frobenius(power),
            self.c1.frobenius(power) * table[2],
            self.c2.frobenius(power) * table[4],
        )
    }

    /// Toom-Cook-3 multiplication returning `4·a·b` (un-normalised), the
    /// form the torus-based Gt arithmetic consumes.
    pub fn mul_toom_cook_4x(&self, rhs: &Self) -> Self {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);
        // evaluations at 0, 1, −1, 2, ∞
        let v0 = a0 * b0;
        let a01 = a0 + a1;
        let b01 = b0 + b1;
        let v1 = (a01 + a2) * (b01 + b2);
        let vm1 = (a0 - a1 + a2) * (b0 - b1 + b2);
        let v2 = (a0 + a1.double() + a2.double().double())
            * (b0 + b1.double() + b2.double().double());
        let vinf = a2 * b2;

        // 4·coefficients of the degree-4 product, divisions kept exact:
        //   s  = v1 + vm1 = 2(c0 + c2 + c4)
        //   d  = v1 − vm1 = 2(c1 + c3)
        //   6c3 = v2 − c0 − 4c2 − 16c4 − d
        let s = v1 + vm1;
        let d = v1 - vm1;
        let c0x4 = v0.double().double();
        let c4x4 = vinf.double().double();
        let c2x4 = s.double() - c0x4 - c4x4;
        // 12c3 = 2v2 − 2v0 − 2·(4c2) − 8·(4c4) − 2d, then ·3⁻¹ gives 4c3
        let c3x12 = v2.double()
            - v0.double()
            - c2x4.double()
            - c4x4.double().double().double()
            - d.double();
        let c3x4 = c3x12.mul_by_fp(&P::THREE_INV);
        let c1x4 = d.double() - c3x4;

        // reduce: v³ = ξ, v⁴ = ξ·v
        Self::new(
            c0x4 + P::mul_by_xi(&c3x4),
            c1x4 + P::mul_by_xi(&c4x4),
            c2x4,
        )
    }
}

impl<P: TowerParams<N>, const N: usize> Add for Fp6<P, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}
impl<P: TowerParams<N>, const N: usize> Sub for Fp6<P, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}
impl<P: TowerParams<N>, const N: usize> Neg for Fp6<P, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}
impl<P: TowerParams<N>, const N: usize> Mul for Fp6<P, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Karatsuba-3 (6 Fp2 multiplications)
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let v2 = self.c2 * rhs.c2;
        let c0 = P::mul_by_xi(&((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - v1 - v2)) + v0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1 + P::mul_by_xi(&v2);
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - v0 - v2 + v1;
        Self::new(c0, c1, c2)
    }
}
impl<P: TowerParams<N>, const N: usize> AddAssign for Fp6<P, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<P: TowerParams<N>, const N: usize> SubAssign for Fp6<P, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<P: TowerParams<N>, const N: usize> MulAssign for Fp6<P, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: TowerParams<N>, const N: usize> ConstantTimeEq for Fp6<P, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}
impl<P: TowerParams<N>, const N: usize> ConditionallySelectable for Fp6<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp2::conditional_select(&a.c0, &b.c0, choice),
            Fp2::conditional_select(&a.c1, &b.c1, choice),
            Fp2::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}
impl<P: TowerParams<N>, const N: usize> PartialEq for Fp6<P, N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<P: TowerParams<N>, const N: usize> Eq for Fp6<P, N> {}

impl<P: TowerParams<N>, const N: usize> Fp6<P, N> {
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    pub fn invert(&self) -> CtOption<Self> {
        let a0 = self.c0;
        let a1 = self.c1;
        let a2 = self.c2;
        let t0 = a0.square() - P::mul_by_xi(&(a1 * a2));
        let t1 = P::mul_by_xi(&a2.square()) - a0 * a1;
        let t2 = a1.square() - a0 * a2;
        // norm-like denominator: a0·t0 + ξ(a2·t1 + a1·t2)
        let den = a0 * t0 + P::mul_by_xi(&(a2 * t1 + a1 * t2));
        den.invert()
            .map(|dinv| Self::new(t0 * dinv, t1 * dinv, t2 * dinv))
    }
}
