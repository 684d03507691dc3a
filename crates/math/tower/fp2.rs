//! Quadratic extension Fp2 = Fp[u]/(u² + 1).

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::TowerParams;
use crate::field::FieldArith;
use crate::fp::Fp;

/// `c0 + c1·u` with `u² = −1`.
pub struct Fp2<P, const N: usize> {
    pub c0: Fp<P, N>,
    pub c1: Fp<P, N>,
    _params: PhantomData<P>,
}

impl<P, const N: usize> Clone for Fp2<P, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, const N: usize> Copy for Fp2<P, N> {}

impl<P: TowerParams<N>, const N: usize> fmt::Debug for Fp2<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?}*u)", self.c0, self.c1)
    }
}

impl<P: TowerParams<N>, const N: usize> Default for Fp2<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: TowerParams<N>, const N: usize> Fp2<P, N> {
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);
    pub const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    pub const fn new(c0: Fp<P, N>, c1: Fp<P, N>) -> Self {
        Self {
            c0,
            c1,
            _params: PhantomData,
        }
    }

    pub fn from_base(c0: Fp<P, N>) -> Self {
        Self::new(c0, Fp::ZERO)
    }

    /// `c0 − c1·u`; equals the p-power Frobenius since u^p = −u.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    pub fn frobenius(&self, power: usize) -> Self {
        if power % 2 == 1 { self.conjugate() } else { *self }
    }

    /// Multiply by the base-field element `k`.
    pub fn mul_by_fp(&self, k: &Fp<P, N>) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// `a·u` (multiplication by the quadratic non-residue adjoiner).
    pub fn mul_by_u(&self) -> Self {
        Self::new(-self.c1, self.c0)
    }

    /// Norm to the base field: `c0² + c1²`.
    pub fn norm(&self) -> Fp<P, N> {
        self.c0.square() + self.c1.square()
    }
}

impl<P: TowerParams<N>, const N: usize> Add for Fp2<P, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Sub for Fp2<P, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Neg for Fp2<P, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Mul for Fp2<P, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Karatsuba with u² = −1
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let sum = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);
        Self::new(t0 - t1, sum - t0 - t1)
    }
}
impl<P: TowerParams<N>, const N: usize> AddAssign for Fp2<P, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<P: TowerParams<N>, const N: usize> SubAssign for Fp2<P, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<P: TowerParams<N>, const N: usize> MulAssign for Fp2<P, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: TowerParams<N>, const N: usize> ConstantTimeEq for Fp2<P, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> ConditionallySelectable for Fp2<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}
impl<P: TowerParams<N>, const N: usize> PartialEq for Fp2<P, N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<P: TowerParams<N>, const N: usize> Eq for Fp2<P, N> {}

impl<P: TowerParams<N>, const N: usize> FieldArith for Fp2<P, N> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn square(&self) -> Self {
        // complex squaring: (c0+c1)(c0−c1), 2·c0·c1
        let sum = self.c0 + self.c1;
        let diff = self.c0 - self.c1;
        let prod = self.c0 * self.c1;
        Self::new(sum * diff, prod.double())
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    fn invert(&self) -> CtOption<Self> {
        // 1/(c0 + c1 u) = (c0 − c1 u) / (c0² + c1²)
        self.norm()
            .invert()
            .map(|ninv| Self::new(self.c0 * ninv, -(self.c1 * ninv)))
    }

    fn sqrt(&self) -> CtOption<Self> {
        // Complex method: with Δ = norm(a) a square in Fp (else a is a
        // non-residue), the root is (x0, c1/(2·x0)) for x0² = (c0 ± √Δ)/2.
        // All four candidate shapes are computed and the valid one selected,
        // keeping the routine constant-time.
        let half = Fp::<P, N>::from_u64(2).invert().unwrap_or(Fp::ZERO);
        let d = self.norm().sqrt().unwrap_or(Fp::ZERO);

        let mk = |x0sq: Fp<P, N>| -> Self {
            let x0 = x0sq.sqrt().unwrap_or(Fp::ZERO);
            let x1 = self.c1 * half * x0.invert().unwrap_or(Fp::ZERO);
            Self::new(x0, x1)
        };
        let r1 = mk((self.c0 + d) * half);
        let r2 = mk((self.c0 - d) * half);
        // c1 = 0 shapes: √c0 or u·√(−c0)
        let r3 = Self::new(self.c0.sqrt().unwrap_or(Fp::ZERO), Fp::ZERO);
        let r4 = Self::new(Fp::ZERO, (-self.c0).sqrt().unwrap_or(Fp::ZERO));

        let mut out = Self::ZERO;
        let mut ok = Choice::from(0u8);
        for cand in [r1, r2, r3, r4] {
            let hit = cand.square().ct_eq(self) & !ok;
            out = Self::conditional_select(&out, &cand, hit);
            ok |= hit;
        }
        CtOption::new(out, ok)
    }

    fn sgn0(&self) -> Choice {
        // RFC 9380 sgn0 for m = 2
        let s0 = self.c0.sgn0();
        let z0 = self.c0.is_zero();
        s0 | (z0 & self.c1.sgn0())
    }

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(Fp::random(&mut rng), Fp::random(&mut rng))
    }

    fn mul_by_u64(&self, k: u64) -> Self {
        Self::new(self.c0.mul_by_u64(k), self.c1.mul_by_u64(k))
    }
}
