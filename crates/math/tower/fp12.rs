//! Quadratic extension Fp12 = Fp6[w]/(w² − v), plus the sparse and
//! cyclotomic arithmetic the Miller loop and final exponentiation live on.
//!
//! Coefficient bases: the nested form is `(c0, c1)` over Fp6; the flat form
//! indexes Fp2 coefficients of `w^0..w^5` with `w² = v`, `w⁶ = ξ`:
//! `w^0, w^2, w^4` sit in `c0` and `w^1, w^3, w^5` in `c1`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::{Fp2, Fp6, TowerParams};
use crate::field::FieldArith;

/// `c0 + c1·w` with `w² = v`.
pub struct Fp12<P, const N: usize> {
    pub c0: Fp6<P, N>,
    pub c1: Fp6<P, N>,
    _params: PhantomData<P>,
}

impl<P, const N: usize> Clone for Fp12<P, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, const N: usize> Copy for Fp12<P, N> {}

impl<P: TowerParams<N>, const N: usize> fmt::Debug for Fp12<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + ({:?})*w)", self.c0, self.c1)
    }
}

impl<P: TowerParams<N>, const N: usize> Default for Fp12<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: TowerParams<N>, const N: usize> Fp12<P, N> {
    pub const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
    pub const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

    pub const fn new(c0: Fp6<P, N>, c1: Fp6<P, N>) -> Self {
        Self {
            c0,
            c1,
            _params: PhantomData,
        }
    }

    /// Flat Fp2 coefficients on `w^0..w^5`.
    pub fn to_coeffs(&self) -> [Fp2<P, N>; 6] {
        [
            self.c0.c0, self.c1.c0, self.c0.c1, self.c1.c1, self.c0.c2, self.c1.c2,
        ]
    }

    pub fn from_coeffs(z: [Fp2<P, N>; 6]) -> Self {
        Self::new(Fp6::new(z[0], z[2], z[4]), Fp6::new(z[1], z[3], z[5]))
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    pub fn square(&self) -> Self {
        // (c0 + c1 w)² = c0² + c1²·v + 2 c0 c1 w
        let v0 = self.c0 * self.c1;
        let t = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_v());
        Self::new(t - v0 - v0.mul_by_v(), v0.double())
    }

    /// Conjugation over Fp6 — equals `a^(p^6)`, and inversion on the
    /// cyclotomic subgroup.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    pub fn invert(&self) -> CtOption<Self> {
        // 1/(c0 + c1 w) = (c0 − c1 w)/(c0² − v·c1²)
        let den = self.c0.square() - self.c1.square().mul_by_v();
        den.invert()
            .map(|d| Self::new(self.c0 * d, -(self.c1 * d)))
    }

    /// Frobenius endomorphism for powers 1..=3, coefficient tables applied
    /// on the flat basis: `(z_k·w^k)^(p^j) = z_k^(p^j)·γ_j[k]·w^k`.
    pub fn frobenius(&self, power: usize) -> Self {
        let table = match power {
            1 => &P::FROBENIUS_C1,
            2 => &P::FROBENIUS_C2,
            3 => &P::FROBENIUS_C3,
            _ => unreachable!("frobenius power must be 1..=3"),
        };
        let z = self.to_coeffs();
        let mut out = [Fp2::ZERO; 6];
        for k in 0..6 {
            out[k] = z[k].frobenius(power) * table[k];
        }
        Self::from_coeffs(out)
    }

    /// Exponentiation by a public scalar, square-and-multiply MSB first.
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        let mut started = false;
        for i in (0..exp.len() * 64).rev() {
            if started {
                res = res.square();
            }
            if (exp[i / 64] >> (i % 64)) & 1 == 1 {
                res *= *self;
                started = true;
            }
        }
        res
    }

    // --- sparse multiplications for Miller-loop lines ---------------------

    /// Multiply by an M-twist line `a + b·w³ + c·w⁵` (flat slots 0, 3, 5).
    pub fn mul_by_line_035(&self, a: &Fp2<P, N>, b: &Fp2<P, N>, c: &Fp2<P, N>) -> Self {
        // A = (a,0,0), B = (0,b,c):  (f0 + f1 w)(A + B w)
        //   = (f0 A + f1 B v) + (f0 B + f1 A) w
        let f0a = self.c0.mul_by_fp2(a);
        let f1b = self.c1.mul_by_12(b, c).mul_by_v();
        let f0b = self.c0.mul_by_12(b, c);
        let f1a = self.c1.mul_by_fp2(a);
        Self::new(f0a + f1b, f0b + f1a)
    }

    /// Multiply by a D-twist line `a + b·w + c·w³` (flat slots 0, 1, 3).
    pub fn mul_by_line_013(&self, a: &Fp2<P, N>, b: &Fp2<P, N>, c: &Fp2<P, N>) -> Self {
        // A = (a,0,0), B = (b,c,0)
        let f0a = self.c0.mul_by_fp2(a);
        let f1b = self.c1.mul_by_01(b, c).mul_by_v();
        let f0b = self.c0.mul_by_01(b, c);
        let f1a = self.c1.mul_by_fp2(a);
        Self::new(f0a + f1b, f0b + f1a)
    }

    // --- cyclotomic subgroup ----------------------------------------------

    /// Membership in the cyclotomic subgroup: `f^(Φ₁₂(p)) = 1`, checked as
    /// `f^(p⁴)·f == f^(p²)`.
    pub fn is_in_cyclotomic_subgroup(&self) -> Choice {
        let f_p2 = self.frobenius(2);
        let f_p4 = f_p2.frobenius(2);
        (f_p4 * *self).ct_eq(&f_p2)
    }

    /// Inversion restricted to the cyclotomic subgroup (norm 1): conjugate.
    pub fn cyclotomic_inverse(&self) -> Self {
        self.conjugate()
    }

    /// Granger–Scott squaring, valid only on the cyclotomic subgroup.
    pub fn cyclotomic_square(&self) -> Self {
        #[inline]
        fn fp4_square<P: TowerParams<N>, const N: usize>(
            x: Fp2<P, N>,
            y: Fp2<P, N>,
        ) -> (Fp2<P, N>, Fp2<P, N>) {
            // (x + y·s)², s² = ξ
            let t0 = x.square();
            let t1 = y.square();
            (t0 + P::mul_by_xi(&t1), (x + y).square() - t0 - t1)
        }

        let z = self.to_coeffs();
        let (a0, a1) = fp4_square::<P, N>(z[0], z[3]);
        let (b0, b1) = fp4_square::<P, N>(z[1], z[4]);
        let (c0, c1) = fp4_square::<P, N>(z[2], z[5]);

        let minus2 = |t: Fp2<P, N>, zz: Fp2<P, N>| (t - zz).double() + t;
        let plus2 = |t: Fp2<P, N>, zz: Fp2<P, N>| (t + zz).double() + t;

        Self::from_coeffs([
            minus2(a0, z[0]),
            plus2(P::mul_by_xi(&c1), z[1]),
            minus2(b0, z[2]),
            plus2(a1, z[3]),
            minus2(c0, z[4]),
            plus2(b1, z[5]),
        ])
    }

    /// Compressed cyclotomic exponentiation: for each entry `(squarings)`
    /// run that many cyclotomic squarings, then one multiplication by the
    /// base; `tail` squarings close the chain. Exponent structure is public.
    pub fn cyclotomic_exp_compressed(&self, segments: &[u32], tail: u32) -> Self {
        let mut acc = *self;
        for &n in segments {
            for _ in 0..n {
                acc = acc.cyclotomic_square();
            }
            acc *= *self;
        }
        for _ in 0..tail {
            acc = acc.cyclotomic_square();
        }
        acc
    }
}

impl<P: TowerParams<N>, const N: usize> Add for Fp12<P, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Sub for Fp12<P, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Neg for Fp12<P, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> Mul for Fp12<P, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(v0 + v1.mul_by_v(), c1)
    }
}
impl<P: TowerParams<N>, const N: usize> MulAssign for Fp12<P, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: TowerParams<N>, const N: usize> ConstantTimeEq for Fp12<P, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}
impl<P: TowerParams<N>, const N: usize> ConditionallySelectable for Fp12<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp6::conditional_select(&a.c0, &b.c0, choice),
            Fp6::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}
impl<P: TowerParams<N>, const N: usize> PartialEq for Fp12<P, N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<P: TowerParams<N>, const N: usize> Eq for Fp12<P, N> {}
