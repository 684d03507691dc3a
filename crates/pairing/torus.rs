//! Torus-based compression `T₂(Fp6)` of the cyclotomic subgroup.
//!
//! A cyclotomic `f = a + b·w` with `b ≠ 0` is represented by the single Fp6
//! coordinate `c = (1 + a)/b`; then `f = (c + w)/(c − w)`. Multiplication in
//! compressed form is projective (`(n : d)` pairs) and inversion-free:
//!
//! ```text
//! mul:    n = n₁n₂ + v·d₁d₂      square:  n = n² + v·d²
//!         d = n₁d₂ + n₂d₁                d = 2nd
//! ```
//!
//! The three products run through the Toom-Cook `4ab` multiplication — the
//! uniform scale factor cancels projectively, which is the point of keeping
//! it un-normalised.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use pairex_math::tower::{Fp6, Fp12, TowerParams};

/// Compressed cyclotomic element, projective over Fp6.
#[derive(Clone, Copy, Debug)]
pub struct Torus2<P: TowerParams<N>, const N: usize> {
    pub n: Fp6<P, N>,
    pub d: Fp6<P, N>,
}

impl<P: TowerParams<N>, const N: usize> Torus2<P, N> {
    /// The compressed identity: `(c : 0)` is the projective point at
    /// infinity of the torus, decompressing to 1.
    pub const ONE: Self = Self {
        n: Fp6::ONE,
        d: Fp6::ZERO,
    };

    /// Compress a cyclotomic-subgroup element (variable-time).
    /// `f = ±1` (where `b = 0`) maps to the projective identity / its
    /// 2-torsion companion; `-1` has no affine representative and is
    /// rejected by returning `None`.
    pub fn from_gt(f: &Fp12<P, N>) -> Option<Self> {
        if bool::from(f.c1.is_zero()) {
            if f == &Fp12::ONE {
                return Some(Self::ONE);
            }
            return None;
        }
        let binv = Option::<Fp6<P, N>>::from(f.c1.invert())?;
        Some(Self {
            n: (Fp6::ONE + f.c0) * binv,
            d: Fp6::ONE,
        })
    }

    /// Decompress back to Fp12 (variable-time): `(n + d·w)/(n − d·w)`.
    pub fn to_gt(&self) -> Fp12<P, N> {
        let num = Fp12::new(self.n, self.d);
        let den = Fp12::new(self.n, -self.d);
        num * den.invert().unwrap_or(Fp12::ZERO)
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let nn = self.n.mul_toom_cook_4x(&rhs.n);
        let dd = self.d.mul_toom_cook_4x(&rhs.d);
        let nd = self.n.mul_toom_cook_4x(&rhs.d);
        let dn = self.d.mul_toom_cook_4x(&rhs.n);
        Self {
            n: nn + dd.mul_by_v(),
            d: nd + dn,
        }
    }

    pub fn square(&self) -> Self {
        let nn = self.n.mul_toom_cook_4x(&self.n);
        let dd = self.d.mul_toom_cook_4x(&self.d);
        let nd = self.n.mul_toom_cook_4x(&self.d);
        Self {
            n: nn + dd.mul_by_v(),
            d: nd.double(),
        }
    }

    /// Torus inversion: conjugation of the underlying cyclotomic element,
    /// i.e. negating the denominator.
    pub fn inverse(&self) -> Self {
        Self {
            n: self.n,
            d: -self.d,
        }
    }

    pub fn is_identity(&self) -> Choice {
        self.d.is_zero() & !self.n.is_zero()
    }
}

impl<P: TowerParams<N>, const N: usize> ConstantTimeEq for Torus2<P, N> {
    /// Projective equality `n₁·d₂ == n₂·d₁` (plus matching identities).
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.n * other.d).ct_eq(&(other.n * self.d))
            & !(self.is_identity() ^ other.is_identity())
    }
}

impl<P: TowerParams<N>, const N: usize> ConditionallySelectable for Torus2<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            n: Fp6::conditional_select(&a.n, &b.n, choice),
            d: Fp6::conditional_select(&a.d, &b.d, choice),
        }
    }
}
