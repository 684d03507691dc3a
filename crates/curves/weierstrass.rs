//! Short-Weierstrass group law.
//!
//! Three coordinate systems with different contracts:
//! - [`Affine`] — storage and pairing/line-evaluation inputs; the neutral
//!   element is represented as `(0, 0)`.
//! - [`Projective`] — homogeneous `(X : Y : Z)`; *complete* constant-time
//!   addition and doubling (Renes–Costello–Batina, a = 0 variants), safe for
//!   secret-dependent control flow.
//! - [`Jacobian`] — `(X : Y : Z)` with affine `(X/Z², Y/Z³)`; fast
//!   variable-time arithmetic for public data (MSM buckets, cofactor
//!   clearing, subgroup checks).

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use pairex_math::{FieldArith, batch_invert};

use crate::curve::{ScalarField, SwCurve};

/// Affine point; `(0, 0)` encodes the neutral element.
#[derive(Clone, Copy, Debug)]
pub struct Affine<C: SwCurve> {
    pub x: C::Base,
    pub y: C::Base,
}

/// Homogeneous projective point; any `Z = 0` encodes the neutral element.
#[derive(Clone, Copy, Debug)]
pub struct Projective<C: SwCurve> {
    pub x: C::Base,
    pub y: C::Base,
    pub z: C::Base,
}

/// Jacobian point; any `Z = 0` encodes the neutral element.
#[derive(Clone, Copy, Debug)]
pub struct Jacobian<C: SwCurve> {
    pub x: C::Base,
    pub y: C::Base,
    pub z: C::Base,
}

impl<C: SwCurve> Affine<C> {
    pub const NEUTRAL: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ZERO,
    };

    pub fn generator() -> Self {
        Self {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
        }
    }

    pub fn is_neutral(&self) -> Choice {
        self.x.is_zero() & self.y.is_zero()
    }

    /// `y² == x³ + b` (the neutral sentinel passes).
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + C::B;
        lhs.ct_eq(&rhs) | self.is_neutral()
    }

    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &self.y, self.is_neutral()),
        }
    }

    pub fn to_projective(&self) -> Projective<C> {
        let inf = self.is_neutral();
        Projective {
            x: C::Base::conditional_select(&self.x, &C::Base::ZERO, inf),
            y: C::Base::conditional_select(&self.y, &C::Base::ONE, inf),
            z: C::Base::conditional_select(&C::Base::ONE, &C::Base::ZERO, inf),
        }
    }

    pub fn to_jacobian(&self) -> Jacobian<C> {
        let inf = self.is_neutral();
        Jacobian {
            x: C::Base::conditional_select(&self.x, &C::Base::ZERO, inf),
            y: C::Base::conditional_select(&self.y, &C::Base::ONE, inf),
            z: C::Base::conditional_select(&C::Base::ONE, &C::Base::ZERO, inf),
        }
    }

    /// Variable-time affine addition with a caller-supplied inverted
    /// denominator (batched-inversion path in the MSM).
    pub(crate) fn add_with_inverse_vartime(&self, rhs: &Self, den_inv: &C::Base, double: bool) -> Self {
        let lambda = if double {
            // (3x²) / (2y)
            (self.x.square().mul_by_u64(3)) * *den_inv
        } else {
            (rhs.y - self.y) * *den_inv
        };
        let x3 = lambda.square() - self.x - rhs.x;
        let y3 = lambda * (self.x - x3) - self.y;
        Self { x: x3, y: y3 }
    }
}

impl<C: SwCurve> ConstantTimeEq for Affine<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}
impl<C: SwCurve> PartialEq for Affine<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: SwCurve> Eq for Affine<C> {}
impl<C: SwCurve> ConditionallySelectable for Affine<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: SwCurve> Projective<C> {
    pub const NEUTRAL: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ONE,
        z: C::Base::ZERO,
    };

    pub fn generator() -> Self {
        Affine::<C>::generator().to_projective()
    }

    pub fn is_neutral(&self) -> Choice {
        self.z.is_zero()
    }

    /// Complete addition, constant-time (Renes–Costello–Batina, a = 0).
    pub fn add(&self, rhs: &Self) -> Self {
        let b3 = C::THREE_B;
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let mut t3 = (self.x + self.y) * (rhs.x + rhs.y);
        let t4 = t0 + t1;
        t3 = t3 - t4;
        let mut t4 = (self.y + self.z) * (rhs.y + rhs.z);
        let mut x3 = t1 + t2;
        t4 = t4 - x3;
        x3 = (self.x + self.z) * (rhs.x + rhs.z);
        let mut y3 = t0 + t2;
        y3 = x3 - y3;
        x3 = t0 + t0;
        let mut t0 = x3 + t0;
        let t2 = t2 * b3;
        let mut z3 = t1 + t2;
        let mut t1 = t1 - t2;
        y3 = y3 * b3;
        x3 = t4 * y3;
        let t2 = t3 * t1;
        x3 = t2 - x3;
        y3 = y3 * t0;
        t1 = t1 * z3;
        y3 = t1 + y3;
        t0 = t0 * t3;
        z3 = z3 * t4;
        z3 = z3 + t0;
        Self { x: x3, y: y3, z: z3 }
    }

    /// Complete doubling, constant-time (Renes–Costello–Batina, a = 0).
    pub fn double(&self) -> Self {
        let b3 = C::THREE_B;
        let t0 = self.y.square();
        let mut z3 = t0 + t0;
        z3 = z3 + z3;
        z3 = z3 + z3;
        let t1 = self.y * self.z;
        let mut t2 = self.z.square();
        t2 = t2 * b3;
        let x3 = t2 * z3;
        let mut y3 = t0 + t2;
        z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        y3 = t0 * y3;
        y3 = x3 + y3;
        let t1 = self.x * self.y;
        let mut x3 = t0 * t1;
        x3 = x3 + x3;
        Self { x: x3, y: y3, z: z3 }
    }

    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    pub fn add_affine(&self, rhs: &Affine<C>) -> Self {
        // The complete formulas absorb the neutral sentinel via Z = 0.
        self.add(&rhs.to_projective())
    }

    pub fn to_affine(&self) -> Affine<C> {
        let zinv = self.z.invert().unwrap_or(C::Base::ZERO);
        let x = self.x * zinv;
        let y = self.y * zinv;
        // Z = 0 collapses to the (0,0) sentinel through zinv = 0.
        Affine { x, y }
    }
}

impl<C: SwCurve> ConstantTimeEq for Projective<C> {
    /// Cross-Z equality: `X1·Z2 == X2·Z1` and `Y1·Z2 == Y2·Z1`, with the
    /// neutral elements comparing equal.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
        let y_eq = (self.y * other.z).ct_eq(&(other.y * self.z));
        let both_inf = self.is_neutral() & other.is_neutral();
        let neither = !self.is_neutral() & !other.is_neutral();
        both_inf | (neither & x_eq & y_eq)
    }
}
impl<C: SwCurve> PartialEq for Projective<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: SwCurve> Eq for Projective<C> {}
impl<C: SwCurve> ConditionallySelectable for Projective<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            z: C::Base::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: SwCurve> Jacobian<C> {
    pub const NEUTRAL: Self = Self {
        x: C::Base::ONE,
        y: C::Base::ONE,
        z: C::Base::ZERO,
    };

    pub fn generator() -> Self {
        Affine::<C>::generator().to_jacobian()
    }

    pub fn is_neutral(&self) -> bool {
        bool::from(self.z.is_zero())
    }

    /// Variable-time doubling (`dbl-2009-l`, a = 0).
    pub fn double_vartime(&self) -> Self {
        if self.is_neutral() {
            return *self;
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.mul_by_u64(3);
        let f = e.square();
        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.mul_by_u64(8);
        let z3 = (self.y * self.z).double();
        Self { x: x3, y: y3, z: z3 }
    }

    /// Variable-time addition (`add-2007-bl`).
    pub fn add_vartime(&self, rhs: &Self) -> Self {
        if self.is_neutral() {
            return *rhs;
        }
        if rhs.is_neutral() {
            return *self;
        }
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;
        let h = u2 - u1;
        let r = (s2 - s1).double();
        if bool::from(h.is_zero()) {
            if bool::from(r.is_zero()) {
                return self.double_vartime();
            }
            return Self::NEUTRAL;
        }
        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;
        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;
        Self { x: x3, y: y3, z: z3 }
    }

    /// Variable-time mixed addition (`madd-2007-bl`), `rhs` affine.
    pub fn add_affine_vartime(&self, rhs: &Affine<C>) -> Self {
        if bool::from(rhs.is_neutral()) {
            return *self;
        }
        if self.is_neutral() {
            return rhs.to_jacobian();
        }
        let z1z1 = self.z.square();
        let u2 = rhs.x * z1z1;
        let s2 = rhs.y * self.z * z1z1;
        let h = u2 - self.x;
        let r = (s2 - self.y).double();
        if bool::from(h.is_zero()) {
            if bool::from(r.is_zero()) {
                return self.double_vartime();
            }
            return Self::NEUTRAL;
        }
        let hh = h.square();
        let i = hh.mul_by_u64(4);
        let j = h * i;
        let v = self.x * i;
        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        Self { x: x3, y: y3, z: z3 }
    }

    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    pub fn to_affine(&self) -> Affine<C> {
        let zinv = self.z.invert().unwrap_or(C::Base::ZERO);
        let zinv2 = zinv.square();
        Affine {
            x: self.x * zinv2,
            y: self.y * zinv2 * zinv,
        }
    }

    /// Normalize a batch with one inversion (Montgomery's trick).
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine<C>> {
        let mut zs: Vec<C::Base> = points.iter().map(|p| p.z).collect();
        batch_invert(&mut zs);
        points
            .iter()
            .zip(zs)
            .map(|(p, zi)| {
                let zi2 = zi.square();
                Affine {
                    x: p.x * zi2,
                    y: p.y * zi2 * zi,
                }
            })
            .collect()
    }

    /// Variable-time multiplication by a public little-endian limb scalar
    /// (cofactor clearing, subgroup checks).
    pub fn mul_limbs_vartime(&self, limbs: &[u64]) -> Self {
        let mut acc = Self::NEUTRAL;
        let mut started = false;
        for i in (0..limbs.len() * 64).rev() {
            if started {
                acc = acc.double_vartime();
            }
            if (limbs[i / 64] >> (i % 64)) & 1 == 1 {
                acc = acc.add_vartime(self);
                started = true;
            }
        }
        acc
    }

    /// Project any curve point into the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_limbs_vartime(C::H_EFF)
    }
}

/// Generic `[r]P == 0` subgroup check; curves with endomorphisms override
/// via `SwCurve::is_in_subgroup`.
pub fn subgroup_check_generic<C: SwCurve>(p: &Affine<C>) -> Choice {
    let rp = p.to_jacobian().mul_limbs_vartime(C::Scalar::MODULUS_LIMBS);
    Choice::from(u8::from(bool::from(rp.is_neutral())))
}
