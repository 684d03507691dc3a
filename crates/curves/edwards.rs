//! Twisted-Edwards arithmetic (`a·x² + y² = 1 + d·x²·y²`) in extended
//! coordinates, and the Banderwagon prime-order quotient group used by
//! Ethereum Verkle commitments.
//!
//! Bandersnatch has cofactor 4 and a non-square `a`, so the unified
//! extended-coordinate formulas are complete only on points of odd order —
//! exactly the subgroup Banderwagon restricts to. Banderwagon elements are
//! cosets `{P, P + (0, −1)}`; equality and serialization quotient the
//! order-2 component away.

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use pairex_math::BigInt;

use crate::curve::ScalarField;
use crate::fields::{FqBander, FrBander};
use crate::params::bandersnatch as bp;

/// Affine twisted-Edwards point; the neutral element is `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdwardsAffine {
    pub x: FqBander,
    pub y: FqBander,
}

/// Extended coordinates `(X : Y : T : Z)` with `T = XY/Z`.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsExtended {
    pub x: FqBander,
    pub y: FqBander,
    pub t: FqBander,
    pub z: FqBander,
}

impl EdwardsAffine {
    pub const NEUTRAL: Self = Self {
        x: FqBander::ZERO,
        y: FqBander::ONE,
    };

    pub fn generator() -> Self {
        Self {
            x: bp::GEN_X,
            y: bp::GEN_Y,
        }
    }

    pub fn is_on_curve(&self) -> Choice {
        // a x² + y² == 1 + d x² y²
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = bp::EDW_A * x2 + y2;
        let rhs = FqBander::ONE + bp::EDW_D * x2 * y2;
        lhs.ct_eq(&rhs)
    }

    pub fn to_extended(&self) -> EdwardsExtended {
        EdwardsExtended {
            x: self.x,
            y: self.y,
            t: self.x * self.y,
            z: FqBander::ONE,
        }
    }
}

impl EdwardsExtended {
    pub const NEUTRAL: Self = Self {
        x: FqBander::ZERO,
        y: FqBander::ONE,
        t: FqBander::ZERO,
        z: FqBander::ONE,
    };

    pub fn generator() -> Self {
        EdwardsAffine::generator().to_extended()
    }

    /// Unified addition (`add-2008-hwcd`), complete on the odd-order
    /// subgroup; constant-time.
    pub fn add(&self, rhs: &Self) -> Self {
        let a = self.x * rhs.x;
        let b = self.y * rhs.y;
        let c = bp::EDW_D * self.t * rhs.t;
        let d = self.z * rhs.z;
        let e = (self.x + self.y) * (rhs.x + rhs.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - bp::EDW_A * a;
        Self {
            x: e * f,
            y: g * h,
            t: e * h,
            z: f * g,
        }
    }

    /// Dedicated doubling (`dbl-2008-hwcd`); constant-time.
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = bp::EDW_A * a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;
        Self {
            x: e * f,
            y: g * h,
            t: e * h,
            z: f * g,
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
            t: -self.t,
            z: self.z,
        }
    }

    pub fn to_affine(&self) -> EdwardsAffine {
        let zi = self.z.invert().unwrap_or(FqBander::ZERO);
        EdwardsAffine {
            x: self.x * zi,
            y: self.y * zi,
        }
    }

    /// Constant-time scalar multiplication (4-bit signed fixed windows).
    pub fn mul(&self, k: &FrBander) -> Self {
        let mut table = [Self::NEUTRAL; 9];
        table[1] = *self;
        for i in 2..9 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1].add(self)
            };
        }
        let (digits, len) = crate::scalar_mul::recode_signed_ct::<FrBander>(k);
        let mut acc = Self::NEUTRAL;
        for d in digits[..len].iter().rev() {
            for _ in 0..4 {
                acc = acc.double();
            }
            let idx = d.unsigned_abs();
            let mut chosen = Self::NEUTRAL;
            for (j, entry) in table.iter().enumerate() {
                chosen = Self::conditional_select(&chosen, entry, (j as u8).ct_eq(&idx));
            }
            let negate = Choice::from(u8::from(*d < 0));
            chosen = Self::conditional_select(&chosen, &chosen.neg(), negate);
            acc = acc.add(&chosen);
        }
        acc
    }
}

impl ConditionallySelectable for EdwardsExtended {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FqBander::conditional_select(&a.x, &b.x, choice),
            y: FqBander::conditional_select(&a.y, &b.y, choice),
            t: FqBander::conditional_select(&a.t, &b.t, choice),
            z: FqBander::conditional_select(&a.z, &b.z, choice),
        }
    }
}

/// An element of the Banderwagon prime-order group: an odd-order coset of
/// the Bandersnatch 2r-subgroup, represented by either of its two points.
#[derive(Clone, Copy, Debug)]
pub struct Banderwagon(pub EdwardsExtended);

impl Banderwagon {
    pub const NEUTRAL: Self = Self(EdwardsExtended::NEUTRAL);

    pub fn generator() -> Self {
        Self(EdwardsExtended::generator())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    pub fn mul(&self, k: &FrBander) -> Self {
        Self(self.0.mul(k))
    }

    /// Variable-time scalar multiplication for public scalars.
    pub fn mul_vartime(&self, k: &FrBander) -> Self {
        let mut limbs = [0u64; crate::curve::MAX_SCALAR_LIMBS];
        let n = k.write_limbs(&mut limbs);
        let mut acc = Self::NEUTRAL;
        let mut started = false;
        for i in (0..n * 64).rev() {
            if started {
                acc = acc.double();
            }
            if (limbs[i / 64] >> (i % 64)) & 1 == 1 {
                acc = acc.add(self);
                started = true;
            }
        }
        acc
    }

    /// Coset equality: `x1·y2 == x2·y1` identifies `P` with `P + (0, −1)`.
    /// The projective Z factors cancel on both sides.
    pub fn ct_eq_quotient(&self, other: &Self) -> Choice {
        (self.0.x * other.0.y).ct_eq(&(other.0.x * self.0.y))
    }

    /// The Fiat-Shamir scalar of a group element: `x/y` of either coset
    /// representative (both agree), mapped into the scalar field bytes.
    pub fn map_to_scalar_field(&self) -> FqBander {
        let yi = self.0.y.invert().unwrap_or(FqBander::ZERO);
        self.0.x * yi
    }

    /// Random group element (for tests and CRS generation).
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let y = FqBander::random(&mut rng);
            if let Some(p) = Self::from_y_vartime(&y) {
                return p;
            }
        }
    }

    /// Lift a y-coordinate to a subgroup point (vartime; helper for random
    /// element and CRS generation).
    fn from_y_vartime(y: &FqBander) -> Option<Self> {
        // x² = (y² − 1)/(d·y² − a)
        let y2 = y.square();
        let num = y2 - FqBander::ONE;
        let den = bp::EDW_D * y2 - bp::EDW_A;
        let x2 = num * den.invert().unwrap_or(FqBander::ZERO);
        let x = Option::<FqBander>::from(x2.sqrt())?;
        let aff = EdwardsAffine { x, y: *y };
        if !bool::from(aff.is_on_curve()) {
            return None;
        }
        // force into the 2r-subgroup by clearing the cofactor
        let p4 = aff.to_extended().double().double();
        // subgroup sanity: 1 − a·x² must be a square for banderwagon points
        let chk = FqBander::ONE - bp::EDW_A * p4.to_affine().x.square();
        if !bool::from(chk.sqrt().is_some()) {
            return None;
        }
        Some(Self(p4))
    }

    /// Canonical 32-byte serialization: the big-endian x-coordinate of the
    /// coset representative whose `y` has `sgn0(y) = 0`.
    pub fn to_bytes(&self) -> [u8; 32] {
        let aff = self.0.to_affine();
        // pick (x, y) or (−x, −y) such that y is "positive"
        let flip = aff.y.sgn0();
        let x = FqBander::conditional_select(&aff.x, &-aff.x, flip);
        let mut out = [0u8; 32];
        x.to_be_bytes(&mut out);
        out
    }

    /// Deserialize and validate subgroup membership: `1 − a·x²` must be a
    /// square and the lifted point must satisfy the curve equation.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        FqBander::from_be_bytes(bytes).and_then(|x| {
            // y² = (1 − a·x²)/(1 − d·x²)
            let x2 = x.square();
            let num = FqBander::ONE - bp::EDW_A * x2;
            let den = FqBander::ONE - bp::EDW_D * x2;
            let y2 = num * den.invert().unwrap_or(FqBander::ZERO);
            y2.sqrt().and_then(|y0| {
                // subgroup check: 1 − a·x² is a square exactly on the
                // banderwagon coset group
                let membership = num.sqrt().is_some();
                // choose the representative with sgn0(y) = 0
                let y = FqBander::conditional_select(&y0, &-y0, y0.sgn0());
                let p = EdwardsAffine { x, y };
                CtOption::new(Self(p.to_extended()), membership & p.is_on_curve())
            })
        })
    }

    /// Scalar order of the group.
    pub fn order() -> BigInt<4> {
        <bp::FrBandersnatch as pairex_math::FpParams<4>>::MODULUS
    }
}

/// Pippenger multi-scalar multiplication over Banderwagon (variable-time,
/// public inputs). Extended-coordinate additions are uniform and cheap, so
/// buckets accumulate directly in extended form.
pub fn banderwagon_msm_vartime(scalars: &[FrBander], points: &[Banderwagon]) -> Banderwagon {
    assert_eq!(scalars.len(), points.len(), "length mismatch");
    let n = scalars.len();
    if n == 0 {
        return Banderwagon::NEUTRAL;
    }
    if n < 16 {
        let mut acc = Banderwagon::NEUTRAL;
        for (s, p) in scalars.iter().zip(points) {
            acc = acc.add(&p.mul_vartime(s));
        }
        return acc;
    }
    let c: u32 = usize::ilog2(n).saturating_sub(2).clamp(2, 14);
    let digits: Vec<Vec<i64>> = scalars
        .iter()
        .map(|s| {
            let mut limbs = [0u64; crate::curve::MAX_SCALAR_LIMBS];
            let len = s.write_limbs(&mut limbs);
            crate::msm::signed_digits_vartime(&limbs[..len], c)
        })
        .collect();
    let nwindows = digits.iter().map(Vec::len).max().unwrap_or(0);
    let nbuckets = 1usize << (c - 1);

    let mut acc = EdwardsExtended::NEUTRAL;
    for w in (0..nwindows).rev() {
        for _ in 0..c {
            acc = acc.double();
        }
        let mut buckets = vec![EdwardsExtended::NEUTRAL; nbuckets + 1];
        for (ds, pt) in digits.iter().zip(points) {
            let Some(&d) = ds.get(w) else { continue };
            if d > 0 {
                buckets[d as usize] = buckets[d as usize].add(&pt.0);
            } else if d < 0 {
                buckets[(-d) as usize] = buckets[(-d) as usize].add(&pt.0.neg());
            }
        }
        let mut running = EdwardsExtended::NEUTRAL;
        let mut window_sum = EdwardsExtended::NEUTRAL;
        for b in buckets.iter().rev().take(nbuckets) {
            running = running.add(b);
            window_sum = window_sum.add(&running);
        }
        acc = acc.add(&window_sum);
    }
    Banderwagon(acc)
}

impl ConstantTimeEq for Banderwagon {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.ct_eq_quotient(other)
    }
}
impl PartialEq for Banderwagon {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq_quotient(other))
    }
}
impl Eq for Banderwagon {}
