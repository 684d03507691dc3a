//! Scalar multiplication.
//!
//! Two dialects, explicit at the call site:
//! - `mul` / `mul_glv` — constant-time: signed fixed-window recoding,
//!   table lookups by constant-time scan, complete projective formulas.
//! - `mul_vartime` — wNAF over Jacobian coordinates, public scalars only.
//!
//! Recoding buffers live on the stack and are zeroized before return.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::curve::{GlvCurve, MAX_SCALAR_LIMBS, ScalarField, SwCurve};
use crate::weierstrass::{Jacobian, Projective};

pub(crate) const WINDOW: usize = 4;
pub(crate) const MAX_DIGITS: usize = MAX_SCALAR_LIMBS * 16 + 1;

/// Constant-time signed-digit recoding: base-16 digits in `[-8, 8]`.
/// Returns the digit buffer (little-endian) and the digit count.
pub fn recode_signed_ct<S: ScalarField>(k: &S) -> ([i8; MAX_DIGITS], usize) {
    let mut limbs = [0u64; MAX_SCALAR_LIMBS];
    k.write_limbs(&mut limbs);
    let ndigits = (S::BITS as usize).div_ceil(WINDOW) + 1;
    let mut out = [0i8; MAX_DIGITS];
    let mut carry = 0u64;
    for (i, slot) in out.iter_mut().enumerate().take(ndigits - 1) {
        let raw = ((limbs[i / 16] >> (4 * (i % 16))) & 0xf) + carry;
        // gt8 = 1 when raw > 8, without branching
        let gt8 = 8u64.wrapping_sub(raw) >> 63;
        carry = gt8;
        let digit = raw.wrapping_sub(16 & gt8.wrapping_neg());
        *slot = digit as i8;
    }
    out[ndigits - 1] = carry as i8;
    limbs.zeroize();
    (out, ndigits)
}

/// Constant-time select of `table[|d|]`, negated when `d < 0`. `table[0]`
/// must be the neutral element.
fn lookup_ct<C: SwCurve>(table: &[Projective<C>; 9], d: i8) -> Projective<C> {
    let idx = d.unsigned_abs();
    let mut chosen = table[0];
    for (j, entry) in table.iter().enumerate() {
        chosen = Projective::conditional_select(&chosen, entry, (j as u8).ct_eq(&idx));
    }
    let neg = chosen.neg();
    Projective::conditional_select(&chosen, &neg, Choice::from(u8::from(d < 0)))
}

fn window_table<C: SwCurve>(p: &Projective<C>) -> [Projective<C>; 9] {
    let mut table = [Projective::<C>::NEUTRAL; 9];
    table[1] = *p;
    for i in 2..9 {
        table[i] = if i % 2 == 0 {
            table[i / 2].double()
        } else {
            table[i - 1].add(p)
        };
    }
    table
}

/// Constant-time scalar multiplication: signed 4-bit fixed windows over the
/// complete projective formulas.
pub fn mul<C: SwCurve>(p: &Projective<C>, k: &C::Scalar) -> Projective<C> {
    let table = window_table(p);
    let (mut digits, len) = recode_signed_ct::<C::Scalar>(k);
    let mut acc = Projective::<C>::NEUTRAL;
    for d in digits[..len].iter().rev() {
        for _ in 0..WINDOW {
            acc = acc.double();
        }
        acc = acc.add(&lookup_ct(&table, *d));
    }
    digits.zeroize();
    acc
}

// ---------------------------------------------------------------------------
// GLV: k = k1 + k2·λ with |k1|, |k2| ≈ √r, processed as a simultaneous
// two-scalar multiplication over P and φ(P) = (β·x, y).
// ---------------------------------------------------------------------------

/// Schoolbook product of little-endian limb slices into `out` (zeroed
/// first); `out.len() >= a.len() + b.len()`.
fn mul_limbs(a: &[u64], b: &[u64], out: &mut [u64]) {
    out.fill(0);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, c) = pairex_math::limb::mac(out[i + j], ai, bj, carry);
            out[i + j] = lo;
            carry = c;
        }
        out[i + b.len()] = carry;
    }
}

/// Constant-time rounded division `round(num / r)` for odd `r`:
/// `floor((num + (r-1)/2) / r)`. Restoring long division with a fixed
/// iteration count; all values public-width, secret-valued.
fn div_round_ct(num: &[u64; 6], r: &[u64; 4]) -> [u64; 3] {
    // num + (r-1)/2
    let mut half = [0u64; 6];
    let mut borrow_r = *r;
    borrow_r[0] &= !1; // r odd: (r-1)
    for i in 0..4 {
        half[i] = (borrow_r[i] >> 1) | (borrow_r.get(i + 1).copied().unwrap_or(0) << 63);
    }
    let mut n = [0u64; 7];
    let mut carry = 0u64;
    for i in 0..6 {
        let (lo, c) = pairex_math::limb::adc(num[i], half[i], carry);
        n[i] = lo;
        carry = c;
    }
    n[6] = carry;

    // restoring division: shift bits of n in from the top of a 5-limb
    // remainder, conditionally subtracting r
    let mut rem = [0u64; 5];
    let mut quot = [0u64; 7];
    for bit in (0..7 * 64).rev() {
        // rem = rem << 1 | bit(n)
        let mut top = 0u64;
        for limb in rem.iter_mut() {
            let new_top = *limb >> 63;
            *limb = (*limb << 1) | top;
            top = new_top;
        }
        rem[0] |= (n[bit / 64] >> (bit % 64)) & 1;
        // conditional subtract
        let mut borrow = 0u64;
        let mut diff = [0u64; 5];
        for i in 0..5 {
            let ri = if i < 4 { r[i] } else { 0 };
            let (lo, b) = pairex_math::limb::sbb(rem[i], ri, borrow);
            diff[i] = lo;
            borrow = b;
        }
        let ge = Choice::from((1 - borrow) as u8);
        for i in 0..5 {
            rem[i] = u64::conditional_select(&rem[i], &diff[i], ge);
        }
        quot[bit / 64] |= (u64::from(u8::from(bool::from(ge)) & 1)) << (bit % 64);
    }
    [quot[0], quot[1], quot[2]]
}

/// Signed accumulator over 6 two's-complement limbs.
#[derive(Clone, Copy)]
struct Signed6([u64; 6]);

impl Signed6 {
    fn from_limbs(v: &[u64]) -> Self {
        let mut out = [0u64; 6];
        out[..v.len()].copy_from_slice(v);
        Self(out)
    }
    fn sub(&self, rhs: &Self) -> Self {
        let mut out = [0u64; 6];
        let mut borrow = 0;
        for i in 0..6 {
            let (lo, b) = pairex_math::limb::sbb(self.0[i], rhs.0[i], borrow);
            out[i] = lo;
            borrow = b;
        }
        Self(out)
    }
    fn add(&self, rhs: &Self) -> Self {
        let mut out = [0u64; 6];
        let mut carry = 0;
        for i in 0..6 {
            let (lo, c) = pairex_math::limb::adc(self.0[i], rhs.0[i], carry);
            out[i] = lo;
            carry = c;
        }
        Self(out)
    }
    fn is_negative(&self) -> Choice {
        Choice::from((self.0[5] >> 63) as u8)
    }
    /// (|v| low 3 limbs, negative?) — callers guarantee |v| < 2^130.
    fn abs3(&self) -> ([u64; 3], Choice) {
        let neg = self.is_negative();
        let mut flipped = [0u64; 6];
        let mut carry = 1u64;
        for i in 0..6 {
            let (lo, c) = pairex_math::limb::adc(!self.0[i], 0, carry);
            flipped[i] = lo;
            carry = c;
        }
        let mut out = [0u64; 3];
        for i in 0..3 {
            out[i] = u64::conditional_select(&self.0[i], &flipped[i], neg);
        }
        (out, neg)
    }
}

/// Constant-time GLV decomposition: returns `(|k1|, k1<0, |k2|, k2<0)` with
/// `k = k1 + k2·λ (mod r)`.
fn glv_decompose<C: GlvCurve>(k: &C::Scalar) -> ([u64; 3], Choice, [u64; 3], Choice) {
    let mut klimbs = [0u64; MAX_SCALAR_LIMBS];
    k.write_limbs(&mut klimbs);
    let kl = &klimbs[..4];
    let r: [u64; 4] = C::Scalar::MODULUS_LIMBS.try_into().expect("GLV needs 4-limb scalars");

    let [(a1, a1n, b1, b1n), (a2, a2n, b2, b2n)] = C::GLV_BASIS;

    // c1 = round(b2·k / r), c2 = round(-b1·k / r)
    let b2l = [b2 as u64, (b2 >> 64) as u64];
    let b1l = [b1 as u64, (b1 >> 64) as u64];
    let mut prod = [0u64; 6];
    mul_limbs(kl, &b2l, &mut prod);
    let c1 = div_round_ct(&prod, &r);
    let c1_neg = Choice::from(u8::from(b2n));
    mul_limbs(kl, &b1l, &mut prod);
    let c2 = div_round_ct(&prod, &r);
    let c2_neg = Choice::from(u8::from(!b1n)); // -b1·k

    // k1 = k − c1·a1 − c2·a2 ; k2 = −c1·b1 − c2·b2   (signed arithmetic)
    let a1l = [a1 as u64, (a1 >> 64) as u64];
    let a2l = [a2 as u64, (a2 >> 64) as u64];
    let mut t = [0u64; 6];

    let mut k1 = Signed6::from_limbs(kl);
    mul_limbs(&c1, &a1l, &mut t);
    k1 = signed_apply(k1, &t, c1_neg ^ Choice::from(u8::from(a1n)));
    mul_limbs(&c2, &a2l, &mut t);
    k1 = signed_apply(k1, &t, c2_neg ^ Choice::from(u8::from(a2n)));

    let mut k2 = Signed6::from_limbs(&[]);
    mul_limbs(&c1, &b1l, &mut t);
    k2 = signed_apply(k2, &t, c1_neg ^ Choice::from(u8::from(b1n)));
    mul_limbs(&c2, &b2l, &mut t);
    k2 = signed_apply(k2, &t, c2_neg ^ Choice::from(u8::from(b2n)));

    klimbs.zeroize();
    let (k1a, k1n) = k1.abs3();
    let (k2a, k2n) = k2.abs3();
    (k1a, k1n, k2a, k2n)
}

/// Subtract (term_negative = 0) or add (term_negative = 1) `t` to the
/// signed accumulator — the term enters `k1 = k − Σ cᵢaᵢ` with its own sign.
fn signed_apply(acc: Signed6, t: &[u64; 6], term_negative: Choice) -> Signed6 {
    let term = Signed6(*t);
    let sub = acc.sub(&term);
    let add = acc.add(&term);
    Signed6(core::array::from_fn(|i| {
        u64::conditional_select(&sub.0[i], &add.0[i], term_negative)
    }))
}

/// Mini-scalar (≤ 131 bits) constant-time recoding into signed 4-bit digits.
fn recode_mini_ct(v: &[u64; 3]) -> [i8; 34] {
    let mut out = [0i8; 34];
    let mut carry = 0u64;
    for (i, slot) in out.iter_mut().enumerate().take(33) {
        let raw = ((v[i / 16] >> (4 * (i % 16))) & 0xf) + carry;
        let gt8 = 8u64.wrapping_sub(raw) >> 63;
        carry = gt8;
        *slot = raw.wrapping_sub(16 & gt8.wrapping_neg()) as i8;
    }
    out[33] = carry as i8;
    out
}

/// Constant-time scalar multiplication with GLV endomorphism acceleration:
/// decompose `k`, then run one shared double-and-add over `P` and `φ(P)`.
pub fn mul_glv<C: GlvCurve>(p: &Projective<C>, k: &C::Scalar) -> Projective<C> {
    let (k1, k1n, k2, k2n) = glv_decompose::<C>(k);

    let p1 = Projective::conditional_select(p, &p.neg(), k1n);
    let phi = Projective {
        x: p.x * C::BETA,
        y: p.y,
        z: p.z,
    };
    let p2 = Projective::conditional_select(&phi, &phi.neg(), k2n);

    let t1 = window_table(&p1);
    let t2 = window_table(&p2);
    let d1 = recode_mini_ct(&k1);
    let d2 = recode_mini_ct(&k2);

    let mut acc = Projective::<C>::NEUTRAL;
    for i in (0..34).rev() {
        for _ in 0..WINDOW {
            acc = acc.double();
        }
        acc = acc.add(&lookup_ct(&t1, d1[i]));
        acc = acc.add(&lookup_ct(&t2, d2[i]));
    }
    acc
}

// ---------------------------------------------------------------------------
// Variable-time wNAF
// ---------------------------------------------------------------------------

/// Width-5 NAF recoding of a public scalar (little-endian limbs).
pub fn wnaf_recode_vartime(limbs: &[u64], width: u32) -> Vec<i16> {
    let mut v: Vec<u64> = limbs.to_vec();
    let mut out = Vec::with_capacity(limbs.len() * 64 + 1);
    let radix = 1i64 << width;
    let half = radix >> 1;
    while v.iter().any(|&l| l != 0) {
        let digit = if v[0] & 1 == 1 {
            let mut d = (v[0] & ((radix as u64) - 1)) as i64;
            if d >= half {
                d -= radix;
            }
            // v -= d
            if d >= 0 {
                sub_small(&mut v, d as u64);
            } else {
                add_small(&mut v, (-d) as u64);
            }
            d as i16
        } else {
            0
        };
        out.push(digit);
        shr1(&mut v);
    }
    out
}

fn sub_small(v: &mut [u64], d: u64) {
    let (lo, mut borrow) = pairex_math::limb::sbb(v[0], d, 0);
    v[0] = lo;
    for limb in v.iter_mut().skip(1) {
        let (lo, b) = pairex_math::limb::sbb(*limb, 0, borrow);
        *limb = lo;
        borrow = b;
    }
}

fn add_small(v: &mut [u64], d: u64) {
    let (lo, mut carry) = pairex_math::limb::adc(v[0], d, 0);
    v[0] = lo;
    for limb in v.iter_mut().skip(1) {
        let (lo, c) = pairex_math::limb::adc(*limb, 0, carry);
        *limb = lo;
        carry = c;
    }
}

fn shr1(v: &mut [u64]) {
    for i in 0..v.len() {
        v[i] >>= 1;
        if i + 1 < v.len() {
            v[i] |= v[i + 1] << 63;
        }
    }
}

/// Variable-time scalar multiplication (width-5 wNAF over Jacobian).
/// Never call with secret scalars.
pub fn mul_vartime<C: SwCurve>(p: &Jacobian<C>, k: &C::Scalar) -> Jacobian<C> {
    let mut limbs = [0u64; MAX_SCALAR_LIMBS];
    let n = k.write_limbs(&mut limbs);
    let naf = wnaf_recode_vartime(&limbs[..n], 5);

    // odd multiples P, 3P, ..., 15P
    let mut table = [Jacobian::<C>::NEUTRAL; 8];
    table[0] = *p;
    let twop = p.double_vartime();
    for i in 1..8 {
        table[i] = table[i - 1].add_vartime(&twop);
    }

    let mut acc = Jacobian::<C>::NEUTRAL;
    for &d in naf.iter().rev() {
        acc = acc.double_vartime();
        if d > 0 {
            acc = acc.add_vartime(&table[(d as usize) / 2]);
        } else if d < 0 {
            acc = acc.add_vartime(&table[((-d) as usize) / 2].neg());
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wnaf_reconstructs_value() {
        let limbs = [0xdead_beef_0bad_f00du64, 0x1234_5678];
        let naf = wnaf_recode_vartime(&limbs, 5);
        // reconstruct sum d_i 2^i
        let mut acc: i128 = 0;
        for &d in naf.iter().rev() {
            acc = acc * 2 + d as i128;
        }
        let want = ((0x1234_5678u128) << 64) | 0xdead_beef_0bad_f00du128;
        assert_eq!(acc as u128, want);
        // NAF property: no two adjacent non-zero digits
        for w in naf.windows(2) {
            assert!(w[0] == 0 || w[1] == 0);
        }
    }
}
