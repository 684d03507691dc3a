//! Gt exponentiation family, shared between the two pairing engines.
//!
//! Cyclotomic structure makes inversion free (conjugation), so exponents are
//! processed in signed form throughout. The constant-time variants use the
//! same signed fixed-window recoding as the curve scalar multiplication; the
//! `_endo` variant additionally splits the exponent in base `x` (the p-power
//! Frobenius eigenvalue on Gt), shrinking 255 squarings to 64.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use pairex_curves::curve::{MAX_SCALAR_LIMBS, ScalarField};
use pairex_curves::scalar_mul::wnaf_recode_vartime;
use pairex_math::tower::{Fp12, TowerParams};

use crate::torus::Torus2;

/// Plain square-and-multiply (variable-time), MSB first.
pub fn exp_sqrmul_vartime<P: TowerParams<N>, const N: usize>(
    f: &Fp12<P, N>,
    exp: &[u64],
) -> Fp12<P, N> {
    f.pow_vartime(exp)
}

/// Signed-digit MSB→LSB exponentiation (variable-time): every non-zero bit
/// costs one multiplication by `f` or its conjugate.
pub fn exp_jy00_vartime<P: TowerParams<N>, const N: usize>(
    f: &Fp12<P, N>,
    exp: &[u64],
) -> Fp12<P, N> {
    let naf = wnaf_recode_vartime(exp, 2);
    let mut acc = Fp12::ONE;
    let conj = f.conjugate();
    for &d in naf.iter().rev() {
        acc = acc.cyclotomic_square();
        if d == 1 {
            acc = acc * *f;
        } else if d == -1 {
            acc = acc * conj;
        }
    }
    acc
}

/// Width-5 wNAF exponentiation (variable-time).
pub fn exp_wnaf_vartime<P: TowerParams<N>, const N: usize>(
    f: &Fp12<P, N>,
    exp: &[u64],
) -> Fp12<P, N> {
    let naf = wnaf_recode_vartime(exp, 5);
    let mut table = [Fp12::ONE; 8]; // f, f^3, ..., f^15
    table[0] = *f;
    let f2 = f.cyclotomic_square();
    for i in 1..8 {
        table[i] = table[i - 1] * f2;
    }
    let mut acc = Fp12::ONE;
    for &d in naf.iter().rev() {
        acc = acc.cyclotomic_square();
        if d > 0 {
            acc = acc * table[(d as usize) / 2];
        } else if d < 0 {
            acc = acc * table[((-d) as usize) / 2].conjugate();
        }
    }
    acc
}

/// Constant-time exponentiation by a secret scalar: signed 4-bit fixed
/// windows, constant-time table scan, conjugation for negative digits.
pub fn exp_ct<P: TowerParams<N>, const N: usize, S: ScalarField>(
    f: &Fp12<P, N>,
    k: &S,
) -> Fp12<P, N> {
    let (mut digits, len) = pairex_curves::scalar_mul::recode_signed_ct::<S>(k);
    let mut table = [Fp12::ONE; 9]; // 1, f, f^2, ..., f^8
    for i in 1..9 {
        table[i] = table[i - 1] * *f;
    }
    let mut acc = Fp12::ONE;
    for d in digits[..len].iter().rev() {
        for _ in 0..4 {
            acc = acc.cyclotomic_square();
        }
        acc = acc * lookup_ct(&table, *d);
    }
    digits.zeroize();
    acc
}

fn lookup_ct<P: TowerParams<N>, const N: usize>(table: &[Fp12<P, N>; 9], d: i8) -> Fp12<P, N> {
    let idx = d.unsigned_abs();
    let mut chosen = table[0];
    for (j, entry) in table.iter().enumerate() {
        chosen = Fp12::conditional_select(&chosen, entry, (j as u8).ct_eq(&idx));
    }
    let conj = chosen.conjugate();
    Fp12::conditional_select(&chosen, &conj, Choice::from(u8::from(d < 0)))
}

/// Constant-time division of a 4-limb value by a 64-bit divisor:
/// returns (quotient, remainder). Fixed 256 iterations.
fn div_rem_u64_ct(v: &[u64; 4], divisor: u64) -> ([u64; 4], u64) {
    let mut quot = [0u64; 4];
    let mut rem = 0u128;
    for bit in (0..256).rev() {
        rem = (rem << 1) | (((v[bit / 64] >> (bit % 64)) & 1) as u128);
        let ge = ((rem.wrapping_sub(divisor as u128)) >> 127) ^ 1; // 1 when rem >= divisor
        rem -= (divisor as u128) & (ge as u128).wrapping_neg();
        quot[bit / 64] |= (ge as u64 & 1) << (bit % 64);
    }
    (quot, rem as u64)
}

/// Constant-time Gt exponentiation with the Frobenius endomorphism: the
/// exponent is split in base `|x|` into four 64-bit mini-exponents, and
/// `f^(x^i)` is `frobenius^i(f)` on the pairing subgroup.
pub fn exp_endo_ct<P: TowerParams<N>, const N: usize, S: ScalarField>(
    f: &Fp12<P, N>,
    k: &S,
    x_abs: u64,
    x_is_neg: bool,
) -> Fp12<P, N> {
    let mut limbs = [0u64; MAX_SCALAR_LIMBS];
    k.write_limbs(&mut limbs);
    let mut v = [limbs[0], limbs[1], limbs[2], limbs[3]];
    limbs.zeroize();

    // base-|x| digits; |x|^i = (−1)^i·x^i when x < 0
    let mut digits = [0u64; 4];
    for d in digits.iter_mut() {
        let (q, r) = div_rem_u64_ct(&v, x_abs);
        *d = r;
        v = q;
    }

    // bases g_i = f^(x^i) = frobenius^i(f); a sign flip per odd power of a
    // negative x
    let mut bases = [*f; 4];
    for i in 1..4 {
        bases[i] = bases[i - 1].frobenius(1);
    }
    if x_is_neg {
        bases[1] = bases[1].conjugate();
        bases[3] = bases[3].conjugate();
    }

    // 2^4 product table over the four bases
    let mut table = [Fp12::<P, N>::ONE; 16];
    for mask in 1usize..16 {
        let low = mask & (mask - 1);
        let idx = mask.trailing_zeros() as usize;
        table[mask] = table[low] * bases[idx];
    }

    let mut acc = Fp12::ONE;
    for bit in (0..64).rev() {
        acc = acc.cyclotomic_square();
        let mask = (((digits[0] >> bit) & 1)
            | (((digits[1] >> bit) & 1) << 1)
            | (((digits[2] >> bit) & 1) << 2)
            | (((digits[3] >> bit) & 1) << 3)) as u8;
        let mut sel = table[0];
        for (j, entry) in table.iter().enumerate() {
            sel = Fp12::conditional_select(&sel, entry, (j as u8).ct_eq(&mask));
        }
        acc = acc * sel;
    }
    acc
}

/// Constant-time division of a 4-limb value by a 2-limb divisor: returns
/// (quotient, remainder). Fixed 256 iterations.
fn div_rem_u128_ct(v: &[u64; 4], divisor: u128) -> ([u64; 4], u128) {
    let dlo = divisor as u64;
    let dhi = (divisor >> 64) as u64;
    let mut quot = [0u64; 4];
    let mut rem = [0u64; 3]; // divisor < 2^128, remainder fits 2 limbs + headroom
    for bit in (0..256).rev() {
        let mut top = 0u64;
        for limb in rem.iter_mut() {
            let new_top = *limb >> 63;
            *limb = (*limb << 1) | top;
            top = new_top;
        }
        rem[0] |= (v[bit / 64] >> (bit % 64)) & 1;
        let (d0, b0) = pairex_math::limb::sbb(rem[0], dlo, 0);
        let (d1, b1) = pairex_math::limb::sbb(rem[1], dhi, b0);
        let (d2, b2) = pairex_math::limb::sbb(rem[2], 0, b1);
        let ge = Choice::from((1 - b2) as u8);
        rem[0] = u64::conditional_select(&rem[0], &d0, ge);
        rem[1] = u64::conditional_select(&rem[1], &d1, ge);
        rem[2] = u64::conditional_select(&rem[2], &d2, ge);
        quot[bit / 64] |= (u64::from(u8::from(bool::from(ge)))) << (bit % 64);
    }
    (quot, (rem[0] as u128) | ((rem[1] as u128) << 64))
}

/// Constant-time two-dimensional Gt endomorphism exponentiation for BN
/// curves: `k = k0 + k1·(6x²)` with `f^(6x²) = frobenius(f)` on the pairing
/// subgroup, halving the squaring chain.
pub fn exp_endo_two_dim_ct<P: TowerParams<N>, const N: usize, S: ScalarField>(
    f: &Fp12<P, N>,
    k: &S,
    lambda: u128,
) -> Fp12<P, N> {
    let mut limbs = [0u64; MAX_SCALAR_LIMBS];
    k.write_limbs(&mut limbs);
    let v = [limbs[0], limbs[1], limbs[2], limbs[3]];
    limbs.zeroize();
    let (q, r) = div_rem_u128_ct(&v, lambda);
    let k0 = [r as u64, (r >> 64) as u64];
    let k1 = [q[0], q[1]]; // k1 = k / λ < 2^130; the two top bits ride along
    let k1_extra = q[2];

    let g = f.frobenius(1);
    // product table over the two bases
    let table = [Fp12::ONE, *f, g, *f * g];

    let mut acc = Fp12::ONE;
    // fold the (at most 2) extra quotient bits first
    for bit in (0..2).rev() {
        acc = acc.cyclotomic_square();
        let on = Choice::from(((k1_extra >> bit) & 1) as u8);
        let sel = Fp12::conditional_select(&Fp12::ONE, &g, on);
        acc = acc * sel;
    }
    for bit in (0..128).rev() {
        acc = acc.cyclotomic_square();
        let mask = (((k0[bit / 64] >> (bit % 64)) & 1)
            | (((k1[bit / 64] >> (bit % 64)) & 1) << 1)) as u8;
        let mut sel = table[0];
        for (j, entry) in table.iter().enumerate() {
            sel = Fp12::conditional_select(&sel, entry, (j as u8).ct_eq(&mask));
        }
        acc = acc * sel;
    }
    acc
}

/// Variable-time Gt multi-exponentiation `∏ fᵢ^{kᵢ}` — Pippenger buckets in
/// compressed torus form, so bucket pushes are torus multiplications with no
/// Fp12 squarings at all.
pub fn multi_exp_vartime<P: TowerParams<N>, const N: usize, S: ScalarField>(
    bases: &[Fp12<P, N>],
    scalars: &[S],
) -> Fp12<P, N> {
    assert_eq!(bases.len(), scalars.len(), "length mismatch");
    let n = bases.len();
    if n == 0 {
        return Fp12::ONE;
    }
    let c: u32 = if n < 8 { 2 } else { usize::ilog2(n).clamp(2, 12) };

    // compress all bases (inverses come free in torus form)
    let ts: Vec<Option<Torus2<P, N>>> = bases.iter().map(Torus2::from_gt).collect();

    let nbuckets = 1usize << (c - 1);
    let mut acc: Option<Torus2<P, N>> = None;
    // ±1 bases have no torus representative: (−1)^k folds in by parity
    let mut plain = Fp12::ONE;

    let digits: Vec<Vec<i64>> = scalars
        .iter()
        .map(|s| {
            let mut limbs = [0u64; MAX_SCALAR_LIMBS];
            let len = s.write_limbs(&mut limbs);
            pairex_curves::msm::signed_digits_vartime(&limbs[..len], c)
        })
        .collect();
    let nwindows = digits.iter().map(Vec::len).max().unwrap_or(0);

    for ((t, ds), base) in ts.iter().zip(&digits).zip(bases) {
        if t.is_none() && *base != Fp12::ONE && ds.first().is_some_and(|d| d % 2 != 0) {
            plain = -plain;
        }
    }

    for w in (0..nwindows).rev() {
        if let Some(a) = acc.as_mut() {
            for _ in 0..c {
                *a = a.square();
            }
        }
        let mut buckets: Vec<Option<Torus2<P, N>>> = vec![None; nbuckets + 1];
        for (t, ds) in ts.iter().zip(&digits) {
            let Some(t) = t else { continue };
            let Some(&d) = ds.get(w) else { continue };
            if d == 0 {
                continue;
            }
            let e = if d > 0 { *t } else { t.inverse() };
            let slot = d.unsigned_abs() as usize;
            buckets[slot] = Some(match buckets[slot] {
                Some(b) => b.mul(&e),
                None => e,
            });
        }
        // bucket reduction with running torus products
        let mut running: Option<Torus2<P, N>> = None;
        let mut window_sum: Option<Torus2<P, N>> = None;
        for b in buckets.iter().rev().take(nbuckets) {
            if let Some(b) = b {
                running = Some(match running {
                    Some(r) => r.mul(b),
                    None => *b,
                });
            }
            if let Some(r) = &running {
                window_sum = Some(match window_sum {
                    Some(ws) => ws.mul(r),
                    None => *r,
                });
            }
        }
        if let Some(ws) = window_sum {
            acc = Some(match acc {
                Some(a) => a.mul(&ws),
                None => ws,
            });
        }
    }
    let out = acc.map(|a| a.to_gt()).unwrap_or(Fp12::ONE);
    out * plain
}
