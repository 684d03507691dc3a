//! RFC 9380 hash-to-curve: `expand_message_xmd` (SHA-256), `hash_to_field`,
//! the simplified SWU map with isogeny (BLS12-381 G1/G2) and the
//! Shallue–van de Woestijne map (BN254), with cofactor clearing.
//!
//! The random-oracle combination hashes to two field elements, maps each to
//! the isogenous curve, adds there, and applies the isogeny once to the sum.

use sha2::{Digest, Sha256};
use subtle::{ConditionallySelectable, ConstantTimeEq};

use pairex_math::tower::Fp2;
use pairex_math::{FieldArith, Fp, FpParams};

use crate::instances::{Bls12381G1, Bls12381G2, Bn254G1};
use crate::params::{bls12_381, bn254};
use crate::weierstrass::{Affine, Jacobian};

const B_IN_BYTES: usize = 32; // SHA-256 output
const R_IN_BYTES: usize = 64; // SHA-256 block

/// `expand_message_xmd` per RFC 9380 §5.3.1, with the oversize-DST rule.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], out_len: usize) -> Vec<u8> {
    let reduced;
    let dst: &[u8] = if dst.len() > 255 {
        let mut h = Sha256::new();
        h.update(b"H2C-OVERSIZE-DST-");
        h.update(dst);
        reduced = h.finalize();
        &reduced
    } else {
        dst
    };
    let ell = out_len.div_ceil(B_IN_BYTES);
    assert!(ell <= 255 && out_len <= u16::MAX as usize, "oversized expansion");

    let mut h = Sha256::new();
    h.update([0u8; R_IN_BYTES]);
    h.update(msg);
    h.update((out_len as u16).to_be_bytes());
    h.update([0u8]);
    h.update(dst);
    h.update([dst.len() as u8]);
    let b0 = h.finalize();

    let mut h = Sha256::new();
    h.update(b0);
    h.update([1u8]);
    h.update(dst);
    h.update([dst.len() as u8]);
    let mut bi = h.finalize();

    let mut out = Vec::with_capacity(ell * B_IN_BYTES);
    out.extend_from_slice(&bi);
    for i in 2..=ell {
        let mut h = Sha256::new();
        let mut mixed = [0u8; B_IN_BYTES];
        for (m, (a, b)) in mixed.iter_mut().zip(b0.iter().zip(bi.iter())) {
            *m = a ^ b;
        }
        h.update(mixed);
        h.update([i as u8]);
        h.update(dst);
        h.update([dst.len() as u8]);
        bi = h.finalize();
        out.extend_from_slice(&bi);
    }
    out.truncate(out_len);
    out
}

/// Field elements drawable from uniform bytes (`hash_to_field` targets).
pub trait FromUniformBytes: FieldArith {
    /// Bytes drawn per element: `m · L`.
    const UNIFORM_BYTES: usize;
    fn from_uniform_bytes(bytes: &[u8]) -> Self;
}

/// `L = ceil((NUM_BITS + 128) / 8)` per RFC 9380 with k = 128.
const fn l_for_bits(bits: u32) -> usize {
    (bits as usize + 128).div_ceil(8)
}

impl<P: FpParams<N>, const N: usize> FromUniformBytes for Fp<P, N> {
    const UNIFORM_BYTES: usize = l_for_bits(P::NUM_BITS);
    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        Self::from_be_bytes_mod_order(bytes)
    }
}

impl<P: pairex_math::tower::TowerParams<N>, const N: usize> FromUniformBytes for Fp2<P, N> {
    const UNIFORM_BYTES: usize = 2 * l_for_bits(P::NUM_BITS);
    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        let l = l_for_bits(P::NUM_BITS);
        Self::new(
            Fp::from_be_bytes_mod_order(&bytes[..l]),
            Fp::from_be_bytes_mod_order(&bytes[l..]),
        )
    }
}

/// `hash_to_field`: draw `COUNT` field elements from `msg` under `dst`.
pub fn hash_to_field<F: FromUniformBytes, const COUNT: usize>(msg: &[u8], dst: &[u8]) -> [F; COUNT] {
    let uniform = expand_message_xmd(msg, dst, COUNT * F::UNIFORM_BYTES);
    core::array::from_fn(|i| {
        F::from_uniform_bytes(&uniform[i * F::UNIFORM_BYTES..(i + 1) * F::UNIFORM_BYTES])
    })
}

/// Simplified SWU map onto the isogenous curve `y² = x³ + A·x + B`
/// (`A·B ≠ 0`), RFC 9380 §6.6.2. Constant-time in `u`.
pub fn map_to_curve_sswu<F: FieldArith>(a: &F, b: &F, z: &F, u: &F) -> (F, F) {
    let u2 = u.square();
    let zu2 = *z * u2;
    let tv = zu2.square() + zu2; // Z²u⁴ + Zu²
    let x1_frac_den = tv;
    // x1 = (−B/A)(1 + 1/tv); tv = 0 ⇒ x1 = B/(Z·A)
    let a_inv = a.invert().unwrap_or(F::ZERO);
    let mb_over_a = -(*b) * a_inv;
    let tv_inv = x1_frac_den.invert().unwrap_or(F::ZERO);
    let x1_main = mb_over_a * (F::ONE + tv_inv);
    let x1_exc = *b * (*z * *a).invert().unwrap_or(F::ZERO);
    let x1 = F::conditional_select(&x1_main, &x1_exc, x1_frac_den.is_zero());

    let gx1 = (x1.square() + *a) * x1 + *b;
    let x2 = zu2 * x1;
    let gx2 = (x2.square() + *a) * x2 + *b;

    let sqrt1 = gx1.sqrt();
    let use_x1 = sqrt1.is_some();
    let y1 = sqrt1.unwrap_or(F::ZERO);
    let y2 = gx2.sqrt().unwrap_or(F::ZERO);

    let x = F::conditional_select(&x2, &x1, use_x1);
    let mut y = F::conditional_select(&y2, &y1, use_x1);
    let flip = u.sgn0() ^ y.sgn0();
    y = F::conditional_select(&y, &-y, flip);
    (x, y)
}

/// Generic-`a` affine addition on the isogenous curve (inputs are public
/// hash outputs; variable-time).
fn affine_add_iso<F: FieldArith>(a_coeff: &F, p: &(F, F), q: &(F, F)) -> (F, F) {
    let (x1, y1) = *p;
    let (x2, y2) = *q;
    let lambda = if bool::from(x1.ct_eq(&x2)) {
        // the two SSWU outputs can only share x with equal y (same point)
        (x1.square().mul_by_u64(3) + *a_coeff) * y1.double().invert().unwrap_or(F::ZERO)
    } else {
        (y2 - y1) * (x2 - x1).invert().unwrap_or(F::ZERO)
    };
    let x3 = lambda.square() - x1 - x2;
    let y3 = lambda * (x1 - x3) - y1;
    (x3, y3)
}

/// Evaluate the isogeny rational maps by Horner; denominators are monic.
fn iso_map<F: FieldArith>(
    p: &(F, F),
    xnum: &[F],
    xden: &[F],
    ynum: &[F],
    yden: &[F],
) -> (F, F) {
    let horner = |coeffs: &[F], x: &F| -> F {
        let mut acc = F::ZERO;
        for c in coeffs.iter().rev() {
            acc = acc * *x + *c;
        }
        acc
    };
    let (x, y) = *p;
    let xn = horner(xnum, &x);
    let xd = horner(xden, &x);
    let yn = horner(ynum, &x);
    let yd = horner(yden, &x);
    let xo = xn * xd.invert().unwrap_or(F::ZERO);
    let yo = y * yn * yd.invert().unwrap_or(F::ZERO);
    (xo, yo)
}

/// Full RFC 9380 `BLS12381G1_XMD:SHA-256_SSWU_RO_` hash-to-curve.
pub fn hash_to_g1_bls12_381(msg: &[u8], dst: &[u8]) -> Affine<Bls12381G1> {
    use crate::params::h2c_bls12_381::g1::*;
    let us: [crate::fields::Fq381; 2] = hash_to_field(msg, dst);
    let q0 = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &us[0]);
    let q1 = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &us[1]);
    let r = affine_add_iso(&SSWU_A, &q0, &q1);
    let (x, y) = iso_map(&r, ISO_XNUM, ISO_XDEN, ISO_YNUM, ISO_YDEN);
    let p = Affine::<Bls12381G1> { x, y };
    clear_cofactor(&p)
}

/// Full `BLS12381G2_XMD:SHA-256_SSWU_RO_`-style hash-to-curve onto G2.
pub fn hash_to_g2_bls12_381(msg: &[u8], dst: &[u8]) -> Affine<Bls12381G2> {
    use crate::params::h2c_bls12_381::g2::*;
    let us: [Fp2<bls12_381::FpBls381, 6>; 2] = hash_to_field(msg, dst);
    let q0 = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &us[0]);
    let q1 = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &us[1]);
    let r = affine_add_iso(&SSWU_A, &q0, &q1);
    let (x, y) = iso_map(&r, ISO_XNUM, ISO_XDEN, ISO_YNUM, ISO_YDEN);
    let p = Affine::<Bls12381G2> { x, y };
    clear_cofactor(&p)
}

/// Shallue–van de Woestijne map for BN254 (maps directly onto the curve).
pub fn map_to_curve_svdw_bn254(u: &crate::fields::Fq254) -> Affine<Bn254G1> {
    use crate::params::h2c_bn254::*;
    type F = crate::fields::Fq254;
    let g = |x: &F| -> F { x.square() * *x + bn254::g1::B };

    let tv1 = u.square() * SVDW_C1;
    let tv2 = F::ONE + tv1;
    let tv1 = F::ONE - tv1;
    let tv3 = (tv1 * tv2).invert().unwrap_or(F::ZERO);
    let tv4 = *u * tv1 * tv3 * SVDW_C3;
    let x1 = SVDW_C2 - tv4;
    let x2 = SVDW_C2 + tv4;
    let x3 = SVDW_Z + SVDW_C4 * (tv2.square() * tv3).square();

    let gx1 = g(&x1);
    let gx2 = g(&x2);
    let gx3 = g(&x3);
    let s1 = gx1.sqrt();
    let s2 = gx2.sqrt();
    let s3 = gx3.sqrt().unwrap_or(F::ZERO);

    let use1 = s1.is_some();
    let use2 = s2.is_some() & !use1;
    let mut x = x3;
    let mut y = s3;
    x = F::conditional_select(&x, &x2, use2);
    y = F::conditional_select(&y, &s2.unwrap_or(F::ZERO), use2);
    x = F::conditional_select(&x, &x1, use1);
    y = F::conditional_select(&y, &s1.unwrap_or(F::ZERO), use1);

    let flip = u.sgn0() ^ y.sgn0();
    y = F::conditional_select(&y, &-y, flip);
    Affine { x, y }
}

/// Random-oracle hash onto BN254 G1 via two SvdW evaluations.
pub fn hash_to_g1_bn254(msg: &[u8], dst: &[u8]) -> Affine<Bn254G1> {
    let us: [crate::fields::Fq254; 2] = hash_to_field(msg, dst);
    let q0 = map_to_curve_svdw_bn254(&us[0]);
    let q1 = map_to_curve_svdw_bn254(&us[1]);
    // cofactor 1: the sum is already in the subgroup
    q0.to_jacobian().add_affine_vartime(&q1).to_affine()
}

fn clear_cofactor<C: crate::curve::SwCurve>(p: &Affine<C>) -> Affine<C> {
    Jacobian::<C>::clear_cofactor(&p.to_jacobian()).to_affine()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_message_lengths() {
        let out = expand_message_xmd(b"msg", b"dst", 96);
        assert_eq!(out.len(), 96);
        // deterministic
        assert_eq!(out, expand_message_xmd(b"msg", b"dst", 96));
        // oversize DST is folded, not rejected
        let long = vec![0x41u8; 300];
        let out2 = expand_message_xmd(b"msg", &long, 32);
        assert_eq!(out2.len(), 32);
    }
}
