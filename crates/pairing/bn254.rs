//! Optimal ate pairing over BN254 (alt_bn128; D-twist, `6x+2` loop with the
//! two Frobenius correction lines).

use subtle::{Choice, ConstantTimeEq};

use pairex_curves::fields::{Fq254, Fr254};
use pairex_curves::instances::{Bn254G1, Bn254G2, psi_bn254};
use pairex_curves::params::bn254::{FpBn254, PARAM_X};
use pairex_curves::weierstrass::Affine;
use pairex_math::tower::Fp12;

use crate::gt;
use crate::miller::{G2Proj, Twist, final_exp_easy};
use crate::torus::Torus2;

pub type Fq12 = Fp12<FpBn254, 4>;
pub type G1Affine = Affine<Bn254G1>;
pub type G2Affine = Affine<Bn254G2>;

const TWIST: Twist = Twist::D;

/// Ate loop parameter `6x + 2` (x positive for BN254-Snarks).
fn ate_loop() -> u128 {
    6 * (PARAM_X as u128) + 2
}

/// Shared Miller loop with the BN-specific tail: after the binary loop, two
/// more line accumulations through `ψ(Q)` and `−ψ²(Q)` (fused).
pub fn multi_miller_loop(pairs: &[(G1Affine, G2Affine)]) -> Fq12 {
    let live: Vec<&(G1Affine, G2Affine)> = pairs
        .iter()
        .filter(|(p, q)| !bool::from(p.is_neutral() | q.is_neutral()))
        .collect();
    if live.is_empty() {
        return Fq12::ONE;
    }
    tracing::trace!(pairs = live.len(), "bn254 miller loop");
    let half = Fq254::from_u64(2).invert().unwrap_or(Fq254::ZERO);
    let three_b = pairex_curves::params::bn254::g2::THREE_B;
    let mut ts: Vec<G2Proj<FpBn254, 4>> = live
        .iter()
        .map(|(_, q)| G2Proj::from_affine(q.x, q.y))
        .collect();

    let loop_param = ate_loop();
    let mut f = Fq12::ONE;
    let bits = 128 - loop_param.leading_zeros();
    for i in (0..bits - 1).rev() {
        f = f.square();
        let bit = (loop_param >> i) & 1 == 1;
        for (t, (p, q)) in ts.iter_mut().zip(live.iter()) {
            let l1 = t.double_step(&three_b, &half).eval(TWIST, &p.x, &p.y);
            if bit {
                let l2 = t.add_step(&q.x, &q.y).eval(TWIST, &p.x, &p.y);
                f = f * l1.mul_line(TWIST, &l2);
            } else {
                f = l1.mul_into(TWIST, &f);
            }
        }
    }

    // Frobenius-twist correction: T += ψ(Q), then T += −ψ²(Q), both lines
    // folded in as one fused product per pair.
    for (t, (p, q)) in ts.iter_mut().zip(live.iter()) {
        let q1 = psi_bn254(q);
        let q2 = psi_bn254(&q1);
        let q2 = q2.neg();
        let l1 = t.add_step(&q1.x, &q1.y).eval(TWIST, &p.x, &p.y);
        let l2 = t.add_step(&q2.x, &q2.y).eval(TWIST, &p.x, &p.y);
        f = f * l1.mul_line(TWIST, &l2);
    }
    f
}

/// `f^x` on the cyclotomic subgroup (x is 63 bits, positive).
fn exp_by_x(f: &Fq12) -> Fq12 {
    crate::miller::exp_by_x(f, PARAM_X, false)
}

/// Final exponentiation: easy part, then the standard BN hard-part chain
/// built from `f^x`, `f^(x²)`, `f^(x³)` and Frobenius images.
pub fn final_exponentiation(f: &Fq12) -> Gt254 {
    let f = final_exp_easy(f);

    let fx = exp_by_x(&f);
    let fx2 = exp_by_x(&fx);
    let fx3 = exp_by_x(&fx2);

    let y0 = f.frobenius(1) * f.frobenius(2) * f.frobenius(3);
    let y1 = f.conjugate();
    let y2 = fx2.frobenius(2);
    let y3 = fx.frobenius(1).conjugate();
    let y4 = (fx * fx2.frobenius(1)).conjugate();
    let y5 = fx2.conjugate();
    let y6 = (fx3 * fx3.frobenius(1)).conjugate();

    let mut t0 = y6.cyclotomic_square() * y4 * y5;
    let mut t1 = y3 * y5 * t0;
    t0 = t0 * y2;
    t1 = t1.cyclotomic_square() * t0;
    t1 = t1.cyclotomic_square();
    t0 = t1 * y1;
    t1 = t1 * y0;
    t0 = t0.cyclotomic_square();
    Gt254(t0 * t1)
}

/// `e(P, Q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt254 {
    final_exponentiation(&multi_miller_loop(core::slice::from_ref(&(*p, *q))))
}

/// `∏ e(Pᵢ, Qᵢ)` with one shared Miller loop and final exponentiation.
pub fn multi_pairing(pairs: &[(G1Affine, G2Affine)]) -> Gt254 {
    final_exponentiation(&multi_miller_loop(pairs))
}

/// Pairing check `∏ e(Pᵢ, Qᵢ) == 1`, the shape the ECPAIRING precompile
/// needs.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    multi_pairing(pairs).0 == Fq12::ONE
}

#[cfg(feature = "parallel")]
pub fn par_multi_pairing(pool: &rayon::ThreadPool, pairs: &[(G1Affine, G2Affine)]) -> Gt254 {
    use rayon::prelude::*;
    let chunk = pairs.len().div_ceil(pool.current_num_threads().max(1)).max(1);
    let f = pool.install(|| {
        pairs
            .par_chunks(chunk)
            .map(multi_miller_loop)
            .reduce(|| Fq12::ONE, |a, b| a * b)
    });
    final_exponentiation(&f)
}

/// An element of the order-r pairing subgroup of Fp12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt254(pub Fq12);

impl Gt254 {
    pub const ONE: Self = Self(Fq12::ONE);

    pub fn generator() -> Self {
        pairing(&G1Affine::generator(), &G2Affine::generator())
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    pub fn invert(&self) -> Self {
        Self(self.0.conjugate())
    }

    pub fn square(&self) -> Self {
        Self(self.0.cyclotomic_square())
    }

    /// Membership: cyclotomic subgroup and `f^p == f^(6x²)` (t − 1 = 6x²).
    /// The hard part alone is *not* assumed to land in the subgroup.
    pub fn is_in_subgroup(&self) -> Choice {
        let cyclo = self.0.is_in_cyclotomic_subgroup();
        let x = PARAM_X as u128;
        let t_minus_1 = 6 * x * x;
        let limbs = [t_minus_1 as u64, (t_minus_1 >> 64) as u64];
        let eig = self.0.frobenius(1).ct_eq(&self.0.pow_vartime(&limbs));
        cyclo & eig
    }

    pub fn exp(&self, k: &Fr254) -> Self {
        Self(gt::exp_ct(&self.0, k))
    }

    /// Constant-time endomorphism-accelerated exponentiation. The Frobenius
    /// eigenvalue on Gt is `6x²` for BN curves, so the base-`x` split used
    /// for BLS does not apply; the split here is two-dimensional in `6x²`.
    pub fn exp_endo(&self, k: &Fr254) -> Self {
        let x = PARAM_X as u128;
        Self(gt::exp_endo_two_dim_ct(&self.0, k, 6 * x * x))
    }

    pub fn exp_sqrmul_vartime(&self, exp: &[u64]) -> Self {
        Self(gt::exp_sqrmul_vartime(&self.0, exp))
    }

    pub fn exp_jy00_vartime(&self, exp: &[u64]) -> Self {
        Self(gt::exp_jy00_vartime(&self.0, exp))
    }

    pub fn exp_wnaf_vartime(&self, exp: &[u64]) -> Self {
        Self(gt::exp_wnaf_vartime(&self.0, exp))
    }

    pub fn multi_exp_vartime(elems: &[Self], scalars: &[Fr254]) -> Self {
        let bases: Vec<Fq12> = elems.iter().map(|g| g.0).collect();
        Self(gt::multi_exp_vartime(&bases, scalars))
    }

    pub fn compress(&self) -> Option<Torus2<FpBn254, 4>> {
        Torus2::from_gt(&self.0)
    }

    pub fn decompress(t: &Torus2<FpBn254, 4>) -> Self {
        Self(t.to_gt())
    }
}
