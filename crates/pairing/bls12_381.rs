//! Optimal ate pairing over BLS12-381 (M-twist, negative loop parameter).

use subtle::{Choice, ConstantTimeEq};

use pairex_curves::fields::{Fr381, Fq381};
use pairex_curves::instances::{Bls12381G1, Bls12381G2};
use pairex_curves::params::bls12_381::{FpBls381, PARAM_X, PARAM_X_IS_NEG, g2};
use pairex_curves::weierstrass::Affine;
use pairex_math::tower::Fp12;

use crate::gt;
use crate::miller::{G2Proj, Twist, exp_by_x, final_exp_easy};
use crate::torus::Torus2;

pub type Fq12 = Fp12<FpBls381, 6>;
pub type G1Affine = Affine<Bls12381G1>;
pub type G2Affine = Affine<Bls12381G2>;

const TWIST: Twist = Twist::M;

/// Shared Miller loop over all pairs: one squaring chain, per-pair line
/// contributions, doubling and addition lines fused pairwise.
pub fn multi_miller_loop(pairs: &[(G1Affine, G2Affine)]) -> Fq12 {
    let live: Vec<&(G1Affine, G2Affine)> = pairs
        .iter()
        .filter(|(p, q)| !bool::from(p.is_neutral() | q.is_neutral()))
        .collect();
    if live.is_empty() {
        return Fq12::ONE;
    }
    tracing::trace!(pairs = live.len(), "bls12-381 miller loop");
    let half = Fq381::from_u64(2).invert().unwrap_or(Fq381::ZERO);
    let mut ts: Vec<G2Proj<FpBls381, 6>> = live
        .iter()
        .map(|(_, q)| G2Proj::from_affine(q.x, q.y))
        .collect();

    let mut f = Fq12::ONE;
    let bits = 64 - PARAM_X.leading_zeros();
    for i in (0..bits - 1).rev() {
        f = f.square();
        let bit = (PARAM_X >> i) & 1 == 1;
        for (t, (p, q)) in ts.iter_mut().zip(live.iter()) {
            let l1 = t.double_step(&g2::THREE_B, &half).eval(TWIST, &p.x, &p.y);
            if bit {
                let l2 = t.add_step(&q.x, &q.y).eval(TWIST, &p.x, &p.y);
                f = f * l1.mul_line(TWIST, &l2);
            } else {
                f = l1.mul_into(TWIST, &f);
            }
        }
    }
    // x < 0: conjugate the loop output
    f.conjugate()
}

/// Final exponentiation `f^((p¹²−1)/r)` (up to the harmless cube the hard
/// part introduces): easy part, then the `(x−1)²(x+p)(x²+p²−1) + 3` chain.
pub fn final_exponentiation(f: &Fq12) -> Gt381 {
    let f = final_exp_easy(f);
    let ex = |g: &Fq12| exp_by_x(g, PARAM_X, PARAM_X_IS_NEG);

    let g = ex(&f) * f.conjugate(); // f^(x−1)
    let g = ex(&g) * g.conjugate(); // f^((x−1)²)
    let h = ex(&g) * g.frobenius(1); // ^(x+p)
    let k = ex(&ex(&h)) * h.frobenius(2) * h.conjugate(); // ^(x²+p²−1)
    Gt381(k * f.square() * f)
}

/// `e(P, Q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt381 {
    final_exponentiation(&multi_miller_loop(core::slice::from_ref(&(*p, *q))))
}

/// `∏ e(Pᵢ, Qᵢ)` with a single shared Miller loop and final exponentiation.
pub fn multi_pairing(pairs: &[(G1Affine, G2Affine)]) -> Gt381 {
    final_exponentiation(&multi_miller_loop(pairs))
}

/// Parallel multi-pairing over an externally-owned pool: Miller loops are
/// independent; products and the final exponentiation happen once.
#[cfg(feature = "parallel")]
pub fn par_multi_pairing(pool: &rayon::ThreadPool, pairs: &[(G1Affine, G2Affine)]) -> Gt381 {
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
pub struct Gt381(pub Fq12);

impl Gt381 {
    pub const ONE: Self = Self(Fq12::ONE);

    /// `e(G1, G2)` over the canonical generators.
    pub fn generator() -> Self {
        pairing(&G1Affine::generator(), &G2Affine::generator())
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// Group inverse — conjugation, free on the cyclotomic subgroup.
    pub fn invert(&self) -> Self {
        Self(self.0.conjugate())
    }

    pub fn square(&self) -> Self {
        Self(self.0.cyclotomic_square())
    }

    /// Full membership check: cyclotomic subgroup *and* the Frobenius
    /// eigenvalue relation `f^p == f^x` (p ≡ t−1 ≡ x mod r).
    pub fn is_in_subgroup(&self) -> Choice {
        let cyclo = self.0.is_in_cyclotomic_subgroup();
        let eig = self
            .0
            .frobenius(1)
            .ct_eq(&exp_by_x(&self.0, PARAM_X, PARAM_X_IS_NEG));
        cyclo & eig
    }

    /// Constant-time exponentiation.
    pub fn exp(&self, k: &Fr381) -> Self {
        Self(gt::exp_ct(&self.0, k))
    }

    /// Constant-time exponentiation with Frobenius-endomorphism splitting.
    pub fn exp_endo(&self, k: &Fr381) -> Self {
        Self(gt::exp_endo_ct(&self.0, k, PARAM_X, PARAM_X_IS_NEG))
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

    /// `∏ fᵢ^{kᵢ}` in torus-compressed Pippenger form (variable-time).
    pub fn multi_exp_vartime(elems: &[Self], scalars: &[Fr381]) -> Self {
        let bases: Vec<Fq12> = elems.iter().map(|g| g.0).collect();
        Self(gt::multi_exp_vartime(&bases, scalars))
    }

    /// Torus compression (variable-time); identity and −1 have no affine
    /// torus representative.
    pub fn compress(&self) -> Option<Torus2<FpBls381, 6>> {
        Torus2::from_gt(&self.0)
    }

    pub fn decompress(t: &Torus2<FpBls381, 6>) -> Self {
        Self(t.to_gt())
    }
}
