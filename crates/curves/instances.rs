//! Descriptor types for every supported curve, binding the generated
//! parameter tables to the group-law traits, including per-curve fast
//! subgroup checks.

use pairex_math::tower::Fp2;
use pairex_math::{BigInt, FieldArith, Fp};
use subtle::{Choice, ConstantTimeEq};

use crate::curve::{CurveId, GlvCurve, SwCurve};
use crate::fields::*;
use crate::params::{bls12_377, bls12_381, bn254, bn254_nogami, bw6_761, pasta};
use crate::weierstrass::{Affine, Jacobian, subgroup_check_generic};

/// BLS12-381 G1: `y² = x³ + 4` over Fp.
#[derive(Clone, Copy, Debug)]
pub struct Bls12381G1;

/// BLS12-381 G2: `y² = x³ + 4(u+1)` over Fp2 (M-twist).
#[derive(Clone, Copy, Debug)]
pub struct Bls12381G2;

/// BN254-Snarks G1 (alt_bn128): `y² = x³ + 3`.
#[derive(Clone, Copy, Debug)]
pub struct Bn254G1;

/// BN254-Snarks G2: `y² = x³ + 3/(9+u)` over Fp2 (D-twist).
#[derive(Clone, Copy, Debug)]
pub struct Bn254G2;

/// BLS12-377 G1: `y² = x³ + 1`.
#[derive(Clone, Copy, Debug)]
pub struct Bls12377G1;

/// BW6-761 G1: `y² = x³ − 1`; its scalar field is BLS12-377's base field.
#[derive(Clone, Copy, Debug)]
pub struct Bw6761G1;

/// BN254-Nogami G1: `y² = x³ + 2`.
#[derive(Clone, Copy, Debug)]
pub struct Bn254NogamiG1;

/// Pallas: `y² = x³ + 5`, cofactor 1.
#[derive(Clone, Copy, Debug)]
pub struct Pallas;

/// Vesta: `y² = x³ + 5`, cofactor 1.
#[derive(Clone, Copy, Debug)]
pub struct Vesta;

impl SwCurve for Bls12381G1 {
    type Base = Fq381;
    type Scalar = Fr381;

    const ID: CurveId = CurveId::Bls12_381;
    const B: Fq381 = bls12_381::g1::B;
    const THREE_B: Fq381 = bls12_381::g1::THREE_B;
    const GENERATOR_X: Fq381 = bls12_381::g1::GEN_X;
    const GENERATOR_Y: Fq381 = bls12_381::g1::GEN_Y;
    const COFACTOR: &'static [u64] = bls12_381::g1::COFACTOR;
    const H_EFF: &'static [u64] = bls12_381::g1::H_EFF;

    /// GLV-based check: `φ(P) = [−x²]P` on the r-torsion, i.e.
    /// `[x²]P == (β·x_P, −y_P)`.
    fn is_in_subgroup(p: &Affine<Self>) -> Choice {
        let xx = &[bls12_381::PARAM_X];
        let j = p
            .to_jacobian()
            .mul_limbs_vartime(xx)
            .mul_limbs_vartime(xx);
        let phi_neg = Affine::<Self> {
            x: p.x * Self::BETA,
            y: -p.y,
        };
        jacobian_eq_affine(&j, &phi_neg) | p.is_neutral()
    }
}

impl GlvCurve for Bls12381G1 {
    const BETA: Fq381 = bls12_381::g1::BETA;
    const LAMBDA: BigInt<4> = bls12_381::g1::LAMBDA;
    const GLV_BASIS: [(u128, bool, u128, bool); 2] = bls12_381::g1::GLV_BASIS;
}

impl SwCurve for Bls12381G2 {
    type Base = Fp2<bls12_381::FpBls381, 6>;
    type Scalar = Fr381;

    const ID: CurveId = CurveId::Bls12_381;
    const B: Self::Base = bls12_381::g2::B;
    const THREE_B: Self::Base = bls12_381::g2::THREE_B;
    const GENERATOR_X: Self::Base = bls12_381::g2::GEN_X;
    const GENERATOR_Y: Self::Base = bls12_381::g2::GEN_Y;
    const COFACTOR: &'static [u64] = bls12_381::g2::COFACTOR;
    const H_EFF: &'static [u64] = bls12_381::g2::H_EFF;

    /// ψ-based check: `ψ(Q) == [x]Q` (x < 0 folds into a negation).
    fn is_in_subgroup(p: &Affine<Self>) -> Choice {
        let xq = p
            .to_jacobian()
            .mul_limbs_vartime(&[bls12_381::PARAM_X])
            .neg(); // x is negative
        let psi = psi_bls12_381(p);
        jacobian_eq_affine(&xq, &psi) | p.is_neutral()
    }
}

/// Untwist-Frobenius-twist endomorphism on the BLS12-381 twist.
pub fn psi_bls12_381(p: &Affine<Bls12381G2>) -> Affine<Bls12381G2> {
    Affine {
        x: p.x.conjugate() * bls12_381::g2::PSI_X,
        y: p.y.conjugate() * bls12_381::g2::PSI_Y,
    }
}

impl SwCurve for Bn254G1 {
    type Base = Fq254;
    type Scalar = Fr254;

    const ID: CurveId = CurveId::Bn254Snarks;
    const B: Fq254 = bn254::g1::B;
    const THREE_B: Fq254 = bn254::g1::THREE_B;
    const GENERATOR_X: Fq254 = bn254::g1::GEN_X;
    const GENERATOR_Y: Fq254 = bn254::g1::GEN_Y;
    const COFACTOR: &'static [u64] = bn254::g1::COFACTOR;
    const H_EFF: &'static [u64] = bn254::g1::H_EFF;

    /// Cofactor 1: every curve point is in the subgroup.
    fn is_in_subgroup(_p: &Affine<Self>) -> Choice {
        Choice::from(1u8)
    }
}

impl GlvCurve for Bn254G1 {
    const BETA: Fq254 = bn254::g1::BETA;
    const LAMBDA: BigInt<4> = bn254::g1::LAMBDA;
    const GLV_BASIS: [(u128, bool, u128, bool); 2] = bn254::g1::GLV_BASIS;
}

impl SwCurve for Bn254G2 {
    type Base = Fp2<bn254::FpBn254, 4>;
    type Scalar = Fr254;

    const ID: CurveId = CurveId::Bn254Snarks;
    const B: Self::Base = bn254::g2::B;
    const THREE_B: Self::Base = bn254::g2::THREE_B;
    const GENERATOR_X: Self::Base = bn254::g2::GEN_X;
    const GENERATOR_Y: Self::Base = bn254::g2::GEN_Y;
    const COFACTOR: &'static [u64] = bn254::g2::COFACTOR;
    const H_EFF: &'static [u64] = bn254::g2::H_EFF;

    /// ψ-based check: `ψ(Q) == [6x²]Q` (the Frobenius eigenvalue `t − 1`).
    fn is_in_subgroup(p: &Affine<Self>) -> Choice {
        let x = bn254::PARAM_X as u128;
        let t_minus_1 = 6 * x * x;
        let limbs = [t_minus_1 as u64, (t_minus_1 >> 64) as u64];
        let tq = p.to_jacobian().mul_limbs_vartime(&limbs);
        let psi = psi_bn254(p);
        jacobian_eq_affine(&tq, &psi) | p.is_neutral()
    }
}

/// Untwist-Frobenius-twist endomorphism on the BN254 twist.
pub fn psi_bn254(p: &Affine<Bn254G2>) -> Affine<Bn254G2> {
    Affine {
        x: p.x.conjugate() * bn254::g2::PSI_X,
        y: p.y.conjugate() * bn254::g2::PSI_Y,
    }
}

impl SwCurve for Bls12377G1 {
    type Base = Fq377;
    type Scalar = Fr377;

    const ID: CurveId = CurveId::Bls12_377;
    const B: Fq377 = bls12_377::g1::B;
    const THREE_B: Fq377 = bls12_377::g1::THREE_B;
    const GENERATOR_X: Fq377 = bls12_377::g1::GEN_X;
    const GENERATOR_Y: Fq377 = bls12_377::g1::GEN_Y;
    const COFACTOR: &'static [u64] = bls12_377::g1::COFACTOR;
    const H_EFF: &'static [u64] = bls12_377::g1::COFACTOR;

    fn is_in_subgroup(p: &Affine<Self>) -> Choice {
        subgroup_check_generic(p)
    }
}

impl SwCurve for Bw6761G1 {
    type Base = Fq761;
    type Scalar = Fr761;

    const ID: CurveId = CurveId::Bw6_761;
    const B: Fq761 = bw6_761::g1::B;
    const THREE_B: Fq761 = bw6_761::g1::THREE_B;
    const GENERATOR_X: Fq761 = bw6_761::g1::GEN_X;
    const GENERATOR_Y: Fq761 = bw6_761::g1::GEN_Y;
    const COFACTOR: &'static [u64] = bw6_761::g1::COFACTOR;
    const H_EFF: &'static [u64] = bw6_761::g1::COFACTOR;

    fn is_in_subgroup(p: &Affine<Self>) -> Choice {
        subgroup_check_generic(p)
    }
}

impl SwCurve for Bn254NogamiG1 {
    type Base = Fp<bn254_nogami::FpBn254Nogami, 4>;
    type Scalar = Fp<bn254_nogami::FrBn254Nogami, 4>;

    const ID: CurveId = CurveId::Bn254Nogami;
    const B: Self::Base = bn254_nogami::g1::B;
    const THREE_B: Self::Base = bn254_nogami::g1::THREE_B;
    const GENERATOR_X: Self::Base = bn254_nogami::g1::GEN_X;
    const GENERATOR_Y: Self::Base = bn254_nogami::g1::GEN_Y;
    const COFACTOR: &'static [u64] = bn254_nogami::g1::COFACTOR;
    const H_EFF: &'static [u64] = bn254_nogami::g1::COFACTOR;

    fn is_in_subgroup(_p: &Affine<Self>) -> Choice {
        Choice::from(1u8) // cofactor 1
    }
}

impl SwCurve for Pallas {
    type Base = FqPallas;
    type Scalar = FrPallas;

    const ID: CurveId = CurveId::Pallas;
    const B: FqPallas = pasta::pallas::B;
    const THREE_B: FqPallas = pasta::pallas::THREE_B;
    const GENERATOR_X: FqPallas = pasta::pallas::GEN_X;
    const GENERATOR_Y: FqPallas = pasta::pallas::GEN_Y;
    const COFACTOR: &'static [u64] = pasta::pallas::COFACTOR;
    const H_EFF: &'static [u64] = pasta::pallas::COFACTOR;

    fn is_in_subgroup(_p: &Affine<Self>) -> Choice {
        Choice::from(1u8) // cofactor 1
    }
}

impl SwCurve for Vesta {
    type Base = FqVesta;
    type Scalar = FrVesta;

    const ID: CurveId = CurveId::Vesta;
    const B: FqVesta = pasta::vesta::B;
    const THREE_B: FqVesta = pasta::vesta::THREE_B;
    const GENERATOR_X: FqVesta = pasta::vesta::GEN_X;
    const GENERATOR_Y: FqVesta = pasta::vesta::GEN_Y;
    const COFACTOR: &'static [u64] = pasta::vesta::COFACTOR;
    const H_EFF: &'static [u64] = pasta::vesta::COFACTOR;

    fn is_in_subgroup(_p: &Affine<Self>) -> Choice {
        Choice::from(1u8) // cofactor 1
    }
}

/// Cross-coordinate equality: Jacobian `(X : Y : Z)` against an affine
/// point, without inverting.
fn jacobian_eq_affine<C: SwCurve>(j: &Jacobian<C>, a: &Affine<C>) -> Choice {
    let z2 = j.z.square();
    let z3 = z2 * j.z;
    let not_inf = !j.z.is_zero();
    not_inf & j.x.ct_eq(&(a.x * z2)) & j.y.ct_eq(&(a.y * z3))
}

/// Shorthand aliases for the groups protocols use.
pub type G1Affine381 = Affine<Bls12381G1>;
pub type G2Affine381 = Affine<Bls12381G2>;
pub type G1Affine254 = Affine<Bn254G1>;
pub type G2Affine254 = Affine<Bn254G2>;
