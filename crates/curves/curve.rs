//! Curve descriptors: the compile-time data a short-Weierstrass curve
//! carries, and the scalar-field interface used by scalar multiplication.

use pairex_math::{BigInt, FieldArith, Fp, FpParams};
use subtle::Choice;

use crate::weierstrass::Affine;

/// Widest scalar field in the library (BW6-761: 377 bits).
pub const MAX_SCALAR_LIMBS: usize = 6;

/// The curves this library knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    Bn254Snarks,
    Bn254Nogami,
    Bls12_377,
    Bls12_381,
    Bw6_761,
    Pallas,
    Vesta,
    Banderwagon,
}

/// Scalar-field elements as inputs to scalar multiplication: canonical limb
/// access with a public width.
pub trait ScalarField: FieldArith {
    const BITS: u32;
    const LIMBS: usize;
    /// Scalar-field modulus, little-endian limbs.
    const MODULUS_LIMBS: &'static [u64];

    /// Canonical little-endian limbs into a fixed stack buffer; returns the
    /// limb count. The buffer never hits the heap — callers zeroize it.
    fn write_limbs(&self, out: &mut [u64; MAX_SCALAR_LIMBS]) -> usize;
}

impl<P: FpParams<N>, const N: usize> ScalarField for Fp<P, N> {
    const BITS: u32 = P::NUM_BITS;
    const LIMBS: usize = N;
    const MODULUS_LIMBS: &'static [u64] = &P::MODULUS.0;

    fn write_limbs(&self, out: &mut [u64; MAX_SCALAR_LIMBS]) -> usize {
        let v = self.to_bigint();
        out[..N].copy_from_slice(&v.0);
        out[N..].fill(0);
        N
    }
}

/// A short-Weierstrass curve `y² = x³ + a·x + b` (all supported curves have
/// `a = 0`) over `Base`, with scalar field `Scalar`.
pub trait SwCurve: 'static + Copy + Clone + core::fmt::Debug + Send + Sync {
    type Base: FieldArith;
    type Scalar: ScalarField;

    const ID: CurveId;
    const B: Self::Base;
    /// `3·b`, preformed for the complete addition formulas.
    const THREE_B: Self::Base;
    const GENERATOR_X: Self::Base;
    const GENERATOR_Y: Self::Base;
    /// Subgroup cofactor, little-endian limbs.
    const COFACTOR: &'static [u64];
    /// Effective cofactor used for cofactor clearing (may differ from the
    /// cofactor by a factor coprime to `r`).
    const H_EFF: &'static [u64];

    /// Fast prime-order-subgroup membership for a point already on the
    /// curve. Curves without an endomorphism shortcut fall back to `[r]P`.
    fn is_in_subgroup(p: &Affine<Self>) -> Choice;
}

/// Curves with an efficient GLV endomorphism `φ(x, y) = (β·x, y)` acting as
/// multiplication by `λ` on the prime-order subgroup.
pub trait GlvCurve: SwCurve {
    const BETA: Self::Base;
    /// `λ` as a scalar-field-width integer (canonical).
    const LAMBDA: BigInt<4>;
    /// Two short lattice rows `(|a|, a<0, |b|, b<0)` with `a + b·λ ≡ 0 (mod r)`.
    const GLV_BASIS: [(u128, bool, u128, bool); 2];
}
