//! # pairex-curves
//!
//! Elliptic-curve groups for pairing-based protocols: short-Weierstrass
//! curves in affine/projective/Jacobian coordinates, twisted-Edwards curves
//! (Bandersnatch and its prime-order Banderwagon quotient), constant-time
//! and variable-time scalar multiplication, Pippenger multi-scalar
//! multiplication with batched-affine bucket accumulation, RFC 9380
//! hash-to-curve, and the canonical point wire formats.
//!
//! Supported curves: BN254 (Snarks and Nogami), BLS12-377, BLS12-381,
//! BW6-761, Pallas, Vesta, Banderwagon. Pairing towers are wired for
//! BN254-Snarks and BLS12-381; the rest carry the group law only.
//!
//! The constant-time dialect is the default (`mul`, `add`); every
//! variable-time routine says so in its name (`mul_vartime`, `msm_vartime`)
//! and must never see secret data.

pub mod curve;
pub mod edwards;
pub mod hash_to_curve;
pub mod instances;
pub mod msm;
pub mod params;
pub mod scalar_mul;
pub mod serialize;
pub mod weierstrass;

pub use curve::{CurveId, GlvCurve, ScalarField, SwCurve};
pub use edwards::{Banderwagon, EdwardsExtended};
pub use weierstrass::{Affine, Jacobian, Projective};

/// Base and scalar fields of the two pairing-enabled curves, re-exported
/// under their conventional names.
pub mod fields {
    use pairex_math::Fp;

    pub use crate::params::bandersnatch::FrBandersnatch;
    pub use crate::params::bls12_377::{FpBls377, FrBls377};
    pub use crate::params::bls12_381::{FpBls381, FrBls381};
    pub use crate::params::bn254::{FpBn254, FrBn254};
    pub use crate::params::bn254_nogami::{FpBn254Nogami, FrBn254Nogami};
    pub use crate::params::bw6_761::FpBw6761;
    pub use crate::params::pasta::{FpPallas, FpVesta};

    pub type Fq381 = Fp<FpBls381, 6>;
    pub type Fr381 = Fp<FrBls381, 4>;
    pub type Fq254 = Fp<FpBn254, 4>;
    pub type Fr254 = Fp<FrBn254, 4>;
    pub type Fq377 = Fp<FpBls377, 6>;
    pub type Fr377 = Fp<FrBls377, 4>;
    pub type Fq761 = Fp<FpBw6761, 12>;
    /// BW6-761's scalar field is BLS12-377's base field.
    pub type Fr761 = Fq377;
    pub type FqPallas = Fp<FpPallas, 4>;
    pub type FrPallas = Fp<FpVesta, 4>;
    pub type FqVesta = Fp<FpVesta, 4>;
    pub type FrVesta = Fp<FpPallas, 4>;
    /// Banderwagon's base field is BLS12-381's scalar field.
    pub type FqBander = Fr381;
    pub type FrBander = Fp<FrBandersnatch, 4>;
}
