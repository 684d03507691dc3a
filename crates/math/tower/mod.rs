//! Extension-field towers for pairing-friendly curves:
//! Fp2 = Fp[u]/(u²+1), Fp6 = Fp2[v]/(v³−ξ), Fp12 = Fp6[w]/(w²−v).
//!
//! The tower shape (quadratic over cubic over quadratic) and the Frobenius
//! coefficient tables are compile-time properties of the curve, supplied
//! through [`TowerParams`].

pub mod fp2;
pub mod fp6;
pub mod fp12;

pub use fp2::Fp2;
pub use fp6::Fp6;
pub use fp12::Fp12;

use crate::fp::{Fp, FpParams};

/// Tower description for a pairing-friendly curve with embedding degree 12.
///
/// Constants are in Montgomery form; `FROBENIUS_Cj[k] = ξ^(k·(p^j−1)/6)`.
pub trait TowerParams<const N: usize>: FpParams<N> {
    /// The sextic non-residue ξ used for both the Fp6 tower and the twist.
    const XI: Fp2<Self, N>;
    /// `3⁻¹` in Fp, for Toom-Cook interpolation.
    const THREE_INV: Fp<Self, N>;
    const FROBENIUS_C1: [Fp2<Self, N>; 6];
    const FROBENIUS_C2: [Fp2<Self, N>; 6];
    const FROBENIUS_C3: [Fp2<Self, N>; 6];

    /// Multiply by ξ. Curves override this with an addition-only form
    /// (ξ = 1+u for BLS12-381, 9+u for BN254).
    fn mul_by_xi(a: &Fp2<Self, N>) -> Fp2<Self, N> {
        *a * Self::XI
    }
}
