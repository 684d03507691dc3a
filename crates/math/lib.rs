//! # pairex-math
//!
//! Fixed-width big integers, prime fields in Montgomery form, and the
//! extension-field towers (Fp2/Fp6/Fp12) that pairing-friendly curves are
//! built on.
//!
//! Everything operating on secret data is constant-time: no secret-dependent
//! branches, no secret-indexed loads. Selection and comparison go through
//! [`subtle`], and the two dialects of every routine are explicit at the call
//! site (`invert` vs nothing — inversion is always constant-time here;
//! `pow` vs `pow_vartime`).
//!
//! ## Modules
//!
//! - [`limb`]: word-level carry/borrow/multiply-accumulate primitives
//! - [`bigint`]: `BigInt<N>`, a stack-allocated little-endian limb integer
//! - [`fp`]: `Fp<P, N>`, Montgomery-form prime-field element over a
//!   compile-time parameter set
//! - [`field`]: the `FieldArith` trait curve code is generic over, plus
//!   batched inversion
//! - [`tower`]: Fp2 → Fp6 → Fp12 with Frobenius and cyclotomic arithmetic
//! - [`codec`]: byte/hex codecs and the encoding error taxonomy

pub mod bigint;
pub mod codec;
pub mod field;
pub mod fp;
pub mod limb;
pub mod tower;

pub use bigint::BigInt;
pub use codec::EncodingError;
pub use field::{FieldArith, batch_invert};
pub use fp::{Fp, FpParams};
