//! Shallue–van de Woestijne map constants for BN254.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::Fp;

use super::bn254::FpBn254;

pub type F = Fp<FpBn254, 4>;

pub const SVDW_Z: F = Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]));
pub const SVDW_C1: F = Fp::from_mont(BigInt::new([0x115482203dbf392d, 0x926242126eaa626a, 0xe16a48076063c052, 0x07c5909386eddc93]));
pub const SVDW_C2: F = Fp::from_mont(BigInt::new([0xb461a4448976f7d5, 0xc6843fb439555fa7, 0x28f0d12384840918, 0x112ceb58a394e07d]));
pub const SVDW_C3: F = Fp::from_mont(BigInt::new([0x7c8487078735ab72, 0x51da7e0048bfb8d4, 0x945cfd183cbd7bf4, 0x0b70b1ec48ae62c6]));
pub const SVDW_C4: F = Fp::from_mont(BigInt::new([0xa79a2bdca0800831, 0x19fd7617e49815a1, 0xbb8d0c885550c7b1, 0x05c4aeb6ec7e0f48]));
