//! Bandersnatch / Banderwagon parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::{Fp, FpParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrBandersnatch;

impl FpParams<4> for FrBandersnatch {
    const MODULUS: BigInt<4> = BigInt::new([0x74fd06b52876e7e1, 0xff8f870074190471, 0x0cce760202687600, 0x1cfb69d4ca675f52]);
    const R: BigInt<4> = BigInt::new([0x5817ca56bc48c0f8, 0x0383c7fc5f37dc74, 0x998c4fefecbc4ff8, 0x1824b159acc5056f]);
    const R2: BigInt<4> = BigInt::new([0xdbb4f5d658db47cb, 0x40fa7ca27fecb938, 0xaa9e6daec0055cea, 0x0ae793ddb14aec7d]);
    const INV: u64 = 0xf19f22295cc063df;
    const NUM_BITS: u32 = 253;
    const TWO_ADICITY: u32 = 5;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0xc5d3f41ad4a1db9f, 0x03fe3e1c01d06411, 0x483339d80809a1d8, 0x0073eda753299d7d]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x4b263b9a8d79c573, 0xeadb3d0a007af1fd, 0xa54c8a4668832589, 0x0610860c4254fb9d]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x74fd06b52876e7df, 0xff8f870074190471, 0x0cce760202687600, 0x1cfb69d4ca675f52]);
    const MODULUS_STR: &'static str = "1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1";
}

use super::bls12_381::FrBls381;

/// Twisted-Edwards coefficients over the BLS12-381 scalar field.
pub const EDW_A: Fp<FrBls381, 4> = Fp::from_mont(BigInt::new([0xfffffff40000000c, 0xece3b023ffec4ff3, 0x66b620607396203f, 0x6f23d7e5f361df62]));
pub const EDW_D: Fp<FrBls381, 4> = Fp::from_mont(BigInt::new([0xa8dced1b47a2c730, 0x381c065aad3cccc7, 0x53ff52e1188351f8, 0x362e8d63990fe940]));
pub const GEN_X: Fp<FrBls381, 4> = Fp::from_mont(BigInt::new([0x33162cba28da3d62, 0x553b552474c86ef3, 0xbf5a45d2643faebd, 0x422ad3c8c3f02442]));
pub const GEN_Y: Fp<FrBls381, 4> = Fp::from_mont(BigInt::new([0x032cc7c797d01143, 0x59b85f33d53a9b4a, 0x6b98ba814785a6f7, 0x317e1a58c2a5f2c2]));
pub const COFACTOR: &[u64] = &[0x0000000000000004];
