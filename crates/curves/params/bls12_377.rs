//! BLS12-377 parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::{Fp, FpParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBls377;

impl FpParams<6> for FpBls377 {
    const MODULUS: BigInt<6> = BigInt::new([0x8508c00000000001, 0x170b5d4430000000, 0x1ef3622fba094800, 0x1a22d9f300f5138f, 0xc63b05c06ca1493b, 0x01ae3a4617c510ea]);
    const R: BigInt<6> = BigInt::new([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]);
    const R2: BigInt<6> = BigInt::new([0xb786686c9400cd22, 0x0329fcaab00431b1, 0x22a5f11162d6b46d, 0xbfdf7d03827dc3ac, 0x837e92f041790bf9, 0x006dfccb1e914b88]);
    const INV: u64 = 0x8508bfffffffffff;
    const NUM_BITS: u32 = 377;
    const TWO_ADICITY: u32 = 46;
    const T_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt::new([0xba88600000010a11, 0xc45f741290002e16, 0xb3e601ea271e3de6, 0x0b80d94292763445, 0x748c2f8a21d58c76, 0x000000000000035c]);
    const ROOT_OF_UNITY: BigInt<6> = BigInt::new([0x68f876aa8bb191f2, 0x254e4780a6722e51, 0xa818ea191f8a0eaf, 0x2c1a6dd31d8d5057, 0xcce5a0cba0df931b, 0x00ba7904c8cf8495]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<6> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<6> = BigInt::new([0x8508bfffffffffff, 0x170b5d4430000000, 0x1ef3622fba094800, 0x1a22d9f300f5138f, 0xc63b05c06ca1493b, 0x01ae3a4617c510ea]);
    const MODULUS_STR: &'static str = "1ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrBls377;

impl FpParams<4> for FrBls377 {
    const MODULUS: BigInt<4> = BigInt::new([0x0a11800000000001, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
    const R: BigInt<4> = BigInt::new([0x7d1c7ffffffffff3, 0x7257f50f6ffffff2, 0x16d81575512c0fee, 0x0d4bda322bbb9a9d]);
    const R2: BigInt<4> = BigInt::new([0x25d577bab861857b, 0xcc2c27b58860591f, 0xa7cc008fe5dc8593, 0x011fdae7eff1c939]);
    const INV: u64 = 0x0a117fffffffffff;
    const NUM_BITS: u32 = 253;
    const TWO_ADICITY: u32 = 47;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x76fed00000010a11, 0x4d1e5c37b00159aa, 0x655e9a2ca55660b4, 0x00000000000012ab]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x3c3d3ca739381fb2, 0x9a14cda3ec99772b, 0xd7aacc7c59724826, 0x0d1ba211c5cc349c]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x0a117fffffffffff, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
    const MODULUS_STR: &'static str = "12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001";
}

pub const PARAM_X: u64 = 0x8508c00000000001;
pub const PARAM_X_IS_NEG: bool = false;

pub mod g1 {
    use super::*;
    pub const B: Fp<FpBls377, 6> = Fp::from_mont(BigInt::new([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]));
    pub const THREE_B: Fp<FpBls377, 6> = Fp::from_mont(BigInt::new([0x0869fffffffffe38, 0xf3c1de8a7fffff13, 0xde791afc9f77bfd6, 0x71ebc7264b752910, 0xe6ddc13e80b58eb9, 0x01a83325a8f9ddce]));
    pub const GEN_X: Fp<FpBls377, 6> = Fp::from_mont(BigInt::new([0x260f33b9772451f4, 0xc54dd773169d5658, 0x5c1551c469a510dd, 0x761662e4425e1698, 0xc97d78cc6f065272, 0x00a41206b361fd4d]));
    pub const GEN_Y: Fp<FpBls377, 6> = Fp::from_mont(BigInt::new([0x8193961fb8cb81f3, 0x00638d4c5f44adb8, 0xfafaf3dad4daf54a, 0xc27849e2d655cd18, 0x2ec3ddb401d52814, 0x007da93326303c71]));
    pub const COFACTOR: &[u64] = &[0x0000000000000000, 0x170b5d4430000000];
}
