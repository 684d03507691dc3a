//! Pallas / Vesta parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::{Fp, FpParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpPallas;

impl FpParams<4> for FpPallas {
    const MODULUS: BigInt<4> = BigInt::new([0x992d30ed00000001, 0x224698fc094cf91b, 0x0000000000000000, 0x4000000000000000]);
    const R: BigInt<4> = BigInt::new([0x34786d38fffffffd, 0x992c350be41914ad, 0xffffffffffffffff, 0x3fffffffffffffff]);
    const R2: BigInt<4> = BigInt::new([0x8c78ecb30000000f, 0xd7d30dbd8b0de0e7, 0x7797a99bc3c95d18, 0x096d41af7b9cb714]);
    const INV: u64 = 0x992d30ecffffffff;
    const NUM_BITS: u32 = 255;
    const TWO_ADICITY: u32 = 32;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x04a67c8dcc969876, 0x0000000011234c7e, 0x0000000000000000, 0x0000000020000000]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0xa28db849bad6dbf0, 0x9083cd03d3b539df, 0xfba6b9ca9dc8448e, 0x3ec928747b89c6da]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x992d30ecffffffff, 0x224698fc094cf91b, 0x0000000000000000, 0x4000000000000000]);
    const MODULUS_STR: &'static str = "40000000000000000000000000000000224698fc094cf91b992d30ed00000001";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpVesta;

impl FpParams<4> for FpVesta {
    const MODULUS: BigInt<4> = BigInt::new([0x8c46eb2100000001, 0x224698fc0994a8dd, 0x0000000000000000, 0x4000000000000000]);
    const R: BigInt<4> = BigInt::new([0x5b2b3e9cfffffffd, 0x992c350be3420567, 0xffffffffffffffff, 0x3fffffffffffffff]);
    const R2: BigInt<4> = BigInt::new([0xfc9678ff0000000f, 0x67bb433d891a16e3, 0x7fae231004ccf590, 0x096d41af7ccfdaa9]);
    const INV: u64 = 0x8c46eb20ffffffff;
    const NUM_BITS: u32 = 255;
    const TWO_ADICITY: u32 = 32;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x04ca546ec6237590, 0x0000000011234c7e, 0x0000000000000000, 0x0000000020000000]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x218077428c9942de, 0xcc49578921b60494, 0xac2e5d27b2efbee2, 0x0b79fa897f2db056]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x8c46eb20ffffffff, 0x224698fc0994a8dd, 0x0000000000000000, 0x4000000000000000]);
    const MODULUS_STR: &'static str = "40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001";
}

pub mod pallas {
    use super::*;
    pub const B: Fp<FpPallas, 4> = Fp::from_mont(BigInt::new([0xa1a55e68ffffffed, 0x74c2a54b4f4982f3, 0xfffffffffffffffd, 0x3fffffffffffffff]));
    pub const THREE_B: Fp<FpPallas, 4> = Fp::from_mont(BigInt::new([0xb295b960ffffffc5, 0x19babde9db4296a3, 0xfffffffffffffff8, 0x3fffffffffffffff]));
    pub const GEN_X: Fp<FpPallas, 4> = Fp::from_mont(BigInt::new([0x64b4c3b400000004, 0x891a63f02533e46e, 0x0000000000000000, 0x0000000000000000]));
    pub const GEN_Y: Fp<FpPallas, 4> = Fp::from_mont(BigInt::new([0xcfc3a984fffffff9, 0x1011d11bbee5303e, 0xffffffffffffffff, 0x3fffffffffffffff]));
    pub const COFACTOR: &[u64] = &[0x0000000000000001];
}

pub mod vesta {
    use super::*;
    pub const B: Fp<FpVesta, 4> = Fp::from_mont(BigInt::new([0x96bc8c8cffffffed, 0x74c2a54b49f7778e, 0xfffffffffffffffd, 0x3fffffffffffffff]));
    pub const THREE_B: Fp<FpVesta, 4> = Fp::from_mont(BigInt::new([0xaba7cf64ffffffc5, 0x19babde9cabd14f0, 0xfffffffffffffff8, 0x3fffffffffffffff]));
    pub const GEN_X: Fp<FpVesta, 4> = Fp::from_mont(BigInt::new([0x311bac8400000004, 0x891a63f02652a376, 0x0000000000000000, 0x0000000000000000]));
    pub const GEN_Y: Fp<FpVesta, 4> = Fp::from_mont(BigInt::new([0x2a0f9218fffffff9, 0x1011d11bbcef61f1, 0xffffffffffffffff, 0x3fffffffffffffff]));
    pub const COFACTOR: &[u64] = &[0x0000000000000001];
}
