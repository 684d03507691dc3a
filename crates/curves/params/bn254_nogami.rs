//! BN254-Nogami parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::{Fp, FpParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBn254Nogami;

impl FpParams<4> for FpBn254Nogami {
    const MODULUS: BigInt<4> = BigInt::new([0xa700000000000013, 0x6121000000000013, 0xba344d8000000008, 0x2523648240000001]);
    const R: BigInt<4> = BigInt::new([0x15ffffffffffff8e, 0xb939ffffffffff8a, 0xa2c62effffffffcd, 0x212ba4f27ffffff5]);
    const R2: BigInt<4> = BigInt::new([0xb3e886745370473d, 0x55efbf6e8c1cc3f1, 0x281e3a1b7f86954f, 0x1b0a32fdf6403a3d]);
    const INV: u64 = 0x08435e50d79435e5;
    const NUM_BITS: u32 = 254;
    const TWO_ADICITY: u32 = 1;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0xe9c0000000000004, 0x1848400000000004, 0x6e8d136000000002, 0x0948d92090000000]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x9100000000000085, 0xa7e7000000000089, 0x176e1e800000003a, 0x03f7bf8fc000000c]);
    const MODULUS_IS_3_MOD_4: bool = true;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0xe9c0000000000005, 0x1848400000000004, 0x6e8d136000000002, 0x0948d92090000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0xa700000000000011, 0x6121000000000013, 0xba344d8000000008, 0x2523648240000001]);
    const MODULUS_STR: &'static str = "2523648240000001ba344d80000000086121000000000013a700000000000013";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrBn254Nogami;

impl FpParams<4> for FrBn254Nogami {
    const MODULUS: BigInt<4> = BigInt::new([0xa10000000000000d, 0xff9f800000000010, 0xba344d8000000007, 0x2523648240000001]);
    const R: BigInt<4> = BigInt::new([0x39ffffffffffffb2, 0x0242ffffffffff9c, 0xa2c62effffffffd0, 0x212ba4f27ffffff5]);
    const R2: BigInt<4> = BigInt::new([0xdf8596b6f40aa7a1, 0xe0885092e2231ec3, 0xc300765b575d5a78, 0x24e8b3bc325f9035]);
    const INV: u64 = 0xea3b13b13b13b13b;
    const NUM_BITS: u32 = 254;
    const TWO_ADICITY: u32 = 2;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x1420000000000001, 0xfff3f00000000002, 0x374689b000000000, 0x04a46c9048000000]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0xadb6ab563d2b70cf, 0xad5262c01f2d7d3d, 0x73742c8fe03f82bd, 0x125cec68c0000034]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0xa10000000000000b, 0xff9f800000000010, 0xba344d8000000007, 0x2523648240000001]);
    const MODULUS_STR: &'static str = "2523648240000001ba344d8000000007ff9f800000000010a10000000000000d";
}

pub const PARAM_X: u64 = 0x4080000000000001;
pub const PARAM_X_IS_NEG: bool = true;

pub mod g1 {
    use super::*;
    pub const B: Fp<FpBn254Nogami, 4> = Fp::from_mont(BigInt::new([0x84ffffffffffff09, 0x1152ffffffffff00, 0x8b58107fffffff93, 0x1d33e562bfffffe9]));
    pub const THREE_B: Fp<FpBn254Nogami, 4> = Fp::from_mont(BigInt::new([0x40fffffffffffcf5, 0x71b6fffffffffcda, 0x2d9f967ffffffea8, 0x0d54e723bfffffb9]));
    pub const GEN_X: Fp<FpBn254Nogami, 4> = Fp::from_mont(BigInt::new([0x9100000000000085, 0xa7e7000000000089, 0x176e1e800000003a, 0x03f7bf8fc000000c]));
    pub const GEN_Y: Fp<FpBn254Nogami, 4> = Fp::from_mont(BigInt::new([0x15ffffffffffff8e, 0xb939ffffffffff8a, 0xa2c62effffffffcd, 0x212ba4f27ffffff5]));
    pub const COFACTOR: &[u64] = &[0x0000000000000001];
}
