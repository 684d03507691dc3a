//! BN254-Snarks parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

#![allow(clippy::large_const_arrays)]

use pairex_math::bigint::BigInt;
use pairex_math::field::FieldArith;
use pairex_math::fp::{Fp, FpParams};
use pairex_math::tower::{Fp2, TowerParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBn254;

impl FpParams<4> for FpBn254 {
    const MODULUS: BigInt<4> = BigInt::new([0x3c208c16d87cfd47, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029]);
    const R: BigInt<4> = BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]);
    const R2: BigInt<4> = BigInt::new([0xf32cfc5b538afa89, 0xb5e71911d44501fb, 0x47ab1eff0a417ff6, 0x06d89f71cab8351f]);
    const INV: u64 = 0x87d20782e4866389;
    const NUM_BITS: u32 = 254;
    const TWO_ADICITY: u32 = 1;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x4f082305b61f3f51, 0x65e05aa45a1c72a3, 0x6e14116da0605617, 0x0c19139cb84c680a]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]);
    const MODULUS_IS_3_MOD_4: bool = true;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x4f082305b61f3f52, 0x65e05aa45a1c72a3, 0x6e14116da0605617, 0x0c19139cb84c680a]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x3c208c16d87cfd45, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029]);
    const MODULUS_STR: &'static str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrBn254;

impl FpParams<4> for FrBn254 {
    const MODULUS: BigInt<4> = BigInt::new([0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
    const R: BigInt<4> = BigInt::new([0xac96341c4ffffffb, 0x36fc76959f60cd29, 0x666ea36f7879462e, 0x0e0a77c19a07df2f]);
    const R2: BigInt<4> = BigInt::new([0x1bb8e645ae216da7, 0x53fe3ab1e35c59e3, 0x8c49833d53bb8085, 0x0216d0b17f4e44a5]);
    const INV: u64 = 0xc2e1f593efffffff;
    const NUM_BITS: u32 = 254;
    const TWO_ADICITY: u32 = 28;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0xcdcb848a1f0fac9f, 0x0c0ac2e9419f4243, 0x098d014dc2822db4, 0x0000000183227397]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x636e735580d13d9c, 0xa22bf3742445ffd6, 0x56452ac01eb203d8, 0x1860ef942963f9e7]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0x43e1f593efffffff, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
    const MODULUS_STR: &'static str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
}

impl TowerParams<4> for FpBn254 {
    const XI: Fp2<Self, 4> = Fp2::new(Fp::from_mont(BigInt::new([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857])), Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])));
    const THREE_INV: Fp<Self, 4> = Fp::from_mont(BigInt::new([0xafd49a8c34aeae4c, 0xe0a8c73e1f684743, 0xb4ea4db753538a2d, 0x14cf9766d3bdd51d]));
    const FROBENIUS_C1: [Fp2<Self, 4>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c])), Fp::from_mont(BigInt::new([0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec])), Fp::from_mont(BigInt::new([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd])), Fp::from_mont(BigInt::new([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec])), Fp::from_mont(BigInt::new([0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xc970692f41690fe7, 0xe240342127694b0b, 0x32bee66b83c459e8, 0x12aabced0ab08841])), Fp::from_mont(BigInt::new([0x0d485d2340aebfa9, 0x05193418ab2fcc57, 0xd3b0a40b8a4910f5, 0x2f21ebb535d2925a]))),
    ];
    const FROBENIUS_C2: [Fp2<Self, 4>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
    ];
    const FROBENIUS_C3: [Fp2<Self, 4>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23])), Fp::from_mont(BigInt::new([0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82])), Fp::from_mont(BigInt::new([0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0x0a46036d4417cc55]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x5764af0aaf46471e, 0xdc50792e873e0fc1, 0x86a673ff881d04f6, 0x0b2eddb43c30a74c])), Fp::from_mont(BigInt::new([0x9a490f32787e8580, 0x8fd16d7ff04af8b1, 0x4b39888ec6027bf2, 0x03dd2e705b52a15d]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x06b03d4d3476ec58])), Fp::from_mont(BigInt::new([0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xe0bc4b2275cf559f, 0xc238b945c154e60f, 0x803982a5929a7d5e, 0x15ce052df7e4a37e])), Fp::from_mont(BigInt::new([0x2d28efbdbf3799a7, 0x9b097e3c1ad60773, 0x982d4113af4a535b, 0x24e18991e3056063]))),
    ];
    fn mul_by_xi(a: &Fp2<Self, 4>) -> Fp2<Self, 4> {
        { let t = a.c0.mul_by_u64(9); let s = a.c1.mul_by_u64(9); Fp2::new(t - a.c1, s + a.c0) }
    }
}

/// Family parameter `x`; the curve is BN254_Snarks.
pub const PARAM_X: u64 = 0x44e992b44a6909f1;
pub const PARAM_X_IS_NEG: bool = false;

pub mod g1 {
    use super::*;
    pub const B: Fp<FpBn254, 4> = Fp::from_mont(BigInt::new([0x7a17caa950ad28d7, 0x1f6ac17ae15521b9, 0x334bea4e696bd284, 0x2a1f6744ce179d8e]));
    pub const THREE_B: Fp<FpBn254, 4> = Fp::from_mont(BigInt::new([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857]));
    pub const GEN_X: Fp<FpBn254, 4> = Fp::from_mont(BigInt::new([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]));
    pub const GEN_Y: Fp<FpBn254, 4> = Fp::from_mont(BigInt::new([0xa6ba871b8b1e1b3a, 0x14f1d651eb8e167b, 0xccdd46def0f28c58, 0x1c14ef83340fbe5e]));
    pub const BETA: Fp<FpBn254, 4> = Fp::from_mont(BigInt::new([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]));
    pub const LAMBDA: BigInt<4> = BigInt::new([0x8b17ea66b99c90dd, 0x5bfc41088d8daaa7, 0xb3c4d79d41a91758, 0x0000000000000000]);
    /// Short lattice basis for the GLV decomposition: rows (a, b)
    /// with a + b·λ ≡ 0 (mod r); stored as (|a|, neg?, |b|, neg?).
    pub const GLV_BASIS: [(u128, bool, u128, bool); 2] = [
        (0x89d3256894d213e3, false, 0x6f4d8248eeb859fc8211bbeb7d4f1128, true),
        (0x6f4d8248eeb859fd0be4e1541221250b, false, 0x89d3256894d213e3, false),
    ];
    pub const COFACTOR: &[u64] = &[0x0000000000000001];
    pub const H_EFF: &[u64] = &[0x0000000000000001];
}

pub mod g2 {
    use super::*;
    pub const B: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0x3bf938e377b802a8, 0x020b1b273633535d, 0x26b7edf049755260, 0x2514c6324384a86d])), Fp::from_mont(BigInt::new([0x38e7ecccd1dcff67, 0x65f0b37d93ce0d3e, 0xd749d0dd22ac00aa, 0x0141b9ce4a688d4d])));
    pub const THREE_B: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0x3baa927cb62e0d6a, 0xd71e7c52d1b664fd, 0x03873e63d95d4664, 0x0e75b5b1082ab8f4])), Fp::from_mont(BigInt::new([0xaab7c6667596fe35, 0x31d21a78bb6a27ba, 0x85dd7297680401ff, 0x03c52d6adf39a7e9])));
    pub const GEN_X: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0x8e83b5d102bc2026, 0xdceb1935497b0172, 0xfbb8264797811adf, 0x19573841af96503b])), Fp::from_mont(BigInt::new([0xafb4737da84c6140, 0x6043dd5a5802d8c4, 0x09e950fc52a02f86, 0x14fef0833aea7b6b])));
    pub const GEN_Y: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0x619dfa9d886be9f6, 0xfe7fd297f59e9b78, 0xff9e1a62231b7dfe, 0x28fd7eebae9e4206])), Fp::from_mont(BigInt::new([0x64095b56c71856ee, 0xdc57f922327d3cbb, 0x55f935be33351076, 0x0da4a0e693fd6482])));
    /// Untwist-Frobenius-twist endomorphism coefficients:
    /// ψ(x, y) = (x̄·PSI_X, ȳ·PSI_Y).
    pub const PSI_X: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec])), Fp::from_mont(BigInt::new([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3])));
    pub const PSI_Y: Fp2<FpBn254, 4> = Fp2::new(Fp::from_mont(BigInt::new([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd])), Fp::from_mont(BigInt::new([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc])));
    pub const COFACTOR: &[u64] = &[0x345f2299c0f9fa8d, 0x06ceecda572a2489, 0xb85045b68181585e, 0x30644e72e131a029];
    pub const H_EFF: &[u64] = &[0x345f2299c0f9fa8d, 0x06ceecda572a2489, 0xb85045b68181585e, 0x30644e72e131a029];
}
