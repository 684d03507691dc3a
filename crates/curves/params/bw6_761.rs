//! BW6-761 parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

use pairex_math::bigint::BigInt;
use pairex_math::fp::{Fp, FpParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBw6761;

impl FpParams<12> for FpBw6761 {
    const MODULUS: BigInt<12> = BigInt::new([0xf49d00000000008b, 0xe6913e6870000082, 0x160cf8aeeaf0a437, 0x98a116c25667a8f8, 0x71dcd3dc73ebff2e, 0x8689c8ed12f9fd90, 0x03cebaff25b42304, 0x707ba638e584e919, 0x528275ef8087be41, 0xb926186a81d14688, 0xd187c94004faff3e, 0x0122e824fb83ce0a]);
    const R: BigInt<12> = BigInt::new([0x0202ffffffff85d5, 0x5a5826358fff8ce7, 0x9e996e43827faade, 0xda6aff320ee47df4, 0xece9cb3e1d94b80b, 0xc0e667a25248240b, 0xa74da5bfdcad3905, 0x2352e7fe462f2103, 0x7b56588008b1c87c, 0x45848a63e711022f, 0xd7a81ebb9f65a9df, 0x0051f77ef127e87d]);
    const R2: BigInt<12> = BigInt::new([0xc686392d2d1fa659, 0x7b14c9b2f79484ab, 0x7fa1e825c1d2b459, 0xd6ec28f848329d88, 0x4afb427b73a1ed40, 0x972c69400d5930ae, 0x2c7a26bf8c995976, 0xac52e458c6e57af9, 0xac731bfa0c536dfe, 0x121e5c630b103f50, 0x8f1b0953b886cda4, 0x00ad253c2da8d807]);
    const INV: u64 = 0x0a5593568fa798dd;
    const NUM_BITS: u32 = 761;
    const TWO_ADICITY: u32 = 1;
    const T_MINUS_ONE_DIV_TWO: BigInt<12> = BigInt::new([0xbd27400000000022, 0xf9a44f9a1c000020, 0x05833e2bbabc290d, 0xa62845b09599ea3e, 0x1c7734f71cfaffcb, 0x21a2723b44be7f64, 0x40f3aebfc96d08c1, 0x5c1ee98e39613a46, 0x14a09d7be021ef90, 0xae49861aa07451a2, 0xb461f250013ebfcf, 0x0048ba093ee0f382]);
    const ROOT_OF_UNITY: BigInt<12> = BigInt::new([0xf29a000000007ab6, 0x8c391832e000739b, 0x77738a6b6870f959, 0xbe36179047832b03, 0x84f3089e56574722, 0xc5a3614ac0b1d984, 0x5c81153f4906e9fe, 0x4d28be3a9f55c815, 0xd72c1d6f77d5f5c5, 0x73a18e069ac04458, 0xf9dfaa846595555f, 0x00d0f0a60a5be58c]);
    const MODULUS_IS_3_MOD_4: bool = true;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<12> = BigInt::new([0xbd27400000000023, 0xf9a44f9a1c000020, 0x05833e2bbabc290d, 0xa62845b09599ea3e, 0x1c7734f71cfaffcb, 0x21a2723b44be7f64, 0x40f3aebfc96d08c1, 0x5c1ee98e39613a46, 0x14a09d7be021ef90, 0xae49861aa07451a2, 0xb461f250013ebfcf, 0x0048ba093ee0f382]);
    const MODULUS_MINUS_TWO: BigInt<12> = BigInt::new([0xf49d000000000089, 0xe6913e6870000082, 0x160cf8aeeaf0a437, 0x98a116c25667a8f8, 0x71dcd3dc73ebff2e, 0x8689c8ed12f9fd90, 0x03cebaff25b42304, 0x707ba638e584e919, 0x528275ef8087be41, 0xb926186a81d14688, 0xd187c94004faff3e, 0x0122e824fb83ce0a]);
    const MODULUS_STR: &'static str = "122e824fb83ce0ad187c94004faff3eb926186a81d14688528275ef8087be41707ba638e584e91903cebaff25b423048689c8ed12f9fd9071dcd3dc73ebff2e98a116c25667a8f8160cf8aeeaf0a437e6913e6870000082f49d00000000008b";
}

pub mod g1 {
    use super::*;
    pub const B: Fp<FpBw6761, 12> = Fp::from_mont(BigInt::new([0xf29a000000007ab6, 0x8c391832e000739b, 0x77738a6b6870f959, 0xbe36179047832b03, 0x84f3089e56574722, 0xc5a3614ac0b1d984, 0x5c81153f4906e9fe, 0x4d28be3a9f55c815, 0xd72c1d6f77d5f5c5, 0x73a18e069ac04458, 0xf9dfaa846595555f, 0x00d0f0a60a5be58c]));
    pub const THREE_B: Fp<FpBw6761, 12> = Fp::from_mont(BigInt::new([0xee94000000016f0c, 0xd788cbc7c00159cd, 0x3a40ade46371a39c, 0x0960192c29ba2f1a, 0xab1f72221b2dd70b, 0x43d692061c21916c, 0x0de5c9bf8fac77f3, 0x0682ee3e12f7860e, 0xe07f6c6f667264cd, 0xe898793ecc9e3ff9, 0x4a8f6d0d26ca01a0, 0x002d01a8280c1491]));
    pub const GEN_X: Fp<FpBw6761, 12> = Fp::from_mont(BigInt::new([0x851a1c1166ae2603, 0xeea72e25492571be, 0xa6f20c75f7feab02, 0xeeea8a1b066c47a4, 0x6469c9e9402afc4f, 0x4cd9755dfe95e5ba, 0x3a1be33544ef7b02, 0x1e7fe0555536b119, 0xfd947c7fee73da05, 0xcffde31744f837a0, 0xa7b583036935c864, 0x009918c73dcc124a]));
    pub const GEN_Y: Fp<FpBw6761, 12> = Fp::from_mont(BigInt::new([0xa3c13889f58ed694, 0xee5cb8acda0ea650, 0xcea7c1807dfc6e02, 0xdc672db2da00df5d, 0xcde53070a22b574d, 0x4f3dc271f97fe60b, 0xd5a2d25bb5f4cc8c, 0xd68088f33580a980, 0x760b0d826b393143, 0xe54149ee3970878e, 0xc62f69887a0e0ed1, 0x0030ceaa8cbab39d]));
    pub const COFACTOR: &[u64] = &[0x3de580000000007c, 0x832ba4061000003b, 0xc61c554757551c0c, 0xc856a0853c9db94c, 0x2c77d5ac34cb12ef, 0xad1972339049ce76];
}
