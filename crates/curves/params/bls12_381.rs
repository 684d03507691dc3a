//! BLS12-381 parameter tables.
//!
//! Constants are generated offline from the curve definition and stored in
//! Montgomery form; do not edit by hand.

#![allow(clippy::large_const_arrays)]

use pairex_math::bigint::BigInt;
use pairex_math::field::FieldArith;
use pairex_math::fp::{Fp, FpParams};
use pairex_math::tower::{Fp2, TowerParams};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBls381;

impl FpParams<6> for FpBls381 {
    const MODULUS: BigInt<6> = BigInt::new([0xb9feffffffffaaab, 0x1eabfffeb153ffff, 0x6730d2a0f6b0f624, 0x64774b84f38512bf, 0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a]);
    const R: BigInt<6> = BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]);
    const R2: BigInt<6> = BigInt::new([0xf4df1f341c341746, 0x0a76e6a609d104f1, 0x8de5476c4c95b6d5, 0x67eb88a9939d83c0, 0x9a793e85b519952d, 0x11988fe592cae3aa]);
    const INV: u64 = 0x89f3fffcfffcfffd;
    const NUM_BITS: u32 = 381;
    const TWO_ADICITY: u32 = 1;
    const T_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt::new([0xee7fbfffffffeaaa, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89, 0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6]);
    const ROOT_OF_UNITY: BigInt<6> = BigInt::new([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]);
    const MODULUS_IS_3_MOD_4: bool = true;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<6> = BigInt::new([0xee7fbfffffffeaab, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89, 0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6]);
    const MODULUS_MINUS_TWO: BigInt<6> = BigInt::new([0xb9feffffffffaaa9, 0x1eabfffeb153ffff, 0x6730d2a0f6b0f624, 0x64774b84f38512bf, 0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a]);
    const MODULUS_STR: &'static str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrBls381;

impl FpParams<4> for FrBls381 {
    const MODULUS: BigInt<4> = BigInt::new([0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const R: BigInt<4> = BigInt::new([0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f]);
    const R2: BigInt<4> = BigInt::new([0xc999e990f3f29c6d, 0x2b6cedcb87925c23, 0x05d314967254398f, 0x0748d9d99f59ff11]);
    const INV: u64 = 0xfffffffeffffffff;
    const NUM_BITS: u32 = 255;
    const TWO_ADICITY: u32 = 32;
    const T_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt::new([0x7fff2dff7fffffff, 0x04d0ec02a9ded201, 0x94cebea4199cec04, 0x0000000039f6d3a9]);
    const ROOT_OF_UNITY: BigInt<4> = BigInt::new([0x9cab6d5c0c17f47c, 0x1ce1e93dfd4b71e5, 0x0d6db230471dd505, 0x3f0ee990743a3b6a]);
    const MODULUS_IS_3_MOD_4: bool = false;
    const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MODULUS_MINUS_TWO: BigInt<4> = BigInt::new([0xfffffffeffffffff, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const MODULUS_STR: &'static str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";
}

impl TowerParams<6> for FpBls381 {
    const XI: Fp2<Self, 6> = Fp2::new(Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])), Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])));
    const THREE_INV: Fp<Self, 6> = Fp::from_mont(BigInt::new([0x4e02555555561c71, 0x0dc400030ce6aaab, 0xb9e369ddc0631701, 0xc03efa7472742996, 0xa614ce0162fa175e, 0x18a82b8824803b42]));
    const FROBENIUS_C1: [Fp2<Self, 6>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x07089552b319d465, 0xc6695f92b50a8313, 0x97e83cccd117228f, 0xa35baecab2dc29ee, 0x1ce393ea5daace4d, 0x08f2220fb0fb66eb])), Fp::from_mont(BigInt::new([0xb2f66aad4ce5d646, 0x5842a06bfc497cec, 0xcf4895d42599d394, 0xc11b9cba40a8e8d0, 0x2e3813cbe5a0de89, 0x110eefda88847faf]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])), Fp::from_mont(BigInt::new([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2])), Fp::from_mont(BigInt::new([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x82d83cf50dbce43f, 0xa2813e53df9d018f, 0xc6f0caa53c65e181, 0x7525cf528d50fe95, 0x4a85ed50f4798a6b, 0x171da0fd6cf8eebd])), Fp::from_mont(BigInt::new([0x3726c30af242c66c, 0x7c2ac1aad1b6fe70, 0xa04007fbba4b14a2, 0xef517c3266341429, 0x0095ba654ed2226b, 0x02e370eccc86f7dd]))),
    ];
    const FROBENIUS_C2: [Fp2<Self, 6>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xecfb361b798dba3a, 0xc100ddb891865a2c, 0x0ec08ff1232bda8e, 0xd5c13cc6f1ca4721, 0x47222a47bf7b5c04, 0x0110f184e51c5f59])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
    ];
    const FROBENIUS_C3: [Fp2<Self, 6>; 6] = [
        Fp2::new(Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8])), Fp::from_mont(BigInt::new([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])), Fp::from_mont(BigInt::new([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8])), Fp::from_mont(BigInt::new([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])), Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]))),
        Fp2::new(Fp::from_mont(BigInt::new([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2])), Fp::from_mont(BigInt::new([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]))),
    ];
    fn mul_by_xi(a: &Fp2<Self, 6>) -> Fp2<Self, 6> {
        Fp2::new(a.c0 - a.c1, a.c0 + a.c1)
    }
}

/// Family parameter `x`; the curve is BLS12_381.
pub const PARAM_X: u64 = 0xd201000000010000;
pub const PARAM_X_IS_NEG: bool = true;

pub mod g1 {
    use super::*;
    pub const B: Fp<FpBls381, 6> = Fp::from_mont(BigInt::new([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e]));
    pub const THREE_B: Fp<FpBls381, 6> = Fp::from_mont(BigInt::new([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1]));
    pub const GEN_X: Fp<FpBls381, 6> = Fp::from_mont(BigInt::new([0x5cb38790fd530c16, 0x7817fc679976fff5, 0x154f95c7143ba1c1, 0xf0ae6acdf3d0e747, 0xedce6ecc21dbf440, 0x120177419e0bfb75]));
    pub const GEN_Y: Fp<FpBls381, 6> = Fp::from_mont(BigInt::new([0xbaac93d50ce72271, 0x8c22631a7918fd8e, 0xdd595f13570725ce, 0x51ac582950405194, 0x0e1c8c3fad0059c0, 0x0bbc3efc5008a26a]));
    pub const BETA: Fp<FpBls381, 6> = Fp::from_mont(BigInt::new([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160]));
    pub const LAMBDA: BigInt<4> = BigInt::new([0xfffffffe00000001, 0xa7780001fffcb7fc, 0x3339d80809a1d804, 0x73eda753299d7d48]);
    /// Short lattice basis for the GLV decomposition: rows (a, b)
    /// with a + b·λ ≡ 0 (mod r); stored as (|a|, neg?, |b|, neg?).
    pub const GLV_BASIS: [(u128, bool, u128, bool); 2] = [
        (0x1, false, 0xac45a4010001a40200000000ffffffff, true),
        (0xac45a4010001a4020000000100000000, false, 0x1, false),
    ];
    pub const COFACTOR: &[u64] = &[0x8c00aaab0000aaab, 0x396c8c005555e156];
    pub const H_EFF: &[u64] = &[0xd201000000010001];
}

pub mod g2 {
    use super::*;
    pub const B: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e])), Fp::from_mont(BigInt::new([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e])));
    pub const THREE_B: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1])), Fp::from_mont(BigInt::new([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1])));
    pub const GEN_X: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0xf5f28fa202940a10, 0xb3f5fb2687b4961a, 0xa1a893b53e2ae580, 0x9894999d1a3caee9, 0x6f67b7631863366b, 0x058191924350bcd7])), Fp::from_mont(BigInt::new([0xa5a9c0759e23f606, 0xaaa0c59dbccd60c3, 0x3bb17e18e2867806, 0x1b1ab6cc8541b367, 0xc2b6ed0ef2158547, 0x11922a097360edf3])));
    pub const GEN_Y: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0x4c730af860494c4a, 0x597cfa1f5e369c5a, 0xe7e6856caa0a635a, 0xbbefb5e96e0d495f, 0x07d3a975f0ef25a2, 0x0083fd8e7e80dae5])), Fp::from_mont(BigInt::new([0xadc0fc92df64b05d, 0x18aa270a2b1461dc, 0x86adac6a3be4eba0, 0x79495c4ec93da33a, 0xe7175850a43ccaed, 0x0b2bc2a163de1bf2])));
    /// Untwist-Frobenius-twist endomorphism coefficients:
    /// ψ(x, y) = (x̄·PSI_X, ȳ·PSI_Y).
    pub const PSI_X: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])), Fp::from_mont(BigInt::new([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a])));
    pub const PSI_Y: Fp2<FpBls381, 6> = Fp2::new(Fp::from_mont(BigInt::new([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8])), Fp::from_mont(BigInt::new([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2])));
    pub const COFACTOR: &[u64] = &[0xcf1c38e31c7238e5, 0x1616ec6e786f0c70, 0x21537e293a6691ae, 0xa628f1cb4d9e82ef, 0xa68a205b2e5a7ddf, 0xcd91de4547085aba, 0x091d50792876a202, 0x05d543a95414e7f1];
    pub const H_EFF: &[u64] = &[0xe8020005aaa95551, 0x59894c0adebbf6b4, 0xe954cbc06689f6a3, 0x2ec0ec69d7477c1a, 0x6d82bf015d1212b0, 0x329c2f178731db95, 0x9986ff031508ffe1, 0x88e2a8e9145ad768, 0x584c6a0ea91b3528, 0x0bc69f08f2ee75b3];
}
