//! Reference vectors computed with an independent implementation of the
//! same pairing construction.

use hex_literal::hex;
use pairex_math::fp::Fp;
use pairex_math::tower::{Fp2, Fp12};

fn limbs_from_be(bytes: &[u8]) -> Vec<u64> {
    let mut out = vec![0u64; bytes.len().div_ceil(8)];
    for (i, b) in bytes.iter().rev().enumerate() {
        out[i / 8] |= (*b as u64) << (8 * (i % 8));
    }
    out
}
use pairex_curves::fields::Fr381;
use pairex_curves::params::bls12_381::FpBls381;
use pairex_pairing::bls12_381::{G1Affine, G2Affine, Gt381, pairing};

type Fq12 = pairex_pairing::bls12_381::Fq12;

fn scalar_from_be(bytes: &[u8]) -> Fr381 {
    Fr381::from_be_bytes_mod_order(bytes)
}

fn fq12_from_hex(coeffs: [&[u8]; 12]) -> Fq12 {
    let fe = |b: &[u8]| {
        Option::<Fp<FpBls381, 6>>::from(Fp::from_be_bytes(b)).expect("canonical")
    };
    let mut z = [Fp2::ZERO; 6];
    for (i, slot) in z.iter_mut().enumerate() {
        *slot = Fp2::new(fe(coeffs[2 * i]), fe(coeffs[2 * i + 1]));
    }
    Fp12::from_coeffs(z)
}

fn expected_pairing_g1_g2() -> Fq12 {
    fq12_from_hex([
        &hex!("1250ebd871fc0a92a7b2d83168d0d727272d441befa15c503dd8e90ce98db3e7b6d194f60839c508a84305aaca1789b6"),
        &hex!("089a1c5b46e5110b86750ec6a532348868a84045483c92b7af5af689452eafabf1a8943e50439f1d59882a98eaa0170f"),
        &hex!("19f26337d205fb469cd6bd15c3d5a04dc88784fbb3d0b2dbdea54d43b2b73f2cbb12d58386a8703e0f948226e47ee89d"),
        &hex!("06fba23eb7c5af0d9f80940ca771b6ffd5857baaf222eb95a7d2809d61bfe02e1bfd1b68ff02f0b8102ae1c2d5d5ab1a"),
        &hex!("1368bb445c7c2d209703f239689ce34c0378a68e72a6b3b216da0e22a5031b54ddff57309396b38c881c4c849ec23e87"),
        &hex!("193502b86edb8857c273fa075a50512937e0794e1e65a7617c90d8bd66065b1fffe51d7a579973b1315021ec3c19934f"),
        &hex!("11b8b424cd48bf38fcef68083b0b0ec5c81a93b330ee1a677d0d15ff7b984e8978ef48881e32fac91b93b47333e2ba57"),
        &hex!("03350f55a7aefcd3c31b4fcb6ce5771cc6a0e9786ab5973320c806ad360829107ba810c5a09ffdd9be2291a0c25a99a2"),
        &hex!("01b2f522473d171391125ba84dc4007cfbf2f8da752f7c74185203fcca589ac719c34dffbbaad8431dad1c1fb597aaa5"),
        &hex!("018107154f25a764bd3c79937a45b84546da634b8f6be14a8061e55cceba478b23f7dacaa35c8ca78beae9624045b4b6"),
        &hex!("04c581234d086a9902249b64728ffd21a189e87935a954051c7cdba7b3872629a4fafc05066245cb9108f0242d0fe3ef"),
        &hex!("0f41e58663bf08cf068672cbd01a7ec73baca4d72ca93544deff686bfd6df543d48eaa24afe47e1efde449383b676631"),
    ])
}

#[test]
fn pairing_of_generators_matches_reference() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert_eq!(e.0, expected_pairing_g1_g2());
}

#[test]
fn gt_exponentiation_matches_reference() {
    let e = Gt381::generator();
    let k = &hex!("123456789abcdef0fedcba9876543210");
    let expected = fq12_from_hex([
        &hex!("11888cca68434d4f6935aae2320527e5a69f350cfcefddb3d810f10e930c3cdbba264ef1fc549b27dcb979f93ae358f8"),
        &hex!("05f4a1deb3e5886ab2b6c9d7889bf1407f3eecb3d2180af10d4241367c8787358128b60faac533dc1c8fb1cf73b82356"),
        &hex!("180ec259950f841bf451906a7cd3265ba9693eb17e9c2f7f74e42db4bd1e6f9eb99a2dda278685d8642ecaf70789dca3"),
        &hex!("092dcb88da246ff1f9f889d006fbb5dc96f2b45a57bcb1fde407ee61ceec52725e1e09d5a8b75fc52a65e7b1273984e9"),
        &hex!("124b867fed52db84b906a9f6972c8e0367976267d083d41f2f5d381461523d5f9e7379ae71ecc4011d033f78c6730351"),
        &hex!("0f0a24852e1cd13983a2587fdcd9f95fedd6d481732b81032d86742a30732f557b823fea1b02d8627fb77ae1daebed50"),
        &hex!("16baf87a17d2f277ece6544efdfdd73c5fc14ba29c2bf900cc57053ebd29af534d572893967f355046ecabb2a57c8991"),
        &hex!("0f15757842aa54e06c5b96a21b9e5cb63663ced6d96c7c1453a0bf8f547aeb8f85f25e8720c947b0419f6c463ba28ce2"),
        &hex!("0f9ec3c73311450ed4baf6e74a87474206696b099dcb0a00285f7034ffe199daad6f909065f719b0f7de97f3a6fc74d2"),
        &hex!("18a339a2e26b9863cd77b31d839e21718949724f2b10eb2f234345b5b0d126cde256d30ea73d31a049a4a292dc163325"),
        &hex!("0e2c97e3b968790b346b46ac3921f7e58a9e33b6225ae8eae90780f6809b9d71b4532f7fd60c66980cdad764d57a99c6"),
        &hex!("108b3d7477ae43022678a556b3321adfb034ce9303e228ac5fa2b013cab6ce4db5707a6ccc0957686d5e11e789f7f03a"),
    ]);
    // the same value through every exponentiation dialect
    let limbs = limbs_from_be(k);
    assert_eq!(e.exp_sqrmul_vartime(&limbs).0, expected);
    assert_eq!(e.exp_jy00_vartime(&limbs).0, expected);
    assert_eq!(e.exp_wnaf_vartime(&limbs).0, expected);
    let scalar = scalar_from_be(k);
    assert_eq!(e.exp(&scalar).0, expected);
    assert_eq!(e.exp_endo(&scalar).0, expected);
}
