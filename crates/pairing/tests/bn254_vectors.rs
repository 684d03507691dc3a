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
use pairex_curves::fields::Fr254;
use pairex_curves::params::bn254::FpBn254;
use pairex_pairing::bn254::{G1Affine, G2Affine, Gt254, pairing};

type Fq12 = pairex_pairing::bn254::Fq12;

fn scalar_from_be(bytes: &[u8]) -> Fr254 {
    Fr254::from_be_bytes_mod_order(bytes)
}

fn fq12_from_hex(coeffs: [&[u8]; 12]) -> Fq12 {
    let fe = |b: &[u8]| {
        Option::<Fp<FpBn254, 4>>::from(Fp::from_be_bytes(b)).expect("canonical")
    };
    let mut z = [Fp2::ZERO; 6];
    for (i, slot) in z.iter_mut().enumerate() {
        *slot = Fp2::new(fe(coeffs[2 * i]), fe(coeffs[2 * i + 1]));
    }
    Fp12::from_coeffs(z)
}

fn expected_pairing_g1_g2() -> Fq12 {
    fq12_from_hex([
        &hex!("12c70e90e12b7874510cd1707e8856f71bf7f61d72631e268fca81000db9a1f5"),
        &hex!("084f330485b09e866bc2f2ea2b897394deaf3f12aa31f28cb0552990967d4704"),
        &hex!("2c53748bcd21a7c038fb30ddc8ac3bf0af25d7859cfbc12c30c866276c565909"),
        &hex!("27ed208e7a0b55ae6e710bbfbd2fd922669c026360e37cc5b2ab862411536104"),
        &hex!("0e841c2ac18a4003ac9326b9558380e0bc27fdd375e3605f96b819a358d34bde"),
        &hex!("2067586885c3318eeffa1938c754fe3c60224ee5ae15e66af6b5104c47c8c5d8"),
        &hex!("1ad9db1937fd72f4ac462173d31d3d6117411fa48dba8d499d762b47edb3b54a"),
        &hex!("279db296f9d479292532c7c493d8e0722b6efae42158387564889c79fc038ee3"),
        &hex!("01676555de427abc409c4a394bc5426886302996919d4bf4bdd02236e14b3636"),
        &hex!("2b03614464f04dd772d86df88674c270ffc8747ea13e72da95e3594468f222c4"),
        &hex!("0dc26f240656bbe2029bd441d77c221f0ba4c70c94b29b5f17f0f6d08745a069"),
        &hex!("108c19d15f9446f744d0f110405d3856d6cc3bda6c4d537663729f5257628417"),
    ])
}

#[test]
fn pairing_of_generators_matches_reference() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert_eq!(e.0, expected_pairing_g1_g2());
}

#[test]
fn gt_exponentiation_matches_reference() {
    let e = Gt254::generator();
    let k = &hex!("123456789abcdef0fedcba9876543210");
    let expected = fq12_from_hex([
        &hex!("1bb88b00ef5aac5140bc4964c49182fc3972f9571165d71004db4f6c5c90fcbc"),
        &hex!("299829390bf060766e84278f46a30d75f959cb0db94248e1f7287a171356b3cd"),
        &hex!("27a444af8c26beae6c7214fcbdd52d28f31acdcf42eea24eae7a256e6e02472d"),
        &hex!("12666d69253ebec241bbef95b1fff6db5963488bc89d8ace20c9c97f40fdf506"),
        &hex!("1529efff0aca220de3b60ff8bc32457ac6f24830c031447829c93a41dc6efdef"),
        &hex!("16781a1b623fb852a2f9fd02d91b898c9fe19a5630d220b4ea08697308a24e30"),
        &hex!("24861f11a154d9b2a76fdbd56b846366f87a4b532ecbf20f78bd04be2267b191"),
        &hex!("048dddb0cf937f538ee2fe2a386bff6351977a0b4aba0543fda6200f9a006cd8"),
        &hex!("0b4be135e004ecbe631088e1d36dfcb63994505000fdf5b4f3614e5990a71586"),
        &hex!("0f6cc9fff74efa1174129e517c56c3fabdca3c9d84b4d9edad2968d09c8abb81"),
        &hex!("003e05af2e8c9909cd3b5ac8a127550c37f21df139df8b9af20ea9a3e1cec483"),
        &hex!("2e06b2bc1f80d9262d594c5027b7ac9f54dec6ad1e0737927fee9d7c8b11e2c3"),
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
