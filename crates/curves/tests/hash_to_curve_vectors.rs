//! RFC 9380 suite vectors (G1) and reference vectors for the G2 suite,
//! all under the QUUX test DSTs.

use hex_literal::hex;
use pairex_curves::hash_to_curve::{hash_to_g1_bls12_381, hash_to_g2_bls12_381};
use pairex_curves::instances::{Bls12381G1, Bls12381G2};
use pairex_curves::curve::SwCurve;
use subtle::ConstantTimeEq;

fn check_g1(msg: &[u8], x: &[u8], y: &[u8]) {
    let p = hash_to_g1_bls12_381(msg, b"QUUX-V01-CS02-with-BLS12381G1_XMD:SHA-256_SSWU_RO_");
    let mut xb = [0u8; 48];
    let mut yb = [0u8; 48];
    p.x.to_be_bytes(&mut xb);
    p.y.to_be_bytes(&mut yb);
    assert_eq!(&xb[..], x, "x coordinate");
    assert_eq!(&yb[..], y, "y coordinate");
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from(Bls12381G1::is_in_subgroup(&p)));
}

#[test]
fn g1_suite_msg_empty() {
    check_g1(b"", &hex!("052926add2207b76ca4fa57a8734416c8dc95e24501772c814278700eed6d1e4e8cf62d9c09db0fac349612b759e79a1"), &hex!("08ba738453bfed09cb546dbb0783dbb3a5f1f566ed67bb6be0e8c67e2e81a4cc68ee29813bb7994998f3eae0c9c6a265"));
}

#[test]
fn g1_suite_msg_abc() {
    check_g1(b"abc", &hex!("03567bc5ef9c690c2ab2ecdf6a96ef1c139cc0b2f284dca0a9a7943388a49a3aee664ba5379a7655d3c68900be2f6903"), &hex!("0b9c15f3fe6e5cf4211f346271d7b01c8f3b28be689c8429c85b67af215533311f0b8dfaaa154fa6b88176c229f2885d"));
}

#[test]
fn g1_suite_msg_abcdef_long() {
    check_g1(b"abcdef0123456789", &hex!("11e0b079dea29a68f0383ee94fed1b940995272407e3bb916bbf268c263ddd57a6a27200a784cbc248e84f357ce82d98"), &hex!("03a87ae2caf14e8ee52e51fa2ed8eefe80f02457004ba4d486d6aa1f517c0889501dc7413753f9599b099ebcbbd2d709"));
}

fn check_g2(msg: &[u8], xc0: &[u8], xc1: &[u8], yc0: &[u8], yc1: &[u8]) {
    let p = hash_to_g2_bls12_381(msg, b"QUUX-V01-CS02-with-BLS12381G2_XMD:SHA-256_SSWU_RO_");
    let mut buf = [0u8; 48];
    p.x.c0.to_be_bytes(&mut buf);
    assert_eq!(&buf[..], xc0, "x.c0");
    p.x.c1.to_be_bytes(&mut buf);
    assert_eq!(&buf[..], xc1, "x.c1");
    p.y.c0.to_be_bytes(&mut buf);
    assert_eq!(&buf[..], yc0, "y.c0");
    p.y.c1.to_be_bytes(&mut buf);
    assert_eq!(&buf[..], yc1, "y.c1");
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from(Bls12381G2::is_in_subgroup(&p)));
}

#[test]
fn g2_suite_msg_empty() {
    check_g2(b"", &hex!("0141ebfbdca40eb85b87142e130ab689c673cf60f1a3e98d69335266f30d9b8d4ac44c1038e9dcdd5393faf5c41fb78a"), &hex!("05cb8437535e20ecffaef7752baddf98034139c38452458baeefab379ba13dff5bf5dd71b72418717047f5b0f37da03d"), &hex!("14fd7fccba15d419eca913aaad0f9fe41d5ad05aa13bc1f54dd3c19ac7c99763a7d10d29f51e73b4a0f2f367f9afcd19"), &hex!("07bec727141e9d5b0b37e555d2c19a1f9e5663c6f37b7828190b34c47991928e5ae3ee30dfb4e171fac061302344f1d5"));
}

#[test]
fn g2_suite_msg_abc() {
    check_g2(b"abc", &hex!("02c2d18e033b960562aae3cab37a27ce00d80ccd5ba4b7fe0e7a210245129dbec7780ccc7954725f4168aff2787776e6"), &hex!("139cddbccdc5e91b9623efd38c49f81a6f83f175e80b06fc374de9eb4b41dfe4ca3a230ed250fbe3a2acf73a41177fd8"), &hex!("0279df6ed16a4f83a7a7671df0e1dd7f18ac2d22d64aa0bca8c23244a9b2d1d9339289bc5bf9f9b9be77408b994cf063"), &hex!("1956ac0f55b70f677a0cda89f2530b1c7177360bfc68a97163aa6401b9674a0601c4f22566e0cacac8f82b313f11cd95"));
}

#[test]
fn same_input_same_point_different_dst_different_point() {
    let a = hash_to_g1_bls12_381(b"msg", b"dst-one");
    let b = hash_to_g1_bls12_381(b"msg", b"dst-one");
    let c = hash_to_g1_bls12_381(b"msg", b"dst-two");
    assert_eq!(a, b);
    assert!(!bool::from(a.ct_eq(&c)));
}
