//! Scalar-multiplication reference vectors and dialect-equivalence checks.

use hex_literal::hex;
use pairex_math::fp::Fp;
use pairex_math::tower::Fp2;
use pairex_curves::scalar_mul::{mul, mul_glv, mul_vartime};
use pairex_curves::weierstrass::{Affine, Projective};

#[test]
fn bls12_381_g1_scalar_mul_vector() {
    let k = pairex_curves::fields::Fr381::from_be_bytes_mod_order(&hex!("deadbeef12345678"));
    let g = Projective::<pairex_curves::instances::Bls12381G1>::generator();
    let fe = |b: &[u8]| Option::<Fp<pairex_curves::params::bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(b)).expect("canonical");
    let expected = Affine::<pairex_curves::instances::Bls12381G1> { x: fe(&hex!("1559d8472cd3ce0e5800e2339fd8a3ae80f01345e9a1dc25d04cf3adc855191a19ed27f5b0d5eb14131d1ab9cdb259bf")), y: fe(&hex!("08c351fab7fcffd9a3c21c064d85aa2746e6da9b199aabe99a21b2ece432d0fbf79f63406205d37b9c28c3fae789ba9e")) };
    assert_eq!(mul::<pairex_curves::instances::Bls12381G1>(&g, &k).to_affine(), expected);
    assert_eq!(mul_glv::<pairex_curves::instances::Bls12381G1>(&g, &k).to_affine(), expected);
    assert_eq!(mul_vartime::<pairex_curves::instances::Bls12381G1>(&g.to_affine().to_jacobian(), &k).to_affine(), expected);
}

#[test]
fn bls12_381_g2_scalar_mul_vector() {
    let k = pairex_curves::fields::Fr381::from_be_bytes_mod_order(&hex!("deadbeef12345678"));
    let g = Projective::<pairex_curves::instances::Bls12381G2>::generator();
    let fe = |b: &[u8]| Option::<Fp<pairex_curves::params::bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(b)).expect("canonical");
    let expected = Affine::<pairex_curves::instances::Bls12381G2> {
        x: Fp2::new(fe(&hex!("14ea5c8f53e7dacc631fca2e2907811ab22e1bcf0c015e943c18e3575738f0f45b9ff2e5a7381f886048c474ae863599")), fe(&hex!("13c6779a6b7fe3a8e23e1a444c92a4bd5b491c4cf2cda1a2586f101fc2e498bd4075eca526c7475646581546e821025d"))),
        y: Fp2::new(fe(&hex!("078dddf9e09a502d13c9fd4a101216bd6093ad8d3c04b70c25e4be94c04c57332792b12630b89912ee992cdc5cc02640")), fe(&hex!("09459b1e9fc8bbb99ebfe738614144ad80d455fe3125da6a4a5aa847c07560842a9a35eba28499f8a500744cddc5a041"))),
    };
    assert_eq!(mul::<pairex_curves::instances::Bls12381G2>(&g, &k).to_affine(), expected);
    assert_eq!(mul_vartime::<pairex_curves::instances::Bls12381G2>(&g.to_affine().to_jacobian(), &k).to_affine(), expected);
}

#[test]
fn bn254_g1_scalar_mul_vector() {
    let k = pairex_curves::fields::Fr254::from_be_bytes_mod_order(&hex!("deadbeef12345678"));
    let g = Projective::<pairex_curves::instances::Bn254G1>::generator();
    let fe = |b: &[u8]| Option::<Fp<pairex_curves::params::bn254::FpBn254, 4>>::from(Fp::from_be_bytes(b)).expect("canonical");
    let expected = Affine::<pairex_curves::instances::Bn254G1> { x: fe(&hex!("16c9c961c7e5314c682b416056e60b14649c6fe3823348804ee03a38a75e2f68")), y: fe(&hex!("015b307b045c9fe94d9a94ebc0ec62e6dd31de95de4d79d70986b8d1bd55192c")) };
    assert_eq!(mul::<pairex_curves::instances::Bn254G1>(&g, &k).to_affine(), expected);
    assert_eq!(mul_glv::<pairex_curves::instances::Bn254G1>(&g, &k).to_affine(), expected);
    assert_eq!(mul_vartime::<pairex_curves::instances::Bn254G1>(&g.to_affine().to_jacobian(), &k).to_affine(), expected);
}

#[test]
fn bn254_g2_scalar_mul_vector() {
    let k = pairex_curves::fields::Fr254::from_be_bytes_mod_order(&hex!("deadbeef12345678"));
    let g = Projective::<pairex_curves::instances::Bn254G2>::generator();
    let fe = |b: &[u8]| Option::<Fp<pairex_curves::params::bn254::FpBn254, 4>>::from(Fp::from_be_bytes(b)).expect("canonical");
    let expected = Affine::<pairex_curves::instances::Bn254G2> {
        x: Fp2::new(fe(&hex!("1ad23e0a96f9aa077d39824d380405903529ef50f08b352a99f464a34ce4ac31")), fe(&hex!("14599c32678c52fc0adff91f7575679ff98b9d6263983f9c720afe717b1af7b7"))),
        y: Fp2::new(fe(&hex!("1a226767a4f9153fe5bbd9d3d20124a15a685bc36cf011e8589eeb0443bc9b1c")), fe(&hex!("0460dbd1b8ae67a0534f3b0dde83c9c91731a480c600834ebe04e73ef182839b"))),
    };
    assert_eq!(mul::<pairex_curves::instances::Bn254G2>(&g, &k).to_affine(), expected);
    assert_eq!(mul_vartime::<pairex_curves::instances::Bn254G2>(&g.to_affine().to_jacobian(), &k).to_affine(), expected);
}
