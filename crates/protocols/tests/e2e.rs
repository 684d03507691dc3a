//! End-to-end protocol flows: trusted-setup persistence feeding KZG, and
//! the EIP-2537 precompile surface against the group API.

use pairex_commitments::kzg::{
    Blob, KzgSettings, blob_to_kzg_commitment, compute_blob_kzg_proof, compute_kzg_proof,
    verify_blob_kzg_proof, verify_kzg_proof,
};
use pairex_curves::fields::Fr381;
use pairex_curves::instances::Bls12381G1;
use pairex_curves::scalar_mul::mul_vartime;
use pairex_curves::serialize::{bls12_381_g1_to_eip2537, g1_to_compressed};
use pairex_curves::weierstrass::Jacobian;
use pairex_protocols::TrustedSetupFile;
use pairex_protocols::precompiles;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dev_settings() -> KzgSettings {
    // RUST_LOG=debug surfaces the library's tracing events during the run
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    KzgSettings::insecure_dev_setup_sized(&Fr381::from_u64(0x7357_5e7), 64).unwrap()
}

#[test]
fn trusted_setup_survives_persistence() {
    let settings = dev_settings();
    let file = TrustedSetupFile::from_settings(&settings);
    let json = file.to_json().unwrap();
    let reloaded = TrustedSetupFile::from_json(&json)
        .unwrap()
        .into_settings()
        .unwrap();

    // same setup, same proofs
    let mut rng = StdRng::seed_from_u64(31);
    let blob = Blob((0..64).map(|_| Fr381::random(&mut rng)).collect());
    let c1 = blob_to_kzg_commitment(&settings, &blob).unwrap();
    let c2 = blob_to_kzg_commitment(&reloaded, &blob).unwrap();
    assert_eq!(c1, c2);

    let proof = compute_blob_kzg_proof(&reloaded, &blob, &c2).unwrap();
    assert!(verify_blob_kzg_proof(&settings, &blob, &c1, &proof).unwrap());
}

#[test]
fn kzg_proof_verifies_across_the_stack() {
    let settings = dev_settings();
    let mut rng = StdRng::seed_from_u64(32);
    let blob = Blob((0..64).map(|_| Fr381::random(&mut rng)).collect());
    let commitment = blob_to_kzg_commitment(&settings, &blob).unwrap();
    let z = Fr381::from_u64(0x1122_3344);
    let (proof, y) = compute_kzg_proof(&settings, &blob, &z).unwrap();
    assert!(verify_kzg_proof(&settings, &commitment, &z, &y, &proof).unwrap());
    // perturbed proof rejects
    let bad = pairex_commitments::kzg::KzgProof(g1_to_compressed(
        &Jacobian::<Bls12381G1>::generator().to_affine(),
    ));
    assert!(!verify_kzg_proof(&settings, &commitment, &z, &y, &bad).unwrap());
}

#[test]
fn eip2537_g1_msm_agrees_with_group_api() {
    let g = Jacobian::<Bls12381G1>::generator();
    let k1 = Fr381::from_u64(7);
    let k2 = Fr381::from_u64(11);
    let p1 = g.to_affine();
    let p2 = mul_vartime::<Bls12381G1>(&g, &Fr381::from_u64(3)).to_affine();

    let mut input = Vec::new();
    for (p, k) in [(p1, k1), (p2, k2)] {
        input.extend_from_slice(&bls12_381_g1_to_eip2537(&p));
        let mut kb = [0u8; 32];
        k.to_be_bytes(&mut kb);
        input.extend_from_slice(&kb);
    }
    let out = precompiles::bls12_g1_msm(&input).unwrap();

    // 7·G + 11·(3G) = 40·G
    let expected = mul_vartime::<Bls12381G1>(&g, &Fr381::from_u64(40)).to_affine();
    assert_eq!(out, bls12_381_g1_to_eip2537(&expected));
}

#[test]
fn eip2537_pairing_check_on_inverse_pairs() {
    use pairex_curves::instances::Bls12381G2;
    use pairex_curves::serialize::bls12_381_g2_to_eip2537;
    let p = Jacobian::<Bls12381G1>::generator().to_affine();
    let q = Jacobian::<Bls12381G2>::generator().to_affine();

    // e(P, Q)·e(−P, Q) == 1
    let mut input = Vec::new();
    input.extend_from_slice(&bls12_381_g1_to_eip2537(&p));
    input.extend_from_slice(&bls12_381_g2_to_eip2537(&q));
    input.extend_from_slice(&bls12_381_g1_to_eip2537(&p.neg()));
    input.extend_from_slice(&bls12_381_g2_to_eip2537(&q));
    assert!(precompiles::bls12_pairing_check(&input).unwrap());

    // a single non-trivial pair is not one
    assert!(!precompiles::bls12_pairing_check(&input[..384]).unwrap());
}

#[test]
fn map_fp_to_g1_lands_in_subgroup() {
    use pairex_curves::curve::SwCurve;
    use pairex_curves::serialize::bls12_381_g1_from_eip2537;
    let mut input = [0u8; 64];
    input[63] = 5; // u = 5
    let out = precompiles::bls12_map_fp_to_g1(&input).unwrap();
    let p = bls12_381_g1_from_eip2537(&out, true).unwrap();
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from(Bls12381G1::is_in_subgroup(&p)));
}
