//! Group-law and scalar-multiplication properties across coordinate
//! systems, plus MSM equivalence, cofactor clearing, subgroup checks and
//! the point wire formats.

use pairex_curves::curve::SwCurve;
use pairex_curves::instances::{
    Bls12377G1, Bls12381G1, Bls12381G2, Bn254G1, Bn254G2, Bn254NogamiG1, Bw6761G1, Pallas, Vesta,
};
use pairex_curves::msm::{msm_naive, msm_vartime};
use pairex_curves::scalar_mul::{mul, mul_vartime};
use pairex_curves::serialize::*;
use pairex_curves::weierstrass::{Affine, Jacobian, Projective};
use pairex_math::FieldArith;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn group_laws<C: SwCurve>() {
    let g = Projective::<C>::generator();
    let o = Projective::<C>::NEUTRAL;

    // P + 0 = P; P + (−P) = 0; commutativity; associativity
    let p = g.double().add(&g); // 3G
    let q = g.double(); // 2G
    let r = p.double(); // 6G
    assert_eq!(p.add(&o), p);
    assert_eq!(p.add(&p.neg()), o);
    assert_eq!(p.add(&q), q.add(&p));
    assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    // complete doubling: add(P, P) == double(P)
    assert_eq!(p.add(&p), p.double());
    // 2G + 3G = 5G built two ways
    assert_eq!(q.add(&p), g.double().double().add(&g));

    // Jacobian mirrors projective
    let ja = p.to_affine().to_jacobian().add_vartime(&q.to_affine().to_jacobian());
    assert_eq!(ja.to_affine(), p.add(&q).to_affine());
    let jm = p.to_affine().to_jacobian().add_affine_vartime(&q.to_affine());
    assert_eq!(jm.to_affine(), p.add(&q).to_affine());
    assert_eq!(
        p.to_affine().to_jacobian().double_vartime().to_affine(),
        p.double().to_affine()
    );

    // affine invariants
    assert!(bool::from(p.to_affine().is_on_curve()));
    assert!(bool::from(Affine::<C>::NEUTRAL.is_on_curve()));
}

fn scalar_mul_equivalence<C: SwCurve>() {
    let mut rng = StdRng::seed_from_u64(77);
    let g = Projective::<C>::generator();
    for _ in 0..4 {
        let k = C::Scalar::random(&mut rng);
        let ct = mul::<C>(&g, &k).to_affine();
        let vt = mul_vartime::<C>(&g.to_affine().to_jacobian(), &k).to_affine();
        assert_eq!(ct, vt);
    }
    // small scalars equal repeated addition
    let mut acc = Projective::<C>::NEUTRAL;
    for small in 0u64..=12 {
        let k = scalar_from_u64::<C>(small);
        assert_eq!(mul::<C>(&g, &k), acc);
        acc = acc.add(&g);
    }
}

fn scalar_from_u64<C: SwCurve>(v: u64) -> C::Scalar {
    // build v·1 by doubling-and-adding ONE — ScalarField is only FieldArith
    let one = C::Scalar::ONE;
    let mut acc = C::Scalar::ZERO;
    for i in (0..64).rev() {
        acc = acc.double();
        if (v >> i) & 1 == 1 {
            acc += one;
        }
    }
    acc
}

fn msm_equivalence<C: SwCurve>() {
    let mut rng = StdRng::seed_from_u64(99);
    let g = Jacobian::<C>::generator();
    // enough points to leave the naive fallback and hit the bucket path
    let n = 70;
    let points: Vec<Affine<C>> = (0..n)
        .map(|i| mul_vartime::<C>(&g, &scalar_from_u64::<C>(i as u64 + 1)).to_affine())
        .collect();
    let scalars: Vec<C::Scalar> = (0..n).map(|_| C::Scalar::random(&mut rng)).collect();
    let fast = msm_vartime::<C>(&scalars, &points).unwrap();
    let slow = msm_naive::<C>(&scalars, &points);
    assert_eq!(fast.to_affine(), slow.to_affine());

    // length mismatch is a status error
    assert!(msm_vartime::<C>(&scalars[..1], &points).is_err());
}

fn cofactor_and_subgroup<C: SwCurve>() {
    let g = Jacobian::<C>::generator();
    // the generator is in the subgroup; [r]G = 0
    assert!(bool::from(C::is_in_subgroup(&g.to_affine())));
    let rg = g.mul_limbs_vartime(<C::Scalar as pairex_curves::curve::ScalarField>::MODULUS_LIMBS);
    assert!(rg.is_neutral());
    // clearing the cofactor of a subgroup point stays in the subgroup
    let cleared = g.clear_cofactor();
    assert!(bool::from(C::is_in_subgroup(&cleared.to_affine())));
    assert!(!cleared.is_neutral());
}

macro_rules! suite {
    ($name:ident, $curve:ty) => {
        mod $name {
            use super::*;
            #[test]
            fn group_laws() {
                super::group_laws::<$curve>();
            }
            #[test]
            fn scalar_mul_equivalence() {
                super::scalar_mul_equivalence::<$curve>();
            }
            #[test]
            fn msm_equivalence() {
                super::msm_equivalence::<$curve>();
            }
            #[test]
            fn cofactor_and_subgroup() {
                super::cofactor_and_subgroup::<$curve>();
            }
        }
    };
}

suite!(bls12_381_g1, Bls12381G1);
suite!(bls12_381_g2, Bls12381G2);
suite!(bn254_g1, Bn254G1);
suite!(bn254_g2, Bn254G2);
suite!(bls12_377_g1, Bls12377G1);
suite!(bw6_761_g1, Bw6761G1);
suite!(bn254_nogami_g1, Bn254NogamiG1);
suite!(pallas, Pallas);
suite!(vesta, Vesta);

#[test]
fn glv_equals_plain_mul() {
    use pairex_curves::scalar_mul::mul_glv;
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..6 {
        let k = <Bls12381G1 as SwCurve>::Scalar::random(&mut rng);
        let g = Projective::<Bls12381G1>::generator();
        assert_eq!(mul::<Bls12381G1>(&g, &k), mul_glv::<Bls12381G1>(&g, &k));

        let k = <Bn254G1 as SwCurve>::Scalar::random(&mut rng);
        let g = Projective::<Bn254G1>::generator();
        assert_eq!(mul::<Bn254G1>(&g, &k), mul_glv::<Bn254G1>(&g, &k));
    }
}

#[test]
fn bls12_381_compressed_round_trip() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..4 {
        let k = <Bls12381G1 as SwCurve>::Scalar::random(&mut rng);
        let p = mul::<Bls12381G1>(&Projective::generator(), &k).to_affine();
        let bytes = g1_to_compressed(&p);
        assert_eq!(g1_from_compressed(&bytes).unwrap(), p);
        let un = g1_to_uncompressed(&p);
        assert_eq!(g1_from_uncompressed(&un).unwrap(), p);

        let k = <Bls12381G2 as SwCurve>::Scalar::random(&mut rng);
        let q = mul::<Bls12381G2>(&Projective::generator(), &k).to_affine();
        let bytes = g2_to_compressed(&q);
        assert_eq!(g2_from_compressed(&bytes).unwrap(), q);
    }
    // the canonical infinity encodings
    let inf = g1_to_compressed(&Affine::<Bls12381G1>::NEUTRAL);
    assert_eq!(inf[0], 0xc0);
    assert!(inf[1..].iter().all(|&b| b == 0));
    assert_eq!(g1_from_compressed(&inf).unwrap(), Affine::NEUTRAL);
}

#[test]
fn bls12_381_g1_generator_compressed_matches_zcash_vector() {
    // the canonical zcash-format generator encoding
    let bytes = g1_to_compressed(&Affine::<Bls12381G1>::generator());
    assert_eq!(
        hex::encode(bytes),
        "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
    );
}

#[test]
fn compressed_rejects_bad_inputs() {
    // clearing the compression bit must fail
    let mut bytes = g1_to_compressed(&Affine::<Bls12381G1>::generator());
    bytes[0] &= 0x7f;
    assert!(g1_from_compressed(&bytes).is_err());
    // non-canonical x (the modulus) must fail
    let mut bad = [0xffu8; 48];
    bad[0] = 0x9f;
    assert!(g1_from_compressed(&bad).is_err());
}

#[test]
fn eip2537_round_trip_and_padding_checks() {
    let p = Affine::<Bls12381G1>::generator();
    let enc = bls12_381_g1_to_eip2537(&p);
    assert_eq!(bls12_381_g1_from_eip2537(&enc, true).unwrap(), p);
    let q = Affine::<Bls12381G2>::generator();
    let enc2 = bls12_381_g2_to_eip2537(&q);
    assert_eq!(bls12_381_g2_from_eip2537(&enc2, true).unwrap(), q);
    // non-zero padding rejected
    let mut bad = enc;
    bad[0] = 1;
    assert!(bls12_381_g1_from_eip2537(&bad, true).is_err());
    // all-zero input is infinity
    assert!(bool::from(
        bls12_381_g1_from_eip2537(&[0u8; 128], true).unwrap().is_neutral()
    ));
}

#[test]
fn evm_bn254_codec() {
    let p = Affine::<Bn254G1>::generator();
    let enc = bn254_g1_to_evm(&p);
    assert_eq!(bn254_g1_from_evm(&enc).unwrap(), p);
    // off-curve rejected
    let mut bad = enc;
    bad[63] ^= 1;
    assert!(bn254_g1_from_evm(&bad).is_err());
}

#[test]
fn subgroup_check_accepts_and_rejects() {
    use pairex_curves::fields::Fq381;
    use pairex_curves::weierstrass::subgroup_check_generic;
    use pairex_math::Fp;

    // [h]G stays in the subgroup, by both the fast and generic checks
    let g = Jacobian::<Bls12381G1>::generator();
    let hg = g.mul_limbs_vartime(Bls12381G1::COFACTOR).to_affine();
    assert!(bool::from(Bls12381G1::is_in_subgroup(&hg)));
    assert!(bool::from(subgroup_check_generic(&hg)));

    // try-and-increment gives a curve point that is (with overwhelming
    // probability) outside the r-subgroup — the cofactor is 2^125-ish
    let mut xi = 1u64;
    let bad = loop {
        let x: Fq381 = Fp::from_u64(xi);
        let y2 = x.square() * x + <Bls12381G1 as SwCurve>::B;
        if let Some(y) = Option::<Fq381>::from(y2.sqrt()) {
            let p = Affine::<Bls12381G1> { x, y };
            if !bool::from(p.is_neutral()) {
                break p;
            }
        }
        xi += 1;
    };
    assert!(bool::from(bad.is_on_curve()));
    assert_eq!(
        bool::from(Bls12381G1::is_in_subgroup(&bad)),
        bool::from(subgroup_check_generic(&bad)),
    );
    // uncleared curve points do not land in the subgroup
    assert!(!bool::from(Bls12381G1::is_in_subgroup(&bad)));
    // and clearing the cofactor repairs them
    let cleared = bad.to_jacobian().clear_cofactor().to_affine();
    assert!(bool::from(Bls12381G1::is_in_subgroup(&cleared)));
}
