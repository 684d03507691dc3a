//! Pairing properties: bilinearity, non-degeneracy, multi-pairing
//! agreement, Gt membership and compression, sparse-line consistency and
//! the cyclotomic subgroup structure — for both engines.

use pairex_curves::scalar_mul::mul_vartime;
use pairex_math::tower::Fp12;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod bls {
    use super::*;
    use pairex_curves::fields::Fr381;
    use pairex_curves::instances::{Bls12381G1, Bls12381G2};
    use pairex_math::FieldArith;
    use pairex_pairing::bls12_381::{
        Fq12, G1Affine, G2Affine, Gt381, multi_miller_loop, multi_pairing, pairing,
    };
    use pairex_pairing::miller::final_exp_easy;
    use pairex_pairing::torus::Torus2;

    fn gens() -> (G1Affine, G2Affine) {
        (G1Affine::generator(), G2Affine::generator())
    }

    fn double_g1(p: &G1Affine) -> G1Affine {
        p.to_jacobian().double_vartime().to_affine()
    }

    fn double_g2(q: &G2Affine) -> G2Affine {
        q.to_jacobian().double_vartime().to_affine()
    }

    #[test]
    fn bilinearity_concrete_scenario() {
        // e₁ = e(P, Q); e₂ = e([2]P, Q); e₃ = e(P, [2]Q):
        // e₁·e₁ == e₂ == e₃ and all three are non-one.
        let (p, q) = gens();
        let e1 = pairing(&p, &q);
        let e2 = pairing(&double_g1(&p), &q);
        let e3 = pairing(&p, &double_g2(&q));
        assert_ne!(e1, Gt381::ONE);
        assert_ne!(e2, Gt381::ONE);
        assert_ne!(e3, Gt381::ONE);
        assert_eq!(e1.mul(&e1), e2);
        assert_eq!(e2, e3);
    }

    #[test]
    fn bilinearity_general() {
        let mut rng = StdRng::seed_from_u64(11);
        let (p, q) = gens();
        let a = Fr381::random(&mut rng);
        let b = Fr381::random(&mut rng);
        let pa = mul_vartime::<Bls12381G1>(&p.to_jacobian(), &a).to_affine();
        let qb = mul_vartime::<Bls12381G2>(&q.to_jacobian(), &b).to_affine();
        // e([a]P, [b]Q) == e(P, Q)^(ab)
        let lhs = pairing(&pa, &qb);
        let ab = a * b;
        let rhs = pairing(&p, &q).exp(&ab);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn pairing_with_infinity_is_one() {
        let (p, q) = gens();
        assert_eq!(pairing(&G1Affine::NEUTRAL, &q), Gt381::ONE);
        assert_eq!(pairing(&p, &G2Affine::NEUTRAL), Gt381::ONE);
    }

    #[test]
    fn multi_pairing_agrees_with_product() {
        let (p, q) = gens();
        let p2 = double_g1(&p);
        let q2 = double_g2(&q);
        let joint = multi_pairing(&[(p, q), (p2, q2), (p, q2)]);
        let split = pairing(&p, &q)
            .mul(&pairing(&p2, &q2))
            .mul(&pairing(&p, &q2));
        assert_eq!(joint, split);
    }

    #[test]
    fn gt_membership_and_cyclotomic_structure() {
        let e = Gt381::generator();
        assert!(bool::from(e.0.is_in_cyclotomic_subgroup()));
        assert!(bool::from(e.is_in_subgroup()));
        // after only the easy part the element is cyclotomic but need not be
        // in the pairing subgroup
        let (p, q) = gens();
        let f = multi_miller_loop(&[(p, q)]);
        let easy = final_exp_easy(&f);
        assert!(bool::from(easy.is_in_cyclotomic_subgroup()));
        // a raw Miller output is (essentially never) cyclotomic
        assert!(!bool::from(f.is_in_cyclotomic_subgroup()));
        // cyclotomic inverse is conjugation; squaring agrees with generic
        assert_eq!(easy * easy.conjugate(), Fq12::ONE);
        assert_eq!(easy.cyclotomic_square(), easy * easy);
    }

    #[test]
    fn torus_compression_round_trip() {
        let e = Gt381::generator();
        let t = e.compress().expect("generator is not ±1");
        assert_eq!(Gt381::decompress(&t), e);
        // torus mul/square track Fp12 mul/square
        let e2 = e.mul(&e);
        let t2 = t.square();
        assert_eq!(Gt381::decompress(&t2), e2);
        let t3 = t.mul(&e2.compress().unwrap());
        assert_eq!(Gt381::decompress(&t3), e.mul(&e2));
        // inverse
        assert_eq!(Gt381::decompress(&t.inverse()), e.invert());
        // identity has no affine representative but a projective one
        assert_eq!(Gt381::decompress(&Torus2::ONE), Gt381::ONE);
        assert!(Gt381::ONE.compress().is_some());
        let minus_one = -Fq12::ONE;
        assert!(Torus2::from_gt(&minus_one).is_none());
    }

    #[test]
    fn gt_multi_exp_matches_individual() {
        let mut rng = StdRng::seed_from_u64(12);
        let e = Gt381::generator();
        let bases: Vec<Gt381> = (1u64..=5)
            .map(|i| e.exp(&Fr381::from_u64(i * i + 1)))
            .collect();
        let scalars: Vec<Fr381> = (0..5).map(|_| Fr381::random(&mut rng)).collect();
        let fast = Gt381::multi_exp_vartime(&bases, &scalars);
        let mut slow = Gt381::ONE;
        for (b, s) in bases.iter().zip(&scalars) {
            slow = slow.mul(&b.exp(s));
        }
        assert_eq!(fast, slow);
    }

    #[test]
    fn sparse_line_mul_equals_dense() {
        // property 18: multiplying by a sparse line equals multiplying by
        // the padded dense element, for both sparse shapes and the fused
        // line×line product
        use pairex_curves::params::bls12_381::FpBls381;
        use pairex_math::tower::Fp2;
        let mut rng = StdRng::seed_from_u64(13);
        type F2 = Fp2<FpBls381, 6>;
        let f = random_fq12(&mut rng);
        let (a, b, c) = (F2::random(&mut rng), F2::random(&mut rng), F2::random(&mut rng));

        // M-twist shape {0,3,5}
        let sparse = f.mul_by_line_035(&a, &b, &c);
        let dense = Fp12::from_coeffs([a, F2::ZERO, F2::ZERO, b, F2::ZERO, c]);
        assert_eq!(sparse, f * dense);

        // fused product of two lines
        use pairex_pairing::miller::{LineEval, Twist};
        let l1 = LineEval { a, b, c };
        let (a2, b2, c2) = (F2::random(&mut rng), F2::random(&mut rng), F2::random(&mut rng));
        let l2 = LineEval { a: a2, b: b2, c: c2 };
        let prod = l1.mul_line(Twist::M, &l2);
        let dense2 = Fp12::from_coeffs([a2, F2::ZERO, F2::ZERO, b2, F2::ZERO, c2]);
        assert_eq!(prod, dense * dense2);
    }

    fn random_fq12(rng: &mut StdRng) -> Fq12 {
        use pairex_curves::params::bls12_381::FpBls381;
        use pairex_math::tower::Fp2;
        Fp12::from_coeffs(core::array::from_fn(|_| Fp2::<FpBls381, 6>::random(&mut *rng)))
    }

    #[test]
    fn frobenius_matches_powering() {
        // x^p computed by coefficient tables equals x^p by exponentiation
        let mut rng = StdRng::seed_from_u64(14);
        let f = random_fq12(&mut rng);
        let p_limbs = <FpParamsOf as pairex_math::FpParams<6>>::MODULUS.0;
        assert_eq!(f.frobenius(1), f.pow_vartime(&p_limbs));
        assert_eq!(f.frobenius(2), f.frobenius(1).frobenius(1));
        assert_eq!(f.frobenius(3), f.frobenius(2).frobenius(1));
    }

    type FpParamsOf = pairex_curves::params::bls12_381::FpBls381;
}

mod bn {
    use super::*;
    use pairex_curves::fields::Fr254;
    use pairex_curves::instances::{Bn254G1, Bn254G2};
    use pairex_pairing::bn254::{G1Affine, G2Affine, Gt254, multi_pairing, pairing, pairing_check};

    fn gens() -> (G1Affine, G2Affine) {
        (G1Affine::generator(), G2Affine::generator())
    }

    #[test]
    fn bilinearity_concrete_scenario() {
        let (p, q) = gens();
        let p2 = p.to_jacobian().double_vartime().to_affine();
        let q2 = q.to_jacobian().double_vartime().to_affine();
        let e1 = pairing(&p, &q);
        let e2 = pairing(&p2, &q);
        let e3 = pairing(&p, &q2);
        assert_ne!(e1, Gt254::ONE);
        assert_eq!(e1.mul(&e1), e2);
        assert_eq!(e2, e3);
    }

    #[test]
    fn gt_membership() {
        let e = Gt254::generator();
        assert!(bool::from(e.is_in_subgroup()));
        // an arbitrary cyclotomic element is typically not order r; the
        // full check must involve the Frobenius relation, not just the
        // cyclotomic test
        let mut rng = StdRng::seed_from_u64(15);
        let k = Fr254::random(&mut rng);
        assert!(bool::from(e.exp(&k).is_in_subgroup()));
    }

    #[test]
    fn pairing_check_detects_inverse_pairs() {
        // e(P, Q)·e(−P, Q) == 1
        let (p, q) = gens();
        assert!(pairing_check(&[(p, q), (p.neg(), q)]));
        assert!(!pairing_check(&[(p, q)]));
        // empty product is one
        assert!(pairing_check(&[]));
    }

    #[test]
    fn multi_pairing_agrees_with_product() {
        let (p, q) = gens();
        let p2 = p.to_jacobian().double_vartime().to_affine();
        let joint = multi_pairing(&[(p, q), (p2, q)]);
        let split = pairing(&p, &q).mul(&pairing(&p2, &q));
        assert_eq!(joint, split);
    }

    #[test]
    fn torus_round_trip() {
        let e = Gt254::generator();
        let t = e.compress().unwrap();
        assert_eq!(Gt254::decompress(&t), e);
        assert_eq!(Gt254::decompress(&t.square()), e.mul(&e));
    }
}
