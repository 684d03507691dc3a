//! Algebraic laws of the prime fields and their byte codecs, exercised over
//! every parameter set in the library.

use pairex_math::{Fp, FpParams, batch_invert};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn field_laws<P: FpParams<N>, const N: usize>() {
    let mut rng = StdRng::seed_from_u64(0x1234);
    type E<P, const N: usize> = Fp<P, N>;
    for _ in 0..32 {
        let a = E::<P, N>::random(&mut rng);
        let b = E::<P, N>::random(&mut rng);
        let c = E::<P, N>::random(&mut rng);

        // ring laws
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a + (-a), E::<P, N>::ZERO);
        assert_eq!(a * E::<P, N>::ONE, a);

        // squares and doubling agree with multiplication
        assert_eq!(a.square(), a * a);
        assert_eq!(a.double(), a + a);
        assert_eq!((a * b).square(), a.square() * b.square());

        // inversion
        if !bool::from(a.is_zero()) {
            let inv = a.invert().unwrap();
            assert_eq!(a * inv, E::<P, N>::ONE);
        }

        // sqrt: a² is always a QR and its root squares back
        let sq = a.square();
        let r = sq.sqrt().unwrap();
        assert_eq!(r.square(), sq);
    }

    // inv(0) = 0 by convention, flagged
    let zero = E::<P, N>::ZERO;
    let inv0 = zero.invert();
    assert!(!bool::from(inv0.is_some()));
    assert_eq!(inv0.unwrap_or(zero), zero);

    // byte round trip (Montgomery encode/decode)
    let mut rng = StdRng::seed_from_u64(0x5678);
    for _ in 0..16 {
        let a = E::<P, N>::random(&mut rng);
        let mut be = vec![0u8; N * 8];
        a.to_be_bytes(&mut be);
        let back = Option::<E<P, N>>::from(Fp::from_be_bytes(&be)).unwrap();
        assert_eq!(a, back);
        let mut le = vec![0u8; N * 8];
        a.to_le_bytes(&mut le);
        let back = Option::<E<P, N>>::from(Fp::from_le_bytes(&le)).unwrap();
        assert_eq!(a, back);
    }

    // non-canonical rejection: the modulus itself
    let mut be = vec![0u8; N * 8];
    P::MODULUS.to_be_bytes(&mut be);
    assert!(!bool::from(Fp::<P, N>::from_be_bytes(&be).is_some()));

    // batch inversion matches element-wise, zeros stay zero
    let mut xs: Vec<E<P, N>> = (0..9).map(|_| E::<P, N>::random(&mut rng)).collect();
    xs[4] = E::<P, N>::ZERO;
    let expect: Vec<E<P, N>> = xs
        .iter()
        .map(|x| x.invert().unwrap_or(E::<P, N>::ZERO))
        .collect();
    batch_invert(&mut xs);
    assert_eq!(xs, expect);
}

macro_rules! laws_for {
    ($name:ident, $params:ty, $n:expr) => {
        #[test]
        fn $name() {
            field_laws::<$params, $n>();
        }
    };
}

laws_for!(bls12_381_base, pairex_curves::fields::FpBls381, 6);
laws_for!(bls12_381_scalar, pairex_curves::fields::FrBls381, 4);
laws_for!(bn254_base, pairex_curves::fields::FpBn254, 4);
laws_for!(bn254_scalar, pairex_curves::fields::FrBn254, 4);
laws_for!(bls12_377_base, pairex_curves::fields::FpBls377, 6);
laws_for!(bls12_377_scalar, pairex_curves::fields::FrBls377, 4);
laws_for!(bw6_761_base, pairex_curves::fields::FpBw6761, 12);
laws_for!(bn254_nogami_base, pairex_curves::fields::FpBn254Nogami, 4);
laws_for!(bn254_nogami_scalar, pairex_curves::fields::FrBn254Nogami, 4);
laws_for!(pallas_base, pairex_curves::fields::FpPallas, 4);
laws_for!(vesta_base, pairex_curves::fields::FpVesta, 4);
laws_for!(bandersnatch_scalar, pairex_curves::fields::FrBandersnatch, 4);

#[test]
fn sqrt_of_non_residue_is_flagged() {
    // half of all non-zero elements are non-residues; drawing 64 random
    // elements must hit at least one, and its sqrt flag must be false
    use pairex_curves::fields::FrBls381;
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen_nonresidue = false;
    for _ in 0..64 {
        let a = Fp::<FrBls381, 4>::random(&mut rng);
        if bool::from(a.is_zero()) {
            continue;
        }
        let has_root = bool::from(a.sqrt().is_some());
        if !has_root {
            seen_nonresidue = true;
        } else {
            let r = a.sqrt().unwrap();
            assert_eq!(r.square(), a);
        }
    }
    // half of all elements are non-residues; 64 draws miss with p ≈ 2⁻⁶⁴
    assert!(seen_nonresidue);
}

#[test]
fn tonelli_shanks_and_3mod4_paths_agree_with_squares() {
    // Fr(BLS12-381) has 2-adicity 32 (Tonelli-Shanks); Fp(BLS12-381) is
    // 3 mod 4 (single exponentiation). Both must invert squaring.
    use pairex_curves::fields::{FpBls381, FrBls381};
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..16 {
        let a = Fp::<FrBls381, 4>::random(&mut rng).square();
        assert_eq!(a.sqrt().unwrap().square(), a);
        let b = Fp::<FpBls381, 6>::random(&mut rng).square();
        assert_eq!(b.sqrt().unwrap().square(), b);
    }
}

mod arbitrary_inputs {
    use pairex_curves::fields::{Fr381, FrBls381};
    use pairex_math::Fp;
    use proptest::prelude::*;

    fn fr(bytes: &[u8; 32]) -> Fr381 {
        Fr381::from_be_bytes_mod_order(bytes)
    }

    proptest! {
        #[test]
        fn mul_commutes_and_distributes(a in any::<[u8; 32]>(),
                                        b in any::<[u8; 32]>(),
                                        c in any::<[u8; 32]>()) {
            let (a, b, c) = (fr(&a), fr(&b), fr(&c));
            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn bytes_round_trip(a in any::<[u8; 32]>()) {
            let a = fr(&a);
            let mut be = [0u8; 32];
            a.to_be_bytes(&mut be);
            let back = Option::<Fp<FrBls381, 4>>::from(Fp::from_be_bytes(&be)).unwrap();
            prop_assert_eq!(a, back);
        }

        #[test]
        fn invert_is_two_sided(a in any::<[u8; 32]>()) {
            let a = fr(&a);
            prop_assume!(!bool::from(a.is_zero()));
            let inv = a.invert().unwrap();
            prop_assert_eq!(a * inv, Fr381::ONE);
            prop_assert_eq!(inv * a, Fr381::ONE);
        }
    }
}
