//! Byte-in/byte-out backends for the EVM precompiles this stack serves.
//!
//! The EVM-facing gas accounting, address dispatch and calldata padding
//! belong to the client; these functions take the already-sized inputs and
//! implement the cryptography. Errors are status codes — nothing panics on
//! untrusted bytes.

use sha2::{Digest, Sha256};

use pairex_curves::fields::{Fq381, Fr254, Fr381};
use pairex_curves::hash_to_curve::{map_to_curve_sswu, map_to_curve_svdw_bn254};
use pairex_curves::instances::{Bls12381G1, Bls12381G2, Bn254G1};
use pairex_curves::msm::msm_vartime;
use pairex_curves::scalar_mul::mul_vartime;
use pairex_curves::serialize::{
    bls12_381_g1_from_eip2537, bls12_381_g1_to_eip2537, bls12_381_g2_from_eip2537,
    bls12_381_g2_to_eip2537, bn254_g1_from_evm, bn254_g1_to_evm, bn254_g2_from_evm,
};
use pairex_curves::weierstrass::{Affine, Jacobian};
use pairex_math::{EncodingError, FieldArith, Fp};
use pairex_pairing::bls12_381 as bls_pairing;
use pairex_pairing::bn254 as bn_pairing;

/// Errors from precompile backends. Opaque — does not leak internal types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrecompileError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid point: {0}")]
    InvalidPoint(&'static str),
    #[error("point is not in the required subgroup")]
    NotInSubgroup,
}

impl From<EncodingError> for PrecompileError {
    fn from(e: EncodingError) -> Self {
        match e {
            EncodingError::NotInSubgroup => PrecompileError::NotInSubgroup,
            EncodingError::NotOnCurve => PrecompileError::InvalidPoint("not on curve"),
            _ => PrecompileError::InvalidInput("malformed encoding"),
        }
    }
}

// ── Hashing ────────────────────────────────────────────────────────────

/// SHA-256 (precompile 0x02).
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

// ── Modular arithmetic ─────────────────────────────────────────────────

/// Modular exponentiation over arbitrary-width operands (the crypto half of
/// MODEXP, 0x05). Output is left-padded to the modulus length.
pub fn modexp(base: &[u8], exp: &[u8], modulus: &[u8]) -> Vec<u8> {
    use num_bigint::BigUint;
    let m = BigUint::from_bytes_be(modulus);
    let out_len = modulus.len();
    if m == BigUint::default() {
        return vec![0u8; out_len];
    }
    let b = BigUint::from_bytes_be(base) % &m;
    let e = BigUint::from_bytes_be(exp);
    let result = b.modpow(&e, &m);
    let bytes = result.to_bytes_be();
    let mut out = vec![0u8; out_len];
    out[out_len - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// EIP-198 wire format: three 32-byte big-endian lengths, then the values.
pub fn modexp_eip198(input: &[u8]) -> Result<Vec<u8>, PrecompileError> {
    let word = |i: usize| -> Result<usize, PrecompileError> {
        let mut padded = [0u8; 32];
        let start = i * 32;
        if start < input.len() {
            let end = (start + 32).min(input.len());
            padded[..end - start].copy_from_slice(&input[start..end]);
        }
        // only the low 8 bytes may be meaningful for any sane allocation
        if padded[..24].iter().any(|&b| b != 0) {
            return Err(PrecompileError::InvalidInput("oversized length header"));
        }
        Ok(u64::from_be_bytes(padded[24..].try_into().expect("8 bytes")) as usize)
    };
    let base_len = word(0)?;
    let exp_len = word(1)?;
    let mod_len = word(2)?;

    let data = input.get(96..).unwrap_or(&[]);
    let slice_padded = |off: usize, len: usize| -> Vec<u8> {
        let mut out = vec![0u8; len];
        if off < data.len() {
            let end = (off + len).min(data.len());
            out[..end - off].copy_from_slice(&data[off..end]);
        }
        out
    };
    let base = slice_padded(0, base_len);
    let exp = slice_padded(base_len, exp_len);
    let modulus = slice_padded(base_len + exp_len, mod_len);
    Ok(modexp(&base, &exp, &modulus))
}

// ── BN254 (alt_bn128) ──────────────────────────────────────────────────

/// G1 point addition (ECADD, 0x06): two 64-byte uncompressed points in,
/// one out.
pub fn bn254_g1_add(p1: &[u8], p2: &[u8]) -> Result<[u8; 64], PrecompileError> {
    let a = bn254_g1_from_evm(p1)?;
    let b = bn254_g1_from_evm(p2)?;
    let sum = a.to_jacobian().add_affine_vartime(&b).to_affine();
    Ok(bn254_g1_to_evm(&sum))
}

/// G1 scalar multiplication (ECMUL, 0x07): 64-byte point + 32-byte
/// big-endian scalar (reduced mod r).
pub fn bn254_g1_mul(point: &[u8], scalar: &[u8]) -> Result<[u8; 64], PrecompileError> {
    if scalar.len() != 32 {
        return Err(PrecompileError::InvalidInput("scalar must be 32 bytes"));
    }
    let p = bn254_g1_from_evm(point)?;
    let k = Fr254::from_be_bytes_mod_order(scalar);
    let out = mul_vartime(&p.to_jacobian(), &k).to_affine();
    Ok(bn254_g1_to_evm(&out))
}

/// Pairing check (ECPAIRING, 0x08): input is `k` pairs of (64-byte G1,
/// 128-byte G2); returns whether the product of pairings is one.
pub fn bn254_pairing_check(input: &[u8]) -> Result<bool, PrecompileError> {
    if input.len() % 192 != 0 {
        return Err(PrecompileError::InvalidInput(
            "pairing input must be a multiple of 192 bytes",
        ));
    }
    let mut pairs = Vec::with_capacity(input.len() / 192);
    for chunk in input.chunks_exact(192) {
        let p = bn254_g1_from_evm(&chunk[..64])?;
        let q = bn254_g2_from_evm(&chunk[64..])?;
        // e(O, Q) and e(P, O) contribute nothing
        if bool::from(p.is_neutral()) || bool::from(q.is_neutral()) {
            continue;
        }
        pairs.push((p, q));
    }
    Ok(bn_pairing::pairing_check(&pairs))
}

// ── BLS12-381 (EIP-2537) ───────────────────────────────────────────────

/// G1ADD: two 128-byte points in, one out. No subgroup check (per EIP).
pub fn bls12_g1_add(input: &[u8]) -> Result<[u8; 128], PrecompileError> {
    if input.len() != 256 {
        return Err(PrecompileError::InvalidInput("G1ADD takes 256 bytes"));
    }
    let a = bls12_381_g1_from_eip2537(&input[..128], false)?;
    let b = bls12_381_g1_from_eip2537(&input[128..], false)?;
    let sum = a.to_jacobian().add_affine_vartime(&b).to_affine();
    Ok(bls12_381_g1_to_eip2537(&sum))
}

/// G1MSM: `k` (point ‖ 32-byte scalar) pairs, 160 bytes each. Subgroup
/// checks required.
pub fn bls12_g1_msm(input: &[u8]) -> Result<[u8; 128], PrecompileError> {
    if input.is_empty() || input.len() % 160 != 0 {
        return Err(PrecompileError::InvalidInput(
            "G1MSM takes a positive multiple of 160 bytes",
        ));
    }
    let mut points = Vec::with_capacity(input.len() / 160);
    let mut scalars = Vec::with_capacity(points.capacity());
    for chunk in input.chunks_exact(160) {
        points.push(bls12_381_g1_from_eip2537(&chunk[..128], true)?);
        scalars.push(Fr381::from_be_bytes_mod_order(&chunk[128..]));
    }
    let acc = msm_vartime::<Bls12381G1>(&scalars, &points)
        .map_err(|_| PrecompileError::InvalidInput("length mismatch"))?;
    Ok(bls12_381_g1_to_eip2537(&acc.to_affine()))
}

/// G2ADD: two 256-byte points in, one out. No subgroup check (per EIP).
pub fn bls12_g2_add(input: &[u8]) -> Result<[u8; 256], PrecompileError> {
    if input.len() != 512 {
        return Err(PrecompileError::InvalidInput("G2ADD takes 512 bytes"));
    }
    let a = bls12_381_g2_from_eip2537(&input[..256], false)?;
    let b = bls12_381_g2_from_eip2537(&input[256..], false)?;
    let sum = a.to_jacobian().add_affine_vartime(&b).to_affine();
    Ok(bls12_381_g2_to_eip2537(&sum))
}

/// G2MSM: `k` (point ‖ scalar) pairs, 288 bytes each.
pub fn bls12_g2_msm(input: &[u8]) -> Result<[u8; 256], PrecompileError> {
    if input.is_empty() || input.len() % 288 != 0 {
        return Err(PrecompileError::InvalidInput(
            "G2MSM takes a positive multiple of 288 bytes",
        ));
    }
    let mut points = Vec::with_capacity(input.len() / 288);
    let mut scalars = Vec::with_capacity(points.capacity());
    for chunk in input.chunks_exact(288) {
        points.push(bls12_381_g2_from_eip2537(&chunk[..256], true)?);
        scalars.push(Fr381::from_be_bytes_mod_order(&chunk[256..]));
    }
    let acc = msm_vartime::<Bls12381G2>(&scalars, &points)
        .map_err(|_| PrecompileError::InvalidInput("length mismatch"))?;
    Ok(bls12_381_g2_to_eip2537(&acc.to_affine()))
}

/// PAIRING: `k` (G1 ‖ G2) pairs, 384 bytes each; subgroup checks required
/// on both sides.
pub fn bls12_pairing_check(input: &[u8]) -> Result<bool, PrecompileError> {
    if input.is_empty() || input.len() % 384 != 0 {
        return Err(PrecompileError::InvalidInput(
            "PAIRING takes a positive multiple of 384 bytes",
        ));
    }
    let mut pairs = Vec::with_capacity(input.len() / 384);
    for chunk in input.chunks_exact(384) {
        let p = bls12_381_g1_from_eip2537(&chunk[..128], true)?;
        let q = bls12_381_g2_from_eip2537(&chunk[128..], true)?;
        if bool::from(p.is_neutral()) || bool::from(q.is_neutral()) {
            continue;
        }
        pairs.push((p, q));
    }
    Ok(bls_pairing::multi_pairing(&pairs) == bls_pairing::Gt381::ONE)
}

/// MAP_FP_TO_G1: one 64-byte padded field element → G1 point (single SSWU
/// evaluation, isogeny, cofactor clearing).
pub fn bls12_map_fp_to_g1(input: &[u8]) -> Result<[u8; 128], PrecompileError> {
    if input.len() != 64 {
        return Err(PrecompileError::InvalidInput("MAP_FP_TO_G1 takes 64 bytes"));
    }
    if input[..16].iter().any(|&b| b != 0) {
        return Err(PrecompileError::InvalidInput("padding must be zero"));
    }
    let u = Option::<Fq381>::from(Fp::from_be_bytes(&input[16..]))
        .ok_or(PrecompileError::InvalidInput("field element not canonical"))?;
    use pairex_curves::params::h2c_bls12_381::g1::*;
    let q = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &u);
    let (x, y) = iso_g1(&q);
    let p = Affine::<Bls12381G1> { x, y };
    let out = Jacobian::clear_cofactor(&p.to_jacobian()).to_affine();
    Ok(bls12_381_g1_to_eip2537(&out))
}

/// MAP_FP2_TO_G2: one 128-byte padded Fp2 element → G2 point.
pub fn bls12_map_fp2_to_g2(input: &[u8]) -> Result<[u8; 256], PrecompileError> {
    if input.len() != 128 {
        return Err(PrecompileError::InvalidInput("MAP_FP2_TO_G2 takes 128 bytes"));
    }
    for half in [&input[..16], &input[64..80]] {
        if half.iter().any(|&b| b != 0) {
            return Err(PrecompileError::InvalidInput("padding must be zero"));
        }
    }
    let c0 = Option::<Fq381>::from(Fp::from_be_bytes(&input[16..64]))
        .ok_or(PrecompileError::InvalidInput("field element not canonical"))?;
    let c1 = Option::<Fq381>::from(Fp::from_be_bytes(&input[80..]))
        .ok_or(PrecompileError::InvalidInput("field element not canonical"))?;
    let u = pairex_math::tower::Fp2::new(c0, c1);
    use pairex_curves::params::h2c_bls12_381::g2::*;
    let q = map_to_curve_sswu(&SSWU_A, &SSWU_B, &SSWU_Z, &u);
    let (x, y) = iso_g2(&q);
    let p = Affine::<Bls12381G2> { x, y };
    let out = Jacobian::clear_cofactor(&p.to_jacobian()).to_affine();
    Ok(bls12_381_g2_to_eip2537(&out))
}

// The single-point isogeny evaluations reuse the hash-to-curve tables.
fn iso_g1(p: &(Fq381, Fq381)) -> (Fq381, Fq381) {
    use pairex_curves::params::h2c_bls12_381::g1::*;
    horner_iso(p, ISO_XNUM, ISO_XDEN, ISO_YNUM, ISO_YDEN)
}

type F2 = pairex_math::tower::Fp2<pairex_curves::params::bls12_381::FpBls381, 6>;

fn iso_g2(p: &(F2, F2)) -> (F2, F2) {
    use pairex_curves::params::h2c_bls12_381::g2::*;
    horner_iso(p, ISO_XNUM, ISO_XDEN, ISO_YNUM, ISO_YDEN)
}

fn horner_iso<F: FieldArith>(p: &(F, F), xn: &[F], xd: &[F], yn: &[F], yd: &[F]) -> (F, F) {
    let horner = |coeffs: &[F], x: &F| -> F {
        let mut acc = F::ZERO;
        for c in coeffs.iter().rev() {
            acc = acc * *x + *c;
        }
        acc
    };
    let (x, y) = *p;
    (
        horner(xn, &x) * horner(xd, &x).invert().unwrap_or(F::ZERO),
        y * horner(yn, &x) * horner(yd, &x).invert().unwrap_or(F::ZERO),
    )
}

/// Map a BN254 base-field element onto G1 via SvdW (protocol helper; not
/// an EVM precompile).
pub fn bn254_map_fp_to_g1(input: &[u8; 32]) -> Result<[u8; 64], PrecompileError> {
    let u = Option::<Fp<pairex_curves::params::bn254::FpBn254, 4>>::from(Fp::from_be_bytes(input))
        .ok_or(PrecompileError::InvalidInput("field element not canonical"))?;
    let p: Affine<Bn254G1> = map_to_curve_svdw_bn254(&u);
    Ok(bn254_g1_to_evm(&p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_matches_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn modexp_eip198_basics() {
        // 3^4 mod 5 = 1, all lengths 1
        let mut input = Vec::new();
        input.extend_from_slice(&[0u8; 31]);
        input.push(1);
        input.extend_from_slice(&[0u8; 31]);
        input.push(1);
        input.extend_from_slice(&[0u8; 31]);
        input.push(1);
        input.extend_from_slice(&[3, 4, 5]);
        assert_eq!(modexp_eip198(&input).unwrap(), vec![1]);
        // zero modulus yields zeros
        assert_eq!(modexp(&[2], &[5], &[0]), vec![0]);
        // truncated value section is zero-padded
        let out = modexp_eip198(&input[..97]).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn bn254_add_identity_convention() {
        let zero = [0u8; 64];
        let mut g = [0u8; 64];
        g[31] = 1; // x = 1
        g[63] = 2; // y = 2 — the generator
        let out = bn254_g1_add(&zero, &g).unwrap();
        assert_eq!(out, g);
        let out = bn254_g1_add(&zero, &zero).unwrap();
        assert_eq!(out, zero);
    }

    #[test]
    fn bn254_mul_matches_double() {
        let mut g = [0u8; 64];
        g[31] = 1;
        g[63] = 2;
        let mut two = [0u8; 32];
        two[31] = 2;
        let via_mul = bn254_g1_mul(&g, &two).unwrap();
        let via_add = bn254_g1_add(&g, &g).unwrap();
        assert_eq!(via_mul, via_add);
    }

    #[test]
    fn bn254_rejects_off_curve() {
        let mut bad = [0u8; 64];
        bad[31] = 1;
        bad[63] = 3;
        assert!(bn254_g1_add(&bad, &bad).is_err());
    }

    #[test]
    fn bn254_pairing_trivial_cases() {
        // empty input: product over zero pairs is one
        assert!(bn254_pairing_check(&[]).unwrap());
        // e(O, Q) == 1: a zero G1 with a valid G2 generator
        let mut input = [0u8; 192];
        // G2 generator, EVM ordering (imaginary ‖ real)
        input[64..96].copy_from_slice(&hex!(
            "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"
        ));
        input[96..128].copy_from_slice(&hex!(
            "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"
        ));
        input[128..160].copy_from_slice(&hex!(
            "090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b"
        ));
        input[160..192].copy_from_slice(&hex!(
            "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"
        ));
        assert!(bn254_pairing_check(&input).unwrap());
    }
}
