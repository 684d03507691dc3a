//! Point wire formats.
//!
//! - ZCash-style BLS12-381 encodings: 48/96-byte compressed with flag bits
//!   (bit 7 compressed, bit 6 infinity, bit 5 lexicographically-largest y).
//! - EVM alt_bn128 encodings: raw big-endian `x ‖ y`, `(0,0)` = infinity,
//!   G2 coordinates ordered imaginary-then-real.
//! - EIP-2537 BLS12-381 encodings: 64-byte-padded field elements, G2
//!   coordinates real-then-imaginary.
//!
//! Deserialization always validates canonicality, curve membership and
//! prime-order-subgroup membership, reporting an [`EncodingError`] status.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use pairex_math::tower::Fp2;
use pairex_math::{EncodingError, FieldArith, Fp, FpParams};

use crate::curve::SwCurve;
use crate::instances::{Bls12381G1, Bls12381G2, Bn254G1, Bn254G2};
use crate::params::{bls12_381, bn254};
use crate::weierstrass::Affine;

const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_SORT: u8 = 0x20;

/// `y` is the lexicographically largest of `{y, −y}`: `y > (p − 1)/2`.
fn lexicographically_largest<P: FpParams<N>, const N: usize>(y: &Fp<P, N>) -> Choice {
    let half = {
        let (diff, _) = P::MODULUS.sub_borrow(&pairex_math::BigInt::one());
        diff.shr1()
    };
    // y > half  <=>  !(y <= half)  <=>  !(y < half + 1)
    let v = y.to_bigint();
    !v.ct_lt(&half) & !v.ct_eq(&half)
}

fn fp2_lexicographically_largest<P, const N: usize>(y: &Fp2<P, N>) -> Choice
where
    P: pairex_math::tower::TowerParams<N>,
{
    let c1_large = lexicographically_largest(&y.c1);
    let c1_zero = y.c1.is_zero();
    c1_large | (c1_zero & lexicographically_largest(&y.c0))
}

// ---------------------------------------------------------------------------
// BLS12-381, ZCash flags
// ---------------------------------------------------------------------------

/// Compress a G1 point to 48 bytes.
pub fn g1_to_compressed(p: &Affine<Bls12381G1>) -> [u8; 48] {
    let mut out = [0u8; 48];
    let inf = p.is_neutral();
    // infinity serializes x = 0 with the infinity flag
    let x = Fp::conditional_select(&p.x, &Fp::ZERO, inf);
    x.to_be_bytes(&mut out);
    let mut flags = FLAG_COMPRESSED;
    flags |= u8::from(bool::from(inf)) * FLAG_INFINITY;
    flags |= u8::from(bool::from(lexicographically_largest(&p.y) & !inf)) * FLAG_SORT;
    out[0] |= flags;
    out
}

/// Decompress and fully validate a 48-byte G1 encoding.
pub fn g1_from_compressed(bytes: &[u8; 48]) -> Result<Affine<Bls12381G1>, EncodingError> {
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED == 0 {
        return Err(EncodingError::InvalidFlags);
    }
    let mut xb = *bytes;
    xb[0] &= 0x1f;
    let x = Option::<Fp<bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(&xb))
        .ok_or(EncodingError::NonCanonical)?;
    if flags & FLAG_INFINITY != 0 {
        if flags & FLAG_SORT != 0 || !bool::from(x.is_zero()) {
            return Err(EncodingError::InvalidFlags);
        }
        return Ok(Affine::NEUTRAL);
    }
    let y2 = x.square() * x + Bls12381G1::B;
    let y0 = Option::<Fp<bls12_381::FpBls381, 6>>::from(y2.sqrt())
        .ok_or(EncodingError::NotOnCurve)?;
    let want_large = Choice::from(u8::from(flags & FLAG_SORT != 0));
    let y = Fp::conditional_select(&y0, &-y0, lexicographically_largest(&y0) ^ want_large);
    let p = Affine::<Bls12381G1> { x, y };
    if bool::from(p.is_neutral()) {
        // x = 0 without the infinity flag never decodes to a valid point
        return Err(EncodingError::NotOnCurve);
    }
    if !bool::from(Bls12381G1::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

/// Uncompressed G1: 96 bytes `x ‖ y` with flag bits on the first byte.
pub fn g1_to_uncompressed(p: &Affine<Bls12381G1>) -> [u8; 96] {
    let mut out = [0u8; 96];
    let inf = p.is_neutral();
    let x = Fp::conditional_select(&p.x, &Fp::ZERO, inf);
    let y = Fp::conditional_select(&p.y, &Fp::ZERO, inf);
    x.to_be_bytes(&mut out[..48]);
    y.to_be_bytes(&mut out[48..]);
    out[0] |= u8::from(bool::from(inf)) * FLAG_INFINITY;
    out
}

pub fn g1_from_uncompressed(bytes: &[u8; 96]) -> Result<Affine<Bls12381G1>, EncodingError> {
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED != 0 || flags & FLAG_SORT != 0 {
        return Err(EncodingError::InvalidFlags);
    }
    let mut xb: [u8; 48] = bytes[..48].try_into().expect("length checked");
    xb[0] &= 0x1f;
    let yb: [u8; 48] = bytes[48..].try_into().expect("length checked");
    let x = Option::<Fp<bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(&xb))
        .ok_or(EncodingError::NonCanonical)?;
    let y = Option::<Fp<bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(&yb))
        .ok_or(EncodingError::NonCanonical)?;
    if flags & FLAG_INFINITY != 0 {
        if !bool::from(x.is_zero() & y.is_zero()) {
            return Err(EncodingError::InvalidFlags);
        }
        return Ok(Affine::NEUTRAL);
    }
    let p = Affine::<Bls12381G1> { x, y };
    if !bool::from(p.is_on_curve()) || bool::from(p.is_neutral()) {
        return Err(EncodingError::NotOnCurve);
    }
    if !bool::from(Bls12381G1::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

/// Compress a G2 point to 96 bytes (`x.c1 ‖ x.c0`).
pub fn g2_to_compressed(p: &Affine<Bls12381G2>) -> [u8; 96] {
    let mut out = [0u8; 96];
    let inf = p.is_neutral();
    let x = Fp2::conditional_select(&p.x, &Fp2::ZERO, inf);
    x.c1.to_be_bytes(&mut out[..48]);
    x.c0.to_be_bytes(&mut out[48..]);
    let mut flags = FLAG_COMPRESSED;
    flags |= u8::from(bool::from(inf)) * FLAG_INFINITY;
    flags |= u8::from(bool::from(fp2_lexicographically_largest(&p.y) & !inf)) * FLAG_SORT;
    out[0] |= flags;
    out
}

/// Decompress and fully validate a 96-byte G2 encoding.
pub fn g2_from_compressed(bytes: &[u8; 96]) -> Result<Affine<Bls12381G2>, EncodingError> {
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED == 0 {
        return Err(EncodingError::InvalidFlags);
    }
    let mut c1b: [u8; 48] = bytes[..48].try_into().expect("length checked");
    c1b[0] &= 0x1f;
    let c0b: [u8; 48] = bytes[48..].try_into().expect("length checked");
    let c1 = Option::<Fp<bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(&c1b))
        .ok_or(EncodingError::NonCanonical)?;
    let c0 = Option::<Fp<bls12_381::FpBls381, 6>>::from(Fp::from_be_bytes(&c0b))
        .ok_or(EncodingError::NonCanonical)?;
    let x = Fp2::new(c0, c1);
    if flags & FLAG_INFINITY != 0 {
        if flags & FLAG_SORT != 0 || !bool::from(x.is_zero()) {
            return Err(EncodingError::InvalidFlags);
        }
        return Ok(Affine::NEUTRAL);
    }
    let y2 = x.square() * x + Bls12381G2::B;
    let y0 = Option::<Fp2<bls12_381::FpBls381, 6>>::from(y2.sqrt())
        .ok_or(EncodingError::NotOnCurve)?;
    let want_large = Choice::from(u8::from(flags & FLAG_SORT != 0));
    let y = Fp2::conditional_select(
        &y0,
        &-y0,
        fp2_lexicographically_largest(&y0) ^ want_large,
    );
    let p = Affine::<Bls12381G2> { x, y };
    if bool::from(p.is_neutral()) {
        return Err(EncodingError::NotOnCurve);
    }
    if !bool::from(Bls12381G2::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

// ---------------------------------------------------------------------------
// EVM alt_bn128 byte formats
// ---------------------------------------------------------------------------

/// Parse an EVM G1 point: 64 bytes big-endian `x ‖ y`; `(0,0)` = infinity.
pub fn bn254_g1_from_evm(bytes: &[u8]) -> Result<Affine<Bn254G1>, EncodingError> {
    if bytes.len() != 64 {
        return Err(EncodingError::InvalidLength);
    }
    let x = Option::<Fp<bn254::FpBn254, 4>>::from(Fp::from_be_bytes(&bytes[..32]))
        .ok_or(EncodingError::NonCanonical)?;
    let y = Option::<Fp<bn254::FpBn254, 4>>::from(Fp::from_be_bytes(&bytes[32..]))
        .ok_or(EncodingError::NonCanonical)?;
    let p = Affine::<Bn254G1> { x, y };
    if !bool::from(p.is_on_curve()) {
        return Err(EncodingError::NotOnCurve);
    }
    Ok(p)
}

pub fn bn254_g1_to_evm(p: &Affine<Bn254G1>) -> [u8; 64] {
    let mut out = [0u8; 64];
    p.x.to_be_bytes(&mut out[..32]);
    p.y.to_be_bytes(&mut out[32..]);
    out
}

/// Parse an EVM G2 point: 128 bytes `x_im ‖ x_re ‖ y_im ‖ y_re`; validates
/// curve and subgroup membership.
pub fn bn254_g2_from_evm(bytes: &[u8]) -> Result<Affine<Bn254G2>, EncodingError> {
    if bytes.len() != 128 {
        return Err(EncodingError::InvalidLength);
    }
    let fe = |b: &[u8]| -> Result<Fp<bn254::FpBn254, 4>, EncodingError> {
        Option::from(Fp::from_be_bytes(b)).ok_or(EncodingError::NonCanonical)
    };
    let x = Fp2::new(fe(&bytes[32..64])?, fe(&bytes[..32])?);
    let y = Fp2::new(fe(&bytes[96..128])?, fe(&bytes[64..96])?);
    let p = Affine::<Bn254G2> { x, y };
    if bool::from(p.is_neutral()) {
        return Ok(p);
    }
    if !bool::from(p.is_on_curve()) {
        return Err(EncodingError::NotOnCurve);
    }
    if !bool::from(Bn254G2::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

// ---------------------------------------------------------------------------
// EIP-2537 padded BLS12-381 formats
// ---------------------------------------------------------------------------

fn padded_fp(bytes: &[u8]) -> Result<Fp<bls12_381::FpBls381, 6>, EncodingError> {
    if bytes.len() != 64 {
        return Err(EncodingError::InvalidLength);
    }
    if bytes[..16].iter().any(|&b| b != 0) {
        return Err(EncodingError::NonCanonical);
    }
    Option::from(Fp::from_be_bytes(&bytes[16..])).ok_or(EncodingError::NonCanonical)
}

fn pad_fp(v: &Fp<bls12_381::FpBls381, 6>, out: &mut [u8]) {
    out[..16].fill(0);
    v.to_be_bytes(&mut out[16..64]);
}

/// EIP-2537 G1: 128 bytes, two 64-byte padded coordinates; all-zero input
/// is the point at infinity. Subgroup membership is enforced.
pub fn bls12_381_g1_from_eip2537(
    bytes: &[u8],
    check_subgroup: bool,
) -> Result<Affine<Bls12381G1>, EncodingError> {
    if bytes.len() != 128 {
        return Err(EncodingError::InvalidLength);
    }
    let x = padded_fp(&bytes[..64])?;
    let y = padded_fp(&bytes[64..])?;
    let p = Affine::<Bls12381G1> { x, y };
    if bool::from(p.is_neutral()) {
        return Ok(p);
    }
    if !bool::from(p.is_on_curve()) {
        return Err(EncodingError::NotOnCurve);
    }
    if check_subgroup && !bool::from(Bls12381G1::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

pub fn bls12_381_g1_to_eip2537(p: &Affine<Bls12381G1>) -> [u8; 128] {
    let mut out = [0u8; 128];
    let inf = p.is_neutral();
    let x = Fp::conditional_select(&p.x, &Fp::ZERO, inf);
    let y = Fp::conditional_select(&p.y, &Fp::ZERO, inf);
    pad_fp(&x, &mut out[..64]);
    pad_fp(&y, &mut out[64..]);
    out
}

/// EIP-2537 G2: 256 bytes, coordinates ordered `x.c0 ‖ x.c1 ‖ y.c0 ‖ y.c1`.
pub fn bls12_381_g2_from_eip2537(
    bytes: &[u8],
    check_subgroup: bool,
) -> Result<Affine<Bls12381G2>, EncodingError> {
    if bytes.len() != 256 {
        return Err(EncodingError::InvalidLength);
    }
    let x = Fp2::new(padded_fp(&bytes[..64])?, padded_fp(&bytes[64..128])?);
    let y = Fp2::new(padded_fp(&bytes[128..192])?, padded_fp(&bytes[192..])?);
    let p = Affine::<Bls12381G2> { x, y };
    if bool::from(p.is_neutral()) {
        return Ok(p);
    }
    if !bool::from(p.is_on_curve()) {
        return Err(EncodingError::NotOnCurve);
    }
    if check_subgroup && !bool::from(Bls12381G2::is_in_subgroup(&p)) {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(p)
}

pub fn bls12_381_g2_to_eip2537(p: &Affine<Bls12381G2>) -> [u8; 256] {
    let mut out = [0u8; 256];
    let inf = p.is_neutral();
    let x = Fp2::conditional_select(&p.x, &Fp2::ZERO, inf);
    let y = Fp2::conditional_select(&p.y, &Fp2::ZERO, inf);
    pad_fp(&x.c0, &mut out[..64]);
    pad_fp(&x.c1, &mut out[64..128]);
    pad_fp(&y.c0, &mut out[128..192]);
    pad_fp(&y.c1, &mut out[192..256]);
    out
}
