//! BLS signatures over BLS12-381: minimal-pubkey-size variant (48-byte G1
//! public keys, 96-byte G2 signatures), IETF hash-and-sign with proof-of-
//! possession ciphersuite tags, and signature aggregation.
//!
//! Secret keys are constant-time end to end: keygen derives through
//! HKDF-SHA256, scalar multiplications use the GLV/windowed constant-time
//! paths, and key material zeroizes on drop.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use pairex_curves::fields::Fr381;
use pairex_curves::hash_to_curve::hash_to_g2_bls12_381;
use pairex_curves::instances::{Bls12381G1, G1Affine381, G2Affine381};
use pairex_curves::scalar_mul::{mul, mul_glv};
use pairex_curves::serialize::{
    g1_from_compressed, g1_to_compressed, g2_from_compressed, g2_to_compressed,
};
use pairex_curves::weierstrass::{Jacobian, Projective};
use pairex_math::EncodingError;
use pairex_pairing::bls12_381::{Gt381, multi_pairing};

/// IETF ciphersuite DST for proof-of-possession signatures on G2.
pub const DST_POP: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";
const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// A BLS secret key; zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Fr381);

/// A BLS public key (a G1 subgroup point, never infinity).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub(crate) G1Affine381);

/// A BLS signature (a G2 subgroup point).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub(crate) G2Affine381);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BlsError {
    #[error("input keying material must be at least 32 bytes")]
    ShortIkm,
    #[error("invalid encoding: {0}")]
    Encoding(#[from] EncodingError),
    #[error("public key or signature is the point at infinity")]
    Infinity,
    #[error("nothing to aggregate")]
    EmptyAggregate,
}

fn hkdf_extract(salt: &[u8], ikm: &[u8]) -> [u8; 32] {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(salt).expect("hmac accepts any key size");
    mac.update(ikm);
    mac.finalize().into_bytes().into()
}

fn hkdf_expand(prk: &[u8; 32], info: &[u8], out: &mut [u8]) {
    let mut t: Vec<u8> = Vec::new();
    let mut filled = 0;
    let mut counter = 1u8;
    while filled < out.len() {
        let mut mac =
            <Hmac<Sha256> as Mac>::new_from_slice(prk).expect("hmac accepts any key size");
        mac.update(&t);
        mac.update(info);
        mac.update(&[counter]);
        t = mac.finalize().into_bytes().to_vec();
        let take = (out.len() - filled).min(t.len());
        out[filled..filled + take].copy_from_slice(&t[..take]);
        filled += take;
        counter += 1;
    }
}

impl SecretKey {
    /// `KeyGen(IKM)` per the IETF BLS draft: HKDF-SHA256 loop until a
    /// non-zero scalar comes out.
    pub fn keygen(ikm: &[u8]) -> Result<Self, BlsError> {
        if ikm.len() < 32 {
            return Err(BlsError::ShortIkm);
        }
        let mut ikm0 = ikm.to_vec();
        ikm0.push(0);
        let mut salt: Vec<u8> = KEYGEN_SALT.to_vec();
        loop {
            let salt_digest: [u8; 32] = Sha256::digest(&salt).into();
            let prk = hkdf_extract(&salt_digest, &ikm0);
            let mut okm = [0u8; 48];
            // key_info = "" ‖ I2OSP(L = 48, 2)
            hkdf_expand(&prk, &48u16.to_be_bytes(), &mut okm);
            let sk = Fr381::from_be_bytes_mod_order(&okm);
            okm.zeroize();
            if !bool::from(sk.is_zero()) {
                ikm0.zeroize();
                return Ok(Self(sk));
            }
            salt = salt_digest.to_vec();
        }
    }

    /// Wrap an existing non-zero scalar.
    pub fn from_scalar(sk: Fr381) -> Option<Self> {
        if bool::from(sk.is_zero()) {
            return None;
        }
        Some(Self(sk))
    }

    pub fn public_key(&self) -> PublicKey {
        let g = Projective::<Bls12381G1>::generator();
        PublicKey(mul_glv(&g, &self.0).to_affine())
    }

    /// `Sign(sk, msg)` under `dst`.
    pub fn sign(&self, msg: &[u8], dst: &[u8]) -> Signature {
        let h = hash_to_g2_bls12_381(msg, dst);
        Signature(mul(&h.to_projective(), &self.0).to_affine())
    }
}

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; 48] {
        g1_to_compressed(&self.0)
    }

    /// Decode and validate (subgroup and non-infinity).
    pub fn from_bytes(bytes: &[u8; 48]) -> Result<Self, BlsError> {
        let p = g1_from_compressed(bytes)?;
        if bool::from(p.is_neutral()) {
            return Err(BlsError::Infinity);
        }
        Ok(Self(p))
    }
}

impl Signature {
    pub fn to_bytes(&self) -> [u8; 96] {
        g2_to_compressed(&self.0)
    }

    pub fn from_bytes(bytes: &[u8; 96]) -> Result<Self, BlsError> {
        let p = g2_from_compressed(bytes)?;
        if bool::from(p.is_neutral()) {
            return Err(BlsError::Infinity);
        }
        Ok(Self(p))
    }

    /// Aggregate signatures by summation.
    pub fn aggregate(sigs: &[Signature]) -> Result<Signature, BlsError> {
        if sigs.is_empty() {
            return Err(BlsError::EmptyAggregate);
        }
        let mut acc = Jacobian::NEUTRAL;
        for s in sigs {
            acc = acc.add_affine_vartime(&s.0);
        }
        Ok(Signature(acc.to_affine()))
    }
}

/// `Verify(pk, msg, sig)`: `e(G₁, sig) == e(pk, H(msg))`, evaluated as one
/// two-pair product.
pub fn verify(pk: &PublicKey, msg: &[u8], sig: &Signature, dst: &[u8]) -> bool {
    if bool::from(pk.0.is_neutral() | sig.0.is_neutral()) {
        return false;
    }
    let h = hash_to_g2_bls12_381(msg, dst);
    let out = multi_pairing(&[
        (G1Affine381::generator().neg(), sig.0),
        (pk.0, h),
    ]);
    out == Gt381::ONE
}

/// `AggregateVerify`: distinct messages, one shared Miller loop.
pub fn aggregate_verify(
    pks: &[PublicKey],
    msgs: &[&[u8]],
    sig: &Signature,
    dst: &[u8],
) -> bool {
    if pks.is_empty() || pks.len() != msgs.len() {
        return false;
    }
    if pks.iter().any(|pk| bool::from(pk.0.is_neutral())) || bool::from(sig.0.is_neutral()) {
        return false;
    }
    let mut pairs = Vec::with_capacity(pks.len() + 1);
    pairs.push((G1Affine381::generator().neg(), sig.0));
    for (pk, msg) in pks.iter().zip(msgs) {
        pairs.push((pk.0, hash_to_g2_bls12_381(msg, dst)));
    }
    multi_pairing(&pairs) == Gt381::ONE
}

/// `FastAggregateVerify`: one message, public keys summed first (the
/// proof-of-possession setting).
pub fn fast_aggregate_verify(
    pks: &[PublicKey],
    msg: &[u8],
    sig: &Signature,
    dst: &[u8],
) -> bool {
    if pks.is_empty() {
        return false;
    }
    let mut acc = Jacobian::<Bls12381G1>::NEUTRAL;
    for pk in pks {
        if bool::from(pk.0.is_neutral()) {
            return false;
        }
        acc = acc.add_affine_vartime(&pk.0);
    }
    verify(&PublicKey(acc.to_affine()), msg, sig, dst)
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_verify_round_trip() {
        let sk = SecretKey::keygen(&[7u8; 32]).unwrap();
        let pk = sk.public_key();
        let msg = b"attestation data";
        let sig = sk.sign(msg, DST_POP);
        assert!(verify(&pk, msg, &sig, DST_POP));
        // tampered message fails
        assert!(!verify(&pk, b"attestation datb", &sig, DST_POP));
        // tampered signature fails
        let mut bytes = sig.to_bytes();
        bytes[95] ^= 1;
        match Signature::from_bytes(&bytes) {
            Ok(bad) => assert!(!verify(&pk, msg, &bad, DST_POP)),
            Err(_) => {} // flipping a bit may already break decoding
        }
    }

    #[test]
    fn keygen_is_deterministic_and_ikm_sensitive() {
        let a = SecretKey::keygen(&[1u8; 32]).unwrap();
        let b = SecretKey::keygen(&[1u8; 32]).unwrap();
        let c = SecretKey::keygen(&[2u8; 32]).unwrap();
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
        assert!(SecretKey::keygen(&[0u8; 16]).is_err());
    }

    #[test]
    fn aggregate_same_message() {
        let sks: Vec<SecretKey> = (0..4)
            .map(|i| SecretKey::keygen(&[i as u8 + 1; 32]).unwrap())
            .collect();
        let pks: Vec<PublicKey> = sks.iter().map(SecretKey::public_key).collect();
        let msg = b"epoch 123456";
        let sigs: Vec<Signature> = sks.iter().map(|sk| sk.sign(msg, DST_POP)).collect();
        let agg = Signature::aggregate(&sigs).unwrap();
        assert!(fast_aggregate_verify(&pks, msg, &agg, DST_POP));
        assert!(!fast_aggregate_verify(&pks[..3], msg, &agg, DST_POP));
    }

    #[test]
    fn aggregate_distinct_messages() {
        let sks: Vec<SecretKey> = (0..3)
            .map(|i| SecretKey::keygen(&[i as u8 + 10; 32]).unwrap())
            .collect();
        let pks: Vec<PublicKey> = sks.iter().map(SecretKey::public_key).collect();
        let msgs: [&[u8]; 3] = [b"a", b"b", b"c"];
        let sigs: Vec<Signature> = sks
            .iter()
            .zip(msgs)
            .map(|(sk, m)| sk.sign(m, DST_POP))
            .collect();
        let agg = Signature::aggregate(&sigs).unwrap();
        assert!(aggregate_verify(&pks, &msgs, &agg, DST_POP));
        let swapped: [&[u8]; 3] = [b"b", b"a", b"c"];
        assert!(!aggregate_verify(&pks, &swapped, &agg, DST_POP));
    }

    #[test]
    fn pubkey_bytes_round_trip() {
        let sk = SecretKey::keygen(&[9u8; 32]).unwrap();
        let pk = sk.public_key();
        let round = PublicKey::from_bytes(&pk.to_bytes()).unwrap();
        assert_eq!(pk, round);
    }
}
