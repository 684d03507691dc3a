//! KZG polynomial commitments with the EIP-4844 blob surface: 4096-element
//! blobs in bit-reversed roots-of-unity evaluation form over the BLS12-381
//! scalar field, commitments and proofs as 48-byte compressed G1 points.

use sha2::{Digest, Sha256};

use pairex_curves::fields::{FrBls381, Fr381};
use pairex_curves::instances::{Bls12381G1, Bls12381G2, G1Affine381, G2Affine381};
use pairex_curves::msm::msm_vartime;
use pairex_curves::scalar_mul::mul_vartime;
use pairex_curves::serialize::{g1_from_compressed, g1_to_compressed};
use pairex_curves::weierstrass::Jacobian;
use pairex_pairing::bls12_381::multi_pairing;

use crate::CommitmentError;
use crate::domain::RootsDomain;

pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;
/// G2 monomial powers carried by the trusted setup.
pub const SETUP_G2_LENGTH: usize = 65;

/// Domain tag for the blob-proof Fiat-Shamir challenge.
const CHALLENGE_DOMAIN: &[u8; 16] = b"PXBLOBVERIFY_V1_";
/// Domain tag for batched blob verification randomness.
const BATCH_DOMAIN: &[u8; 16] = b"PXBLOBBATCH__V1_";

/// A blob: 4096 scalars in bit-reversed evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob(pub Vec<Fr381>);

impl Blob {
    /// Parse the canonical 131072-byte encoding; every 32-byte chunk must be
    /// a canonical scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CommitmentError> {
        if bytes.len() != BYTES_PER_BLOB {
            return Err(CommitmentError::InvalidBlob);
        }
        let mut evals = Vec::with_capacity(FIELD_ELEMENTS_PER_BLOB);
        for chunk in bytes.chunks_exact(BYTES_PER_FIELD_ELEMENT) {
            let fe = Option::<Fr381>::from(Fr381::from_be_bytes(chunk))
                .ok_or(CommitmentError::InvalidBlob)?;
            evals.push(fe);
        }
        Ok(Self(evals))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; BYTES_PER_BLOB];
        for (chunk, fe) in out.chunks_exact_mut(BYTES_PER_FIELD_ELEMENT).zip(&self.0) {
            fe.to_be_bytes(chunk);
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgCommitment(pub [u8; 48]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgProof(pub [u8; 48]);

/// In-memory trusted setup: the Lagrange-basis G1 powers (bit-reversed
/// order, matching blobs) and the monomial G2 powers.
pub struct KzgSettings {
    pub g1_lagrange: Vec<G1Affine381>,
    pub g2_monomial: Vec<G2Affine381>,
    pub domain: RootsDomain<FrBls381, 4>,
}

impl KzgSettings {
    pub fn new(
        g1_lagrange: Vec<G1Affine381>,
        g2_monomial: Vec<G2Affine381>,
    ) -> Result<Self, CommitmentError> {
        if !g1_lagrange.len().is_power_of_two() || g2_monomial.len() < 2 {
            return Err(CommitmentError::InvalidSetup);
        }
        let domain = RootsDomain::new(g1_lagrange.len())?;
        Ok(Self {
            g1_lagrange,
            g2_monomial,
            domain,
        })
    }

    /// Deterministic *insecure* setup from a known secret — development and
    /// tests only; the secret is right there in the call site.
    pub fn insecure_dev_setup(tau: &Fr381) -> Result<Self, CommitmentError> {
        Self::insecure_dev_setup_sized(tau, FIELD_ELEMENTS_PER_BLOB)
    }

    /// Dev setup over a smaller power-of-two domain (fast tests).
    pub fn insecure_dev_setup_sized(
        tau: &Fr381,
        size: usize,
    ) -> Result<Self, CommitmentError> {
        let domain = RootsDomain::<FrBls381, 4>::new(size)?;
        // L_i(τ) = (τ^N − 1)/N · ω_i/(τ − ω_i)
        let mut zn = *tau;
        for _ in 0..usize::ilog2(size) {
            zn = zn.square();
        }
        let n_inv = Fr381::from_u64(size as u64).invert().unwrap_or(Fr381::ZERO);
        let scale = (zn - Fr381::ONE) * n_inv;
        let mut denoms: Vec<Fr381> = domain.roots.iter().map(|w| *tau - *w).collect();
        pairex_math::batch_invert(&mut denoms);

        let g1 = Jacobian::<Bls12381G1>::generator();
        let g1_points: Vec<Jacobian<Bls12381G1>> = domain
            .roots
            .iter()
            .zip(&denoms)
            .map(|(w, d)| mul_vartime(&g1, &(scale * *w * *d)))
            .collect();
        let g1_lagrange = Jacobian::batch_normalize(&g1_points);

        let g2 = Jacobian::<Bls12381G2>::generator();
        let mut g2_monomial = Vec::with_capacity(SETUP_G2_LENGTH);
        let mut pow = Fr381::ONE;
        for _ in 0..SETUP_G2_LENGTH {
            g2_monomial.push(mul_vartime(&g2, &pow).to_affine());
            pow *= *tau;
        }
        Ok(Self {
            g1_lagrange,
            g2_monomial,
            domain,
        })
    }

    fn size(&self) -> usize {
        self.g1_lagrange.len()
    }
}

fn commit_evals(
    settings: &KzgSettings,
    evals: &[Fr381],
) -> Result<G1Affine381, CommitmentError> {
    let acc = msm_vartime::<Bls12381G1>(evals, &settings.g1_lagrange)
        .map_err(|_| CommitmentError::LengthMismatch)?;
    Ok(acc.to_affine())
}

/// `blob_to_kzg_commitment`.
pub fn blob_to_kzg_commitment(
    settings: &KzgSettings,
    blob: &Blob,
) -> Result<KzgCommitment, CommitmentError> {
    if blob.0.len() != settings.size() {
        return Err(CommitmentError::WrongDomainSize);
    }
    Ok(KzgCommitment(g1_to_compressed(&commit_evals(
        settings, &blob.0,
    )?)))
}

/// `compute_kzg_proof`: open the blob polynomial at `z`, returning the
/// proof and the claimed evaluation.
pub fn compute_kzg_proof(
    settings: &KzgSettings,
    blob: &Blob,
    z: &Fr381,
) -> Result<(KzgProof, Fr381), CommitmentError> {
    if blob.0.len() != settings.size() {
        return Err(CommitmentError::WrongDomainSize);
    }
    let y = settings.domain.evaluate(&blob.0, z);
    let q = settings.domain.quotient(&blob.0, z, &y);
    let proof = commit_evals(settings, &q)?;
    Ok((KzgProof(g1_to_compressed(&proof)), y))
}

/// `verify_kzg_proof`: the pairing equation
/// `e(C − [y]G₁, G₂) == e(π, [τ]G₂ − [z]G₂)`.
pub fn verify_kzg_proof(
    settings: &KzgSettings,
    commitment: &KzgCommitment,
    z: &Fr381,
    y: &Fr381,
    proof: &KzgProof,
) -> Result<bool, CommitmentError> {
    let c = g1_from_compressed(&commitment.0).map_err(|_| CommitmentError::VerificationFailed)?;
    let pi = g1_from_compressed(&proof.0).map_err(|_| CommitmentError::VerificationFailed)?;

    let g1 = Jacobian::<Bls12381G1>::generator();
    let c_minus_y = c.to_jacobian().add_vartime(&mul_vartime(&g1, y).neg());
    let g2 = G2Affine381::generator();
    let tau_g2 = settings.g2_monomial[1];
    let z_g2 = mul_vartime(&g2.to_jacobian(), z);
    let rhs_g2 = tau_g2.to_jacobian().add_vartime(&z_g2.neg());

    // e(C − yG₁, −G₂)·e(π, τG₂ − zG₂) == 1
    let out = multi_pairing(&[
        (c_minus_y.to_affine(), g2.neg()),
        (pi, rhs_g2.to_affine()),
    ]);
    Ok(out == pairex_pairing::bls12_381::Gt381::ONE)
}

/// Fiat-Shamir evaluation challenge for a blob/commitment pair.
fn compute_challenge(blob: &Blob, commitment: &KzgCommitment) -> Fr381 {
    let mut h = Sha256::new();
    h.update(CHALLENGE_DOMAIN);
    h.update((blob.0.len() as u64).to_be_bytes());
    h.update(blob.to_bytes());
    h.update(commitment.0);
    Fr381::from_be_bytes_mod_order(&h.finalize())
}

/// `compute_blob_kzg_proof`: prove the blob at its own Fiat-Shamir
/// challenge point.
pub fn compute_blob_kzg_proof(
    settings: &KzgSettings,
    blob: &Blob,
    commitment: &KzgCommitment,
) -> Result<KzgProof, CommitmentError> {
    let z = compute_challenge(blob, commitment);
    let (proof, _y) = compute_kzg_proof(settings, blob, &z)?;
    Ok(proof)
}

/// `verify_blob_kzg_proof`.
pub fn verify_blob_kzg_proof(
    settings: &KzgSettings,
    blob: &Blob,
    commitment: &KzgCommitment,
    proof: &KzgProof,
) -> Result<bool, CommitmentError> {
    if blob.0.len() != settings.size() {
        return Err(CommitmentError::WrongDomainSize);
    }
    let z = compute_challenge(blob, commitment);
    let y = settings.domain.evaluate(&blob.0, &z);
    verify_kzg_proof(settings, commitment, &z, &y, proof)
}

/// Batched `verify_blob_kzg_proof`: random linear combination with powers
/// of a transcript-derived `r`, two pairings total.
pub fn verify_blob_kzg_proof_batch(
    settings: &KzgSettings,
    blobs: &[Blob],
    commitments: &[KzgCommitment],
    proofs: &[KzgProof],
) -> Result<bool, CommitmentError> {
    if blobs.len() != commitments.len() || blobs.len() != proofs.len() {
        return Err(CommitmentError::LengthMismatch);
    }
    if blobs.is_empty() {
        return Ok(true);
    }
    tracing::debug!(count = blobs.len(), "batched blob verification");

    let mut h = Sha256::new();
    h.update(BATCH_DOMAIN);
    h.update((blobs.len() as u64).to_be_bytes());
    for (c, p) in commitments.iter().zip(proofs) {
        h.update(c.0);
        h.update(p.0);
    }
    let r = Fr381::from_be_bytes_mod_order(&h.finalize());

    // Σ rⁱ·(Cᵢ − yᵢG₁ + zᵢπᵢ) against Σ rⁱ·πᵢ:
    //   e(agg_lhs, −G₂) · e(agg_proof, τG₂) == 1
    let g1 = Jacobian::<Bls12381G1>::generator();
    let mut lhs = Jacobian::<Bls12381G1>::NEUTRAL;
    let mut agg_proof = Jacobian::<Bls12381G1>::NEUTRAL;
    let mut r_pow = Fr381::ONE;
    for ((blob, commitment), proof) in blobs.iter().zip(commitments).zip(proofs) {
        if blob.0.len() != settings.size() {
            return Err(CommitmentError::WrongDomainSize);
        }
        let c = g1_from_compressed(&commitment.0)
            .map_err(|_| CommitmentError::VerificationFailed)?;
        let pi =
            g1_from_compressed(&proof.0).map_err(|_| CommitmentError::VerificationFailed)?;
        let z = compute_challenge(blob, commitment);
        let y = settings.domain.evaluate(&blob.0, &z);

        let term = c
            .to_jacobian()
            .add_vartime(&mul_vartime(&g1, &y).neg())
            .add_vartime(&mul_vartime(&pi.to_jacobian(), &z));
        lhs = lhs.add_vartime(&mul_vartime(&term, &r_pow));
        agg_proof = agg_proof.add_vartime(&mul_vartime(&pi.to_jacobian(), &r_pow));
        r_pow *= r;
    }
    let out = multi_pairing(&[
        (lhs.to_affine(), G2Affine381::generator().neg()),
        (agg_proof.to_affine(), settings.g2_monomial[1]),
    ]);
    Ok(out == pairex_pairing::bls12_381::Gt381::ONE)
}

/// Parallel quotient computation for `compute_kzg_proof` over an
/// externally-owned pool (`parallelFor` over the evaluation rows).
#[cfg(feature = "parallel")]
pub fn par_compute_kzg_proof(
    pool: &rayon::ThreadPool,
    settings: &KzgSettings,
    blob: &Blob,
    z: &Fr381,
) -> Result<(KzgProof, Fr381), CommitmentError> {
    use rayon::prelude::*;
    if blob.0.len() != settings.size() {
        return Err(CommitmentError::WrongDomainSize);
    }
    let y = settings.domain.evaluate(&blob.0, z);
    // out-of-domain fast path computed in parallel; in-domain falls back
    let in_domain = settings.domain.roots.iter().any(|w| w == z);
    let q = if in_domain {
        settings.domain.quotient(&blob.0, z, &y)
    } else {
        let mut inv: Vec<Fr381> = settings.domain.roots.iter().map(|w| *w - *z).collect();
        pairex_math::batch_invert(&mut inv);
        pool.install(|| {
            blob.0
                .par_iter()
                .zip(inv.par_iter())
                .map(|(fi, d)| (*fi - y) * *d)
                .collect()
        })
    };
    let proof = pool.install(|| commit_evals(settings, &q))?;
    Ok((KzgProof(g1_to_compressed(&proof)), y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_settings() -> KzgSettings {
        // 64-point domain keeps the dev setup fast while exercising every
        // code path
        KzgSettings::insecure_dev_setup_sized(&Fr381::from_u64(0x5eed), 64).unwrap()
    }

    fn rand_blob(n: usize, rng: &mut StdRng) -> Blob {
        Blob((0..n).map(|_| Fr381::random(&mut *rng)).collect())
    }

    #[test]
    fn kzg_proof_round_trip() {
        let settings = small_settings();
        let mut rng = StdRng::seed_from_u64(4);
        let blob = rand_blob(64, &mut rng);
        let commitment = blob_to_kzg_commitment(&settings, &blob).unwrap();
        let z = Fr381::from_u64(0xabcdef);
        let (proof, y) = compute_kzg_proof(&settings, &blob, &z).unwrap();
        assert!(verify_kzg_proof(&settings, &commitment, &z, &y, &proof).unwrap());
        // wrong evaluation rejects
        let y_bad = y + Fr381::ONE;
        assert!(!verify_kzg_proof(&settings, &commitment, &z, &y_bad, &proof).unwrap());
    }

    #[test]
    fn kzg_proof_in_domain_point() {
        let settings = small_settings();
        let mut rng = StdRng::seed_from_u64(5);
        let blob = rand_blob(64, &mut rng);
        let commitment = blob_to_kzg_commitment(&settings, &blob).unwrap();
        let z = settings.domain.roots[7];
        let (proof, y) = compute_kzg_proof(&settings, &blob, &z).unwrap();
        assert_eq!(y, blob.0[7]);
        assert!(verify_kzg_proof(&settings, &commitment, &z, &y, &proof).unwrap());
    }

    #[test]
    fn blob_proof_and_batch() {
        let settings = small_settings();
        let mut rng = StdRng::seed_from_u64(6);
        let blobs: Vec<Blob> = (0..3).map(|_| rand_blob(64, &mut rng)).collect();
        let commitments: Vec<KzgCommitment> = blobs
            .iter()
            .map(|b| blob_to_kzg_commitment(&settings, b).unwrap())
            .collect();
        let proofs: Vec<KzgProof> = blobs
            .iter()
            .zip(&commitments)
            .map(|(b, c)| compute_blob_kzg_proof(&settings, b, c).unwrap())
            .collect();
        for ((b, c), p) in blobs.iter().zip(&commitments).zip(&proofs) {
            assert!(verify_blob_kzg_proof(&settings, b, c, p).unwrap());
        }
        assert!(verify_blob_kzg_proof_batch(&settings, &blobs, &commitments, &proofs).unwrap());

        // swap two proofs: batch must fail
        let swapped = vec![proofs[1], proofs[0], proofs[2]];
        assert!(
            !verify_blob_kzg_proof_batch(&settings, &blobs, &commitments, &swapped).unwrap()
        );
    }

    #[test]
    fn blob_byte_round_trip() {
        let mut rng = StdRng::seed_from_u64(9);
        let blob = rand_blob(64, &mut rng);
        let bytes = blob.to_bytes();
        assert_eq!(bytes.len(), 64 * BYTES_PER_FIELD_ELEMENT);
        // non-canonical scalar rejected
        let bad = vec![0xffu8; BYTES_PER_BLOB];
        assert!(Blob::from_bytes(&bad).is_err());
    }
}
