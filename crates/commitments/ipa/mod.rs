//! Inner Product Argument commitments, Ethereum Verkle flavour: Pedersen
//! vector commitments over Banderwagon, a 256-point linear evaluation
//! domain, log-round folding proofs, and a grouped-by-opening multi-proof.

pub mod multiproof;

pub use multiproof::IpaMultiProof;

use pairex_curves::edwards::{Banderwagon, banderwagon_msm_vartime};
use pairex_curves::fields::FrBander;
use pairex_math::{FieldArith, batch_invert};
use sha2::{Digest, Sha256};

use crate::domain::{LinearDomain, PolynomialEval};
use crate::transcript::Transcript;
use crate::CommitmentError;

/// Verkle vector length (and polynomial domain size).
pub const DOMAIN_SIZE: usize = 256;
/// log₂ of the domain size — the number of folding rounds.
pub const ROUNDS: usize = 8;

type F = FrBander;

/// Public parameters: the fixed Pedersen basis `G[0..N]` plus the linear
/// evaluation domain tables.
pub struct IpaProverKey {
    pub basis: Vec<Banderwagon>,
    pub domain: LinearDomain<pairex_curves::fields::FrBandersnatch, 4>,
}

impl IpaProverKey {
    /// Deterministic CRS: try-and-increment over SHA-256 outputs, seeded by
    /// a domain label. Every candidate digest is interpreted as a canonical
    /// Banderwagon encoding; invalid ones are skipped.
    pub fn generate(seed: &[u8]) -> Result<Self, CommitmentError> {
        let mut basis = Vec::with_capacity(DOMAIN_SIZE);
        let mut ctr: u64 = 0;
        while basis.len() < DOMAIN_SIZE {
            let mut h = Sha256::new();
            h.update(seed);
            h.update((basis.len() as u64).to_be_bytes());
            h.update(ctr.to_be_bytes());
            let digest: [u8; 32] = h.finalize().into();
            ctr += 1;
            if let Some(p) = Option::<Banderwagon>::from(Banderwagon::from_bytes(&digest)) {
                basis.push(p);
            }
        }
        Ok(Self {
            basis,
            domain: LinearDomain::new(DOMAIN_SIZE)?,
        })
    }

    /// Pedersen commit: `C = ⟨a, G⟩`.
    pub fn commit(&self, poly: &PolynomialEval<F>) -> Result<Banderwagon, CommitmentError> {
        if poly.len() != DOMAIN_SIZE {
            return Err(CommitmentError::WrongDomainSize);
        }
        Ok(banderwagon_msm_vartime(&poly.evals, &self.basis))
    }
}

/// An IPA opening proof: one (L, R) pair per folding round plus the final
/// folded scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpaProof {
    pub l: Vec<Banderwagon>,
    pub r: Vec<Banderwagon>,
    pub a0: F,
}

/// Prove that the polynomial committed by `commitment` evaluates to
/// `p(z) = y` at `z`; returns the proof and `y`.
pub fn prove(
    key: &IpaProverKey,
    transcript: &mut Transcript,
    poly: &PolynomialEval<F>,
    commitment: &Banderwagon,
    z: &F,
) -> Result<(IpaProof, F), CommitmentError> {
    if poly.len() != DOMAIN_SIZE {
        return Err(CommitmentError::WrongDomainSize);
    }
    tracing::debug!(rounds = ROUNDS, "ipa prove");
    transcript.domain_separator(b"ipa");
    let mut a = poly.evals.clone();
    let mut b = key.domain.lagrange_basis_at(z);
    let y = PolynomialEval::inner_product(&a, &b);

    transcript.absorb_point(b"C", &commitment.to_bytes());
    transcript.absorb_scalar(b"input point", z);
    transcript.absorb_scalar(b"output point", &y);
    let w: F = transcript.challenge_scalar(b"w");
    let q = Banderwagon::generator().mul_vartime(&w);

    let mut basis = key.basis.clone();
    let mut l = Vec::with_capacity(ROUNDS);
    let mut r = Vec::with_capacity(ROUNDS);

    let mut m = DOMAIN_SIZE;
    while m > 1 {
        let half = m / 2;
        let (a_l, a_r) = a.split_at(half);
        let (b_l, b_r) = b.split_at(half);
        let (g_l, g_r) = basis.split_at(half);

        let zl = PolynomialEval::inner_product(a_r, b_l);
        let zr = PolynomialEval::inner_product(a_l, b_r);
        let cl = banderwagon_msm_vartime(a_r, g_l).add(&q.mul_vartime(&zl));
        let cr = banderwagon_msm_vartime(a_l, g_r).add(&q.mul_vartime(&zr));
        l.push(cl);
        r.push(cr);

        transcript.absorb_point(b"L", &cl.to_bytes());
        transcript.absorb_point(b"R", &cr.to_bytes());
        let x: F = transcript.challenge_scalar(b"x");
        let x_inv = x.invert().unwrap_or(F::ZERO);

        // fold: a ← a_L + x·a_R ; b ← b_L + x⁻¹·b_R ; G ← G_L + [x⁻¹]·G_R
        let mut a_next = Vec::with_capacity(half);
        let mut b_next = Vec::with_capacity(half);
        let mut g_next = Vec::with_capacity(half);
        for i in 0..half {
            a_next.push(a_l[i] + x * a_r[i]);
            b_next.push(b_l[i] + x_inv * b_r[i]);
            g_next.push(g_l[i].add(&g_r[i].mul_vartime(&x_inv)));
        }
        a = a_next;
        b = b_next;
        basis = g_next;
        m = half;
    }

    Ok((
        IpaProof {
            l,
            r,
            a0: a[0],
        },
        y,
    ))
}

/// Verify an IPA opening: rebuild the challenges, then check the single
/// aggregated multi-scalar-multiplication equation.
pub fn verify(
    key: &IpaProverKey,
    transcript: &mut Transcript,
    commitment: &Banderwagon,
    z: &F,
    y: &F,
    proof: &IpaProof,
) -> Result<bool, CommitmentError> {
    if proof.l.len() != ROUNDS || proof.r.len() != ROUNDS {
        return Err(CommitmentError::LengthMismatch);
    }
    transcript.domain_separator(b"ipa");
    transcript.absorb_point(b"C", &commitment.to_bytes());
    transcript.absorb_scalar(b"input point", z);
    transcript.absorb_scalar(b"output point", y);
    let w: F = transcript.challenge_scalar(b"w");

    let mut xs = Vec::with_capacity(ROUNDS);
    for (cl, cr) in proof.l.iter().zip(&proof.r) {
        transcript.absorb_point(b"L", &cl.to_bytes());
        transcript.absorb_point(b"R", &cr.to_bytes());
        xs.push(transcript.challenge_scalar::<pairex_curves::fields::FrBandersnatch, 4>(b"x"));
    }
    let mut xs_inv = xs.clone();
    batch_invert(&mut xs_inv);

    // fold b explicitly; expand the change-of-basis vector s̄ for G
    let mut b = key.domain.lagrange_basis_at(z);
    let mut m = DOMAIN_SIZE;
    for xi in &xs_inv {
        let half = m / 2;
        for i in 0..half {
            let t = b[half + i];
            b[i] = b[i] + *xi * t;
        }
        b.truncate(half);
        m = half;
    }
    let b0 = b[0];

    // s̄: tensor expansion of Π (1 + x_j⁻¹ X^(2^i)), challenges last-first
    let mut s = Vec::with_capacity(DOMAIN_SIZE);
    s.push(F::ONE);
    for xi in xs_inv.iter().rev() {
        let len = s.len();
        for i in 0..len {
            s.push(s[i] * *xi);
        }
    }

    // one MSM:  C + [y·w]G₀ + Σ x_i·L_i + Σ x_i⁻¹·R_i
    //             − [a₀]·⟨s̄, G⟩ − [a₀·b₀·w]·G₀  == 0
    let mut scalars: Vec<F> = Vec::with_capacity(DOMAIN_SIZE + 2 * ROUNDS + 2);
    let mut points: Vec<Banderwagon> = Vec::with_capacity(DOMAIN_SIZE + 2 * ROUNDS + 2);
    for (si, gi) in s.iter().zip(&key.basis) {
        scalars.push(-(proof.a0 * *si));
        points.push(*gi);
    }
    for ((x, xi), (cl, cr)) in xs.iter().zip(&xs_inv).zip(proof.l.iter().zip(&proof.r)) {
        scalars.push(*x);
        points.push(*cl);
        scalars.push(*xi);
        points.push(*cr);
    }
    scalars.push((*y - proof.a0 * b0) * w);
    points.push(Banderwagon::generator());
    scalars.push(F::ONE);
    points.push(*commitment);

    let result = banderwagon_msm_vartime(&scalars, &points);
    Ok(bool::from(
        result.ct_eq_quotient(&Banderwagon::NEUTRAL),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (IpaProverKey, PolynomialEval<F>) {
        let key = IpaProverKey::generate(b"pairex ipa test crs").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let poly = PolynomialEval::new((0..DOMAIN_SIZE).map(|_| F::random(&mut rng)).collect())
            .unwrap();
        (key, poly)
    }

    #[test]
    fn prove_verify_round_trip_in_domain() {
        let (key, poly) = setup();
        let c = key.commit(&poly).unwrap();
        let z = F::from_u64(17);

        let mut tp = Transcript::new(b"test");
        let (proof, y) = prove(&key, &mut tp, &poly, &c, &z).unwrap();
        assert_eq!(y, poly.evals[17]);

        let mut tv = Transcript::new(b"test");
        assert!(verify(&key, &mut tv, &c, &z, &y, &proof).unwrap());
    }

    #[test]
    fn tampered_proof_rejects() {
        let (key, poly) = setup();
        let c = key.commit(&poly).unwrap();
        let z = F::from_u64(17);
        let mut tp = Transcript::new(b"test");
        let (mut proof, y) = prove(&key, &mut tp, &poly, &c, &z).unwrap();
        proof.a0 = proof.a0 + F::ONE;
        let mut tv = Transcript::new(b"test");
        assert!(!verify(&key, &mut tv, &c, &z, &y, &proof).unwrap());
    }

    #[test]
    fn wrong_value_rejects() {
        let (key, poly) = setup();
        let c = key.commit(&poly).unwrap();
        let z = F::from_u64(3);
        let mut tp = Transcript::new(b"test");
        let (proof, y) = prove(&key, &mut tp, &poly, &c, &z).unwrap();
        let mut tv = Transcript::new(b"test");
        assert!(!verify(&key, &mut tv, &c, &z, &(y + F::ONE), &proof).unwrap());
    }

    #[test]
    fn out_of_domain_opening() {
        let (key, poly) = setup();
        let c = key.commit(&poly).unwrap();
        let z = F::from_u64(1_000_003);
        let mut tp = Transcript::new(b"test");
        let (proof, y) = prove(&key, &mut tp, &poly, &c, &z).unwrap();
        assert_eq!(y, key.domain.evaluate(&poly.evals, &z));
        let mut tv = Transcript::new(b"test");
        assert!(verify(&key, &mut tv, &c, &z, &y, &proof).unwrap());
    }
}
