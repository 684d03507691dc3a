//! The Verkle multi-proof: many `(polynomial, commitment, opening-index,
//! value)` queries collapse into one IPA opening.
//!
//! Queries are grouped by opening point with a counting sort over the
//! domain (O(N + m), sorting indices rather than polynomials), aggregated
//! with powers of a Fiat-Shamir challenge `r`, and reduced to a single
//! opening of `g₂ = g₁ − g` at a fresh challenge `t`, where the verifier
//! reconstructs `Com(g₁)` homomorphically from the query commitments.

use pairex_curves::edwards::{Banderwagon, banderwagon_msm_vartime};
use pairex_curves::fields::FrBander;
use pairex_math::{FieldArith, batch_invert};

use super::{DOMAIN_SIZE, IpaProof, IpaProverKey, prove, verify};
use crate::CommitmentError;
use crate::domain::PolynomialEval;
use crate::transcript::Transcript;

type F = FrBander;

/// One opening query: `polys[i](zs[i]) = ys[i]` under commitment `cs[i]`.
pub struct MultiProofQuery<'a> {
    pub poly: &'a PolynomialEval<F>,
    pub commitment: Banderwagon,
    /// Opening index in the linear domain `0..256`.
    pub z: usize,
    pub y: F,
}

/// The combined proof: the quotient commitment `D = Com(g)` plus a single
/// IPA opening.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpaMultiProof {
    pub d: Banderwagon,
    pub g2_proof: IpaProof,
}

fn absorb_queries(
    transcript: &mut Transcript,
    queries: &[(&Banderwagon, usize, &F)],
) {
    transcript.domain_separator(b"multiproof");
    for (c, z, y) in queries {
        transcript.absorb_point(b"C", &c.to_bytes());
        transcript.absorb_u64(b"z", *z as u64);
        transcript.absorb_scalar(b"y", y);
    }
}

/// Counting sort of query indices by opening point: `groups[z]` lists the
/// positions opening at `z`. O(N + m), no polynomial data is moved.
fn group_by_challenge(zs: impl Iterator<Item = usize>) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); DOMAIN_SIZE];
    for (idx, z) in zs.enumerate() {
        groups[z].push(idx);
    }
    groups
}

/// Create a multi-proof for a batch of queries.
pub fn prove_multi(
    key: &IpaProverKey,
    transcript: &mut Transcript,
    queries: &[MultiProofQuery<'_>],
) -> Result<IpaMultiProof, CommitmentError> {
    for q in queries {
        if q.poly.len() != DOMAIN_SIZE {
            return Err(CommitmentError::WrongDomainSize);
        }
        if q.z >= DOMAIN_SIZE {
            return Err(CommitmentError::WrongDomainSize);
        }
    }
    let meta: Vec<(&Banderwagon, usize, &F)> =
        queries.iter().map(|q| (&q.commitment, q.z, &q.y)).collect();
    absorb_queries(transcript, &meta);
    let r: F = transcript.challenge_scalar(b"r");

    // r^i per query, then aggregate polynomials sharing an opening point
    let mut r_pows = Vec::with_capacity(queries.len());
    let mut acc = F::ONE;
    for _ in queries {
        r_pows.push(acc);
        acc *= r;
    }
    let groups = group_by_challenge(queries.iter().map(|q| q.z));

    // g(X) = Σ_z (Σ_{i: z_i=z} r^i·f_i(X) − ·)/(X − z), all in-domain
    let mut g = vec![F::ZERO; DOMAIN_SIZE];
    for (z, members) in groups.iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        let mut agg = vec![F::ZERO; DOMAIN_SIZE];
        for &i in members {
            let coeff = r_pows[i];
            for (a, f) in agg.iter_mut().zip(&queries[i].poly.evals) {
                *a += coeff * *f;
            }
        }
        let q_z = key.domain.quotient_in_domain(&agg, z);
        for (gi, qi) in g.iter_mut().zip(q_z) {
            *gi += qi;
        }
    }
    let g_poly = PolynomialEval::new(g)?;
    let d = key.commit(&g_poly)?;
    transcript.absorb_point(b"D", &d.to_bytes());
    let t: F = transcript.challenge_scalar(b"t");

    // g₁(X) = Σ r^i/(t − z_i) · f_i(X); denominators batched per group
    let mut denoms: Vec<F> = (0..DOMAIN_SIZE)
        .map(|z| t - F::from_u64(z as u64))
        .collect();
    batch_invert(&mut denoms);
    let mut g1 = vec![F::ZERO; DOMAIN_SIZE];
    for (z, members) in groups.iter().enumerate() {
        for &i in members {
            let coeff = r_pows[i] * denoms[z];
            for (h, f) in g1.iter_mut().zip(&queries[i].poly.evals) {
                *h += coeff * *f;
            }
        }
    }
    // g₂ = g₁ − g is the polynomial actually opened at t
    let g2: Vec<F> = g1.iter().zip(&g_poly.evals).map(|(a, b)| *a - *b).collect();
    let g2_poly = PolynomialEval::new(g2)?;
    let e = key.commit(&g2_poly)?.add(&d); // E = Com(g₁) = Com(g₂) + D
    transcript.absorb_point(b"E", &e.to_bytes());

    let c2 = e.add(&d.neg());
    let (g2_proof, _y) = prove(key, transcript, &g2_poly, &c2, &t)?;

    Ok(IpaMultiProof { d, g2_proof })
}

/// Verify a multi-proof against the per-query `(commitment, z, y)` tuples.
pub fn verify_multi(
    key: &IpaProverKey,
    transcript: &mut Transcript,
    queries: &[(Banderwagon, usize, F)],
    proof: &IpaMultiProof,
) -> Result<bool, CommitmentError> {
    for (_, z, _) in queries {
        if *z >= DOMAIN_SIZE {
            return Err(CommitmentError::WrongDomainSize);
        }
    }
    let meta: Vec<(&Banderwagon, usize, &F)> =
        queries.iter().map(|(c, z, y)| (c, *z, y)).collect();
    absorb_queries(transcript, &meta);
    let r: F = transcript.challenge_scalar(b"r");
    transcript.absorb_point(b"D", &proof.d.to_bytes());
    let t: F = transcript.challenge_scalar(b"t");

    let mut r_pows = Vec::with_capacity(queries.len());
    let mut acc = F::ONE;
    for _ in queries {
        r_pows.push(acc);
        acc *= r;
    }
    let groups = group_by_challenge(queries.iter().map(|(_, z, _)| *z));

    let mut denoms: Vec<F> = (0..DOMAIN_SIZE)
        .map(|z| t - F::from_u64(z as u64))
        .collect();
    batch_invert(&mut denoms);

    // E = Σ (r^i/(t − z_i))·C_i, commitments sharing a point summed first;
    // g₂(t) = Σ r^i·y_i/(t − z_i)
    let mut e_scalars = Vec::new();
    let mut e_points = Vec::new();
    let mut g2_t = F::ZERO;
    for (z, members) in groups.iter().enumerate() {
        for &i in members {
            let coeff = r_pows[i] * denoms[z];
            e_scalars.push(coeff);
            e_points.push(queries[i].0);
            g2_t += coeff * queries[i].2;
        }
    }
    let e = banderwagon_msm_vartime(&e_scalars, &e_points);
    transcript.absorb_point(b"E", &e.to_bytes());

    let c2 = e.add(&proof.d.neg());
    verify(key, transcript, &c2, &t, &g2_t, &proof.g2_proof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rand_poly(rng: &mut StdRng) -> PolynomialEval<F> {
        PolynomialEval::new((0..DOMAIN_SIZE).map(|_| F::random(&mut *rng)).collect()).unwrap()
    }

    #[test]
    fn multiproof_round_trip_with_shared_points() {
        let key = IpaProverKey::generate(b"pairex ipa test crs").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let polys: Vec<PolynomialEval<F>> = (0..5).map(|_| rand_poly(&mut rng)).collect();
        let zs = [3usize, 250, 3, 17, 17]; // grouped openings on purpose
        let queries: Vec<MultiProofQuery<'_>> = polys
            .iter()
            .zip(zs)
            .map(|(p, z)| MultiProofQuery {
                poly: p,
                commitment: key.commit(p).unwrap(),
                z,
                y: p.evals[z],
            })
            .collect();

        let mut tp = Transcript::new(b"vt");
        let proof = prove_multi(&key, &mut tp, &queries).unwrap();

        let vq: Vec<(Banderwagon, usize, F)> = queries
            .iter()
            .map(|q| (q.commitment, q.z, q.y))
            .collect();
        let mut tv = Transcript::new(b"vt");
        assert!(verify_multi(&key, &mut tv, &vq, &proof).unwrap());

        // a wrong claimed value must fail
        let mut bad = vq.clone();
        bad[2].2 = bad[2].2 + F::ONE;
        let mut tv = Transcript::new(b"vt");
        assert!(!verify_multi(&key, &mut tv, &bad, &proof).unwrap());

        // a tampered quotient commitment must fail
        let mut bad_proof = proof.clone();
        bad_proof.d = bad_proof.d.add(&Banderwagon::generator());
        let mut tv = Transcript::new(b"vt");
        assert!(!verify_multi(&key, &mut tv, &vq, &bad_proof).unwrap());
    }
}
