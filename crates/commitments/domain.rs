//! Evaluation-form polynomials and their domains.
//!
//! Two domain shapes are used by the commitment schemes:
//! - [`LinearDomain`]: evaluations at `{0, 1, …, N−1}` (Verkle IPA), with
//!   precomputed `A'(i)` derivative values and their inverses for
//!   barycentric evaluation and in-domain quotients.
//! - [`RootsDomain`]: evaluations at the `N`-th roots of unity in
//!   *bit-reversed order* (EIP-4844 blobs).

use pairex_math::{FieldArith, Fp, FpParams, batch_invert};

use crate::CommitmentError;

/// A polynomial of degree `< N` in evaluation form over some fixed domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialEval<F> {
    pub evals: Vec<F>,
}

impl<F: FieldArith> PolynomialEval<F> {
    pub fn new(evals: Vec<F>) -> Result<Self, CommitmentError> {
        if !evals.len().is_power_of_two() {
            return Err(CommitmentError::NotPowerOfTwo);
        }
        Ok(Self { evals })
    }

    pub fn len(&self) -> usize {
        self.evals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evals.is_empty()
    }

    /// `⟨a, b⟩` over the evaluation vectors.
    pub fn inner_product(a: &[F], b: &[F]) -> F {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).fold(F::ZERO, |acc, (x, y)| acc + *x * *y)
    }
}

/// The linear domain `{0, 1, …, N−1}` with precomputed Lagrange data.
pub struct LinearDomain<P: FpParams<NL>, const NL: usize> {
    size: usize,
    /// `A'(i) = Π_{j≠i} (i − j)`.
    a_prime: Vec<Fp<P, NL>>,
    /// `1 / A'(i)` — the barycentric weights.
    a_prime_inv: Vec<Fp<P, NL>>,
}

impl<P: FpParams<NL>, const NL: usize> LinearDomain<P, NL> {
    pub fn new(size: usize) -> Result<Self, CommitmentError> {
        if !size.is_power_of_two() {
            return Err(CommitmentError::NotPowerOfTwo);
        }
        // A'(i) = i! · (N−1−i)! · (−1)^(N−1−i)
        let mut a_prime = Vec::with_capacity(size);
        for i in 0..size {
            let mut v = Fp::<P, NL>::ONE;
            for j in 0..size {
                if j != i {
                    let diff = if i > j {
                        Fp::from_u64((i - j) as u64)
                    } else {
                        -Fp::from_u64((j - i) as u64)
                    };
                    v *= diff;
                }
            }
            a_prime.push(v);
        }
        let mut a_prime_inv = a_prime.clone();
        batch_invert(&mut a_prime_inv);
        Ok(Self {
            size,
            a_prime,
            a_prime_inv,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The Lagrange basis evaluated at `z`: `b_i = L_i(z)`. For `z` inside
    /// the domain this degenerates to an indicator vector.
    pub fn lagrange_basis_at(&self, z: &Fp<P, NL>) -> Vec<Fp<P, NL>> {
        // in-domain short-circuit
        for i in 0..self.size {
            if *z == Fp::from_u64(i as u64) {
                let mut b = vec![Fp::ZERO; self.size];
                b[i] = Fp::ONE;
                return b;
            }
        }
        // A(z) = Π (z − j); L_i(z) = A(z) / (A'(i)·(z − i))
        let mut az = Fp::<P, NL>::ONE;
        let mut diffs = Vec::with_capacity(self.size);
        for j in 0..self.size {
            let d = *z - Fp::from_u64(j as u64);
            az *= d;
            diffs.push(d);
        }
        batch_invert(&mut diffs);
        (0..self.size)
            .map(|i| az * self.a_prime_inv[i] * diffs[i])
            .collect()
    }

    /// Evaluate an evaluation-form polynomial at an arbitrary point.
    pub fn evaluate(&self, f: &[Fp<P, NL>], z: &Fp<P, NL>) -> Fp<P, NL> {
        let b = self.lagrange_basis_at(z);
        PolynomialEval::inner_product(f, &b)
    }

    /// In-domain quotient `q = (f − f(z))/(X − z)` for `z = domain[zi]`,
    /// in evaluation form. The `zi` row uses the derivative formula
    /// `q[zi] = −Σ_{i≠zi} q[i]·A'(zi)/A'(i)`.
    pub fn quotient_in_domain(&self, f: &[Fp<P, NL>], zi: usize) -> Vec<Fp<P, NL>> {
        debug_assert_eq!(f.len(), self.size);
        debug_assert!(zi < self.size);
        let fz = f[zi];
        let mut inv_diffs: Vec<Fp<P, NL>> = (0..self.size)
            .map(|i| {
                if i == zi {
                    Fp::ONE
                } else if i > zi {
                    Fp::from_u64((i - zi) as u64)
                } else {
                    -Fp::from_u64((zi - i) as u64)
                }
            })
            .collect();
        batch_invert(&mut inv_diffs);

        let mut q = vec![Fp::<P, NL>::ZERO; self.size];
        let mut qz = Fp::<P, NL>::ZERO;
        for i in 0..self.size {
            if i == zi {
                continue;
            }
            q[i] = (f[i] - fz) * inv_diffs[i];
            qz -= q[i] * self.a_prime[zi] * self.a_prime_inv[i];
        }
        q[zi] = qz;
        q
    }
}

/// The `N`-th roots of unity in bit-reversed order (EIP-4844 blob layout).
pub struct RootsDomain<P: FpParams<NL>, const NL: usize> {
    size: usize,
    /// `ω^i`, bit-reversed indexing: `roots[i] = ω^(brp(i))`.
    pub roots: Vec<Fp<P, NL>>,
    size_inv: Fp<P, NL>,
}

/// Bit-reversal permutation of an index within a power-of-two range.
pub fn bit_reverse(i: usize, log2n: u32) -> usize {
    i.reverse_bits() >> (usize::BITS - log2n)
}

impl<P: FpParams<NL>, const NL: usize> RootsDomain<P, NL> {
    /// Build the domain from the field's 2-adic root of unity.
    pub fn new(size: usize) -> Result<Self, CommitmentError> {
        if !size.is_power_of_two() {
            return Err(CommitmentError::NotPowerOfTwo);
        }
        let log2n = usize::ilog2(size);
        if log2n > P::TWO_ADICITY {
            return Err(CommitmentError::WrongDomainSize);
        }
        // square the 2^s-order generator down to order `size`
        let mut omega = Fp::<P, NL>::from_mont(P::ROOT_OF_UNITY);
        for _ in 0..(P::TWO_ADICITY - log2n) {
            omega = omega.square();
        }
        let mut natural = Vec::with_capacity(size);
        let mut acc = Fp::<P, NL>::ONE;
        for _ in 0..size {
            natural.push(acc);
            acc *= omega;
        }
        let roots = (0..size)
            .map(|i| natural[bit_reverse(i, log2n)])
            .collect();
        let size_inv = Fp::from_u64(size as u64)
            .invert()
            .unwrap_or(Fp::ZERO);
        Ok(Self {
            size,
            roots,
            size_inv,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Barycentric evaluation at an arbitrary `z`:
    /// `f(z) = (z^N − 1)/N · Σ f_i·ω_i/(z − ω_i)`, with the in-domain case
    /// short-circuiting to the stored evaluation.
    pub fn evaluate(&self, f: &[Fp<P, NL>], z: &Fp<P, NL>) -> Fp<P, NL> {
        debug_assert_eq!(f.len(), self.size);
        for (i, w) in self.roots.iter().enumerate() {
            if z == w {
                return f[i];
            }
        }
        let mut diffs: Vec<Fp<P, NL>> = self.roots.iter().map(|w| *z - *w).collect();
        batch_invert(&mut diffs);
        let mut sum = Fp::<P, NL>::ZERO;
        for ((fi, w), d) in f.iter().zip(&self.roots).zip(&diffs) {
            sum += *fi * *w * *d;
        }
        // z^N − 1
        let mut zn = *z;
        for _ in 0..usize::ilog2(self.size) {
            zn = zn.square();
        }
        (zn - Fp::ONE) * self.size_inv * sum
    }

    /// Quotient `(f − y)/(X − z)` in evaluation form, `y = f(z)`; handles
    /// both out-of-domain and in-domain `z` (the special-row formula uses
    /// `A'(ω_i) = N·ω_i^{−1}`).
    pub fn quotient(&self, f: &[Fp<P, NL>], z: &Fp<P, NL>, y: &Fp<P, NL>) -> Vec<Fp<P, NL>> {
        debug_assert_eq!(f.len(), self.size);
        let zi = self.roots.iter().position(|w| w == z);
        match zi {
            None => {
                let mut inv: Vec<Fp<P, NL>> = self.roots.iter().map(|w| *w - *z).collect();
                batch_invert(&mut inv);
                f.iter()
                    .zip(&inv)
                    .map(|(fi, d)| (*fi - *y) * *d)
                    .collect()
            }
            Some(zi) => {
                let mut inv: Vec<Fp<P, NL>> = self
                    .roots
                    .iter()
                    .enumerate()
                    .map(|(i, w)| if i == zi { Fp::ONE } else { *w - *z })
                    .collect();
                batch_invert(&mut inv);
                let mut q = vec![Fp::<P, NL>::ZERO; self.size];
                let mut qz = Fp::<P, NL>::ZERO;
                // A'(ω_i) = N·ω_i^(N−1) = N/ω_i, so A'(z)/A'(ω_i) = ω_i/ω_z
                let wz_inv = self.roots[zi].invert().unwrap_or(Fp::ZERO);
                for i in 0..self.size {
                    if i == zi {
                        continue;
                    }
                    q[i] = (f[i] - *y) * inv[i];
                    qz -= q[i] * self.roots[i] * wz_inv;
                }
                q[zi] = qz;
                q
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairex_curves::fields::FrBls381;
    use pairex_math::Fp;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type F = Fp<FrBls381, 4>;

    #[test]
    fn bit_reverse_involution() {
        for i in 0..16 {
            assert_eq!(bit_reverse(bit_reverse(i, 4), 4), i);
        }
        assert_eq!(bit_reverse(1, 4), 8);
    }

    #[test]
    fn linear_domain_lagrange_basis() {
        let dom = LinearDomain::<FrBls381, 4>::new(8).unwrap();
        // in-domain: indicator
        let b = dom.lagrange_basis_at(&F::from_u64(3));
        assert_eq!(b[3], F::ONE);
        assert!(b.iter().enumerate().all(|(i, v)| i == 3 || *v == F::ZERO));
        // basis sums to 1 anywhere (partition of unity)
        let z = F::from_u64(123_456);
        let b = dom.lagrange_basis_at(&z);
        let sum = b.iter().fold(F::ZERO, |a, x| a + *x);
        assert_eq!(sum, F::ONE);
    }

    #[test]
    fn linear_domain_quotient_consistency() {
        // q(X)·(X − z) = f(X) − f(z) must hold at every other domain point,
        // and the quotient must stay degree < N: check via evaluation at a
        // random out-of-domain point.
        let mut rng = StdRng::seed_from_u64(7);
        let n = 8;
        let dom = LinearDomain::<FrBls381, 4>::new(n).unwrap();
        let f: Vec<F> = (0..n).map(|_| F::random(&mut rng)).collect();
        let zi = 5usize;
        let q = dom.quotient_in_domain(&f, zi);
        let t = F::from_u64(998_877);
        let ft = dom.evaluate(&f, &t);
        let qt = dom.evaluate(&q, &t);
        let z = F::from_u64(zi as u64);
        assert_eq!(qt * (t - z), ft - f[zi]);
    }

    #[test]
    fn roots_domain_barycentric_matches_direct() {
        let mut rng = StdRng::seed_from_u64(8);
        let n = 16;
        let dom = RootsDomain::<FrBls381, 4>::new(n).unwrap();
        // ω has order n
        let w = dom.roots[bit_reverse(1, 4)];
        let mut acc = F::ONE;
        for _ in 0..n {
            acc *= w;
        }
        assert_eq!(acc, F::ONE);

        let f: Vec<F> = (0..n).map(|_| F::random(&mut rng)).collect();
        // in-domain evaluation returns the stored value
        assert_eq!(dom.evaluate(&f, &dom.roots[3]), f[3]);
        // quotient consistency out of domain
        let z = F::from_u64(31_337);
        let y = dom.evaluate(&f, &z);
        let q = dom.quotient(&f, &z, &y);
        let t = F::from_u64(55_555);
        assert_eq!(
            dom.evaluate(&q, &t) * (t - z),
            dom.evaluate(&f, &t) - y
        );
        // quotient consistency in domain
        let z = dom.roots[6];
        let q = dom.quotient(&f, &z, &f[6]);
        assert_eq!(
            dom.evaluate(&q, &t) * (t - z),
            dom.evaluate(&f, &t) - f[6]
        );
    }
}
