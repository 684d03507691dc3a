//! Multi-scalar multiplication `∑ kᵢ·Pᵢ` (variable-time, public inputs):
//! Pippenger's bucket method with signed windows and batched-affine bucket
//! accumulation — bucket insertions are plain affine additions whose slope
//! denominators are inverted in batches (Montgomery's trick), which is the
//! dominant optimisation at scale.

use thiserror::Error;

use pairex_math::{FieldArith, batch_invert};

use crate::curve::{MAX_SCALAR_LIMBS, ScalarField, SwCurve};
use crate::scalar_mul;
use crate::weierstrass::{Affine, Jacobian};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsmError {
    #[error("scalar and point arrays differ in length")]
    LengthMismatch,
}

/// Window size in bits for `n` points: `≈ log₂(n) − 2`, clamped.
fn window_bits(n: usize) -> u32 {
    match n {
        0..=1 => 1,
        _ => (usize::ilog2(n).saturating_sub(2)).clamp(2, 15),
    }
}

/// Signed base-2^c digit decomposition of a public scalar.
pub fn signed_digits_vartime(limbs: &[u64], c: u32) -> Vec<i64> {
    let bits = limbs.len() * 64;
    let ndigits = bits.div_ceil(c as usize) + 1;
    let mut out = Vec::with_capacity(ndigits);
    let mut carry: i64 = 0;
    let radix = 1i64 << c;
    for i in 0..ndigits {
        let bit = i * c as usize;
        let raw = if bit >= bits {
            carry
        } else {
            let lo = limbs[bit / 64] >> (bit % 64);
            let hi = if bit % 64 + c as usize > 64 && bit / 64 + 1 < limbs.len() {
                limbs[bit / 64 + 1] << (64 - bit % 64)
            } else {
                0
            };
            (((lo | hi) & ((radix as u64) - 1)) as i64) + carry
        };
        if raw > radix / 2 {
            out.push(raw - radix);
            carry = 1;
        } else {
            out.push(raw);
            carry = 0;
        }
    }
    out
}

/// One batched-affine accumulation round: pair up pending points in every
/// bucket, compute all slopes with one inversion.
fn batch_accumulate<C: SwCurve>(buckets: &mut [Vec<Affine<C>>]) {
    // (bucket, lhs, rhs, is_double) jobs for this round
    let mut jobs: Vec<(usize, Affine<C>, Affine<C>, bool)> = Vec::new();
    for (b, pts) in buckets.iter_mut().enumerate() {
        let items = std::mem::take(pts);
        let mut it = items.into_iter();
        while let Some(p) = it.next() {
            match it.next() {
                Some(q) => {
                    if p == q {
                        jobs.push((b, p, q, true));
                    } else if p.x == q.x {
                        // p + (−p) = neutral: drop the pair
                    } else {
                        jobs.push((b, p, q, false));
                    }
                }
                None => pts.push(p),
            }
        }
    }
    if jobs.is_empty() {
        return;
    }
    let mut dens: Vec<C::Base> = jobs
        .iter()
        .map(|(_, p, q, dbl)| if *dbl { p.y.double() } else { q.x - p.x })
        .collect();
    batch_invert(&mut dens);
    for ((b, p, q, dbl), den) in jobs.into_iter().zip(dens) {
        let sum = p.add_with_inverse_vartime(&q, &den, dbl);
        buckets[b].push(sum);
    }
}

/// Pippenger MSM over affine points. Variable-time; public inputs only.
pub fn msm_vartime<C: SwCurve>(
    scalars: &[C::Scalar],
    points: &[Affine<C>],
) -> Result<Jacobian<C>, MsmError> {
    if scalars.len() != points.len() {
        return Err(MsmError::LengthMismatch);
    }
    let n = scalars.len();
    if n == 0 {
        return Ok(Jacobian::NEUTRAL);
    }
    if n < 32 {
        return Ok(msm_naive(scalars, points));
    }
    let c = window_bits(n);
    tracing::debug!(n, window = c, "pippenger msm");

    let digits: Vec<Vec<i64>> = scalars
        .iter()
        .map(|s| {
            let mut limbs = [0u64; MAX_SCALAR_LIMBS];
            let len = s.write_limbs(&mut limbs);
            signed_digits_vartime(&limbs[..len], c)
        })
        .collect();
    let nwindows = digits.iter().map(Vec::len).max().unwrap_or(0);
    let nbuckets = 1usize << (c - 1);

    let mut acc = Jacobian::<C>::NEUTRAL;
    let mut buckets: Vec<Vec<Affine<C>>> = vec![Vec::new(); nbuckets + 1];
    for w in (0..nwindows).rev() {
        for _ in 0..c {
            acc = acc.double_vartime();
        }
        for slot in buckets.iter_mut() {
            slot.clear();
        }
        for (ds, pt) in digits.iter().zip(points) {
            if bool::from(pt.is_neutral()) {
                continue;
            }
            let Some(&d) = ds.get(w) else { continue };
            if d > 0 {
                buckets[d as usize].push(*pt);
            } else if d < 0 {
                buckets[(-d) as usize].push(pt.neg());
            }
        }
        // batched-affine accumulation until every bucket holds ≤ 1 point
        while buckets.iter().any(|b| b.len() > 1) {
            batch_accumulate(&mut buckets);
        }
        // bucket reduction: ∑ j·B_j with two running sums
        let mut running = Jacobian::<C>::NEUTRAL;
        let mut window_sum = Jacobian::<C>::NEUTRAL;
        for b in buckets.iter().rev().take(nbuckets) {
            if let Some(p) = b.first() {
                running = running.add_affine_vartime(p);
            }
            window_sum = window_sum.add_vartime(&running);
        }
        acc = acc.add_vartime(&window_sum);
    }
    Ok(acc)
}

/// Naive `∑ kᵢ·Pᵢ` for small inputs and as the reference in tests.
pub fn msm_naive<C: SwCurve>(scalars: &[C::Scalar], points: &[Affine<C>]) -> Jacobian<C> {
    let mut acc = Jacobian::<C>::NEUTRAL;
    for (s, p) in scalars.iter().zip(points) {
        if bool::from(p.is_neutral()) | bool::from(s.is_zero()) {
            continue;
        }
        acc = acc.add_vartime(&scalar_mul::mul_vartime::<C>(&p.to_jacobian(), s));
    }
    acc
}

/// Parallel MSM over an externally-owned thread pool: chunks are reduced
/// independently (`parallelReduce`), then folded.
#[cfg(feature = "parallel")]
pub fn par_msm_vartime<C: SwCurve>(
    pool: &rayon::ThreadPool,
    scalars: &[C::Scalar],
    points: &[Affine<C>],
) -> Result<Jacobian<C>, MsmError> {
    use rayon::prelude::*;
    if scalars.len() != points.len() {
        return Err(MsmError::LengthMismatch);
    }
    let chunk = scalars.len().div_ceil(pool.current_num_threads().max(1)).max(1);
    pool.install(|| {
        scalars
            .par_chunks(chunk)
            .zip(points.par_chunks(chunk))
            .map(|(s, p)| msm_vartime(s, p))
            .try_reduce(
                || Jacobian::NEUTRAL,
                |a, b| Ok(a.add_vartime(&b)),
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_digits_reconstruct() {
        let limbs = [0xfedc_ba98_7654_3210u64, 0x0123_4567_89ab_cdef];
        for c in [2u32, 5, 8, 13] {
            let ds = signed_digits_vartime(&limbs, c);
            let mut acc: i128 = 0;
            for &d in ds.iter().rev() {
                acc = (acc << c) + d as i128;
            }
            let want = ((0x0123_4567_89ab_cdefu128) << 64) | 0xfedc_ba98_7654_3210u128;
            assert_eq!(acc as u128, want, "c = {c}");
            let half = 1i64 << (c - 1);
            assert!(ds.iter().all(|&d| -half <= d && d <= half));
        }
    }
}
