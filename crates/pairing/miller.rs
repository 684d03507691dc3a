//! Shared Miller-loop machinery: the homogeneous-projective G2 accumulator,
//! line-producing doubling/addition steps, and the sparse line algebra for
//! both twist orientations.
//!
//! A line through the accumulator, evaluated at a G1 point `P = (x_P, y_P)`,
//! is carried as three Fp2 coefficients `(c_const, c_x, c_y)` meaning
//! `c_const + c_x·x_P·w^i + c_y·y_P·w^j`, where the `w`-slots depend on the
//! twist: `{0, 3, 5}` for an M-twist and `{0, 1, 3}` for a D-twist.

use pairex_math::FieldArith;
use pairex_math::fp::Fp;
use pairex_math::tower::{Fp2, Fp12, TowerParams};

/// G2 accumulator in homogeneous projective coordinates over Fp2.
#[derive(Clone, Copy, Debug)]
pub struct G2Proj<P: TowerParams<N>, const N: usize> {
    pub x: Fp2<P, N>,
    pub y: Fp2<P, N>,
    pub z: Fp2<P, N>,
}

/// Raw line coefficients, before attaching the G1 evaluation point.
#[derive(Clone, Copy, Debug)]
pub struct LineCoeffs<P: TowerParams<N>, const N: usize> {
    pub c_const: Fp2<P, N>,
    pub c_x: Fp2<P, N>,
    pub c_y: Fp2<P, N>,
}

/// A line already evaluated at `P`, as three sparse Fp2 slots.
#[derive(Clone, Copy, Debug)]
pub struct LineEval<P: TowerParams<N>, const N: usize> {
    pub a: Fp2<P, N>,
    pub b: Fp2<P, N>,
    pub c: Fp2<P, N>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Twist {
    M,
    D,
}

impl<P: TowerParams<N>, const N: usize> G2Proj<P, N> {
    pub fn from_affine(x: Fp2<P, N>, y: Fp2<P, N>) -> Self {
        Self {
            x,
            y,
            z: Fp2::ONE,
        }
    }

    /// Doubling step: `T ← 2T`, emitting the tangent-line coefficients
    /// `(B − E, −3X², 2YZ)` with `E = 3b'Z²`.
    pub fn double_step(&mut self, three_b: &Fp2<P, N>, half: &Fp<P, N>) -> LineCoeffs<P, N> {
        let a = (self.x * self.y).mul_by_fp(half);
        let b = self.y.square();
        let c = self.z.square();
        let e = *three_b * c;
        let f = e.mul_by_u64(3);
        let x3 = a * (b - f);
        let g = (b + f).mul_by_fp(half);
        let y3 = g.square() - e.square().mul_by_u64(3);
        let h = (self.y + self.z).square() - (b + c);
        let z3 = b * h;

        let line = LineCoeffs {
            c_const: b - e,
            c_x: -(self.x.square().mul_by_u64(3)),
            c_y: h,
        };
        self.x = x3;
        self.y = y3;
        self.z = z3;
        line
    }

    /// Mixed addition step: `T ← T + Q` (`Q` affine), emitting the chord
    /// line `(θ·x_Q − λ·y_Q, −θ, λ)`.
    pub fn add_step(&mut self, qx: &Fp2<P, N>, qy: &Fp2<P, N>) -> LineCoeffs<P, N> {
        let theta = self.y - *qy * self.z;
        let lambda = self.x - *qx * self.z;
        let c = lambda.square();
        let d = lambda * c;
        let e = self.x * c;
        let f = theta.square() * self.z;
        let g = f + d - e.double();
        let x3 = lambda * g;
        let y3 = theta * (e - g) - d * self.y;
        let z3 = self.z * d;

        let line = LineCoeffs {
            c_const: theta * *qx - lambda * *qy,
            c_x: -theta,
            c_y: lambda,
        };
        self.x = x3;
        self.y = y3;
        self.z = z3;
        line
    }
}

impl<P: TowerParams<N>, const N: usize> LineCoeffs<P, N> {
    /// Attach the G1 evaluation point; for an M-twist the `y` slot picks up
    /// the ξ factor from the untwist.
    pub fn eval(&self, twist: Twist, xp: &Fp<P, N>, yp: &Fp<P, N>) -> LineEval<P, N> {
        let cx = self.c_x.mul_by_fp(xp);
        let cy = self.c_y.mul_by_fp(yp);
        match twist {
            Twist::M => LineEval {
                a: P::mul_by_xi(&cy),
                b: self.c_const,
                c: cx,
            },
            Twist::D => LineEval {
                a: cy,
                b: cx,
                c: self.c_const,
            },
        }
    }
}

impl<P: TowerParams<N>, const N: usize> LineEval<P, N> {
    /// Multiply the accumulator by this single sparse line.
    pub fn mul_into(&self, twist: Twist, f: &Fp12<P, N>) -> Fp12<P, N> {
        match twist {
            Twist::M => f.mul_by_line_035(&self.a, &self.b, &self.c),
            Twist::D => f.mul_by_line_013(&self.a, &self.b, &self.c),
        }
    }

    /// Fused line × line product (sparse × sparse), returned as a dense
    /// element to be folded into the accumulator with one multiplication.
    /// This halves the number of Fp12 multiplications per set bit.
    pub fn mul_line(&self, twist: Twist, rhs: &Self) -> Fp12<P, N> {
        let (a1, b1, c1) = (self.a, self.b, self.c);
        let (a2, b2, c2) = (rhs.a, rhs.b, rhs.c);
        match twist {
            Twist::M => {
                // slots {0,3,5}: (a1 + b1 w³ + c1 w⁵)(a2 + b2 w³ + c2 w⁵)
                let z0 = a1 * a2 + P::mul_by_xi(&(b1 * b2));
                let z2 = P::mul_by_xi(&(b1 * c2 + c1 * b2));
                let z3 = a1 * b2 + a2 * b1;
                let z4 = P::mul_by_xi(&(c1 * c2));
                let z5 = a1 * c2 + a2 * c1;
                Fp12::from_coeffs([z0, Fp2::ZERO, z2, z3, z4, z5])
            }
            Twist::D => {
                // slots {0,1,3}: (a1 + b1 w + c1 w³)(a2 + b2 w + c2 w³)
                let z0 = a1 * a2 + P::mul_by_xi(&(c1 * c2));
                let z1 = a1 * b2 + a2 * b1;
                let z2 = b1 * b2;
                let z3 = a1 * c2 + a2 * c1;
                let z4 = b1 * c2 + b2 * c1;
                Fp12::from_coeffs([z0, z1, z2, z3, z4, Fp2::ZERO])
            }
        }
    }
}

/// Easy part of the final exponentiation: `f ← f^((p⁶−1)(p²+1))`, landing in
/// the cyclotomic subgroup. Total: a degenerate (zero) input maps to zero.
pub fn final_exp_easy<P: TowerParams<N>, const N: usize>(f: &Fp12<P, N>) -> Fp12<P, N> {
    let inv = f.invert().unwrap_or(Fp12::ZERO);
    let f1 = f.conjugate() * inv;
    f1.frobenius(2) * f1
}

/// `f^|x|` on the cyclotomic subgroup by square-and-multiply over the public
/// loop parameter, conjugating when `x < 0`.
pub fn exp_by_x<P: TowerParams<N>, const N: usize>(
    f: &Fp12<P, N>,
    x_abs: u64,
    x_is_neg: bool,
) -> Fp12<P, N> {
    let mut acc = *f;
    let bits = 64 - x_abs.leading_zeros();
    for i in (0..bits - 1).rev() {
        acc = acc.cyclotomic_square();
        if (x_abs >> i) & 1 == 1 {
            acc = acc * *f;
        }
    }
    if x_is_neg { acc.conjugate() } else { acc }
}
