//! # pairex-pairing
//!
//! Optimal ate pairings over BLS12-381 and BN254: projective Miller loops
//! with fused line evaluations, curve-specific final-exponentiation chains,
//! the Gt pairing subgroup with membership checks, and torus-based Gt
//! compression (`T₂(Fp6)`) backing fast Gt exponentiation and
//! multi-exponentiation.

pub mod bls12_381;
pub mod bn254;
pub mod gt;
pub mod miller;
pub mod torus;

pub use bls12_381::{Gt381, multi_pairing as bls12_381_multi_pairing, pairing as bls12_381_pairing};
pub use bn254::{Gt254, multi_pairing as bn254_multi_pairing, pairing as bn254_pairing};
