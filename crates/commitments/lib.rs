//! # pairex-commitments
//!
//! Polynomial commitments over evaluation-form polynomials: KZG with the
//! EIP-4844 blob surface (BLS12-381, bit-reversed roots-of-unity domain) and
//! the Ethereum Verkle inner-product argument (Banderwagon, 256-point linear
//! domain) with its grouped-by-challenge multi-proof. A SHA-256 duplex
//! transcript drives every Fiat-Shamir challenge.

pub mod domain;
pub mod ipa;
pub mod kzg;
pub mod transcript;

pub use domain::{LinearDomain, PolynomialEval, RootsDomain};
pub use ipa::{IpaMultiProof, IpaProof, IpaProverKey};
pub use kzg::{Blob, KzgCommitment, KzgProof, KzgSettings};
pub use transcript::Transcript;

use thiserror::Error;

/// Commitment-layer argument errors: caller contract violations surface as
/// status codes, never panics, in release builds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("array lengths do not match")]
    LengthMismatch,
    #[error("polynomial length is not the domain size")]
    WrongDomainSize,
    #[error("domain size must be a power of two")]
    NotPowerOfTwo,
    #[error("trusted setup is malformed")]
    InvalidSetup,
    #[error("blob byte encoding is not canonical")]
    InvalidBlob,
    #[error("proof rejected")]
    VerificationFailed,
}
