//! # pairex-protocols
//!
//! The protocol surfaces Ethereum consumes from the pairing stack:
//!
//! - [`bls`]: BLS signatures over BLS12-381 (G1 public keys, G2
//!   signatures), including aggregation.
//! - [`precompiles`]: byte-in/byte-out EVM precompile backends — SHA-256,
//!   MODEXP (EIP-198), the alt_bn128 trio, and the EIP-2537 BLS12-381
//!   family.
//! - [`setup`]: trusted-setup persistence for the KZG commitment scheme.

pub mod bls;
pub mod precompiles;
pub mod setup;

pub use bls::{PublicKey, SecretKey, Signature};
pub use precompiles::PrecompileError;
pub use setup::TrustedSetupFile;
