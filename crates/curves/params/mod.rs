//! Generated parameter tables, one module per curve. See each file's header;
//! every constant is stored in Montgomery form and produced offline from the
//! curve definitions.

pub mod bandersnatch;
pub mod bls12_377;
pub mod bls12_381;
pub mod bn254;
pub mod bn254_nogami;
pub mod bw6_761;
pub mod h2c_bls12_381;
pub mod h2c_bn254;
pub mod pasta;
