//! Trusted-setup persistence for the KZG commitment scheme.
//!
//! On-disk format: JSON with a version header, the domain size, and the
//! point arrays as hex-encoded compressed encodings (48-byte G1, 96-byte
//! G2). Loading validates the header, every point (on-curve and subgroup),
//! and the array lengths.

use serde::{Deserialize, Serialize};

use pairex_commitments::kzg::{FIELD_ELEMENTS_PER_BLOB, KzgSettings, SETUP_G2_LENGTH};
use pairex_curves::serialize::{
    g1_from_compressed, g1_to_compressed, g2_from_compressed, g2_to_compressed,
};

pub const SETUP_FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed setup file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported setup version {0}")]
    Version(u32),
    #[error("domain size mismatch: header says {header}, found {found} points")]
    DomainSize { header: usize, found: usize },
    #[error("setup point {index} is invalid")]
    InvalidPoint { index: usize },
    #[error("setup arrays have the wrong length")]
    WrongLength,
}

/// The serialized form of a trusted setup.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrustedSetupFile {
    pub version: u32,
    pub domain_size: usize,
    /// Compressed G1 points in the Lagrange basis, bit-reversed order.
    pub g1_lagrange: Vec<String>,
    /// Compressed G2 monomial powers `[τ^i]G₂`.
    pub g2_monomial: Vec<String>,
}

impl TrustedSetupFile {
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SetupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &std::path::Path) -> Result<KzgSettings, SetupError> {
        tracing::debug!(?path, "loading KZG trusted setup");
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)?.into_settings()
    }

    /// Validate the header and decompress every point.
    pub fn into_settings(self) -> Result<KzgSettings, SetupError> {
        if self.version != SETUP_FORMAT_VERSION {
            return Err(SetupError::Version(self.version));
        }
        if self.domain_size != self.g1_lagrange.len() {
            return Err(SetupError::DomainSize {
                header: self.domain_size,
                found: self.g1_lagrange.len(),
            });
        }
        // mainnet setups carry the full blob domain; smaller power-of-two
        // domains are accepted for development settings
        if self.g1_lagrange.len() > FIELD_ELEMENTS_PER_BLOB
            || !self.g1_lagrange.len().is_power_of_two()
            || self.g2_monomial.len() != SETUP_G2_LENGTH
        {
            return Err(SetupError::WrongLength);
        }
        let mut g1 = Vec::with_capacity(self.g1_lagrange.len());
        for (i, s) in self.g1_lagrange.iter().enumerate() {
            let bytes = decode_hex::<48>(s).ok_or(SetupError::InvalidPoint { index: i })?;
            let p = g1_from_compressed(&bytes).map_err(|_| SetupError::InvalidPoint { index: i })?;
            g1.push(p);
        }
        let mut g2 = Vec::with_capacity(self.g2_monomial.len());
        for (i, s) in self.g2_monomial.iter().enumerate() {
            let bytes = decode_hex::<96>(s).ok_or(SetupError::InvalidPoint { index: i })?;
            let p = g2_from_compressed(&bytes).map_err(|_| SetupError::InvalidPoint { index: i })?;
            g2.push(p);
        }
        KzgSettings::new(g1, g2).map_err(|_| SetupError::WrongLength)
    }

    /// Serialize an in-memory setup (dev tooling, test fixtures).
    pub fn from_settings(settings: &KzgSettings) -> Self {
        Self {
            version: SETUP_FORMAT_VERSION,
            domain_size: settings.g1_lagrange.len(),
            g1_lagrange: settings
                .g1_lagrange
                .iter()
                .map(|p| hex::encode(g1_to_compressed(p)))
                .collect(),
            g2_monomial: settings
                .g2_monomial
                .iter()
                .map(|p| hex::encode(g2_to_compressed(p)))
                .collect(),
        }
    }
}

fn decode_hex<const L: usize>(s: &str) -> Option<[u8; L]> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let v = hex::decode(s).ok()?;
    v.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_header() {
        let f = TrustedSetupFile {
            version: 99,
            domain_size: 0,
            g1_lagrange: vec![],
            g2_monomial: vec![],
        };
        assert!(matches!(f.into_settings(), Err(SetupError::Version(99))));

        let f = TrustedSetupFile {
            version: SETUP_FORMAT_VERSION,
            domain_size: 4096,
            g1_lagrange: vec!["00".into(); 5],
            g2_monomial: vec![],
        };
        assert!(matches!(f.into_settings(), Err(SetupError::DomainSize { .. })));
    }

    #[test]
    fn json_round_trip_shape() {
        let f = TrustedSetupFile {
            version: SETUP_FORMAT_VERSION,
            domain_size: 2,
            g1_lagrange: vec!["aa".into(), "bb".into()],
            g2_monomial: vec!["cc".into()],
        };
        let parsed = TrustedSetupFile::from_json(&f.to_json().unwrap()).unwrap();
        assert_eq!(parsed.domain_size, 2);
        assert_eq!(parsed.g1_lagrange.len(), 2);
    }
}
