//! Byte/hex codecs and the encoding error taxonomy shared by every layer
//! that deserializes untrusted input.

use crate::bigint::BigInt;

/// Errors from decoding untrusted bytes. Deserialization never panics; it
/// reports one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("input has the wrong length")]
    InvalidLength,
    #[error("field element is not canonical (>= modulus)")]
    NonCanonical,
    #[error("invalid compressed-point flag bits")]
    InvalidFlags,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("invalid hex: {0}")]
    Hex(&'static str),
}

impl From<hex::FromHexError> for EncodingError {
    fn from(_: hex::FromHexError) -> Self {
        EncodingError::Hex("invalid hex string")
    }
}

/// Decode `0x`-prefixed or bare hex into a fixed-width big integer
/// (big-endian digits, shorter strings zero-extended).
pub fn bigint_from_hex<const N: usize>(s: &str) -> Result<BigInt<N>, EncodingError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let mut owned;
    let digits = if s.len() % 2 == 1 {
        owned = String::with_capacity(s.len() + 1);
        owned.push('0');
        owned.push_str(s);
        owned.as_str()
    } else {
        s
    };
    let bytes = hex::decode(digits)?;
    BigInt::from_be_slice(&bytes).ok_or(EncodingError::InvalidLength)
}

/// Lowercase hex (no prefix) of a big integer, fixed width.
pub fn bigint_to_hex<const N: usize>(v: &BigInt<N>) -> String {
    let mut out = vec![0u8; N * 8];
    v.to_be_bytes(&mut out);
    hex::encode(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let v = bigint_from_hex::<4>("0xdeadbeef").unwrap();
        assert_eq!(v, BigInt::from_u64(0xdead_beef));
        assert_eq!(&bigint_to_hex(&v)[48..], "00000000deadbeef");
        assert!(bigint_from_hex::<1>("0x10000000000000001").is_err());
        // odd digit counts are zero-padded
        assert_eq!(bigint_from_hex::<4>("f").unwrap(), BigInt::from_u64(15));
    }
}
