//! Node identifier derivation
//!
//! Identifiers are 128-bit digests of a decimal counter string. The 16 digest
//! bytes are read as a big-endian signed integer and the absolute value is the
//! identifier, so every identifier is at most `2^127`.
//!
//! Prefix comparisons work on the fixed-width (32 digit) lowercase hex form.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::pastry_interface::{NodeIdentifier, SimError, ID_HEX_DIGITS};

/// Digest used to turn counters into node identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum DigestAlgorithm {
    /// MD5, natively 128 bits
    #[default]
    Md5,
    /// First 16 bytes of the BLAKE3 extendable output
    Blake3,
    /// SHA-256 truncated to 16 bytes
    Sha256,
}

impl DigestAlgorithm {
    /// Compute the raw 128-bit digest of `input`
    pub fn digest128(&self, input: &[u8]) -> [u8; 16] {
        let mut out = [0u8; 16];
        match self {
            DigestAlgorithm::Md5 => {
                out.copy_from_slice(&Md5::digest(input));
            }
            DigestAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(input);
                hasher.finalize_xof().fill(&mut out);
            }
            DigestAlgorithm::Sha256 => {
                let hash = Sha256::digest(input);
                out.copy_from_slice(&hash[..16]);
            }
        }
        out
    }

    /// Identifier of the node generated from `counter`
    pub fn node_identifier(&self, counter: u64) -> NodeIdentifier {
        let bytes = self.digest128(counter.to_string().as_bytes());
        i128::from_be_bytes(bytes).unsigned_abs()
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Blake3 => "blake3",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(SimError::DigestUnavailable {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fixed-width lowercase hex rendering of an identifier
pub fn identifier_hex(id: NodeIdentifier) -> String {
    format!("{:0width$x}", id, width = ID_HEX_DIGITS)
}

/// Whether the first `digits` hex digits of `a` and `b` agree
///
/// Equivalent to comparing the leading `digits` characters of
/// [`identifier_hex`] for both values. Lengths past 32 compare all digits.
pub fn shares_hex_prefix(a: NodeIdentifier, b: NodeIdentifier, digits: usize) -> bool {
    let digits = digits.min(ID_HEX_DIGITS);
    if digits == 0 {
        return true;
    }
    let shift = 4 * (ID_HEX_DIGITS - digits);
    (a ^ b) >> shift == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_identifier_fixture() {
        // md5("101") = 38b3eff8..., a positive signed value
        let id = DigestAlgorithm::Md5.node_identifier(101);
        assert_eq!(id, 0x38b3eff8baf56627478ec76a704e9b52);
        assert_eq!(identifier_hex(id), "38b3eff8baf56627478ec76a704e9b52");
    }

    #[test]
    fn test_md5_empty_input() {
        let out = DigestAlgorithm::Md5.digest128(b"");
        assert_eq!(
            out,
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec,
                0xf8, 0x42, 0x7e
            ]
        );
    }

    #[test]
    fn test_default_is_md5() {
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Md5);
    }

    #[test]
    fn test_blake3_identifier_fixture() {
        // blake3("101") starts with e30b72e0..., a negative signed value
        let id = DigestAlgorithm::Blake3.node_identifier(101);
        assert_eq!(id, 0x1cf48d1f9ccf2d729b76fddb7e834415);
        assert_eq!(identifier_hex(id), "1cf48d1f9ccf2d729b76fddb7e834415");
    }

    #[test]
    fn test_blake3_empty_input_prefix() {
        let out = DigestAlgorithm::Blake3.digest128(b"");
        assert_eq!(
            out,
            [
                0xaf, 0x13, 0x49, 0xb9, 0xf5, 0xf9, 0xa1, 0xa6, 0xa0, 0x40, 0x4d, 0xea, 0x36,
                0xdc, 0xc9, 0x49
            ]
        );
    }

    #[test]
    fn test_identifiers_are_non_negative_signed_magnitudes() {
        for digest in [DigestAlgorithm::Md5, DigestAlgorithm::Blake3, DigestAlgorithm::Sha256] {
            for counter in 0..500u64 {
                let id = digest.node_identifier(counter);
                assert!(id <= 1u128 << 127, "{} id {} too large", digest, counter);
            }
        }
    }

    #[test]
    fn test_digests_differ() {
        let ids = [
            DigestAlgorithm::Md5.node_identifier(7),
            DigestAlgorithm::Blake3.node_identifier(7),
            DigestAlgorithm::Sha256.node_identifier(7),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("blake3".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Blake3));
        assert_eq!("BLAKE3".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Blake3));
        assert_eq!("sha-256".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha256));
        assert_eq!("MD5".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Md5));
        assert_eq!(
            "md4".parse::<DigestAlgorithm>(),
            Err(SimError::DigestUnavailable {
                name: "md4".to_string()
            })
        );
    }

    #[test]
    fn test_hex_is_fixed_width() {
        assert_eq!(identifier_hex(0), "0".repeat(32));
        assert_eq!(identifier_hex(0xab), format!("{}ab", "0".repeat(30)));
        assert_eq!(identifier_hex(u128::MAX).len(), 32);
    }

    #[test]
    fn test_prefix_matches_string_comparison() {
        let ids: Vec<NodeIdentifier> = (0..40u64)
            .map(|c| DigestAlgorithm::Md5.node_identifier(c))
            .chain([0, 1, 1u128 << 127, 0x0f00_0000_0000_0000_0000_0000_0000_0000])
            .collect();

        for &a in &ids {
            for &b in &ids {
                let (ha, hb) = (identifier_hex(a), identifier_hex(b));
                for digits in 0..=34 {
                    let n = digits.min(32);
                    assert_eq!(
                        shares_hex_prefix(a, b, digits),
                        ha[..n] == hb[..n],
                        "{} vs {} at {} digits",
                        ha,
                        hb,
                        digits
                    );
                }
            }
        }
    }
}
