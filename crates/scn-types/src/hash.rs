use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content digest identifying a scene body independently of its number.
///
/// A `SceneHash` is the BLAKE3 digest of a scene's normalized content.
/// Two scenes whose bodies differ only in case or whitespace run length
/// share a hash, which is what lets a renumbered scene be recognized as
/// moved rather than removed and re-added.
///
/// Serialized as a lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SceneHash([u8; 32]);

impl SceneHash {
    /// Create a `SceneHash` from a pre-computed digest.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for SceneHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SceneHash({})", self.short_hex())
    }
}

impl fmt::Display for SceneHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<SceneHash> for String {
    fn from(hash: SceneHash) -> Self {
        hash.to_hex()
    }
}

impl TryFrom<String> for SceneHash {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: u8) -> SceneHash {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seed.wrapping_mul(31).wrapping_add(i as u8);
        }
        SceneHash::from_hash(bytes)
    }

    #[test]
    fn equality_follows_digest_bytes() {
        assert_eq!(sample(1), sample(1));
        assert_ne!(sample(1), sample(2));
    }

    #[test]
    fn hex_roundtrip() {
        let hash = sample(7);
        let parsed = SceneHash::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, parsed);
        assert_eq!(hash.to_hex().len(), 64);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = SceneHash::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            SceneHash::from_hex("not hex"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_hex_is_a_prefix() {
        let hash = sample(9);
        assert_eq!(hash.short_hex().len(), 8);
        assert!(hash.to_hex().starts_with(&hash.short_hex()));
        assert_eq!(format!("{hash:?}"), format!("SceneHash({})", hash.short_hex()));
    }

    #[test]
    fn serializes_as_hex_string() {
        let hash = sample(11);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
        let parsed: SceneHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, parsed);
    }
}
