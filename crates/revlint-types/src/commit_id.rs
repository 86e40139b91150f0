use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::{Digest, Sha1};

use crate::error::TypeError;

/// Length in bytes of a git object identifier (SHA-1).
pub const COMMIT_ID_LENGTH: usize = 20;

/// Length of a full hex-encoded commit identifier.
pub const COMMIT_ID_HEX_LENGTH: usize = COMMIT_ID_LENGTH * 2;

/// Identifier of a commit object.
///
/// This is the 20-byte SHA-1 name git gives to every object. It serializes
/// as its full lowercase hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId([u8; COMMIT_ID_LENGTH]);

impl CommitId {
    /// Compute a `CommitId` by hashing raw bytes with SHA-1.
    pub fn from_bytes(data: &[u8]) -> Self {
        let digest = Sha1::digest(data);
        let mut arr = [0u8; COMMIT_ID_LENGTH];
        arr.copy_from_slice(&digest);
        Self(arr)
    }

    /// Create a `CommitId` from a pre-computed hash.
    pub fn from_hash(hash: [u8; COMMIT_ID_LENGTH]) -> Self {
        Self(hash)
    }

    /// The raw 20-byte hash.
    pub fn as_bytes(&self) -> &[u8; COMMIT_ID_LENGTH] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 7 characters, as `git log --oneline`).
    pub fn short_hex(&self) -> String {
        let mut short = self.to_hex();
        short.truncate(7);
        short
    }

    /// Parse from a full 40-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != COMMIT_ID_LENGTH {
            return Err(TypeError::InvalidLength {
                expected: COMMIT_ID_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; COMMIT_ID_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Returns `true` if `s` has the shape of a full commit id: exactly 40
    /// hex characters, either case.
    pub fn is_full_hex(s: &str) -> bool {
        s.len() == COMMIT_ID_HEX_LENGTH && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", self.short_hex())
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for CommitId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for CommitId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CommitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_is_deterministic() {
        let id1 = CommitId::from_bytes(b"hello world");
        let id2 = CommitId::from_bytes(b"hello world");
        assert_eq!(id1, id2);
    }

    #[test]
    fn different_data_produces_different_ids() {
        assert_ne!(CommitId::from_bytes(b"hello"), CommitId::from_bytes(b"world"));
    }

    #[test]
    fn sha1_of_empty_input_matches_known_digest() {
        let id = CommitId::from_bytes(b"");
        assert_eq!(id.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn hex_parsing_accepts_uppercase() {
        let id = CommitId::from_hex("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709").unwrap();
        assert_eq!(id, CommitId::from_bytes(b""));
    }

    #[test]
    fn hex_parsing_rejects_short_input() {
        let err = CommitId::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 20,
                actual: 2
            }
        );
    }

    #[test]
    fn hex_parsing_rejects_non_hex() {
        assert!(matches!(
            CommitId::from_hex("whatever"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn full_hex_shape() {
        assert!(CommitId::is_full_hex("826f193edd4ba9d6d1799b66fa64f9a84f1db3bf"));
        assert!(!CommitId::is_full_hex("826f193"));
        assert!(!CommitId::is_full_hex("master"));
        assert!(!CommitId::is_full_hex("826f193edd4ba9d6d1799b66fa64f9a84f1db3bz"));
    }

    #[test]
    fn short_hex_is_7_chars() {
        let id = CommitId::from_bytes(b"test");
        assert_eq!(id.short_hex().len(), 7);
        assert!(id.to_hex().starts_with(&id.short_hex()));
    }

    #[test]
    fn serializes_as_hex_string() {
        let id = CommitId::from_bytes(b"serde test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));
        let parsed: CommitId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
