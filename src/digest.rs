// src/digest.rs
//! Plaintext digest returned by a completed decryption

use std::fmt;

use crate::consts::DIGEST_LENGTH;

/// Digest accumulated over every plaintext byte the decrypt capability
/// emitted — including trailing bytes the length corrector discarded
/// afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaintextDigest([u8; DIGEST_LENGTH]);

impl PlaintextDigest {
    /// Wrap a finalized digest value.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Consume into the raw array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LENGTH] {
        self.0
    }

    /// Lowercase hex rendering (40 chars).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LENGTH]> for PlaintextDigest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PlaintextDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PlaintextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PlaintextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaintextDigest({})", self.to_hex())
    }
}
