//! Digest bytes returned by the hash builders

use crate::{HashError, Result};

/// Result of a hash operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    bytes: Vec<u8>,
}

impl HashResult {
    /// Create a new hash result from raw bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the hash
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Copy the digest into a fixed-size array
    ///
    /// # Errors
    ///
    /// Returns `HashError::DigestLength` when the digest is not exactly `N` bytes.
    pub fn to_array<const N: usize>(&self) -> Result<[u8; N]> {
        <[u8; N]>::try_from(self.bytes.as_slice()).map_err(|_| HashError::DigestLength {
            expected: N,
            actual: self.bytes.len(),
        })
    }

    /// Get the hash as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the length of the hash in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the hash is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for HashResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for HashResult {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl seedpass_common::NotResult for HashResult {}
