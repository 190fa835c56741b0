//! Error handling for the hashing package

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// Digest has a different size than the caller requires
    #[error("Unexpected digest length: expected {expected}, got {actual}")]
    DigestLength {
        /// Required length in bytes
        expected: usize,
        /// Length that was produced
        actual: usize,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<HashError> for seedpass_common::Error {
    fn from(err: HashError) -> Self {
        Self::with_source(seedpass_common::ErrorKind::Crypto, err)
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
