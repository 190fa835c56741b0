//! Error handling for password derivation

use seedpass_hashing::HashError;
use thiserror::Error;

/// Derivation errors
///
/// Everything except `Hash` and `Internal` is invalid input: the caller has
/// to fix the request, nothing is derived.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// No seed words were supplied
    #[error("Invalid input: at least one seed word is required")]
    EmptySeedList,

    /// A seed word is empty or whitespace only
    #[error("Invalid input: seed word {position} is blank")]
    BlankSeed {
        /// 1-based position of the offending seed
        position: usize,
    },

    /// Requested length cannot hold one character of each class
    #[error("Invalid input: length {requested} is below the minimum of {minimum}")]
    LengthBelowMinimum {
        /// Smallest accepted length
        minimum: usize,
        /// Length that was requested
        requested: usize,
    },

    /// Digest computation failed
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PasswordError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the request itself was at fault
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySeedList | Self::BlankSeed { .. } | Self::LengthBelowMinimum { .. }
        )
    }
}

impl From<PasswordError> for seedpass_common::Error {
    fn from(err: PasswordError) -> Self {
        let kind = match err {
            PasswordError::Hash(_) => seedpass_common::ErrorKind::Crypto,
            PasswordError::Internal(_) => seedpass_common::ErrorKind::Internal,
            _ => seedpass_common::ErrorKind::Validation,
        };
        Self::with_source(kind, err)
    }
}

/// Result type for derivation operations
pub type Result<T> = std::result::Result<T, PasswordError>;
