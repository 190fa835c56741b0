//! Hash functions behind the builders

use crate::{HashResult, Result};
use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// SHA-256 of `data` as a fixed-size array
#[must_use]
pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    Sha256::digest(data).into()
}

/// SHA-256 of `data` for async callers
///
/// Yields once after hashing so long batches of small digests do not
/// starve the runtime.
///
/// # Errors
///
/// Infallible for any input; the `Result` matches the builder contract.
pub async fn sha256_hash(data: &[u8]) -> Result<HashResult> {
    let digest = sha256_digest(data);

    tokio::task::yield_now().await;

    Ok(HashResult::from(digest))
}
