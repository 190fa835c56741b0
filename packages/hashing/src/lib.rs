//! SHA-256 hashing for seed derivation
//!
//! Two ways in: the synchronous [`sha256_digest`] used by the derivation
//! engine, and the fluent `Hash::sha256().compute(data).await` builder for
//! async callers.

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod error;
pub mod hash_result;

pub use error::{HashError, Result};

pub use api::{
    Hash, Sha256Builder, Sha256BuilderWithError, Sha256BuilderWithHandler,
    hash_functions::{SHA256_DIGEST_LEN, sha256_digest, sha256_hash},
};

pub use async_result::{AsyncHashResult, AsyncHashResultWithError};
pub use hash_result::HashResult;
