//! # Seedpass password derivation
//!
//! Derives a reproducible password from ordered seed words and a length.
//! The same seeds in the same order always give the same password; nothing
//! is stored, sent anywhere, or drawn from a random source.
//!
//! ## Pipeline
//!
//! 1. Join the seeds with `"|||"`
//! 2. SHA-256 the UTF-8 bytes
//! 3. Place one lowercase, uppercase, digit and symbol character
//! 4. Fill the remaining positions from the full alphabet, reusing digest
//!    bytes cyclically
//! 5. Permute with a Fisher-Yates walk whose swap indices come from the digest
//!
//! ## Quick Start
//!
//! ```rust
//! use seedpass_password::{SeedList, derive_password};
//!
//! let seeds = SeedList::new(["correct", "horse", "battery"])?;
//! let password = derive_password(&seeds, 12)?;
//! assert_eq!(password.as_str(), "duTV9g!MYM8b");
//! # Ok::<(), seedpass_password::PasswordError>(())
//! ```
//!
//! Async callers can use the builder:
//!
//! ```rust,ignore
//! let password = Password::from_seeds(["correct", "horse", "battery"])
//!     .with_length(12)
//!     .derive()
//!     .await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod charset;
pub mod engine;
pub mod error;
pub mod password;
pub mod seeds;

pub use api::{Password, PasswordBuilder, PasswordBuilderWithHandler, PasswordBuilderWithLength};
pub use async_result::AsyncPasswordResult;
pub use charset::CharacterClass;
pub use engine::{MIN_LENGTH, SeedDigest, check_length, derive_from_digest, derive_password};
pub use error::{PasswordError, Result};
pub use password::DerivedPassword;
pub use seeds::{SEED_DELIMITER, SeedList};
