//! Password builder
//!
//! Seeds and length are validated when `derive` runs, and failures arrive
//! through the returned future (or the `on_result` handler) like any other
//! outcome. The SHA-256 step is the only await point.

use crate::engine::{SeedDigest, arrange, check_length};
use crate::{AsyncPasswordResult, DerivedPassword, Result, SeedList};
use seedpass_common::NotResult;
use seedpass_hashing::sha256_hash;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Entry point for password derivation
pub struct Password;

impl Password {
    /// Start a derivation from ordered seed words
    pub fn from_seeds<I, S>(seeds: I) -> PasswordBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PasswordBuilder {
            seeds: Zeroizing::new(seeds.into_iter().map(Into::into).collect()),
            normalize: false,
        }
    }
}

/// Builder holding the seeds
pub struct PasswordBuilder {
    seeds: Zeroizing<Vec<String>>,
    normalize: bool,
}

/// Builder holding seeds and length
pub struct PasswordBuilderWithLength {
    seeds: Zeroizing<Vec<String>>,
    normalize: bool,
    length: usize,
}

/// Builder with a result handler
pub struct PasswordBuilderWithHandler<F, T> {
    inner: PasswordBuilderWithLength,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

impl PasswordBuilder {
    /// Trim surrounding whitespace from each seed before deriving
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Set the password length
    #[must_use]
    pub fn with_length(self, length: usize) -> PasswordBuilderWithLength {
        PasswordBuilderWithLength {
            seeds: self.seeds,
            normalize: self.normalize,
            length,
        }
    }
}

impl PasswordBuilderWithLength {
    /// Add `on_result` handler that unwraps the result itself
    pub fn on_result<F, T>(self, handler: F) -> PasswordBuilderWithHandler<F, T>
    where
        F: FnOnce(Result<DerivedPassword>) -> T + Send + 'static,
        T: NotResult + Send + 'static,
    {
        PasswordBuilderWithHandler {
            inner: self,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Derive on a spawned task
    ///
    /// Must be called from within a tokio runtime.
    pub fn derive(self) -> AsyncPasswordResult {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let _ = tx.send(self.run().await);
        });

        AsyncPasswordResult::new(rx)
    }

    async fn run(self) -> Result<DerivedPassword> {
        let seeds = if self.normalize {
            SeedList::normalized(self.seeds.iter())
        } else {
            SeedList::new(self.seeds.iter().cloned())
        };
        let seeds = match seeds.and_then(|seeds| check_length(self.length).map(|()| seeds)) {
            Ok(seeds) => seeds,
            Err(e) => {
                tracing::debug!(
                    seed_count = self.seeds.len(),
                    length = self.length,
                    error = %e,
                    "derivation rejected"
                );
                return Err(e);
            }
        };

        tracing::debug!(
            seed_count = seeds.len(),
            length = self.length,
            "deriving password"
        );

        let combined = seeds.combine();
        let digest: Zeroizing<SeedDigest> =
            Zeroizing::new(sha256_hash(combined.as_bytes()).await?.to_array()?);

        Ok(arrange(&digest, self.length))
    }
}

impl<F, T> PasswordBuilderWithHandler<F, T>
where
    F: FnOnce(Result<DerivedPassword>) -> T + Send + 'static,
    T: NotResult + Send + 'static,
{
    /// Derive and pass the outcome to the handler
    pub async fn derive(self) -> T {
        let result = self.inner.run().await;
        (self.result_handler)(result)
    }
}
