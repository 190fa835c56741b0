//! SHA-256 builder
//!
//! `compute` takes the data as its argument and hands back a future:
//!
//! ```rust,ignore
//! let digest = Hash::sha256().compute(b"correct|||horse|||battery").await?;
//! ```

use super::hash_functions::sha256_hash;
use crate::{AsyncHashResult, AsyncHashResultWithError, HashError, HashResult, Result};
use seedpass_common::NotResult;
use tokio::sync::oneshot;

/// SHA-256 hash builder
#[derive(Clone, Debug, Default)]
pub struct Sha256Builder;

/// SHA-256 hash builder with result handler
pub struct Sha256BuilderWithHandler<F, T> {
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

/// SHA-256 hash builder with error handler
pub struct Sha256BuilderWithError<E> {
    error_handler: E,
}

impl Sha256Builder {
    /// Create new SHA-256 builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add `on_result` handler that unwraps the result itself
    pub fn on_result<F, T>(self, handler: F) -> Sha256BuilderWithHandler<F, T>
    where
        F: FnOnce(Result<HashResult>) -> T + Send + 'static,
        T: NotResult + Send + 'static,
    {
        Sha256BuilderWithHandler {
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Add `on_error` handler - transforms errors but passes through success
    pub fn on_error<E>(self, handler: E) -> Sha256BuilderWithError<E>
    where
        E: Fn(HashError) -> HashError + Send + Sync + 'static,
    {
        Sha256BuilderWithError {
            error_handler: handler,
        }
    }

    /// Compute the digest on a spawned task
    ///
    /// Must be called from within a tokio runtime.
    pub fn compute<D: Into<Vec<u8>>>(self, data: D) -> AsyncHashResult {
        AsyncHashResult::new(spawn_sha256(data.into()))
    }
}

impl<F, T> Sha256BuilderWithHandler<F, T>
where
    F: FnOnce(Result<HashResult>) -> T + Send + 'static,
    T: NotResult + Send + 'static,
{
    /// Compute the digest and pass the outcome to the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, data: D) -> T {
        let data = data.into();
        let result = sha256_hash(&data).await;
        (self.result_handler)(result)
    }
}

impl<E> Sha256BuilderWithError<E>
where
    E: Fn(HashError) -> HashError + Send + Sync + 'static,
{
    /// Add `on_result` handler after error handler
    ///
    /// The handler sees errors already passed through the error transform.
    pub fn on_result<F, T>(
        self,
        handler: F,
    ) -> Sha256BuilderWithHandler<impl FnOnce(Result<HashResult>) -> T + Send + 'static, T>
    where
        F: FnOnce(Result<HashResult>) -> T + Send + 'static,
        T: NotResult + Send + 'static,
    {
        let error_handler = self.error_handler;
        Sha256BuilderWithHandler {
            result_handler: move |result: Result<HashResult>| {
                handler(result.map_err(error_handler))
            },
            _phantom: std::marker::PhantomData,
        }
    }

    /// Compute the digest on a spawned task, transforming any error
    pub fn compute<D: Into<Vec<u8>>>(self, data: D) -> AsyncHashResultWithError<E> {
        AsyncHashResultWithError::new(spawn_sha256(data.into()), self.error_handler)
    }
}

fn spawn_sha256(data: Vec<u8>) -> oneshot::Receiver<Result<HashResult>> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        tracing::trace!(bytes = data.len(), "computing SHA-256");
        let result = sha256_hash(&data).await;
        let _ = tx.send(result);
    });

    rx
}
