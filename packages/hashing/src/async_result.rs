//! Futures returned by the hash builders
//!
//! The digest is computed on a spawned task and delivered over a oneshot
//! channel; these wrappers turn the channel into a `Future<Output = Result<_>>`.

use crate::{HashError, HashResult, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

const TASK_DROPPED: &str = "Hash task dropped before completion";

/// Pending hash computation
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<HashResult>>,
}

/// Pending hash computation with an error transformation
pub struct AsyncHashResultWithError<E> {
    receiver: oneshot::Receiver<Result<HashResult>>,
    error_handler: E,
}

impl AsyncHashResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<HashResult>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncHashResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<HashResult>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }
}

impl Future for AsyncHashResult {
    type Output = Result<HashResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(HashError::internal(TASK_DROPPED))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<E> AsyncHashResultWithError<E> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<HashResult>>, error_handler: E) -> Self {
        Self {
            receiver,
            error_handler,
        }
    }
}

impl<E> Future for AsyncHashResultWithError<E>
where
    E: Fn(HashError) -> HashError + Unpin,
{
    type Output = Result<HashResult>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err((this.error_handler)(HashError::internal(TASK_DROPPED))))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
