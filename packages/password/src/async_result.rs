//! Future returned by the password builder

use crate::{DerivedPassword, PasswordError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending password derivation
pub struct AsyncPasswordResult {
    receiver: oneshot::Receiver<Result<DerivedPassword>>,
}

impl AsyncPasswordResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<DerivedPassword>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncPasswordResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<DerivedPassword>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }
}

impl Future for AsyncPasswordResult {
    type Output = Result<DerivedPassword>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(PasswordError::internal(
                "Derivation task dropped before completion",
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}
