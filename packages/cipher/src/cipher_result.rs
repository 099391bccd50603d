//! Future returned by the AES builder
//!
//! PBKDF2 at 100 000 iterations takes tens of milliseconds, which is too
//! long to run on an async worker. The job goes to Tokio's blocking pool
//! and its result comes back over a oneshot channel.

use crate::{CipherError, Result};
use cipherlab_common::NotResult;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending result of a cipher operation
pub struct CipherResult {
    receiver: Option<oneshot::Receiver<Result<Vec<u8>>>>,
    completed: bool,
}

/// Cipher result with a user-defined handler
pub struct CipherResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<Vec<u8>>>,
    handler: Option<F>,
    completed: bool,
}

impl CipherResult {
    /// Create a `CipherResult` from a receiver
    #[must_use]
    pub fn from_receiver(receiver: oneshot::Receiver<Result<Vec<u8>>>) -> Self {
        Self {
            receiver: Some(receiver),
            completed: false,
        }
    }

    /// Create a `CipherResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<Vec<u8>>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self::from_receiver(rx)
    }

    /// Create a `CipherResult` that yields an error
    #[must_use]
    pub fn error(error: CipherError) -> Self {
        Self::ready(Err(error))
    }

    /// Run `job` on the blocking pool of the current Tokio runtime
    ///
    /// Without a runtime the job runs inline and the result is ready
    /// immediately.
    pub fn spawn_blocking<J>(job: J) -> Self
    where
        J: FnOnce() -> Result<Vec<u8>> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let (tx, rx) = oneshot::channel();
                handle.spawn_blocking(move || {
                    let _ = tx.send(job());
                });
                Self::from_receiver(rx)
            }
            Err(_) => {
                tracing::trace!("no tokio runtime, running cipher job inline");
                Self::ready(job())
            }
        }
    }

    /// Attach a handler that turns the `Result` into a plain value
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> CipherResultWithHandler<F>
    where
        F: FnOnce(Result<Vec<u8>>) -> T,
    {
        let receiver = self.receiver.unwrap_or_else(|| {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(Err(CipherError::Internal(
                "CipherResult already consumed".to_string(),
            )));
            rx
        });
        CipherResultWithHandler {
            receiver,
            handler: Some(handler),
            completed: self.completed,
        }
    }
}

impl Future for CipherResult {
    type Output = Result<Vec<u8>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.completed {
            return Poll::Ready(Err(CipherError::Internal(
                "CipherResult polled after completion".to_string(),
            )));
        }

        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(Err(CipherError::Internal(
                "CipherResult receiver already consumed".to_string(),
            )));
        };

        match Pin::new(receiver).poll(cx) {
            Poll::Ready(Ok(result)) => {
                self.completed = true;
                self.receiver = None;
                Poll::Ready(result)
            }
            Poll::Ready(Err(_)) => {
                self.completed = true;
                self.receiver = None;
                Poll::Ready(Err(CipherError::Internal(
                    "cipher task dropped before completing".to_string(),
                )))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for CipherResultWithHandler<F>
where
    F: FnOnce(Result<Vec<u8>>) -> T + Unpin,
    T: NotResult,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // A handler runs exactly once; later polls stay pending
        if this.completed {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(CipherError::Internal(
                "cipher task dropped before completing".to_string(),
            )),
            Poll::Pending => return Poll::Pending,
        };

        this.completed = true;
        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}
