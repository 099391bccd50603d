//! Error constructors and methods

use super::types::{Error, ErrorInner, ErrorKind};
use crate::codec::Encoding;
use std::fmt;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: None,
            }),
        }
    }

    /// Create an error with a source error
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: Some(Box::new(source)),
            }),
        }
    }

    /// Attach a context message, replacing any previous one
    ///
    /// When the error is shared with other clones, the shared error becomes
    /// the source of the new one instead.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let context = Some(context.to_string());
        match Arc::try_unwrap(self.inner) {
            Ok(mut inner) => {
                inner.context = context;
                Self {
                    inner: Arc::new(inner),
                }
            }
            Err(shared) => Self {
                inner: Arc::new(ErrorInner {
                    kind: shared.kind.clone(),
                    context,
                    source: Some(Box::new(Error { inner: shared })),
                }),
            },
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Short message suitable for a result box in a UI
    ///
    /// Unlike `Display` this never includes the source chain.
    #[must_use]
    pub fn user_message(&self) -> String {
        match &self.inner.context {
            Some(context) => format!("{}: {context}", self.inner.kind),
            None => self.inner.kind.to_string(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Create a malformed encoding error naming the offending format
    #[must_use]
    pub fn malformed_encoding(encoding: Encoding) -> Self {
        Self::new(ErrorKind::MalformedEncoding(encoding))
    }

    /// Create a UTF-8 decode error
    #[must_use]
    pub fn decode() -> Self {
        Self::new(ErrorKind::Decode)
    }

    /// Create a malformed envelope error
    #[must_use]
    pub fn malformed_envelope() -> Self {
        Self::new(ErrorKind::MalformedEnvelope)
    }

    /// Create a decryption failure
    #[must_use]
    pub fn decryption_failed() -> Self {
        Self::new(ErrorKind::DecryptionFailed)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Whether this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Validation)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
