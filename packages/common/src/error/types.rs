//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    /// The actual error
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// The error kind
    pub kind: ErrorKind,
    /// Optional error context
    pub context: Option<String>,
    /// Optional source error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// I/O related errors
    #[error("I/O error")]
    Io,

    /// Hashing or derivation failure
    #[error("Cryptographic error")]
    Crypto,

    /// Configuration errors
    #[error("Configuration error")]
    Configuration,

    /// Rejected user input
    #[error("Validation error")]
    Validation,

    /// Internal error
    #[error("Internal error")]
    Internal,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
