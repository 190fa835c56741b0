//! Error handling with context propagation
//!
//! Errors carry a kind, an optional context message, an optional source
//! and (with `full-backtrace`) the backtrace captured where they were built.

pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
pub mod types;

pub use logging::{LOG_TARGET, LoggingTransformer};
pub use types::{Error, ErrorKind, Result};
