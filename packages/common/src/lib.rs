//! Common infrastructure for the seedpass packages
//!
//! - Error type with context propagation and backtraces
//! - `env_logger` based logging that never records secrets
//! - Marker traits shared by the fluent builders

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::*;
pub use traits::NotResult;
