//! How errors read on the terminal
//!
//! Validation errors are the user's to fix, so they print as the bare
//! message: the context when one was attached, otherwise the rejected
//! input's own message. Every other kind prints `Kind: context` followed by
//! the underlying cause.

use super::types::{Error, ErrorKind};
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = &self.inner;

        if inner.kind == ErrorKind::Validation {
            return match (&inner.context, &inner.source) {
                (Some(context), _) => f.write_str(context),
                (None, Some(source)) => write!(f, "{source}"),
                (None, None) => write!(f, "{}", inner.kind),
            };
        }

        write!(f, "{}", inner.kind)?;
        if let Some(context) = &inner.context {
            write!(f, ": {context}")?;
        }
        if let Some(source) = &inner.source {
            write!(f, "\nCaused by: {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
