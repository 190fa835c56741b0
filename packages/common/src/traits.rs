//! Common traits used across the seedpass packages

/// Marker for values a result handler may produce
///
/// Builders that take an `on_result` handler require the handler to unwrap
/// the `Result` itself, so the awaited value is never another `Result`.
pub trait NotResult {}

impl NotResult for bool {}
impl NotResult for () {}
impl<T> NotResult for Vec<T> {}
impl NotResult for String {}
impl<T> NotResult for Option<T> {}
impl NotResult for usize {}
