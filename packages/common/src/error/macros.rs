//! Macros for error creation and early returns
//!
//! The messages end up in front of the user, so they carry no source
//! location; the backtrace already records where the error was built.

/// Build an [`Error`](crate::Error) of the given kind with a formatted context
///
/// `err!(validation, "length {} is not allowed", n)`
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::error::Error::$kind()
    };
    ($kind:ident, $msg:expr) => {
        $crate::error::Error::$kind().context($msg)
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::$kind().context(format!($fmt, $($arg)*))
    };
}

/// Return early with an [`err!`] error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an [`err!`] error unless the condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
