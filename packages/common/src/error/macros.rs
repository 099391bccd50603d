//! Macros for error creation and handling

/// Create an error of the given kind with source location context
///
/// `err!(validation, "shift must be between 1 and 25")`
#[doc(hidden)]
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

/// Return early with an error
#[doc(hidden)]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an error unless the condition holds
#[doc(hidden)]
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
