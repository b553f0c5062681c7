//! Logging facade
//!
//! Re-exports `log` macros when the `log` feature is enabled, otherwise
//! provides no-op macros with the same names.

#[cfg(feature = "log")]
pub(crate) use log::{debug, trace, warn};

#[cfg(not(feature = "log"))]
macro_rules! log_noop {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "log"))]
pub(crate) use {log_noop as debug, log_noop as trace, log_noop as warn};
