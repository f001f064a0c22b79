//! Formatting macros for [`Logger`](crate::Logger)
//!
//! Arguments are only rendered when some logger in the chain accepts the
//! record.
//!
//! ```
//! use cdislogging::{log_info, Registry};
//!
//! let registry = Registry::new();
//! let log = registry.get_logger("jobs", None, Some("info")).unwrap();
//! log_info!(log, "processed {} items", 42);
//! ```

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Error, format_args!($($arg)*))
    };
}
