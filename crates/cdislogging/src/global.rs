//! Process-wide default registry
//!
//! The free functions here operate on a single registry that lives for the
//! whole process. Applications that want isolation (tests, embedded
//! components) should create their own [`Registry`] instead.

use std::io;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::LoggingResult;
use crate::logger::Logger;
use crate::registry::Registry;
use crate::sink::Sink;

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry used by [`get_logger`]
pub fn global_registry() -> &'static Registry {
    &GLOBAL_REGISTRY
}

/// Return a sink writing formatted records to stdout
pub fn get_stream_handler() -> Sink {
    Sink::stream()
}

/// Return a sink appending formatted records to `file_name`
///
/// The file is created if it does not exist.
pub fn get_file_handler(file_name: impl AsRef<Path>) -> io::Result<Sink> {
    Sink::file(file_name)
}

/// Return the logger `name` from the global registry
///
/// `log_level` is one of `notset`, `debug`, `info`, `warning`, `warn` or
/// `error`, case-insensitive. Leaving it out keeps the logger's current
/// level, so library code can fetch a logger its caller already configured.
///
/// # Example
///
/// ```
/// use cdislogging::get_logger;
///
/// let log = get_logger("hi", None, Some("info")).unwrap();
/// log.debug("hello world"); // below info, not displayed
/// log.info("hello world");
/// ```
pub fn get_logger(
    name: &str,
    file_name: Option<&str>,
    log_level: Option<&str>,
) -> LoggingResult<Logger> {
    GLOBAL_REGISTRY.get_logger(name, file_name, log_level)
}
