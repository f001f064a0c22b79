//! CDIS Logging
//!
//! Named, hierarchical loggers with a standardized record format:
//!
//! ```text
//! [2024-05-01 13:37:00,042][    parent][   INFO] message
//! ```
//!
//! Loggers are created lazily by name. Calling [`get_logger`] again for the
//! same name returns the same logger and updates it according to a small
//! policy:
//!
//! - passing a level sets it; the first time a logger leaves `notset` it gets
//!   a stdout sink and, if a file name was given, a file sink,
//! - passing no level keeps whatever an earlier call configured,
//! - passing `notset` removes the logger's sinks so records flow to its
//!   parent again (`"a.b"` is a child of `"a"`).
//!
//! ```rust
//! use cdislogging::{log_info, Registry};
//!
//! let registry = Registry::new();
//! let parent = registry.get_logger("parent", None, Some("info")).unwrap();
//! let child = registry.get_logger("parent.child", None, None).unwrap();
//!
//! // Emitted once, through the parent's sink
//! log_info!(child, "request {} done", 7);
//! assert_eq!(parent.sinks()[0].emitted(), 1);
//! ```
//!
//! ## Configuration files
//!
//! The `config` module loads YAML or JSON files describing loggers and
//! applies them to a registry. The `bridge` module routes records from the
//! `log` crate into a registry.

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod registry;
pub mod sink;

pub use bridge::LogBridge;
pub use error::{LoggingError, LoggingResult};
pub use format::{Record, FORMAT};
pub use global::{get_file_handler, get_logger, get_stream_handler, global_registry};
pub use level::Level;
pub use logger::Logger;
pub use registry::{Registry, ROOT_NAME};
pub use sink::{Sink, SinkTarget};
