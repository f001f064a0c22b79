//! Logging configuration files
//!
//! A configuration file lists loggers and the level/file each should get.
//! Supported formats:
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! ```yaml
//! default_level: notset
//! loggers:
//!   - name: app
//!     level: info
//!     file: /var/log/app.log
//!   - name: app.db
//!     level: warn
//! ```

mod file;

pub use file::{
    ConfigError, ConfigFormat, ConfigLevel, ConfigResult, FileConfigSource, LoggerConfig,
    LoggingConfig,
};
