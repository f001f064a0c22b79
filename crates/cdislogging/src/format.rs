//! Standardized record format
//!
//! Every sink renders records with the same template:
//!
//! ```text
//! [2024-05-01 13:37:00,042][    parent][   INFO] message
//! ```
//!
//! The logger name is right-aligned in a 10 character field and the level
//! name in a 7 character field. Longer values are not truncated.

use chrono::{DateTime, Local};

use crate::level::Level;

/// The fixed record template shared by all sinks
pub const FORMAT: &str = "[{asctime}][{name:>10}][{levelname:>7}] {message}";

/// Timestamp layout used for `{asctime}`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: DateTime<Local>,
    pub logger: String,
    pub level: Level,
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            logger: logger.into(),
            level,
            message: message.into(),
        }
    }

    /// Render the record with [`FORMAT`]
    pub fn render(&self) -> String {
        format!(
            "[{}][{:>10}][{:>7}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.logger,
            self.level,
            self.message
        )
    }
}
