//! Logging error types

use thiserror::Error;

/// Valid values for a string log level, in the order they are reported
pub const VALID_LEVELS: &str = "notset, debug, info, warning, warn, error";

/// Errors that can occur while obtaining or configuring a logger
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Log level string is not one of the recognized names
    #[error("Invalid log_level parameter: {value}. Valid options: {VALID_LEVELS}")]
    InvalidLevel { value: String },

    /// Logger names must not be empty
    #[error("Logger name must not be empty")]
    EmptyName,

    /// Opening a file sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LoggingError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            value: value.into(),
        }
    }
}

pub type LoggingResult<T> = Result<T, LoggingError>;
