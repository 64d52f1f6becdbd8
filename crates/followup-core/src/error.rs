//! Error types for the schedule library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all schedule operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A day number that is not part of the schedule
    #[error("Day {day} not found in schedule")]
    DayNotFound { day: u32 },
    /// Calendar arithmetic that left the supported range
    #[error("Date error: {message}")]
    DateTime {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Failures reported by a plan executor
    #[error("Executor error: {message}")]
    Executor { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an executor error from any displayable failure.
    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for jiff-related Results.
pub trait DateResultExt<T> {
    /// Map calendar errors with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ScheduleError::DateTime {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = ScheduleError::invalid_input("offset_hours").with_reason("must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'offset_hours': must be finite"
        );
    }

    #[test]
    fn test_date_context_wraps_source() {
        let failed: std::result::Result<(), jiff::Error> =
            jiff::civil::Date::new(2024, 13, 1).map(|_| ());
        let err = failed.date_context("building date").unwrap_err();
        assert!(matches!(err, ScheduleError::DateTime { .. }));
        assert!(err.to_string().contains("building date"));
    }
}
