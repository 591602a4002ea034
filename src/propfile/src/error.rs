// propfile/src/error.rs

//! Error types for reading, querying and rewriting properties files.

use std::io;
use thiserror::Error;

/// Result type alias for propfile operations.
pub type Result<T> = std::result::Result<T, PropertiesError>;

/// Errors that can occur when loading, querying, updating or saving a
/// properties file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// The backing file could not be opened, read or written.
    ///
    /// File access goes through `fs_err`, so the message already names the path.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No key-value entry matches the requested key.
    #[error("No configuration item named '{key}'")]
    KeyNotFound { key: String },

    /// A pair handed to `set` cannot be written back as a single `key=value` line.
    #[error("Invalid property '{key}': {reason}")]
    InvalidArgument { key: String, reason: String },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PropertiesError {
    /// Create a new key-not-found error.
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        PropertiesError::KeyNotFound { key: key.into() }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>, R: Into<String>>(key: S, reason: R) -> Self {
        PropertiesError::InvalidArgument {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True when the error comes from a missing backing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PropertiesError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }

    /// Get the error category for grouping similar errors.
    pub fn category(&self) -> &'static str {
        match self {
            PropertiesError::Io(_) => "io",
            PropertiesError::KeyNotFound { .. } => "lookup",
            PropertiesError::InvalidArgument { .. } => "argument",
            #[cfg(feature = "json")]
            PropertiesError::Json(_) => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PropertiesError::key_not_found("missing");
        assert_eq!(err.to_string(), "No configuration item named 'missing'");

        let err = PropertiesError::invalid_argument("a=b", "key must not contain '='");
        assert_eq!(
            err.to_string(),
            "Invalid property 'a=b': key must not contain '='"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: PropertiesError = io_err.into();

        assert!(err.is_not_found());
        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(PropertiesError::key_not_found("k").category(), "lookup");
        assert_eq!(
            PropertiesError::invalid_argument("k", "bad").category(),
            "argument"
        );
        assert!(!PropertiesError::key_not_found("k").is_not_found());
    }
}
