//! Error types for the nearschool library.

use thiserror::Error;

/// Errors that can occur when validating, storing or listing schools.
#[derive(Error, Debug)]
pub enum SchoolError {
    /// A required input field was not supplied.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A required text field was supplied but blank.
    #[error("Field must not be empty: {field}")]
    EmptyField { field: &'static str },

    /// A coordinate field did not parse as a finite number.
    #[error("Invalid number for {field}: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    /// A coordinate is outside its geographic range (strict mode only).
    #[error("Coordinate out of range: {field}={value} (valid: {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record store failed or rejected an operation.
    #[error("Store error: {0}")]
    Store(String),

    /// The MySQL backend failed.
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SchoolError {
    /// Whether this error was caused by caller input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SchoolError::MissingField { .. }
                | SchoolError::EmptyField { .. }
                | SchoolError::NotNumeric { .. }
                | SchoolError::OutOfRange { .. }
        )
    }

    /// Whether this error came from the record store.
    pub fn is_store(&self) -> bool {
        match self {
            SchoolError::Store(_) => true,
            #[cfg(feature = "mysql")]
            SchoolError::Database(_) => true,
            _ => false,
        }
    }
}

/// Result type alias using [`SchoolError`].
pub type Result<T> = std::result::Result<T, SchoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchoolError::MissingField { field: "longitude" };
        assert!(err.to_string().contains("longitude"));

        let err = SchoolError::NotNumeric {
            field: "latitude",
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));

        let err = SchoolError::OutOfRange {
            field: "latitude",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn test_error_classification() {
        assert!(SchoolError::EmptyField { field: "name" }.is_validation());
        assert!(!SchoolError::EmptyField { field: "name" }.is_store());

        let err = SchoolError::Store("connection refused".to_string());
        assert!(err.is_store());
        assert!(!err.is_validation());

        assert!(!SchoolError::Config("DB_NAME".to_string()).is_validation());
        assert!(!SchoolError::Config("DB_NAME".to_string()).is_store());
    }
}
