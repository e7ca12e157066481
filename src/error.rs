//! Error types for Roster
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// Row index past the end of the directory
    #[error("Index {index} not found ({len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Column name that maps to no record field
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// Numeric field given a value that is not an integer
    #[error("'{field}' must be an integer, got '{value}'")]
    NonIntegerValue { field: String, value: String },

    /// No record matches the name/surname pair
    #[error("Record not found: {name} {surname}")]
    RecordNotFound { name: String, surname: String },

    /// The backing file could not be parsed
    #[error("Malformed file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether this error comes from user input rather than the file or the OS.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::UnknownField(_) | Self::NonIntegerValue { .. } | Self::RecordNotFound { .. }
        )
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_error() {
        let err = RosterError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 not found (3 records)");
    }

    #[test]
    fn test_unknown_field_error() {
        let err = RosterError::UnknownField("Email".to_string());
        assert_eq!(err.to_string(), "Unknown field: 'Email'");
    }

    #[test]
    fn test_non_integer_value_error() {
        let err = RosterError::NonIntegerValue {
            field: "Phone".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "'Phone' must be an integer, got 'abc'");
    }

    #[test]
    fn test_record_not_found_error() {
        let err = RosterError::RecordNotFound {
            name: "Ana".to_string(),
            surname: "Gomez".to_string(),
        };
        assert_eq!(err.to_string(), "Record not found: Ana Gomez");
    }

    #[test]
    fn test_malformed_error() {
        let err = RosterError::Malformed {
            line: 4,
            reason: "expected 5 columns, found 3".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed file at line 4: expected 5 columns, found 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RosterError = io_err.into();
        assert!(matches!(err, RosterError::Io(_)));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_user_errors() {
        assert!(RosterError::UnknownField("x".to_string()).is_user_error());
        assert!(RosterError::IndexOutOfRange { index: 0, len: 0 }.is_user_error());
        assert!(
            !RosterError::Malformed {
                line: 1,
                reason: String::new()
            }
            .is_user_error()
        );
    }
}
