//! Error types for the promotion statistics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a statistics computation.

use thiserror::Error;

/// The main error type for the promotion statistics engine.
///
/// A computation either produces a complete report or fails with exactly one
/// of these variants; partial reports are never returned.
///
/// # Example
///
/// ```
/// use promotion_stats::error::EngineError;
///
/// let error = EngineError::DataIntegrity {
///     employee_id: "EMP-007".to_string(),
///     field: "birth_date".to_string(),
///     message: "not a calendar date: '1990-13-01'".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Data integrity error for employee 'EMP-007' field 'birth_date': not a calendar date: '1990-13-01'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The snapshot source could not be read at all.
    #[error("Snapshot source '{source_name}' unavailable: {message}")]
    SnapshotUnavailable {
        /// The name of the snapshot source.
        source_name: String,
        /// A description of the failure.
        message: String,
    },

    /// The snapshot was read but could not be decoded into employee rows.
    #[error("Snapshot source '{source_name}' is malformed: {message}")]
    SnapshotMalformed {
        /// The name of the snapshot source.
        source_name: String,
        /// A description of the decoding failure.
        message: String,
    },

    /// An employee record holds a value the engine cannot meaningfully use.
    #[error("Data integrity error for employee '{employee_id}' field '{field}': {message}")]
    DataIntegrity {
        /// The identifier of the offending employee.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Builds a [`EngineError::DataIntegrity`] for the given employee and field.
    pub fn data_integrity(
        employee_id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::DataIntegrity {
            employee_id: employee_id.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_snapshot_unavailable_displays_source_and_message() {
        let error = EngineError::SnapshotUnavailable {
            source_name: "employees.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Snapshot source 'employees.json' unavailable: permission denied"
        );
    }

    #[test]
    fn test_snapshot_malformed_displays_source_and_message() {
        let error = EngineError::SnapshotMalformed {
            source_name: "employees.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Snapshot source 'employees.json' is malformed: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_data_integrity_helper_builds_variant() {
        let error = EngineError::data_integrity("EMP-001", "training_points", "negative value -2");
        match error {
            EngineError::DataIntegrity {
                employee_id,
                field,
                message,
            } => {
                assert_eq!(employee_id, "EMP-001");
                assert_eq!(field, "training_points");
                assert_eq!(message, "negative value -2");
            }
            _ => panic!("Expected DataIntegrity error"),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unavailable() -> EngineResult<()> {
            Err(EngineError::SnapshotUnavailable {
                source_name: "test".to_string(),
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
