//! Custom error types for analysis-onboarding
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for onboarding operations
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl OnboardingError {
    /// Create a "not found" error for metric keys
    pub fn metric_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Metric",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for metric types
    pub fn metric_type_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Metric type",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for OnboardingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for OnboardingError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for onboarding operations
pub type OnboardingResult<T> = Result<T, OnboardingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OnboardingError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_metric_not_found_error() {
        let err = OnboardingError::metric_not_found("BUGS");
        assert_eq!(err.to_string(), "Metric not found: BUGS");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OnboardingError = io_err.into();
        assert!(matches!(err, OnboardingError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: OnboardingError = json_err.into();
        assert!(matches!(err, OnboardingError::Json(_)));
    }
}
