//! Error types for the service layer.

use std::fmt;

use crate::validation::FieldError;

/// Errors produced by the service layer, wrapping upstream API errors and
/// adding serialization and input validation failures.
#[derive(Debug)]
pub enum BlogError {
    /// An error from the underlying API client.
    Api(devblog_api::ApiError),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed a single check.
    InvalidInput(String),
    /// A form payload failed validation, with one entry per field.
    Validation(Vec<FieldError>),
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<devblog_api::ApiError> for BlogError {
    fn from(e: devblog_api::ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<Vec<FieldError>> for BlogError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}
