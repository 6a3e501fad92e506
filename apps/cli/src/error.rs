//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Numero                                 │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Empty name? ──────── not an error: Submission::Warning ──► stderr     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad date? ────────── CoreError::Validation ──┐                        │
//! │         │                                     ▼                        │
//! │  Bad config? ──────── ConfigError ────────► ApiError ──► "error: ..."  │
//! │         │                                                   exit 1     │
//! │         ▼                                                               │
//! │  Success ──► Reading rendered on stdout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use numero_core::CoreError;

use crate::state::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// With `--format json` a failure is printed as:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "birthdate has invalid format: expected YYYY-MM-DD"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input failed validation
    ValidationError,

    /// Configuration could not be loaded or is invalid
    ConfigError,

    /// Reading stdin or writing stdout failed
    IoError,

    /// Anything else (serialization bugs etc.)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::UnknownCategory(_) | CoreError::UnsupportedLanguage(_) => {
                ApiError::validation(err.to_string())
            }
        }
    }
}

impl From<numero_core::ValidationError> for ApiError {
    fn from(err: numero_core::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        ApiError::internal("Failed to serialize output")
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        tracing::error!("TOML serialization failed: {}", err);
        ApiError::internal("Failed to serialize configuration")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use numero_core::ValidationError;

    #[test]
    fn test_core_validation_maps_to_validation_code() {
        let err: ApiError = CoreError::from(ValidationError::InvalidFormat {
            field: "birthdate".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "birthdate has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_config_error_code() {
        let err: ApiError = ConfigError::InvalidValue("default_birthdate".to_string()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_json_shape() {
        let err = ApiError::validation("name is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name is required");
        assert_eq!(err.to_string(), "[ValidationError] name is required");
    }
}
