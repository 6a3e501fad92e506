//! # Error Types
//!
//! Domain-specific error types for numero-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  numero-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form input failures (empty name, bad date)     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The computation functions themselves are total and never fail. Errors
//! only arise when turning raw form input into a [`crate::ReadingRequest`]
//! or when parsing category/language names.

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category key that is not one of the four numbers.
    #[error("Unknown number category: {0}")]
    UnknownCategory(String),

    /// A language code with no text tables.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true when the error is the empty-name case, which the
    /// form surfaces as a warning rather than a failure.
    pub fn is_missing_name(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(ValidationError::Required { field }) if field == "name"
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Date lies outside the accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    DateOutOfRange {
        field: String,
        value: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Invalid format (e.g. a date that isn't YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
