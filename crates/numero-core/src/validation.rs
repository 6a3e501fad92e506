//! # Validation Module
//!
//! Form input validation for Numero.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing (clap)                                  │
//! │  └── Field presence, flag syntax                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Name must not be empty          → warning, no computation         │
//! │  ├── Birthdate must be YYYY-MM-DD    → error                           │
//! │  └── Birthdate within 1925..=2025    → error                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculations                                                 │
//! │  └── Total functions; odd characters are ignored, never rejected       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use numero_core::validation::{parse_birthdate, validate_name};
//!
//! assert!(validate_name("Ada Lovelace").is_ok());
//! assert!(parse_birthdate("1990-05-15").is_ok());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::numbers::DATE_FORMAT;
use crate::types::{ReadingRequest, MAX_BIRTHDATE, MIN_BIRTHDATE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the name field.
///
/// ## Rules
/// - Must not be empty
/// - Anything else is accepted; spaces, digits, punctuation and non-Latin
///   letters simply contribute nothing to the numbers
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates that a birthdate lies in the accepted range (inclusive).
///
/// ```rust
/// use chrono::NaiveDate;
/// use numero_core::validation::validate_birthdate;
///
/// assert!(validate_birthdate(NaiveDate::from_ymd_opt(1925, 1, 1).unwrap()).is_ok());
/// assert!(validate_birthdate(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).is_err());
/// ```
pub fn validate_birthdate(date: NaiveDate) -> ValidationResult<()> {
    if date < MIN_BIRTHDATE || date > MAX_BIRTHDATE {
        return Err(ValidationError::DateOutOfRange {
            field: "birthdate".to_string(),
            value: date,
            min: MIN_BIRTHDATE,
            max: MAX_BIRTHDATE,
        });
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` birthdate and checks its range.
pub fn parse_birthdate(input: &str) -> ValidationResult<NaiveDate> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "birthdate".to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "birthdate".to_string(),
            reason: format!("expected YYYY-MM-DD ({e})"),
        }
    })?;

    validate_birthdate(date)?;
    Ok(date)
}

/// Validates a whole submission. The name is checked first, so an empty
/// name is reported even when the date is also wrong.
pub fn validate_request(request: &ReadingRequest) -> ValidationResult<()> {
    validate_name(&request.name)?;
    validate_birthdate(request.birthdate)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("a-b c").is_ok());
        assert!(validate_name("山田").is_ok());
        assert!(validate_name("123").is_ok());

        assert!(matches!(
            validate_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_name("   ").is_ok());
    }

    #[test]
    fn test_validate_birthdate_bounds() {
        let ok = |y, m, d| validate_birthdate(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert!(ok(1925, 1, 1).is_ok());
        assert!(ok(2025, 12, 31).is_ok());
        assert!(ok(1980, 1, 1).is_ok());
        assert!(ok(1924, 12, 31).is_err());
        assert!(ok(2026, 1, 1).is_err());
    }

    #[test]
    fn test_parse_birthdate() {
        assert_eq!(
            parse_birthdate(" 1990-05-15 ").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );
        assert!(matches!(
            parse_birthdate("15/05/1990"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_birthdate("1990-02-30"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_birthdate("1900-01-01"),
            Err(ValidationError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            parse_birthdate(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_request_checks_name_first() {
        let request = ReadingRequest::new("", NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
        assert!(matches!(
            validate_request(&request),
            Err(ValidationError::Required { ref field }) if field == "name"
        ));
    }
}
