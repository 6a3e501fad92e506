//! # Form State
//!
//! The two input fields of the reading form.
//!
//! ## Field Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  User Action              Method                  State Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Start form ─────────────► FormState::new() ────► birthdate = default  │
//! │                                                                         │
//! │  Type name ──────────────► set_name() ──────────► name = input         │
//! │                                                                         │
//! │  Type date / blank ──────► set_birthdate() ─────► birthdate = parsed   │
//! │                                                    (blank keeps value) │
//! │                                                                         │
//! │  Press submit ───────────► submission() ────────► ReadingRequest       │
//! │                                                                         │
//! │  Field values survive a failed submission so the user can retry.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use numero_core::validation::parse_birthdate;
use numero_core::{ReadingRequest, ValidationError};

/// Current values of the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    birthdate: NaiveDate,
}

impl FormState {
    /// Empty name, birthdate preset to `default_birthdate`.
    pub fn new(default_birthdate: NaiveDate) -> Self {
        FormState {
            name: String::new(),
            birthdate: default_birthdate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    /// Replaces the name. Any text is accepted, as typed.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Parses and stores a birthdate. Blank input keeps the current value;
    /// an invalid date leaves the field unchanged and returns the error.
    pub fn set_birthdate(&mut self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Ok(());
        }
        self.birthdate = parse_birthdate(input)?;
        Ok(())
    }

    /// Snapshot of the fields for one submission.
    pub fn submission(&self) -> ReadingRequest {
        ReadingRequest::new(self.name.clone(), self.birthdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numero_core::DEFAULT_BIRTHDATE;

    #[test]
    fn test_new_form_uses_default_date() {
        let form = FormState::new(DEFAULT_BIRTHDATE);
        assert_eq!(form.name(), "");
        assert_eq!(form.birthdate(), DEFAULT_BIRTHDATE);
    }

    #[test]
    fn test_blank_date_keeps_value() {
        let mut form = FormState::new(DEFAULT_BIRTHDATE);
        form.set_birthdate("1990-05-15").unwrap();
        form.set_birthdate("  ").unwrap();
        assert_eq!(form.birthdate().to_string(), "1990-05-15");
    }

    #[test]
    fn test_invalid_date_leaves_field_unchanged() {
        let mut form = FormState::new(DEFAULT_BIRTHDATE);
        assert!(form.set_birthdate("2031-01-01").is_err());
        assert!(form.set_birthdate("yesterday").is_err());
        assert_eq!(form.birthdate(), DEFAULT_BIRTHDATE);
    }

    #[test]
    fn test_submission_snapshot() {
        let mut form = FormState::new(DEFAULT_BIRTHDATE);
        form.set_name(" Ada Lovelace ");
        let request = form.submission();
        assert_eq!(request.name, " Ada Lovelace ");
        assert_eq!(request.birthdate, DEFAULT_BIRTHDATE);
    }
}
