//! # Reading
//!
//! One computation pass: validate the submission, derive the four
//! numbers, look up the life path meaning and collect repetition notices.
//!
//! ```text
//! ReadingRequest ──► validate ──► NumberProfile ──► meaning + notices ──► Reading
//!                       │
//!                       └── empty name ──► CoreError (no numbers computed)
//! ```

use tracing::trace;

use crate::error::CoreResult;
use crate::meaning::meaning;
use crate::numbers::{birth_day_for, expression_number, life_path_for, soul_urge_number};
use crate::repetition::{repeated_numbers, repetition_notices};
use crate::types::{Language, NumberKind, NumberProfile, Reading, ReadingRequest};
use crate::validation::validate_request;

impl NumberProfile {
    /// Derives the four numbers without validating the input.
    pub fn compute(request: &ReadingRequest) -> Self {
        NumberProfile {
            life_path: life_path_for(request.birthdate),
            birth_day: birth_day_for(request.birthdate),
            expression: expression_number(&request.name),
            soul_urge: soul_urge_number(&request.name),
        }
    }
}

impl Reading {
    /// Runs one full reading.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use numero_core::{Language, Reading, ReadingRequest};
    ///
    /// let request = ReadingRequest::new("ABC", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
    /// let reading = Reading::compute(&request, Language::En).unwrap();
    /// assert_eq!(reading.profile.life_path, 3);
    /// assert_eq!(reading.profile.expression, 6);
    /// ```
    pub fn compute(request: &ReadingRequest, language: Language) -> CoreResult<Self> {
        validate_request(request)?;

        let profile = NumberProfile::compute(request);
        trace!(?profile, "numbers derived");

        Ok(Reading {
            name: request.name.clone(),
            birthdate: request.birthdate,
            language,
            profile,
            life_path_meaning: meaning(NumberKind::LifePath, profile.life_path, language)
                .to_string(),
            repeated: repeated_numbers(&profile.values()),
            notices: repetition_notices(&profile, language),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::meaning::placeholder;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_reading() {
        let request = ReadingRequest::new("ABC", date(1990, 5, 15));
        let reading = Reading::compute(&request, Language::En).unwrap();

        assert_eq!(
            reading.profile,
            NumberProfile {
                life_path: 3,
                birth_day: 6,
                expression: 6,
                soul_urge: 1,
            }
        );
        assert!(reading.life_path_meaning.contains("creativity"));
        assert_eq!(reading.repeated, vec![6]);
        assert_eq!(reading.notices.len(), 1);
    }

    #[test]
    fn test_repetition_scenario() {
        // 1979-01-05: 1+9+7+9+0+1+0+5 = 32 → 5, day 5
        // "Noa": N5+O6+A1 = 12 → 3, vowels O6+A1 = 7
        let request = ReadingRequest::new("Noa", date(1979, 1, 5));
        let reading = Reading::compute(&request, Language::En).unwrap();

        assert_eq!(reading.profile.life_path, 5);
        assert_eq!(reading.profile.birth_day, 5);
        assert_eq!(reading.profile.expression, 3);
        assert_eq!(reading.profile.soul_urge, 7);
        assert_eq!(reading.repeated, vec![5]);
        assert_eq!(reading.notices.len(), 1);
    }

    #[test]
    fn test_empty_name_computes_nothing() {
        let request = ReadingRequest::new("", date(1990, 5, 15));
        let err = Reading::compute(&request, Language::En).unwrap_err();
        assert!(err.is_missing_name());
    }

    #[test]
    fn test_blank_name_is_not_empty() {
        let request = ReadingRequest::new("   ", date(1980, 1, 1));
        let reading = Reading::compute(&request, Language::En).unwrap();
        assert_eq!(reading.name, "   ");
        assert_eq!(reading.profile.life_path, 2);
        assert_eq!(reading.profile.expression, 0);
        assert_eq!(reading.profile.soul_urge, 0);
    }

    #[test]
    fn test_out_of_range_date_rejected() {
        let request = ReadingRequest::new("Ada", date(2030, 1, 1));
        let err = Reading::compute(&request, Language::En).unwrap_err();
        assert!(!err.is_missing_name());
    }

    #[test]
    fn test_letterless_name_still_reads() {
        let request = ReadingRequest::new("123", date(1980, 1, 1));
        let reading = Reading::compute(&request, Language::Ja).unwrap();
        assert_eq!(reading.profile.expression, 0);
        assert_eq!(reading.profile.soul_urge, 0);
        assert_ne!(reading.life_path_meaning, placeholder(Language::Ja));
    }

    #[test]
    fn test_reading_serializes() {
        let request = ReadingRequest::new("ABC", date(1990, 5, 15));
        let reading = Reading::compute(&request, Language::En).unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["birthdate"], "1990-05-15");
        assert_eq!(json["profile"]["life_path"], 3);
        assert_eq!(json["language"], "en");
    }
}
