//! # Domain Types
//!
//! Core domain types used throughout Numero.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ReadingRequest  │   │  NumberProfile  │   │     Reading     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  life_path      │──►│  profile        │       │
//! │  │  birthdate      │   │  birth_day      │   │  meaning        │       │
//! │  │                 │   │  expression     │   │  notices        │       │
//! │  │                 │   │  soul_urge      │   │  language       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   NumberKind    │   │    Language     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  LifePath       │   │  En             │                             │
//! │  │  BirthDay       │   │  Ja             │                             │
//! │  │  Expression     │   └─────────────────┘                             │
//! │  │  SoulUrge       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::reduction::is_master;

// =============================================================================
// Birthdate Range
// =============================================================================

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Earliest accepted birthdate (inclusive).
pub const MIN_BIRTHDATE: NaiveDate = ymd(1925, 1, 1);

/// Latest accepted birthdate (inclusive).
pub const MAX_BIRTHDATE: NaiveDate = ymd(2025, 12, 31);

/// Birthdate the form starts with.
pub const DEFAULT_BIRTHDATE: NaiveDate = ymd(1980, 1, 1);

// =============================================================================
// Number Kind
// =============================================================================

/// The four numbers a reading derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    /// All digits of the birthdate.
    LifePath,
    /// Day of month.
    BirthDay,
    /// All letters of the name.
    Expression,
    /// Vowels of the name.
    SoulUrge,
}

impl NumberKind {
    /// All kinds, in display order.
    pub const ALL: [NumberKind; 4] = [
        NumberKind::LifePath,
        NumberKind::BirthDay,
        NumberKind::Expression,
        NumberKind::SoulUrge,
    ];

    /// Stable string key (`life_path`, `birth_day`, ...).
    pub const fn key(&self) -> &'static str {
        match self {
            NumberKind::LifePath => "life_path",
            NumberKind::BirthDay => "birth_day",
            NumberKind::Expression => "expression",
            NumberKind::SoulUrge => "soul_urge",
        }
    }

    /// Human-readable label in the given language.
    pub const fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, NumberKind::LifePath) => "Life Path Number",
            (Language::En, NumberKind::BirthDay) => "Birth Day Number",
            (Language::En, NumberKind::Expression) => "Expression Number",
            (Language::En, NumberKind::SoulUrge) => "Soul Urge Number",
            (Language::Ja, NumberKind::LifePath) => "運命数",
            (Language::Ja, NumberKind::BirthDay) => "誕生数",
            (Language::Ja, NumberKind::Expression) => "表現数",
            (Language::Ja, NumberKind::SoulUrge) => "魂の欲求数",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NumberKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "life_path" => Ok(NumberKind::LifePath),
            "birth_day" => Ok(NumberKind::BirthDay),
            "expression" => Ok(NumberKind::Expression),
            "soul_urge" => Ok(NumberKind::SoulUrge),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

// =============================================================================
// Language
// =============================================================================

/// Language of the interpretation texts and notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// ISO 639-1 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ja" | "jp" | "japanese" => Ok(Language::Ja),
            _ => Err(CoreError::UnsupportedLanguage(s.to_string())),
        }
    }
}

// =============================================================================
// Number Profile
// =============================================================================

/// The four derived numbers of one reading.
///
/// Each value is in {1..9, 11, 22, 33}, or 0 for a name with no
/// letters (or no vowels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberProfile {
    pub life_path: u32,
    pub birth_day: u32,
    pub expression: u32,
    pub soul_urge: u32,
}

impl NumberProfile {
    /// Returns the value for one kind.
    pub fn get(&self, kind: NumberKind) -> u32 {
        match kind {
            NumberKind::LifePath => self.life_path,
            NumberKind::BirthDay => self.birth_day,
            NumberKind::Expression => self.expression,
            NumberKind::SoulUrge => self.soul_urge,
        }
    }

    /// Values in display order.
    pub fn values(&self) -> [u32; 4] {
        [self.life_path, self.birth_day, self.expression, self.soul_urge]
    }

    /// `(kind, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (NumberKind, u32)> + '_ {
        NumberKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Kinds whose value is a master number.
    pub fn master_kinds(&self) -> Vec<NumberKind> {
        self.entries()
            .filter(|(_, value)| is_master(*value))
            .map(|(kind, _)| kind)
            .collect()
    }
}

// =============================================================================
// Reading Request
// =============================================================================

/// One form submission: a name and a birthdate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    /// Free text; non-letters are ignored by the calculations.
    pub name: String,

    /// Calendar date of birth.
    pub birthdate: NaiveDate,
}

impl ReadingRequest {
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        ReadingRequest {
            name: name.into(),
            birthdate,
        }
    }
}

// =============================================================================
// Reading
// =============================================================================

/// The result screen of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub name: String,
    pub birthdate: NaiveDate,
    pub language: Language,
    pub profile: NumberProfile,

    /// Interpretation of the life path number.
    pub life_path_meaning: String,

    /// Values appearing in more than one position, first occurrence order.
    pub repeated: Vec<u32>,

    /// One notice per repeated value.
    pub notices: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthdate_bounds() {
        assert_eq!(MIN_BIRTHDATE.to_string(), "1925-01-01");
        assert_eq!(MAX_BIRTHDATE.to_string(), "2025-12-31");
        assert_eq!(DEFAULT_BIRTHDATE.to_string(), "1980-01-01");
        assert!(MIN_BIRTHDATE <= DEFAULT_BIRTHDATE && DEFAULT_BIRTHDATE <= MAX_BIRTHDATE);
    }

    #[test]
    fn test_number_kind_parsing() {
        assert_eq!("life_path".parse::<NumberKind>().unwrap(), NumberKind::LifePath);
        assert_eq!("Soul-Urge".parse::<NumberKind>().unwrap(), NumberKind::SoulUrge);
        assert!("lucky".parse::<NumberKind>().is_err());

        for kind in NumberKind::ALL {
            assert_eq!(kind.key().parse::<NumberKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("japanese".parse::<Language>().unwrap(), Language::Ja);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_profile_accessors() {
        let profile = NumberProfile {
            life_path: 11,
            birth_day: 5,
            expression: 22,
            soul_urge: 7,
        };
        assert_eq!(profile.values(), [11, 5, 22, 7]);
        assert_eq!(profile.get(NumberKind::Expression), 22);
        assert_eq!(
            profile.master_kinds(),
            vec![NumberKind::LifePath, NumberKind::Expression]
        );
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&NumberKind::SoulUrge).unwrap();
        assert_eq!(json, "\"soul_urge\"");
        let json = serde_json::to_string(&Language::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
    }
}
