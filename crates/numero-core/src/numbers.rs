//! # The Four Numbers
//!
//! Life path, birth day, expression and soul urge. Every function here is
//! total: unrecognised characters contribute nothing, and any string or
//! integer produces a value.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Number Derivation                               │
//! │                                                                         │
//! │  Birthdate "1990-05-15" ──► digits 1 9 9 0 0 5 1 5 ──► 30 ──► 3        │
//! │  Day of month 15        ──────────────────────────► 15 ──► 6           │
//! │  Name "ABC"             ──► letters 1 2 3 ─────────► 6  ──► 6          │
//! │  Name "ABC" (vowels)    ──► A=1 ───────────────────► 1  ──► 1          │
//! │                                                          │              │
//! │                                                     reduce()            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};

use crate::cipher::{is_vowel, letter_value};
use crate::reduction::reduce;

/// Fixed date pattern used before digit extraction.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Life path number from a date string.
///
/// Every ASCII digit in the string is summed; separators and anything
/// else are ignored.
///
/// ```rust
/// use numero_core::numbers::life_path_number;
///
/// assert_eq!(life_path_number("1990-05-15"), 3);
/// ```
pub fn life_path_number(date: &str) -> u32 {
    let sum: u32 = date.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce(sum)
}

/// Life path number for a calendar date, formatted as `YYYY-MM-DD` first.
pub fn life_path_for(date: NaiveDate) -> u32 {
    life_path_number(&date.format(DATE_FORMAT).to_string())
}

/// Birth day number: the day of month, reduced.
pub fn birth_day_number(day: u32) -> u32 {
    reduce(day)
}

/// Birth day number for a calendar date.
#[inline]
pub fn birth_day_for(date: NaiveDate) -> u32 {
    birth_day_number(date.day())
}

/// Expression number: all letters of the name.
///
/// ```rust
/// use numero_core::numbers::expression_number;
///
/// assert_eq!(expression_number("ABC"), 6);
/// assert_eq!(expression_number("a-b c"), 6);
/// ```
pub fn expression_number(name: &str) -> u32 {
    reduce(name.chars().filter(|c| c.is_alphabetic()).map(letter_value).sum())
}

/// Soul urge number: only the vowels of the name.
pub fn soul_urge_number(name: &str) -> u32 {
    reduce(name.chars().filter(|&c| is_vowel(c)).map(letter_value).sum())
}
