//! # Repetition Highlight
//!
//! A value that shows up in more than one of the four numbers gets a
//! notice saying its influence is amplified.

use crate::types::{Language, NumberProfile};

/// Values occurring more than once, in order of first occurrence.
///
/// ```rust
/// use numero_core::repetition::repeated_numbers;
///
/// assert_eq!(repeated_numbers(&[5, 5, 3, 7]), vec![5]);
/// assert!(repeated_numbers(&[1, 2, 3, 4]).is_empty());
/// ```
pub fn repeated_numbers(values: &[u32]) -> Vec<u32> {
    // (value, count) in first-seen order; at most four entries in practice
    let mut counts: Vec<(u32, usize)> = Vec::with_capacity(values.len());
    for &value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(value, _)| value)
        .collect()
}

/// The notice text for one repeated value.
pub fn notice(number: u32, language: Language) -> String {
    match language {
        Language::En => format!(
            "{number} appears in more than one of your numbers → its influence is amplified in you."
        ),
        Language::Ja => format!(
            "{number} が複数の数に登場しています → この数字の影響があなたの中で強く現れるでしょう。"
        ),
    }
}

/// One notice per repeated value of the profile.
pub fn repetition_notices(profile: &NumberProfile, language: Language) -> Vec<String> {
    repeated_numbers(&profile.values())
        .into_iter()
        .map(|n| notice(n, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: [u32; 4]) -> NumberProfile {
        NumberProfile {
            life_path: values[0],
            birth_day: values[1],
            expression: values[2],
            soul_urge: values[3],
        }
    }

    #[test]
    fn test_single_repeated_value() {
        let notices = repetition_notices(&profile([5, 5, 3, 7]), Language::En);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("5 "));
    }

    #[test]
    fn test_no_repetition() {
        assert!(repetition_notices(&profile([1, 2, 3, 4]), Language::En).is_empty());
    }

    #[test]
    fn test_two_pairs_in_first_occurrence_order() {
        assert_eq!(repeated_numbers(&[7, 11, 11, 7]), vec![7, 11]);
        assert_eq!(repeated_numbers(&[3, 8, 8, 3]), vec![3, 8]);
    }

    #[test]
    fn test_all_equal_yields_one_notice() {
        assert_eq!(repeated_numbers(&[9, 9, 9, 9]), vec![9]);
        let notices = repetition_notices(&profile([9, 9, 9, 9]), Language::Ja);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("複数の数"));
    }
}
