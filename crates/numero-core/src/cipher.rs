//! # Letter Cipher
//!
//! The Pythagorean letter-to-number table. Values repeat every nine
//! letters:
//!
//! ```text
//!   1  2  3  4  5  6  7  8  9
//!   A  B  C  D  E  F  G  H  I
//!   J  K  L  M  N  O  P  Q  R
//!   S  T  U  V  W  X  Y  Z
//! ```

/// Vowels counted by the soul urge number.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Cipher values for `A..=Z`, indexed by `letter - 'A'`.
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Returns the cipher value of `c`, or 0 for anything outside `A-Z`/`a-z`.
pub fn letter_value(c: char) -> u32 {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_VALUES[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Returns true for A, E, I, O, U in either case.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        for (row, value) in ["AJS", "BKT", "CLU", "DMV", "ENW", "FOX", "GPY", "HQZ", "IR"]
            .iter()
            .zip(1..)
        {
            for c in row.chars() {
                assert_eq!(letter_value(c), value, "{c}");
                assert_eq!(letter_value(c.to_ascii_lowercase()), value, "{c}");
            }
        }
    }

    #[test]
    fn test_non_letters_are_zero() {
        for c in [' ', '-', '.', '1', 'é', 'あ', '\''] {
            assert_eq!(letter_value(c), 0, "{c:?}");
        }
    }

    #[test]
    fn test_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('U'));
        assert!(!is_vowel('y'));
        assert!(!is_vowel('B'));
    }
}
