//! Name-derived numbers: Destiny, Soul Urge and Personality.
//!
//! All three share one aggregation: keep the ASCII letters accepted by a
//! classifier, add up their letter values, reduce the total.

use super::letters::{is_vowel, letter_value};
use super::reduce::reduce;

/// Which letters of a name take part in a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    /// Every letter (Destiny)
    All,
    /// a, e, i, o, u (Soul Urge)
    Vowels,
    /// Every letter that is not a vowel (Personality)
    Consonants,
}

impl LetterClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            LetterClass::All => true,
            LetterClass::Vowels => is_vowel(c),
            LetterClass::Consonants => c.is_ascii_alphabetic() && !is_vowel(c),
        }
    }
}

/// Unreduced sum of the letter values accepted by `classify`.
///
/// Non-letters are dropped before `classify` sees them.
pub fn letter_sum(name: &str, classify: impl Fn(char) -> bool) -> u64 {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() && classify(*c))
        .map(|c| u64::from(letter_value(c)))
        .sum()
}

/// Reduced sum of the letter values accepted by `classify`.
///
/// A name with no matching letters gives 0.
pub fn aggregate(name: &str, classify: impl Fn(char) -> bool) -> u32 {
    reduce(letter_sum(name, classify))
}

/// Destiny (Expression) number: every letter of the full name.
pub fn destiny_number(full_name: &str) -> u32 {
    aggregate(full_name, |c| LetterClass::All.matches(c))
}

/// Soul Urge number: vowels of the full name.
pub fn soul_urge_number(full_name: &str) -> u32 {
    aggregate(full_name, |c| LetterClass::Vowels.matches(c))
}

/// Personality number: consonants of the full name.
pub fn personality_number(full_name: &str) -> u32 {
    aggregate(full_name, |c| LetterClass::Consonants.matches(c))
}
