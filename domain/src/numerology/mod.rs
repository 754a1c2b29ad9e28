//! Pythagorean numerology engine.
//!
//! Pure functions that turn a full name and a `MM/DD/YYYY` birth date into
//! the five core numbers:
//!
//! | Number | Source |
//! |--------|--------|
//! | Life Path | month, day and year, each reduced, then the sum reduced |
//! | Birthday | day of month |
//! | Destiny | every letter of the name |
//! | Soul Urge | vowels of the name |
//! | Personality | consonants of the name |
//!
//! Every reduction keeps the master numbers 11 and 22. Nothing here does
//! I/O or holds state; the only shared data is the constant letter table.

pub mod date;
pub mod letters;
pub mod name;
pub mod profile;
pub mod reduce;

pub use date::{BirthDate, birthday_number, life_path_number};
pub use letters::{is_vowel, letter_value};
pub use name::{
    LetterClass, aggregate, destiny_number, letter_sum, personality_number, soul_urge_number,
};
pub use profile::{CoreNumberKind, NumerologyProfile, profile};
pub use reduce::{is_master_number, reduce};
