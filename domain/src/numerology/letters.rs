//! Pythagorean letter values.

/// Values for `a` through `z`, in alphabet order.
///
/// 1=A,J,S 2=B,K,T 3=C,L,U 4=D,M,V 5=E,N,W 6=F,O,X 7=G,P,Y 8=H,Q,Z 9=I,R
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

/// Numerology value of a character (case-insensitive).
///
/// Anything that is not an ASCII letter is worth 0.
///
/// ```
/// use numawise_domain::numerology::letter_value;
///
/// assert_eq!(letter_value('J'), 1);
/// assert_eq!(letter_value('r'), 9);
/// assert_eq!(letter_value('-'), 0);
/// ```
pub fn letter_value(c: char) -> u32 {
    if !c.is_ascii_alphabetic() {
        return 0;
    }
    let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
    LETTER_VALUES[index]
}

/// Returns `true` for a, e, i, o, u in either case. `y` is a consonant.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
