//! ROT13 substitution cipher

const SHIFT: u8 = 13;
const ALPHABET_LEN: u8 = 26;

/// Encodes `s` with ROT13
///
/// ASCII letters move 13 places within their own case. Everything else is
/// copied through, so applying the cipher twice restores any input.
///
/// ```
/// use string_tasks::rot13;
/// assert_eq!(rot13("hello"), "uryyb");
/// assert_eq!(rot13(&rot13("Why?")), "Why?");
/// ```
pub fn rot13(s: &str) -> String {
    s.chars().map(rotate_char).collect()
}

fn rotate_char(c: char) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = c as u8 - base;
    char::from(base + (offset + SHIFT) % ALPHABET_LEN)
}
