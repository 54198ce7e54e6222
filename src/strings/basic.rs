//! Pass-through string primitives

use crate::error::{Result, StringTaskError};
use crate::model::Value;

/// Returns `a` followed by `b`
///
/// ```
/// use string_tasks::concatenate;
/// assert_eq!(concatenate("aa", "bb"), "aabb");
/// ```
pub fn concatenate(a: &str, b: &str) -> String {
    let mut result = String::with_capacity(a.len() + b.len());
    result.push_str(a);
    result.push_str(b);
    result
}

/// Returns the length of `s` in UTF-16 code units
///
/// For text inside the Basic Multilingual Plane this is the number of characters.
/// Characters outside it (most emoji, for example) count as two.
pub fn length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Returns the first character of `s` as a string
pub fn first_char(s: &str) -> Result<String> {
    s.chars()
        .next()
        .map(String::from)
        .ok_or(StringTaskError::EmptyInput {
            operation: "first_char",
        })
}

/// Removes leading and trailing whitespace
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Returns `s` repeated `count` times
///
/// Fails with [`StringTaskError::ResultTooLarge`] when the output would be
/// larger than [`MAX_RESULT_BYTES`](super::MAX_RESULT_BYTES).
pub fn repeat(s: &str, count: usize) -> Result<String> {
    super::check_result_size("repeat", s.len().checked_mul(count))?;
    Ok(s.repeat(count))
}

/// Converts every character to its uppercase form
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Returns true if the value is a string
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::MAX_RESULT_BYTES;
    use rstest::rstest;

    #[rstest]
    #[case("aa", "bb", "aabb")]
    #[case("aa", "", "aa")]
    #[case("", "bb", "bb")]
    #[case("", "", "")]
    fn test_concatenate(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(concatenate(a, b), expected);
    }

    #[rstest]
    #[case("aaaaa", 5)]
    #[case("b", 1)]
    #[case("", 0)]
    #[case("héllo", 5)]
    #[case("😀", 2)]
    fn test_length(#[case] s: &str, #[case] expected: usize) {
        assert_eq!(length(s), expected);
    }

    #[test]
    fn test_first_char() {
        assert_eq!(first_char("John Doe").unwrap(), "J");
        assert_eq!(first_char("cat").unwrap(), "c");
        assert_eq!(first_char("Élan").unwrap(), "É");
        assert_eq!(
            first_char(""),
            Err(StringTaskError::EmptyInput {
                operation: "first_char"
            })
        );
    }

    #[rstest]
    #[case("  Abracadabra", "Abracadabra")]
    #[case("cat", "cat")]
    #[case("\tHello, World! ", "Hello, World!")]
    #[case("\n\u{3000}wide\u{a0} ", "wide")]
    #[case("   ", "")]
    fn test_trim(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim(input), expected);
    }

    #[rstest]
    #[case("A", 5, "AAAAA")]
    #[case("cat", 3, "catcatcat")]
    #[case("cat", 0, "")]
    #[case("", 10, "")]
    #[case("", usize::MAX, "")]
    fn test_repeat(#[case] s: &str, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(repeat(s, count).unwrap(), expected);
    }

    #[rstest]
    #[case("ab", usize::MAX)]
    #[case("ab", MAX_RESULT_BYTES / 2 + 1)]
    #[case("x", MAX_RESULT_BYTES + 1)]
    fn test_repeat_rejects_oversized_result(#[case] s: &str, #[case] count: usize) {
        assert_eq!(
            repeat(s, count),
            Err(StringTaskError::ResultTooLarge {
                operation: "repeat",
                limit: MAX_RESULT_BYTES,
            })
        );
    }

    #[test]
    fn test_to_upper_case() {
        assert_eq!(to_upper_case("Thunderstruck"), "THUNDERSTRUCK");
        assert_eq!(
            to_upper_case("abcdefghijklmnopqrstuvwxyz"),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        assert_eq!(to_upper_case("straße"), "STRASSE");
    }

    #[test]
    fn test_is_string() {
        assert!(is_string(&Value::from("test")));
        assert!(is_string(&Value::from("")));
        assert!(!is_string(&Value::Null));
        assert!(!is_string(&Value::Collection(vec![])));
        assert!(!is_string(&Value::Object(Default::default())));
        assert!(!is_string(&Value::Integer(1)));
        assert!(!is_string(&Value::Decimal(1.5)));
    }
}
