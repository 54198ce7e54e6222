//! Greeting template and its inverse

use crate::error::{Result, StringTaskError};

const GREETING_PREFIX: &str = "Hello, ";
const GREETING_SUFFIX: &str = "!";

/// Builds `Hello, {first} {last}!`
pub fn greet(first: &str, last: &str) -> String {
    format!("{GREETING_PREFIX}{first} {last}{GREETING_SUFFIX}")
}

/// Extracts `{first} {last}` from a string produced by [`greet`]
///
/// ```
/// use string_tasks::extract_name;
/// assert_eq!(extract_name("Hello, Chuck Norris!").unwrap(), "Chuck Norris");
/// ```
pub fn extract_name(s: &str) -> Result<&str> {
    s.strip_prefix(GREETING_PREFIX)
        .and_then(|rest| rest.strip_suffix(GREETING_SUFFIX))
        .ok_or_else(|| StringTaskError::MalformedGreeting(s.to_string()))
}
