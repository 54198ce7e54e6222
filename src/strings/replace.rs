//! Single-occurrence removal

/// Deletes the first occurrence of `needle` from `s`
///
/// Returns `s` unchanged when `needle` is empty or absent.
pub fn remove_first_occurrence(s: &str, needle: &str) -> String {
    s.replacen(needle, "", 1)
}

/// Removes the first `<` and the first `>` from a tag like `<div>`
pub fn unbracket_tag(s: &str) -> String {
    s.replacen('<', "", 1).replacen('>', "", 1)
}
