//! E-mail list splitting

const EMAIL_SEPARATOR: char = ';';

/// Splits a `;`-delimited e-mail list into its entries
///
/// Entries are neither trimmed nor validated, so `"a;;b"` yields an empty middle
/// entry and a string without separators yields itself.
pub fn split_emails(s: &str) -> Vec<&str> {
    s.split(EMAIL_SEPARATOR).collect()
}
