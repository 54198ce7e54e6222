//! Pure string operations
//!
//! Every function here is stateless and independent of the others. The
//! [`registry`](crate::registry) exposes the same operations by name.

pub mod basic;
pub mod card;
pub mod rectangle;
pub mod replace;
pub mod rot13;
pub mod split;
pub mod template;

pub use basic::{concatenate, first_char, is_string, length, repeat, to_upper_case, trim};
pub use card::{Card, DECK_SIZE, Rank, Suit, card_index, deck};
pub use rectangle::render_rectangle;
pub use replace::{remove_first_occurrence, unbracket_tag};
pub use rot13::rot13;
pub use split::split_emails;
pub use template::{extract_name, greet};

use crate::error::{Result, StringTaskError};

/// Largest output, in bytes, that a generating operation will build (256 MiB)
pub const MAX_RESULT_BYTES: usize = 1 << 28;

/// Check a computed output size against [`MAX_RESULT_BYTES`]
///
/// `None` means the size computation itself overflowed.
pub(crate) fn check_result_size(operation: &'static str, size: Option<usize>) -> Result<usize> {
    size.filter(|&bytes| bytes <= MAX_RESULT_BYTES)
        .ok_or(StringTaskError::ResultTooLarge {
            operation,
            limit: MAX_RESULT_BYTES,
        })
}
