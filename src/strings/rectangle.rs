//! Box-drawing rectangle renderer

use crate::error::{Result, StringTaskError};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Renders a `width` x `height` rectangle using box-drawing characters
///
/// Every line, including the last, ends with `\n`. Dimensions whose output
/// would exceed [`MAX_RESULT_BYTES`](super::MAX_RESULT_BYTES) are rejected with
/// [`StringTaskError::ResultTooLarge`].
///
/// ```
/// use string_tasks::render_rectangle;
/// assert_eq!(
///     render_rectangle(6, 4).unwrap(),
///     "┌────┐\n│    │\n│    │\n└────┘\n"
/// );
/// ```
pub fn render_rectangle(width: usize, height: usize) -> Result<String> {
    if width < 2 || height < 2 {
        return Err(StringTaskError::InvalidRectangle { width, height });
    }

    let inner_width = width - 2;
    let size = output_size(inner_width, height - 2);
    let capacity = super::check_result_size("render_rectangle", size)?;

    let edge = HORIZONTAL.to_string().repeat(inner_width);
    let middle = format!("{VERTICAL}{}{VERTICAL}\n", " ".repeat(inner_width));

    let mut result = String::with_capacity(capacity);
    result.push_str(&format!("{TOP_LEFT}{edge}{TOP_RIGHT}\n"));
    result.push_str(&middle.repeat(height - 2));
    result.push_str(&format!("{BOTTOM_LEFT}{edge}{BOTTOM_RIGHT}\n"));
    Ok(result)
}

/// Byte length of the rendered rectangle, or `None` on overflow
fn output_size(inner_width: usize, inner_height: usize) -> Option<usize> {
    let corners = TOP_LEFT.len_utf8() + TOP_RIGHT.len_utf8();
    let edge_line = inner_width
        .checked_mul(HORIZONTAL.len_utf8())?
        .checked_add(corners + 1)?;
    let middle_line = inner_width.checked_add(2 * VERTICAL.len_utf8() + 1)?;

    middle_line
        .checked_mul(inner_height)?
        .checked_add(edge_line.checked_mul(2)?)
}
