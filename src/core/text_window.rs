//! Fitting text into fixed-width cell ranges.
//!
//! All widths are terminal cells; returned indices are byte offsets that always
//! land on UTF-8 character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Truncates `s` to at most `width` cells and right-pads it with spaces to exactly `width`.
///
/// A wide glyph that would straddle the edge is dropped and replaced by padding.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let end = truncate_to_width(s, width);
    let head = &s[..end];
    let used = head.width();
    let mut out = String::with_capacity(end + width.saturating_sub(used));
    out.push_str(head);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
