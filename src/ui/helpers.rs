//! Shared rendering utilities.
//!
//! # Example
//!
//! ```rust
//! use tzselect::ui::helpers::mark_ranges;
//!
//! let text = mark_ranges("(GMT-10:00) Hawaii", &[(12, 18)], "[", "]");
//! assert_eq!(text, "(GMT-10:00) [Hawaii]");
//! ```

/// Wraps each character range of `text` in `open`/`close` markers.
///
/// Ranges use character indices (not byte indices), are `(start, end)` with
/// exclusive ends, and must be sorted and non-overlapping. Ranges running past
/// the end of `text` are clipped.
#[must_use]
pub fn mark_ranges(text: &str, ranges: &[(usize, usize)], open: &str, close: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(open);
        out.extend(&chars[start..end]);
        out.push_str(close);
        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Truncates `text` to `max_chars` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
