//! UTF-8-safe string helpers
//!
//! Line widths in the formatter are measured in characters, not bytes, so
//! story text with accents, curly quotes or emoji wraps at the same column as
//! plain ASCII.

/// Number of Unicode scalar values in `s`.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never panics on multi-byte characters. Used to keep log previews short.
///
/// # Examples
/// ```
/// # use storypaste::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("“quoted”", 3), "“qu");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Parse the leading decimal digits of `s`, ignoring leading whitespace.
///
/// Mirrors how CSS numeric values are read loosely: `"700"` and `"700 "`
/// give 700, `"bold"` gives `None`.
#[must_use]
pub fn leading_integer(s: &str) -> Option<u32> {
    let trimmed = s.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// True when `s` is empty or only whitespace (including no-break spaces).
#[inline]
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
