//! Promotion of plain-text pastes to paragraph markup.
//!
//! A blank line separates paragraphs, a single newline becomes `<br>`.

use std::sync::LazyLock;

use regex::Regex;

static EXCESS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("EXCESS_BLANK_LINES: hardcoded regex is valid")
});

/// Plain text holding both angle brackets is taken to be HTML already
/// (markup copied from a source view, for example).
#[must_use]
pub fn looks_like_html(text: &str) -> bool {
    text.contains('<') && text.contains('>')
}

/// Wrap plain text in `<p>` blocks, one per line, each followed by a newline.
#[must_use]
pub fn promote(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = EXCESS_BLANK_LINES.replace_all(&normalized, "\n\n");
    let trimmed = collapsed.trim_end_matches('\n');
    let escaped = html_escape::encode_text(trimmed);

    escaped
        .split("\n\n")
        .map(|paragraph| format!("<p>{}</p>\n", paragraph.replace('\n', "<br>\n")))
        .collect()
}
