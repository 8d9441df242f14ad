//! Turning the cleaned body into text for a plain textarea.
//!
//! Block ends get their own line and long lines are re-wrapped at spaces, so
//! a pasted chapter is readable and editable without an HTML editor.
//! Preformatted blocks are left exactly as they are.

use std::sync::LazyLock;

use fancy_regex::Regex;
use kuchiki::NodeRef;

use super::dom;
use crate::config::ParseOptions;
use crate::errors::PasteResult;
use crate::utils::char_len;

/// A block close (or `<br>`/`<hr>`) not already followed by a newline.
static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</(?:p|div|pre|table|tr|ul|ol|li|h[1-6])>|<br>|<hr>)(?!\n)")
        .expect("BLOCK_END: hardcoded regex is valid")
});

/// Serialize `body` as the text to insert.
///
/// A lone unclassed paragraph pasted into a non-empty buffer is returned as
/// its bare contents, so it joins the paragraph around the caret.
pub fn format_body(body: &NodeRef, options: &ParseOptions) -> PasteResult<String> {
    if options.buffer_has_content() {
        if let Some(paragraph) = single_paragraph(body) {
            log::debug!("Pasting a single paragraph inline");
            return dom::inner_html(&paragraph);
        }
    }

    let html = dom::inner_html(body)?;
    Ok(wrap_lines(&break_after_blocks(&html), options.wrap_width()))
}

/// The body's only element child, when it is a `<p>` without classes.
#[must_use]
pub fn single_paragraph(body: &NodeRef) -> Option<NodeRef> {
    match dom::element_children(body).as_slice() {
        [only] if dom::is_element(only, "p") && dom::classes(only).is_empty() => {
            Some(only.clone())
        }
        _ => None,
    }
}

/// Put a newline after every block end that is not followed by one.
#[must_use]
pub fn break_after_blocks(html: &str) -> String {
    BLOCK_END.replace_all(html, "${1}\n").to_string()
}

/// Greedily re-wrap lines longer than `width` characters at spaces.
///
/// Lines inside a `<pre>` block are kept verbatim, except that an empty
/// one becomes a single space. A word longer than `width` stays whole on
/// its own line.
#[must_use]
pub fn wrap_lines(text: &str, width: usize) -> String {
    let mut in_pre = false;
    let mut wrapped: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if line.contains("<pre>") || line.contains("<pre ") {
            in_pre = true;
        }
        if in_pre {
            if line.contains("</pre>") {
                in_pre = false;
            }
            wrapped.push(if line.is_empty() { " " } else { line }.to_string());
            continue;
        }

        if char_len(line) <= width {
            wrapped.push(line.to_string());
        } else {
            wrapped.extend(wrap_line(line, width));
        }
    }
    wrapped.join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current: Option<String> = None;

    for word in line.split(' ') {
        current = Some(match current.take() {
            None => word.to_string(),
            Some(mut open) if char_len(&open) + 1 + char_len(word) <= width => {
                open.push(' ');
                open.push_str(word);
                open
            }
            Some(full) => {
                parts.push(full);
                word.to_string()
            }
        });
    }
    parts.extend(current);
    parts
}
