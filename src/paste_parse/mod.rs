//! Clipboard content to host-ready story HTML
//!
//! The pipeline for one paste:
//! 1. Promote plain text to paragraph markup (unless it already looks like HTML)
//! 2. Classify the source dialect from editor fingerprints in the raw HTML
//! 3. Parse into a mutable DOM and run the dialect's normalizer
//! 4. Sanitize against the host's tag and attribute allowlists
//! 5. Replace section-break paragraphs with `<hr>` (when a marker is configured)
//! 6. Serialize, one block per line, long lines wrapped
//!
//! # Usage
//!
//! ```rust
//! # use storypaste::paste_parse::parse_with_options;
//! # use storypaste::ParseOptions;
//! let options = ParseOptions::builder()
//!     .mime_type("text/html")
//!     .section_break(Some("* * *"))
//!     .build()?;
//! let html = parse_with_options("<h1>One</h1><p>* * *</p>", &options)?;
//! assert_eq!(html, "<h4>One</h4>\n<hr>\n");
//! # Ok::<(), storypaste::PasteError>(())
//! ```

use std::borrow::Cow;

// Declare sub-modules
pub mod collab_editor;
pub mod dialect;
pub mod dom;
pub mod formatter;
pub mod inline_style;
pub mod lists;
pub mod office_desktop;
pub mod office_web;
pub mod plain_text;
pub mod raw_html;
pub mod sanitize;
pub mod section_break;
pub mod style_runs;

pub use dialect::{Dialect, classify};
pub use section_break::{SectionBreak, sanitize_style, section_break_css};
pub use style_runs::{InlineTag, StyleRunFolder, StyleSet};

use crate::config::{MimeType, ParseOptions};
use crate::errors::{PasteError, PasteResult};
use crate::utils::safe_truncate_chars;

/// Convert one clipboard payload to clean story HTML.
///
/// # Errors
///
/// Returns `PasteError::MissingBody` if the parsed document has no body, and
/// serialization errors if the cleaned tree cannot be written back out.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> PasteResult<String> {
    let html = match options.mime_type() {
        MimeType::PlainText if !plain_text::looks_like_html(input) => {
            Cow::Owned(plain_text::promote(input))
        }
        _ => Cow::Borrowed(input),
    };

    let dialect = classify(&html);
    tracing::debug!(
        "Normalizing {} bytes of {} markup: {:?}",
        html.len(),
        dialect,
        safe_truncate_chars(&html, 80)
    );

    let document = dom::parse_document(&html);
    let body = dom::body(&document).ok_or(PasteError::MissingBody)?;

    (dialect.normalizer())(&body)?;
    sanitize::sanitize(&body)?;

    if let Some(marker) = options.section_break().and_then(SectionBreak::from_marker) {
        section_break::convert(&body, &marker)?;
    }

    let output = formatter::format_body(&body, options)?;
    tracing::debug!("Produced {} bytes of story HTML", output.len());
    Ok(output)
}
