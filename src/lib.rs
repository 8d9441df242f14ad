pub mod buffer;
pub mod config;
pub mod errors;
pub mod paste_parse;
pub mod utils;

pub use buffer::TextBuffer;
pub use config::{MimeType, ParseOptions, ParseOptionsBuilder};
pub use errors::{PasteError, PasteResult};
pub use paste_parse::{
    Dialect, SectionBreak, classify, parse_with_options, sanitize_style, section_break_css,
};

/// Convert a clipboard payload into clean story HTML.
///
/// `existing` is the destination buffer's text up to the caret; only whether
/// it is empty matters. `section_break` is the author's scene-break marker
/// (text, or an image URL starting with `http`).
///
/// # Errors
///
/// See [`parse_with_options`].
pub fn parse(
    input: &str,
    mime_type: &str,
    existing: &str,
    section_break: Option<&str>,
) -> PasteResult<String> {
    let options = ParseOptions::builder()
        .mime_type(mime_type)
        .existing_buffer(existing)
        .section_break(section_break)
        .build()?;
    parse_with_options(input, &options)
}
