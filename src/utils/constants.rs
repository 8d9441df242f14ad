//! Shared constants for the paste pipeline
//!
//! The tag and attribute allowlists mirror what the story host's own content
//! sanitizer keeps. Anything outside them would be dropped on publish anyway.

/// Maximum output line width in characters
///
/// Lines longer than this are re-wrapped at spaces so the result stays
/// editable in a plain textarea. Preformatted blocks are exempt.
pub const MAX_LINE_WIDTH: usize = 250;

/// MIME type of the HTML clipboard flavour
pub const HTML_MIME_TYPE: &str = "text/html";

/// First heading level available to story content.
///
/// h1-h3 are taken by the host's work, chapter and section titles.
pub const FIRST_STORY_HEADING_LEVEL: u8 = 4;

/// Marker attribute for headings already moved by renormalization.
///
/// Not in the attribute allowlist, so it never survives sanitization.
pub const SHRUNK_MARKER_ATTR: &str = "data-shrink";

/// Elements the host keeps
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "address",
    "b",
    "blockquote",
    "br",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "dd",
    "del",
    "details",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "ins",
    "kbd",
    "li",
    "ol",
    "p",
    "pre",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "span",
    "strong",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "u",
    "ul",
    "var",
];

/// Attributes allowed on any element
pub const ALLOWED_ATTRIBUTES: &[&str] = &["class", "name", "title"];

/// Extra attributes allowed on `<a>`
pub const ANCHOR_ONLY_ATTRIBUTES: &[&str] = &["href"];

/// Extra attributes allowed on `<img>`
pub const IMAGE_ONLY_ATTRIBUTES: &[&str] = &["alt", "height", "width", "src"];

/// Whether `tag` (lowercase local name) is in the canonical allowlist
#[inline]
#[must_use]
pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

/// Whether attribute `attr` may stay on an element named `tag`
#[must_use]
pub fn is_allowed_attribute(tag: &str, attr: &str) -> bool {
    if ALLOWED_ATTRIBUTES.contains(&attr) {
        return true;
    }
    match tag {
        "a" => ANCHOR_ONLY_ATTRIBUTES.contains(&attr),
        "img" => IMAGE_ONLY_ATTRIBUTES.contains(&attr),
        _ => false,
    }
}
