//! Core option types for a paste conversion
//!
//! A `ParseOptions` value captures everything a conversion depends on besides
//! the payload itself, so the pipeline stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::utils::{HTML_MIME_TYPE, MAX_LINE_WIDTH};

/// Clipboard flavour the payload was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimeType {
    /// `text/html`
    Html,
    /// `text/plain`, and anything that is not `text/html`
    #[default]
    PlainText,
}

impl MimeType {
    /// Map a declared MIME type to a flavour.
    ///
    /// Parameters such as `; charset=utf-8` and letter case are ignored. Any
    /// type other than `text/html` is treated as plain text.
    #[must_use]
    pub fn from_declared(mime_type: &str) -> Self {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(HTML_MIME_TYPE) {
            MimeType::Html
        } else {
            MimeType::PlainText
        }
    }
}

/// Options for one paste conversion
///
/// Deserialization goes through `ParseOptionsBuilder`, so stored options get
/// the same validation as built ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "super::ParseOptionsBuilder")]
pub struct ParseOptions {
    pub(crate) mime_type: MimeType,
    /// Whether the destination buffer already has text before the caret
    pub(crate) buffer_has_content: bool,
    /// Placeholder text, or image URL, that marks a section break
    pub(crate) section_break: Option<String>,
    pub(crate) wrap_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mime_type: MimeType::PlainText,
            buffer_has_content: false,
            section_break: None,
            wrap_width: MAX_LINE_WIDTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn builder() -> super::ParseOptionsBuilder {
        super::ParseOptionsBuilder::new()
    }

    #[must_use]
    pub fn mime_type(&self) -> MimeType {
        self.mime_type
    }

    #[must_use]
    pub fn buffer_has_content(&self) -> bool {
        self.buffer_has_content
    }

    /// The configured section-break marker, if it is not blank
    #[must_use]
    pub fn section_break(&self) -> Option<&str> {
        self.section_break
            .as_deref()
            .filter(|marker| !marker.trim().is_empty())
    }

    #[must_use]
    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }
}
