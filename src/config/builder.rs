//! Fluent builder for `ParseOptions`
//!
//! Every field has a sensible default, so the builder only validates the
//! values it is given.

use serde::Deserialize;

use super::types::{MimeType, ParseOptions};
use crate::errors::{PasteError, PasteResult};
use crate::utils::MAX_LINE_WIDTH;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParseOptionsBuilder {
    pub(crate) mime_type: MimeType,
    pub(crate) buffer_has_content: bool,
    pub(crate) section_break: Option<String>,
    pub(crate) wrap_width: usize,
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mime_type: MimeType::PlainText,
            buffer_has_content: false,
            section_break: None,
            wrap_width: MAX_LINE_WIDTH,
        }
    }

    /// Declared clipboard MIME type, e.g. `"text/html"`
    #[must_use]
    pub fn mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = MimeType::from_declared(mime_type);
        self
    }

    #[must_use]
    pub fn flavour(mut self, mime_type: MimeType) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Text already in the destination buffer up to the caret.
    ///
    /// Only its emptiness matters to the conversion.
    #[must_use]
    pub fn existing_buffer(mut self, text_before_caret: &str) -> Self {
        self.buffer_has_content = !text_before_caret.is_empty();
        self
    }

    #[must_use]
    pub fn section_break(mut self, marker: Option<&str>) -> Self {
        self.section_break = marker.map(str::to_string);
        self
    }

    #[must_use]
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Validate and build the options.
    ///
    /// # Errors
    ///
    /// Returns `PasteError::InvalidOptions` if the wrap width is zero.
    pub fn build(self) -> PasteResult<ParseOptions> {
        if self.wrap_width == 0 {
            return Err(PasteError::InvalidOptions(
                "wrap width must be at least one character".to_string(),
            ));
        }

        Ok(ParseOptions {
            mime_type: self.mime_type,
            buffer_has_content: self.buffer_has_content,
            section_break: self.section_break,
            wrap_width: self.wrap_width,
        })
    }
}

impl TryFrom<ParseOptionsBuilder> for ParseOptions {
    type Error = PasteError;

    fn try_from(builder: ParseOptionsBuilder) -> PasteResult<Self> {
        builder.build()
    }
}
