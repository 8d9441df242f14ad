//! Cursor-aware insertion into a text buffer.
//!
//! Mirrors what a story textarea does on paste: the selection is replaced by
//! the converted HTML and the caret lands right after it. The text before
//! the selection decides whether a single pasted paragraph joins the
//! surrounding one.

use std::ops::Range;

use crate::config::ParseOptionsBuilder;
use crate::errors::{PasteError, PasteResult};
use crate::paste_parse::parse_with_options;

/// Editable text with a selection, addressed in bytes.
///
/// The selection always lies on `char` boundaries; an empty selection is a
/// caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Range<usize>,
}

impl TextBuffer {
    /// A buffer holding `text` with the caret at the end.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// The caret position, i.e. the end of the selection.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.selection.end
    }

    /// Text from the start of the buffer up to the selection.
    #[must_use]
    pub fn text_before_selection(&self) -> &str {
        &self.text[..self.selection.start]
    }

    /// Select `start..end`.
    ///
    /// # Errors
    ///
    /// Returns `PasteError::InvalidSelection` if the range is reversed, out of
    /// bounds or splits a character. The buffer is left unchanged.
    pub fn select(&mut self, start: usize, end: usize) -> PasteResult<()> {
        let valid = start <= end
            && end <= self.text.len()
            && self.text.is_char_boundary(start)
            && self.text.is_char_boundary(end);
        if !valid {
            return Err(PasteError::InvalidSelection {
                start,
                end,
                len: self.text.len(),
            });
        }
        self.selection = start..end;
        Ok(())
    }

    /// Collapse the selection to a caret at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`TextBuffer::select`].
    pub fn set_caret(&mut self, position: usize) -> PasteResult<()> {
        self.select(position, position)
    }

    /// Convert a clipboard payload and replace the selection with it.
    ///
    /// # Errors
    ///
    /// Any conversion error; the buffer is left unchanged.
    pub fn paste(
        &mut self,
        input: &str,
        mime_type: &str,
        section_break: Option<&str>,
    ) -> PasteResult<()> {
        let options = ParseOptionsBuilder::new()
            .mime_type(mime_type)
            .section_break(section_break);
        self.paste_with(input, options)
    }

    /// Like [`TextBuffer::paste`], with the remaining options taken from
    /// `options`. The buffer context is always filled in from this buffer.
    ///
    /// # Errors
    ///
    /// Option validation or conversion errors; the buffer is left unchanged.
    pub fn paste_with(&mut self, input: &str, options: ParseOptionsBuilder) -> PasteResult<()> {
        let options = options
            .existing_buffer(self.text_before_selection())
            .build()?;
        let converted = parse_with_options(input, &options).inspect_err(|e| {
            if e.is_content_error() {
                log::warn!("Pasted content rejected, buffer left unchanged: {e}");
            }
        })?;

        let Range { start, end } = self.selection.clone();
        self.text.replace_range(start..end, &converted);
        let caret = start + converted.len();
        self.selection = caret..caret;
        Ok(())
    }
}
