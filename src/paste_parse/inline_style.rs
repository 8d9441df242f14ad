//! Reading the inline `style` attribute the way a browser's computed
//! `element.style` would expose it, limited to the properties the
//! normalizers care about.

use std::collections::HashMap;

use kuchiki::NodeRef;

use super::dom;
use super::style_runs::{InlineTag, StyleSet};
use crate::utils::leading_integer;

/// Lowest numeric `font-weight` treated as bold
const BOLD_WEIGHT_THRESHOLD: u32 = 500;

/// Paragraph alignment the host site can express through a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Left (and anything unknown) is the default and maps to `None`.
    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "justify" => Some(Alignment::Justify),
            _ => None,
        }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Alignment::Center => "align-center",
            Alignment::Right => "align-right",
            Alignment::Justify => "align-justify",
        }
    }
}

/// Parsed `style` declarations, property names lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: HashMap<String, String>,
}

impl InlineStyle {
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let declarations = style
            .split(';')
            .filter_map(|declaration| {
                let (property, value) = declaration.split_once(':')?;
                let property = property.trim().to_ascii_lowercase();
                if property.is_empty() {
                    return None;
                }
                let value = value.trim().trim_end_matches("!important").trim();
                Some((property, value.to_string()))
            })
            .collect();
        Self { declarations }
    }

    /// Style of `node`, empty when it has no `style` attribute.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        dom::attr(node, "style")
            .map(|style| Self::parse(&style))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.get("font-weight").is_some_and(|weight| {
            weight.eq_ignore_ascii_case("bold")
                || leading_integer(weight).is_some_and(|value| value >= BOLD_WEIGHT_THRESHOLD)
        })
    }

    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.get("font-style")
            .is_some_and(|style| style.eq_ignore_ascii_case("italic"))
    }

    fn text_decoration_contains(&self, keyword: &str) -> bool {
        ["text-decoration", "text-decoration-line"]
            .iter()
            .filter_map(|property| self.get(property))
            .any(|value| value.to_ascii_lowercase().contains(keyword))
    }

    #[must_use]
    pub fn is_underlined(&self) -> bool {
        self.text_decoration_contains("underline")
    }

    #[must_use]
    pub fn is_struck_through(&self) -> bool {
        self.text_decoration_contains("line-through")
    }

    /// `vertical-align: sub|super` as the matching tag.
    #[must_use]
    pub fn vertical_align(&self) -> Option<InlineTag> {
        match self.get("vertical-align")?.to_ascii_lowercase().as_str() {
            "sub" => Some(InlineTag::Subscript),
            "super" => Some(InlineTag::Superscript),
            _ => None,
        }
    }

    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        self.get("text-align").and_then(Alignment::from_css)
    }

    /// Bold, italic, underline and strikethrough carried by this style.
    #[must_use]
    pub fn run_styles(&self) -> StyleSet {
        let mut styles = StyleSet::EMPTY;
        if self.is_bold() {
            styles.insert(InlineTag::Bold);
        }
        if self.is_italic() {
            styles.insert(InlineTag::Italic);
        }
        if self.is_underlined() {
            styles.insert(InlineTag::Underline);
        }
        if self.is_struck_through() {
            styles.insert(InlineTag::Strikethrough);
        }
        styles
    }
}
