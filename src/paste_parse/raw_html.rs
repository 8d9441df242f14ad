//! Normalizer for HTML of unknown origin.
//!
//! Only deprecated presentational tags are rewritten to their modern
//! equivalents; everything else is left for the sanitizer.

use anyhow::Result;
use kuchiki::NodeRef;

use super::dom;

/// Deprecated tag, its replacement, and the class the replacement carries.
const DEPRECATED_TAGS: &[(&str, &str, Option<&str>)] = &[
    ("center", "div", Some("align-center")),
    ("strike", "s", None),
    ("tt", "code", None),
    ("small", "span", Some("text-small")),
    ("big", "span", Some("text-big")),
];

pub fn normalize(body: &NodeRef) -> Result<()> {
    for &(tag, replacement, class) in DEPRECATED_TAGS {
        let elements = dom::select_all(body, tag)?;
        if !elements.is_empty() {
            log::debug!("Replacing {} <{tag}> elements with <{replacement}>", elements.len());
        }
        for element in elements {
            let modern = dom::new_element(replacement);
            if let Some(class) = class {
                dom::add_class(&modern, class);
            }
            dom::move_children(&element, &modern);
            dom::replace_with(&element, modern);
        }
    }
    Ok(())
}
