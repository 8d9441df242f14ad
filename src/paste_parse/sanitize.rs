//! Dialect-independent cleanup run after every normalizer.
//!
//! After this pass the body only holds allowlisted elements and attributes,
//! story headings start at h4, and empty paragraphs survive the host's
//! whitespace collapsing.

use anyhow::Result;
use kuchiki::NodeRef;

use super::dom;
use crate::utils::{
    FIRST_STORY_HEADING_LEVEL, SHRUNK_MARKER_ATTR, is_allowed_attribute, is_allowed_tag, is_blank,
};

const HEADING_LEVELS: u8 = 6;

pub fn sanitize(body: &NodeRef) -> Result<()> {
    renormalize_headings(body)?;
    prune_disallowed(body);
    strip_attributes(body);
    pad_empty_paragraphs(body)?;
    Ok(())
}

/// Shift headings down so the largest one used becomes h4.
///
/// Levels keep their relative order: each level that occurs takes the next
/// free level. Levels pushed past h6 become bold paragraphs.
pub fn renormalize_headings(body: &NodeRef) -> Result<()> {
    // Markers only count when this pass set them.
    for marked in dom::select_all(body, &format!("[{SHRUNK_MARKER_ATTR}]"))? {
        dom::remove_attr(&marked, SHRUNK_MARKER_ATTR);
    }

    let mut next_level = FIRST_STORY_HEADING_LEVEL;
    for level in 1..=HEADING_LEVELS {
        let headings: Vec<NodeRef> = dom::select_all(body, &format!("h{level}"))?
            .into_iter()
            .filter(|heading| dom::attr(heading, SHRUNK_MARKER_ATTR).is_none())
            .collect();
        if headings.is_empty() {
            continue;
        }

        log::debug!(
            "Moving {} h{level} headings to level {next_level}",
            headings.len()
        );
        for heading in headings {
            dom::replace_with(&heading, shrink_heading(&heading, next_level));
        }
        next_level += 1;
    }
    Ok(())
}

fn shrink_heading(heading: &NodeRef, level: u8) -> NodeRef {
    let class = dom::attr(heading, "class");

    if level > HEADING_LEVELS {
        let paragraph = dom::new_element("p");
        let bold = dom::new_element("b");
        if let Some(class) = class {
            dom::set_attr(&paragraph, "class", &class);
        }
        dom::move_children(heading, &bold);
        paragraph.append(bold);
        return paragraph;
    }

    let shrunk = dom::new_element(&format!("h{level}"));
    dom::set_attr(&shrunk, SHRUNK_MARKER_ATTR, "true");
    if let Some(class) = class {
        dom::set_attr(&shrunk, "class", &class);
    }
    dom::move_children(heading, &shrunk);
    shrunk
}

/// Remove comments and every element outside the allowlist, subtree and all.
pub fn prune_disallowed(body: &NodeRef) {
    let doomed: Vec<NodeRef> = body
        .descendants()
        .filter(|node| {
            node.as_comment().is_some()
                || dom::tag_name(node).is_some_and(|tag| !is_allowed_tag(tag))
        })
        .collect();
    if !doomed.is_empty() {
        log::debug!("Pruning {} disallowed nodes", doomed.len());
    }
    for node in doomed {
        node.detach();
    }
}

/// Drop every attribute the host would not keep on that element.
pub fn strip_attributes(body: &NodeRef) {
    for node in body.descendants() {
        let Some(element) = node.as_element() else {
            continue;
        };
        let tag = &*element.name.local;
        element
            .attributes
            .borrow_mut()
            .map
            .retain(|name, _| name.ns.is_empty() && is_allowed_attribute(tag, &name.local));
    }
}

/// Give whitespace-only paragraphs a no-break space so they stay visible.
pub fn pad_empty_paragraphs(body: &NodeRef) -> Result<()> {
    for paragraph in dom::select_all(body, "p")? {
        let text_only = paragraph.children().all(|child| child.as_text().is_some());
        if text_only && is_blank(&paragraph.text_contents()) {
            while let Some(child) = paragraph.first_child() {
                child.detach();
            }
            paragraph.append(NodeRef::new_text("\u{a0}"));
        }
    }
    Ok(())
}
