//! Small helpers over kuchiki's mutable DOM.
//!
//! Every normalizer follows the same pattern: parse into a mutable tree,
//! collect the nodes to touch into a `Vec` first, then mutate. Collecting
//! before mutating keeps `insert_before`/`detach` from disturbing the
//! iterator that found the nodes.

use anyhow::{Result, anyhow};
use html5ever::{LocalName, Namespace, QualName};
use kuchiki::traits::TendrilSink;
use kuchiki::{Attribute, ExpandedName, NodeRef};

use crate::errors::PasteResult;
use crate::utils::is_blank;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse a full HTML document (html/head/body are implied when missing).
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html.to_string())
}

/// The document's `<body>` element.
pub fn body(document: &NodeRef) -> Option<NodeRef> {
    document
        .select_first("body")
        .ok()
        .map(|body| body.as_node().clone())
}

/// Create a detached HTML element with no attributes.
pub fn new_element(tag: &str) -> NodeRef {
    NodeRef::new_element(
        QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
        std::iter::empty::<(ExpandedName, Attribute)>(),
    )
}

/// Lowercase local name of an element node.
pub fn tag_name(node: &NodeRef) -> Option<&str> {
    node.as_element().map(|element| &*element.name.local)
}

pub fn is_element(node: &NodeRef, tag: &str) -> bool {
    tag_name(node) == Some(tag)
}

pub fn element_children(node: &NodeRef) -> Vec<NodeRef> {
    node.children()
        .filter(|child| child.as_element().is_some())
        .collect()
}

pub fn first_element_child(node: &NodeRef) -> Option<NodeRef> {
    node.children().find(|child| child.as_element().is_some())
}

/// Every element below `node` matching `selector`, in document order.
pub fn select_all(node: &NodeRef, selector: &str) -> Result<Vec<NodeRef>> {
    Ok(node
        .select(selector)
        .map_err(|()| anyhow!("Invalid CSS selector: {selector}"))?
        .map(|element| element.as_node().clone())
        .collect())
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(str::to_string)
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }
}

pub fn remove_attr(node: &NodeRef, name: &str) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().remove(name);
    }
}

/// Whitespace-separated entries of the `class` attribute.
pub fn classes(node: &NodeRef) -> Vec<String> {
    attr(node, "class")
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn add_class(node: &NodeRef, class: &str) {
    let mut current = classes(node);
    if current.iter().any(|existing| existing == class) {
        return;
    }
    current.push(class.to_string());
    set_attr(node, "class", &current.join(" "));
}

/// Move every child of `from` to the end of `to`, keeping order.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    while let Some(child) = from.first_child() {
        to.append(child);
    }
}

/// Replace `node` with its children.
pub fn unwrap(node: &NodeRef) {
    while let Some(child) = node.first_child() {
        node.insert_before(child);
    }
    node.detach();
}

pub fn replace_with(old: &NodeRef, new: NodeRef) {
    old.insert_before(new);
    old.detach();
}

/// Whether an element named `tag` sits between `node` and `stop` (exclusive).
pub fn has_ancestor_before(node: &NodeRef, tag: &str, stop: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if &ancestor == stop {
            return false;
        }
        if is_element(&ancestor, tag) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

/// True for a text node holding only whitespace.
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.as_text().is_some_and(|text| is_blank(&text.borrow()))
}

/// Serialized markup of the children of `node`.
pub fn inner_html(node: &NodeRef) -> PasteResult<String> {
    let mut output = Vec::new();
    for child in node.children() {
        child.serialize(&mut output)?;
    }
    Ok(String::from_utf8(output)?)
}
