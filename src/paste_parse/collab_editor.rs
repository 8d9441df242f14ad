//! Normalizer for the browser-based collaborative editor.
//!
//! Its clipboard HTML keeps every bit of formatting in inline styles on
//! `<span>` runs inside `<p>` blocks, usually wrapped in one
//! `<b id="docs-internal-guid-…">` around the whole selection:
//!
//! ```html
//! <b style="font-weight:normal;" id="docs-internal-guid-…">
//!   <p dir="ltr" style="text-align:center;…">
//!     <span style="font-weight:700;font-style:italic;…">Chapter One</span>
//!   </p>
//! </b>
//! ```
//!
//! The pass turns run styles into `b`/`i`/`u`/`s`/`sub`/`sup` tags and then
//! dissolves the spans.

use anyhow::Result;
use kuchiki::NodeRef;

use super::dom;
use super::inline_style::InlineStyle;
use super::style_runs::InlineTag;
use crate::utils::is_blank;

pub fn normalize(body: &NodeRef) -> Result<()> {
    unwrap_guid_containers(body)?;
    wrap_loose_spans(body);

    let paragraphs = dom::select_all(body, "p")?;
    log::debug!("Tagging styled runs in {} paragraphs", paragraphs.len());
    for paragraph in &paragraphs {
        if let Some(alignment) = InlineStyle::of(paragraph).alignment() {
            dom::add_class(paragraph, alignment.class_name());
        }
        tag_styled_runs(paragraph)?;
    }

    for span in dom::select_all(body, "span")? {
        dom::unwrap(&span);
    }
    Ok(())
}

fn unwrap_guid_containers(body: &NodeRef) -> Result<()> {
    for container in dom::select_all(body, "b[id^='docs-internal-guid-']")? {
        dom::unwrap(&container);
    }
    Ok(())
}

/// Group runs of top-level `<span>`s into synthetic paragraphs.
///
/// The last paragraph of a selection sometimes arrives without its `<p>`.
/// Whitespace-only text between spans does not break a run.
fn wrap_loose_spans(body: &NodeRef) {
    let mut cursor = body.first_child();
    while let Some(node) = cursor {
        if !dom::is_element(&node, "span") {
            cursor = node.next_sibling();
            continue;
        }

        let paragraph = dom::new_element("p");
        node.insert_before(paragraph.clone());

        let mut next = Some(node);
        while let Some(candidate) = next {
            next = candidate.next_sibling();
            if dom::is_element(&candidate, "span") {
                paragraph.append(candidate);
            } else if !dom::is_blank_text(&candidate) {
                next = Some(candidate);
                break;
            }
        }
        cursor = next;
    }
}

/// Inline tags implied by a run's style, innermost first.
fn run_tags(span: &NodeRef, paragraph: &NodeRef) -> Vec<InlineTag> {
    let style = InlineStyle::of(span);
    let mut tags = Vec::new();

    if style.is_bold() {
        tags.push(InlineTag::Bold);
    }
    if style.is_italic() {
        tags.push(InlineTag::Italic);
    }
    // Links are underlined by default; an explicit <u> would double up.
    if style.is_underlined() && !dom::has_ancestor_before(span, "a", paragraph) {
        tags.push(InlineTag::Underline);
    }
    if style.is_struck_through() {
        tags.push(InlineTag::Strikethrough);
    }
    if let Some(vertical) = style.vertical_align() {
        tags.push(vertical);
    }
    tags
}

/// Wrap each styled run in its tags.
///
/// A span nested in an already tagged span is left alone; the outer run's
/// tags cover it.
fn tag_styled_runs(paragraph: &NodeRef) -> Result<()> {
    let mut tagged: Vec<NodeRef> = Vec::new();
    for span in dom::select_all(paragraph, "span")? {
        if is_blank(&span.text_contents()) {
            continue;
        }
        let inside_tagged = span
            .ancestors()
            .take_while(|ancestor| ancestor != paragraph)
            .any(|ancestor| tagged.contains(&ancestor));
        if inside_tagged {
            continue;
        }

        let tags = run_tags(&span, paragraph);
        if tags.is_empty() {
            continue;
        }
        let mut wrapped = span.clone();
        tagged.push(span.clone());
        for tag in tags {
            let wrapper = dom::new_element(tag.tag_name());
            wrapped.insert_before(wrapper.clone());
            wrapper.append(wrapped);
            wrapped = wrapper;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paste_parse::dom::{body, inner_html, parse_document};

    fn normalized(html: &str) -> String {
        let body = body(&parse_document(html)).expect("body");
        normalize(&body).expect("normalizes");
        inner_html(&body).expect("serializes")
    }

    #[test]
    fn test_guid_wrapper_is_unwrapped() {
        let html = r#"<meta charset="utf-8"><b style="font-weight:normal;" id="docs-internal-guid-abc"><p dir="ltr"><span style="font-weight:400">Plain</span></p></b>"#;
        assert_eq!(normalized(html), r#"<p dir="ltr">Plain</p>"#);
    }

    #[test]
    fn test_run_styles_become_tags() {
        let html = r#"<b id="docs-internal-guid-1"><p><span style="font-weight:700">Bold</span> <span style="font-style:italic">It</span> <span style="text-decoration:underline">U</span><span style="text-decoration:line-through">S</span><span style="vertical-align:sub">2</span></p></b>"#;
        assert_eq!(
            normalized(html),
            "<p><b>Bold</b> <i>It</i> <u>U</u><s>S</s><sub>2</sub></p>"
        );
    }

    #[test]
    fn test_combined_styles_nest_bold_innermost() {
        let html = r#"<b id="docs-internal-guid-1"><p><span style="font-weight:700;font-style:italic;vertical-align:super">x</span></p></b>"#;
        assert_eq!(normalized(html), "<p><sup><i><b>x</b></i></sup></p>");
    }

    #[test]
    fn test_underline_inside_link_is_suppressed() {
        let html = r#"<b id="docs-internal-guid-1"><p><a href="https://example.com"><span style="text-decoration:underline;color:#1155cc">link</span></a></p></b>"#;
        assert_eq!(
            normalized(html),
            r#"<p><a href="https://example.com">link</a></p>"#
        );
    }

    #[test]
    fn test_alignment_class_added() {
        let html = r#"<b id="docs-internal-guid-1"><p style="text-align:center"><span>Title</span></p><p style="text-align:left"><span>Body</span></p></b>"#;
        let output = normalized(html);
        assert!(output.contains(r#"class="align-center""#));
        assert_eq!(output.matches("class=").count(), 1);
    }

    #[test]
    fn test_loose_spans_grouped_into_paragraph() {
        let html = r#"<b id="docs-internal-guid-1"><p><span>First</span></p><span>tail </span><span style="font-weight:700">end</span></b>"#;
        assert_eq!(normalized(html), "<p>First</p><p>tail <b>end</b></p>");
    }

    #[test]
    fn test_nested_styled_span_tagged_once() {
        let html = r#"<b id="docs-internal-guid-1"><p><span style="font-weight:700"><span style="font-weight:700">x</span></span></p></b>"#;
        assert_eq!(normalized(html), "<p><b>x</b></p>");
    }

    #[test]
    fn test_styled_span_inside_plain_span_is_tagged() {
        let html = r#"<b id="docs-internal-guid-1"><p><span>a <span style="font-style:italic">b</span></span></p></b>"#;
        assert_eq!(normalized(html), "<p>a <i>b</i></p>");
    }

    #[test]
    fn test_blank_runs_are_not_tagged() {
        let html = r#"<b id="docs-internal-guid-1"><p><span style="font-weight:700"> </span>x</p></b>"#;
        assert_eq!(normalized(html), "<p> x</p>");
    }
}
