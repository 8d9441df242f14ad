//! Normalizer for the online office editor.
//!
//! Every paragraph or list item arrives in its own top-level wrapper:
//!
//! ```html
//! <div class="OutlineElement Ltr">
//!   <p paraeid="{…}" style="text-align:center">
//!     <span class="TextRun" style="font-weight:bold">
//!       <span class="NormalTextRun" data-ccp-parastyle="heading 1">Text</span>
//!     </span>
//!   </p>
//! </div>
//! <div class="ListContainerWrapper">
//!   <ul><li data-aria-level="2"><p>…</p></li></ul>
//! </div>
//! ```
//!
//! Outer `TextRun` spans carry bold/italic/underline/strikethrough, their
//! child spans carry sub/superscript and the text. Runs are rebuilt through
//! the style-run folder, lists through the shared list stack.

use anyhow::Result;
use kuchiki::NodeRef;

use super::dom;
use super::inline_style::InlineStyle;
use super::lists::ListStack;
use super::style_runs::StyleRunFolder;

/// Paragraph style names mapped to heading tags.
///
/// Headings start one level down: h1 is the document title here, and the
/// sanitizer shifts everything below the host's own titles afterwards.
fn heading_for_parastyle(parastyle: &str) -> Option<&'static str> {
    match parastyle {
        "Title" => Some("h1"),
        "heading 1" => Some("h2"),
        "heading 2" => Some("h3"),
        "heading 3" => Some("h4"),
        _ => None,
    }
}

pub fn normalize(body: &NodeRef) -> Result<()> {
    let mut lists = ListStack::new();
    let wrappers: Vec<NodeRef> = dom::element_children(body)
        .into_iter()
        .filter(|child| dom::is_element(child, "div"))
        .collect();
    log::debug!("Rebuilding {} paragraph wrappers", wrappers.len());

    for wrapper in wrappers {
        let Some(block) = dom::first_element_child(&wrapper) else {
            wrapper.detach();
            continue;
        };

        match dom::tag_name(&block) {
            Some("p") => {
                if let Some(list) = lists.flatten() {
                    wrapper.insert_before(list);
                }
                wrapper.insert_before(rebuild_paragraph(&block)?);
            }
            Some(kind @ ("ol" | "ul")) => {
                let ordered = kind == "ol";
                match dom::first_element_child(&block) {
                    Some(item) if dom::is_element(&item, "li") => {
                        let depth = list_depth(&item);
                        if let Some(list) = lists.reconcile(depth, ordered) {
                            wrapper.insert_before(list);
                        }
                        lists.push_item(rebuild_list_item(&item));
                    }
                    _ => log::debug!("Dropping list wrapper without a list item"),
                }
            }
            other => log::debug!("Dropping unrecognized wrapper content: {other:?}"),
        }
        wrapper.detach();
    }

    if let Some(list) = lists.flatten() {
        body.append(list);
    }

    wrap_selection_fragment(body);
    Ok(())
}

/// `data-aria-level` of a list item; missing or invalid means top level.
fn list_depth(item: &NodeRef) -> usize {
    dom::attr(item, "data-aria-level")
        .and_then(|level| level.trim().parse::<usize>().ok())
        .filter(|level| *level > 0)
        .unwrap_or(1)
}

fn rebuild_paragraph(block: &NodeRef) -> Result<NodeRef> {
    if dom::first_element_child(block).is_none() {
        // An empty paragraph is an intentional blank line.
        return Ok(dom::new_element("p"));
    }

    let parastyle = block
        .select_first("span > span")
        .ok()
        .and_then(|span| dom::attr(span.as_node(), "data-ccp-parastyle"));
    let tag = parastyle
        .as_deref()
        .and_then(heading_for_parastyle)
        .unwrap_or("p");

    let target = dom::new_element(tag);
    if let Some(alignment) = InlineStyle::of(block).alignment() {
        dom::add_class(&target, alignment.class_name());
    }
    Ok(fold_runs(block, target))
}

fn rebuild_list_item(item: &NodeRef) -> NodeRef {
    let mut target = dom::new_element("li");
    for child in dom::element_children(item) {
        if dom::is_element(&child, "p") {
            target = fold_runs(&child, target);
        }
    }
    target
}

/// Fold the `TextRun` spans under `src` into `dest`.
pub fn fold_runs(src: &NodeRef, dest: NodeRef) -> NodeRef {
    let mut folder = StyleRunFolder::new(dest);

    for run in dom::element_children(src) {
        if !dom::is_element(&run, "span") {
            continue;
        }
        let leaves = dom::element_children(&run);
        if leaves.is_empty() {
            continue;
        }

        let run_styles = InlineStyle::of(&run).run_styles();
        for leaf in leaves {
            match dom::tag_name(&leaf) {
                Some("br") => folder.push_line_break(),
                Some("span") => {
                    let mut styles = run_styles;
                    if let Some(vertical) = InlineStyle::of(&leaf).vertical_align() {
                        styles.insert(vertical);
                    }
                    folder.push_text(styles, &leaf.text_contents());
                }
                _ => {}
            }
        }
    }
    folder.finish()
}

/// A selection inside a single paragraph arrives as bare top-level spans.
fn wrap_selection_fragment(body: &NodeRef) {
    let spans: Vec<NodeRef> = dom::element_children(body)
        .into_iter()
        .filter(|child| dom::is_element(child, "span"))
        .collect();
    let Some(first) = spans.first() else {
        return;
    };

    let source = dom::new_element("p");
    first.insert_before(source.clone());
    for span in spans {
        source.append(span);
    }

    let paragraph = fold_runs(&source, dom::new_element("p"));
    dom::replace_with(&source, paragraph);
}
